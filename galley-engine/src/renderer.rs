//! Template renderer
//!
//! Walks a [`Template`] against a [`Context`] and drives the
//! [`CommandEmitter`]: resolves placeholders, evaluates conditions,
//! expands item loops, merges formatting and writes text lines.
//!
//! Rendering is synchronous: one call produces one complete byte stream.
//! The only failure mode is a sink write error, which propagates
//! immediately and aborts the render.

use crate::context::{Context, value_to_string};
use crate::template::{DEFAULT_SEPARATOR, Formatting, Line, Template};
use galley_printer::{Alignment, CommandEmitter, PrintResult};
use serde_json::Value;
use std::io::Write;

/// Render a template against a context, writing directives and text to the sink
pub fn render<W: Write>(template: &Template, context: &Context, sink: &mut W) -> PrintResult<()> {
    let mut em = CommandEmitter::new(sink);
    em.init()?;

    for section in &template.sections {
        for line in &section.lines {
            execute_line(&mut em, line, context, &section.formatting)?;
        }
        for _ in 0..section.spacing_after {
            em.feed_line()?;
        }
    }

    if template.cut_paper {
        em.feed_line()?;
        em.feed_line()?;
        em.cut()?;
    }

    Ok(())
}

/// Execute one line under the ambient formatting of its enclosing scope
fn execute_line<W: Write>(
    em: &mut CommandEmitter<W>,
    line: &Line,
    ctx: &Context,
    ambient: &Formatting,
) -> PrintResult<()> {
    let effective = merge_formatting(ambient, line.formatting());
    apply_formatting(em, &effective)?;

    match line {
        Line::Text { content, .. } => {
            em.write_line(&substitute_placeholders(content, ctx))?;
        }
        Line::Separator { content, .. } => {
            // Literal rule, no substitution
            let rule = if content.is_empty() {
                DEFAULT_SEPARATOR
            } else {
                content.as_str()
            };
            em.write_line(rule)?;
        }
        Line::ItemsLoop {
            sub_lines,
            empty_text,
            ..
        } => {
            execute_items_loop(em, sub_lines, empty_text.as_deref(), ctx, &effective)?;
        }
        Line::Conditional {
            condition,
            sub_lines,
            ..
        } => {
            if evaluate_condition(condition, ctx) {
                for sub in sub_lines {
                    execute_line(em, sub, ctx, &effective)?;
                }
            }
        }
        Line::TotalLine {
            label,
            amount,
            char_width,
            ..
        } => {
            let label = substitute_placeholders(label, ctx);
            let amount = substitute_placeholders(amount, ctx);
            em.write_line(&format_total_line(&label, &amount, *char_width))?;
        }
    }

    // Emphasis and size reset after every line; alignment persists
    em.size_reset()?;
    em.bold_off()?;
    Ok(())
}

fn execute_items_loop<W: Write>(
    em: &mut CommandEmitter<W>,
    sub_lines: &[Line],
    empty_text: Option<&str>,
    ctx: &Context,
    ambient: &Formatting,
) -> PrintResult<()> {
    let items = match ctx.get("items").and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items,
        _ => {
            if let Some(text) = empty_text {
                em.write_line(text)?;
            }
            return Ok(());
        }
    };

    for item in items {
        let item_ctx = item_context(ctx, item);
        for sub in sub_lines {
            execute_line(em, sub, &item_ctx, ambient)?;
        }
    }
    Ok(())
}

/// Overlay the outer context with the per-item bindings for one loop pass
fn item_context(outer: &Context, item: &Value) -> Context {
    let mut values = outer.values().clone();

    let field = |key: &str| item.get(key).cloned().unwrap_or(Value::Null);
    let notes = item.get("notes").and_then(Value::as_str).unwrap_or("");
    // Guard against blank and literal "null" notes coming out of storage
    let has_notes = !notes.trim().is_empty() && !notes.trim().eq_ignore_ascii_case("null");

    values.insert("item".into(), item.clone());
    values.insert("item_name".into(), field("name"));
    values.insert("item_quantity".into(), field("quantity"));
    values.insert("item_price".into(), field("unit_price"));
    values.insert("item_total".into(), field("total_price"));
    values.insert(
        "item_notes".into(),
        Value::String(if has_notes {
            notes.to_string()
        } else {
            String::new()
        }),
    );
    values.insert("has_notes".into(), Value::Bool(has_notes));

    Context::from_values(values)
}

/// Merge a line's formatting into the ambient formatting of its scope
///
/// Escalation only: bold and double-height OR together, and alignment
/// falls back to the ambient value unless the line sets a non-left one
/// (left doubles as the unset sentinel). A template author can escalate
/// but not de-escalate emphasis from an enclosing scope.
pub(crate) fn merge_formatting(ambient: &Formatting, line: &Formatting) -> Formatting {
    Formatting {
        align: if line.align != Alignment::Left {
            line.align
        } else {
            ambient.align
        },
        bold: ambient.bold || line.bold,
        double_height: ambient.double_height || line.double_height,
    }
}

fn apply_formatting<W: Write>(em: &mut CommandEmitter<W>, f: &Formatting) -> PrintResult<()> {
    em.align(f.align)?;
    if f.bold {
        em.bold_on()?;
    }
    if f.double_height {
        em.double_height_on()?;
    }
    Ok(())
}

/// Replace `{{key}}` tokens with dot-path context lookups
///
/// Unresolved tokens substitute as empty string. Resolved values are not
/// re-scanned, so substitution is non-recursive.
pub(crate) fn substitute_placeholders(text: &str, ctx: &Context) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("}}") {
            Some(end) => {
                let key = rest[start + 2..start + 2 + end].trim();
                if let Some(value) = ctx.lookup(key) {
                    out.push_str(&value_to_string(value));
                }
                rest = &rest[start + 2 + end + 2..];
            }
            None => {
                // Unterminated token stays verbatim
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Evaluate a condition string against the context
///
/// Three-rule grammar:
/// - `has_X`: true iff X is present and stringifies to a non-empty value
///   other than `"0"` / `"false"`
/// - `no_X`: logical complement of `has_X`
/// - anything else: true iff the key holds boolean `true`; a numeric or
///   string value is false here, only prefixed lookups coerce
pub(crate) fn evaluate_condition(condition: &str, ctx: &Context) -> bool {
    if let Some(key) = condition.strip_prefix("has_") {
        truthy(ctx.lookup(key))
    } else if let Some(key) = condition.strip_prefix("no_") {
        !truthy(ctx.lookup(key))
    } else {
        matches!(ctx.lookup(condition), Some(Value::Bool(true)))
    }
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None => false,
        Some(v) => {
            let s = value_to_string(v);
            !s.is_empty() && s != "0" && s != "false"
        }
    }
}

/// Left-justify the label against a right-aligned amount
///
/// The label gets `char_width - len(amount)` columns (minimum zero) and is
/// never truncated; an oversized pair simply runs past the width.
pub(crate) fn format_total_line(label: &str, amount: &str, char_width: usize) -> String {
    let width = if char_width == 0 { 32 } else { char_width };
    let label_width = width.saturating_sub(amount.chars().count());
    format!("{:<1$}{2}", label, label_width, amount)
}
