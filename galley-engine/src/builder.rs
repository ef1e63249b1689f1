//! Template construction API
//!
//! A small by-value builder for assembling templates in code. Nested
//! scopes (item loops, conditionals) are opened by a method that returns
//! the inner builder and closed with `end()`, which hands the parent
//! builder back. Leaving a scope open is a compile-time error because
//! only the innermost builder owns the chain.
//!
//! ```
//! use galley_engine::TemplateBuilder;
//!
//! let template = TemplateBuilder::new()
//!     .section("header")
//!     .center()
//!     .bold()
//!     .text("KITCHEN ORDER")
//!     .end()
//!     .section("items")
//!     .items_loop()
//!     .empty_text("No items")
//!     .text("{{item_quantity}}x {{item_name}}")
//!     .end()
//!     .end()
//!     .build();
//! assert_eq!(template.sections.len(), 2);
//! ```

use crate::template::{Formatting, Line, Section, Template};

fn bold_formatting() -> Formatting {
    Formatting {
        bold: true,
        ..Formatting::default()
    }
}

/// Root builder, one per template
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    template: Template,
}

impl TemplateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether to feed and cut the paper after the last section
    pub fn cut_paper(mut self, cut: bool) -> Self {
        self.template.cut_paper = cut;
        self
    }

    /// Open a new section scope
    pub fn section(self, name: impl Into<String>) -> SectionBuilder {
        SectionBuilder {
            parent: self,
            section: Section {
                name: name.into(),
                ..Section::default()
            },
        }
    }

    pub fn build(self) -> Template {
        self.template
    }
}

/// Builder for one section; `end()` returns to the template
#[derive(Debug)]
pub struct SectionBuilder {
    parent: TemplateBuilder,
    section: Section,
}

impl SectionBuilder {
    // === Section formatting ===

    pub fn center(mut self) -> Self {
        self.section.formatting.align = galley_printer::Alignment::Center;
        self
    }

    pub fn right(mut self) -> Self {
        self.section.formatting.align = galley_printer::Alignment::Right;
        self
    }

    pub fn bold(mut self) -> Self {
        self.section.formatting.bold = true;
        self
    }

    pub fn double_height(mut self) -> Self {
        self.section.formatting.double_height = true;
        self
    }

    /// Blank lines fed after this section
    pub fn spacing_after(mut self, lines: u32) -> Self {
        self.section.spacing_after = lines;
        self
    }

    // === Lines ===

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.section.lines.push(Line::Text {
            content: content.into(),
            formatting: Formatting::default(),
        });
        self
    }

    pub fn bold_text(mut self, content: impl Into<String>) -> Self {
        self.section.lines.push(Line::Text {
            content: content.into(),
            formatting: bold_formatting(),
        });
        self
    }

    pub fn separator(mut self) -> Self {
        self.section.lines.push(Line::Separator {
            content: String::new(),
            formatting: Formatting::default(),
        });
        self
    }

    pub fn total_line(mut self, label: impl Into<String>, amount: impl Into<String>) -> Self {
        self.section.lines.push(Line::TotalLine {
            label: label.into(),
            amount: amount.into(),
            char_width: 32,
            formatting: Formatting::default(),
        });
        self
    }

    pub fn bold_total_line(mut self, label: impl Into<String>, amount: impl Into<String>) -> Self {
        self.section.lines.push(Line::TotalLine {
            label: label.into(),
            amount: amount.into(),
            char_width: 32,
            formatting: bold_formatting(),
        });
        self
    }

    /// Push a pre-built line, for formatting the shorthands do not cover
    pub fn line(mut self, line: Line) -> Self {
        self.section.lines.push(line);
        self
    }

    /// Open an items-loop scope
    pub fn items_loop(self) -> LoopBuilder {
        LoopBuilder {
            parent: self,
            sub_lines: Vec::new(),
            empty_text: None,
        }
    }

    /// Open a conditional scope
    pub fn conditional(self, condition: impl Into<String>) -> ConditionalBuilder {
        ConditionalBuilder {
            parent: self,
            condition: condition.into(),
            sub_lines: Vec::new(),
        }
    }

    /// Close the section and return to the template
    pub fn end(mut self) -> TemplateBuilder {
        self.parent.template.sections.push(self.section);
        self.parent
    }
}

/// Builder for an items loop; `end()` returns to the section
#[derive(Debug)]
pub struct LoopBuilder {
    parent: SectionBuilder,
    sub_lines: Vec<Line>,
    empty_text: Option<String>,
}

impl LoopBuilder {
    /// Printed once instead of the loop body when there are no items
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = Some(text.into());
        self
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.sub_lines.push(Line::Text {
            content: content.into(),
            formatting: Formatting::default(),
        });
        self
    }

    pub fn bold_text(mut self, content: impl Into<String>) -> Self {
        self.sub_lines.push(Line::Text {
            content: content.into(),
            formatting: bold_formatting(),
        });
        self
    }

    pub fn line(mut self, line: Line) -> Self {
        self.sub_lines.push(line);
        self
    }

    /// Open a conditional scope inside the loop body
    pub fn conditional(self, condition: impl Into<String>) -> LoopConditionalBuilder {
        LoopConditionalBuilder {
            parent: self,
            condition: condition.into(),
            sub_lines: Vec::new(),
        }
    }

    /// Close the loop and return to the section
    pub fn end(mut self) -> SectionBuilder {
        self.parent.section.lines.push(Line::ItemsLoop {
            sub_lines: self.sub_lines,
            empty_text: self.empty_text,
            formatting: Formatting::default(),
        });
        self.parent
    }
}

/// Builder for a conditional; `end()` returns to the section
#[derive(Debug)]
pub struct ConditionalBuilder {
    parent: SectionBuilder,
    condition: String,
    sub_lines: Vec<Line>,
}

impl ConditionalBuilder {
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.sub_lines.push(Line::Text {
            content: content.into(),
            formatting: Formatting::default(),
        });
        self
    }

    pub fn bold_text(mut self, content: impl Into<String>) -> Self {
        self.sub_lines.push(Line::Text {
            content: content.into(),
            formatting: bold_formatting(),
        });
        self
    }

    pub fn separator(mut self) -> Self {
        self.sub_lines.push(Line::Separator {
            content: String::new(),
            formatting: Formatting::default(),
        });
        self
    }

    pub fn total_line(mut self, label: impl Into<String>, amount: impl Into<String>) -> Self {
        self.sub_lines.push(Line::TotalLine {
            label: label.into(),
            amount: amount.into(),
            char_width: 32,
            formatting: Formatting::default(),
        });
        self
    }

    pub fn bold_total_line(mut self, label: impl Into<String>, amount: impl Into<String>) -> Self {
        self.sub_lines.push(Line::TotalLine {
            label: label.into(),
            amount: amount.into(),
            char_width: 32,
            formatting: bold_formatting(),
        });
        self
    }

    pub fn line(mut self, line: Line) -> Self {
        self.sub_lines.push(line);
        self
    }

    /// Close the conditional and return to the section
    pub fn end(mut self) -> SectionBuilder {
        self.parent.section.lines.push(Line::Conditional {
            condition: self.condition,
            sub_lines: self.sub_lines,
            formatting: Formatting::default(),
        });
        self.parent
    }
}

/// Builder for a conditional nested in an items loop; `end()` returns to the loop
#[derive(Debug)]
pub struct LoopConditionalBuilder {
    parent: LoopBuilder,
    condition: String,
    sub_lines: Vec<Line>,
}

impl LoopConditionalBuilder {
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.sub_lines.push(Line::Text {
            content: content.into(),
            formatting: Formatting::default(),
        });
        self
    }

    pub fn line(mut self, line: Line) -> Self {
        self.sub_lines.push(line);
        self
    }

    /// Close the conditional and return to the loop
    pub fn end(mut self) -> LoopBuilder {
        self.parent.sub_lines.push(Line::Conditional {
            condition: self.condition,
            sub_lines: self.sub_lines,
            formatting: Formatting::default(),
        });
        self.parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galley_printer::Alignment;

    #[test]
    fn test_sections_keep_declaration_order() {
        let t = TemplateBuilder::new()
            .section("header")
            .text("a")
            .end()
            .section("body")
            .text("b")
            .end()
            .section("footer")
            .text("c")
            .end()
            .build();
        let names: Vec<_> = t.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["header", "body", "footer"]);
    }

    #[test]
    fn test_section_formatting_and_spacing() {
        let t = TemplateBuilder::new()
            .section("header")
            .center()
            .bold()
            .double_height()
            .spacing_after(2)
            .text("TITLE")
            .end()
            .build();
        let s = &t.sections[0];
        assert_eq!(s.formatting.align, Alignment::Center);
        assert!(s.formatting.bold);
        assert!(s.formatting.double_height);
        assert_eq!(s.spacing_after, 2);
    }

    #[test]
    fn test_nested_scopes_build_nested_lines() {
        let t = TemplateBuilder::new()
            .section("items")
            .items_loop()
            .empty_text("none")
            .text("{{item_name}}")
            .conditional("has_item_notes")
            .text("  {{item_notes}}")
            .end()
            .end()
            .end()
            .build();

        match &t.sections[0].lines[0] {
            Line::ItemsLoop {
                sub_lines,
                empty_text,
                ..
            } => {
                assert_eq!(empty_text.as_deref(), Some("none"));
                assert_eq!(sub_lines.len(), 2);
                assert!(matches!(&sub_lines[1], Line::Conditional { condition, sub_lines, .. }
                    if condition == "has_item_notes" && sub_lines.len() == 1));
            }
            other => panic!("expected items loop, got {:?}", other),
        }
    }

    #[test]
    fn test_built_template_serializes() {
        let t = TemplateBuilder::new()
            .cut_paper(false)
            .section("totals")
            .bold_total_line("TOTAL:", "{{final_amount}}")
            .end()
            .build();
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"cutPaper\":false"));
        assert!(json.contains("\"type\":\"total_line\""));
        let back: Template = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_bold_shorthand_sets_line_formatting() {
        let t = TemplateBuilder::new()
            .section("s")
            .bold_text("x")
            .end()
            .build();
        match &t.sections[0].lines[0] {
            Line::Text { formatting, .. } => assert!(formatting.bold),
            other => panic!("expected text, got {:?}", other),
        }
    }
}
