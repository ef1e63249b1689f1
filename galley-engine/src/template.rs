//! Template document model
//!
//! A [`Template`] is an ordered sequence of [`Section`]s, each holding an
//! ordered sequence of [`Line`]s. All types derive `Serialize` +
//! `Deserialize`, so the same model is both the Rust construction API and
//! the JSON resource format (see the loader for the round-trip guarantee).
//!
//! Line kinds are a tagged sum type: each variant carries only the fields
//! that are valid for it, and a document with an unknown `type` tag is
//! rejected at parse time.

use galley_printer::Alignment;
use serde::{Deserialize, Serialize};

/// Rule content used by separator lines with no explicit content.
pub const DEFAULT_SEPARATOR: &str = "--------------------------------";

fn default_true() -> bool {
    true
}

fn default_char_width() -> usize {
    32
}

/// A complete print template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Feed and cut the paper after the last section
    #[serde(default = "default_true")]
    pub cut_paper: bool,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            cut_paper: true,
        }
    }
}

/// A named, independently formatted block of lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Documentation only, never printed
    #[serde(default)]
    pub name: String,
    /// Ambient formatting inherited by this section's lines
    #[serde(default)]
    pub formatting: Formatting,
    #[serde(default)]
    pub lines: Vec<Line>,
    /// Blank lines fed after the section
    #[serde(default)]
    pub spacing_after: u32,
}

/// Formatting for a section or line
///
/// `Left` doubles as the unset sentinel for alignment: the formatting
/// merge cannot distinguish "explicitly left" from "not specified". This
/// matches the resource format, where `align` simply defaults to left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formatting {
    #[serde(default)]
    pub align: Alignment,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub double_height: bool,
}

impl Formatting {
    pub fn new(align: Alignment, bold: bool, double_height: bool) -> Self {
        Self {
            align,
            bold,
            double_height,
        }
    }
}

/// A single template line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Line {
    /// Literal text; placeholders are substituted at render time
    Text {
        #[serde(default)]
        content: String,
        #[serde(default)]
        formatting: Formatting,
    },
    /// A horizontal rule; empty content falls back to [`DEFAULT_SEPARATOR`]
    Separator {
        #[serde(default)]
        content: String,
        #[serde(default)]
        formatting: Formatting,
    },
    /// Repeats `sub_lines` for every entry of the context's `items` array
    ItemsLoop {
        #[serde(default)]
        sub_lines: Vec<Line>,
        /// Printed once instead of the loop body when there are no items
        #[serde(default, skip_serializing_if = "Option::is_none")]
        empty_text: Option<String>,
        #[serde(default)]
        formatting: Formatting,
    },
    /// Executes `sub_lines` only when `condition` evaluates true
    Conditional {
        condition: String,
        #[serde(default)]
        sub_lines: Vec<Line>,
        #[serde(default)]
        formatting: Formatting,
    },
    /// Label padded against a right-aligned amount within `char_width` columns
    TotalLine {
        #[serde(default)]
        label: String,
        #[serde(default)]
        amount: String,
        #[serde(default = "default_char_width")]
        char_width: usize,
        #[serde(default)]
        formatting: Formatting,
    },
}

impl Line {
    /// The line's own formatting, before merging with the ambient scope
    pub fn formatting(&self) -> &Formatting {
        match self {
            Line::Text { formatting, .. }
            | Line::Separator { formatting, .. }
            | Line::ItemsLoop { formatting, .. }
            | Line::Conditional { formatting, .. }
            | Line::TotalLine { formatting, .. } => formatting,
        }
    }
}
