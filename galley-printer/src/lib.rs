//! # galley-printer
//!
//! ESC/POS thermal printer directive emission - low-level printing only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS control sequences (alignment, emphasis, sizing, feed, cut)
//! - UTF-8 text line output onto a caller-supplied byte sink
//!
//! Business logic (WHAT to print) stays in application code:
//! - Template model and rendering → galley-engine
//!
//! ## Example
//!
//! ```
//! use galley_printer::{Alignment, CommandEmitter};
//!
//! let mut buf = Vec::new();
//! let mut em = CommandEmitter::new(&mut buf);
//! em.init()?;
//! em.align(Alignment::Center)?;
//! em.bold_on()?;
//! em.write_line("KITCHEN CHECKER")?;
//! em.bold_off()?;
//! em.cut()?;
//! # Ok::<(), galley_printer::PrintError>(())
//! ```

mod emitter;
mod error;

// Re-exports
pub use emitter::{Alignment, CommandEmitter};
pub use error::{PrintError, PrintResult};
