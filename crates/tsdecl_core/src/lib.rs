//! tsdecl_core: Source text positions shared by the declaration parser crates.
//!
//! Byte offsets, spans, and the line map used to turn an offset into the
//! line/column pair shown in diagnostics, plus the stack guard used by every
//! recursive walk over source or tree.

pub mod stack;
pub mod text;

pub use stack::ensure_sufficient_stack;
pub use text::{LineAndColumn, LineMap, TextPos, TextRange, TextSpan};
