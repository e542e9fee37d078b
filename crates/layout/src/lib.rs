//! Layout - Word wrap and pagination of text blocks
//!
//! This crate turns an ordered sequence of [`Block`]s into an ordered
//! sequence of [`Page`]s of positioned text lines:
//! - Width-constrained greedy word wrap against any [`TextMeasure`]
//! - A vertical cursor per page with a block-level page-break check
//! - Left or centered line placement
//!
//! Layout never fails. Text that cannot be measured or is empty simply
//! produces no lines.
//!
//! # Example
//!
//! ```ignore
//! use layout::{layout, Block, LayoutConfig};
//! use pdf_core::TimesFamily;
//!
//! let blocks = vec![
//!     Block::title("Letter of Intent"),
//!     Block::spacer_inches(0.2),
//!     Block::body("Body text that wraps across the content width."),
//! ];
//! let pages = layout(&blocks, &TimesFamily, &LayoutConfig::letter());
//! ```
//!
//! [`TextMeasure`]: pdf_core::TextMeasure

mod block;
mod config;
mod engine;
mod page;
mod wrap;

pub use block::{Block, BlockKind, BlockStyle};
pub use config::LayoutConfig;
pub use engine::{layout, LayoutState};
pub use page::{Page, TextDrawOp};
pub use wrap::{wrap_text, Line};
