//! Text transforms over `selector { properties }` blocks.
//!
//! Everything in this crate is a pure function of the input text. Blocks are
//! found with a single regular expression, so nested braces, at-rules and
//! comments are not understood; such input degrades silently instead of
//! failing.

pub mod block;
pub mod category;
pub mod declaration;
pub mod dedupe;
pub mod extracted_file;
pub mod tag;

pub use block::{rewrite_blocks, scan_blocks, Block, Blocks};
pub use category::{organize_by_category, Category};
pub use declaration::Declaration;
pub use dedupe::remove_duplicate_properties;
pub use extracted_file::{extracted_file_path, render_extracted_file};
pub use tag::{extract_tags, CssTag};
