//! Output directory and saved-file naming.
//!
//! Saved files are named from the URL; when that name is taken, a numeric
//! suffix is inserted before the extension (`cat.jpg`, `cat_1.jpg`, ...).
//! Writes are a single whole-buffer write, no temp file and no rename.

mod name;
mod writer;

pub use name::{resolve_collision, split_extension};
pub use writer::{ensure_output_dir, write_image};
