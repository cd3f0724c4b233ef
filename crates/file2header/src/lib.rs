//! Embed binary files in C++ sources.
//!
//! This crate turns the bytes of a file into a header declaring a
//! `static constexpr std::array<uint8_t, N>`:
//!
//! - [`validate`] - fail-fast checks on the input file and output directory
//! - [`literal`] - hex initializer list rendering, 16 values per line
//! - [`header`] - the surrounding compilation unit, with an optional namespace
//! - [`convert_file`] - the whole pipeline from path to path
//!
//! # Example
//!
//! ```no_run
//! use file2header::{convert_file, HeaderOptions};
//!
//! let options = HeaderOptions::new("logo_png").with_namespace("assets");
//! let conversion = convert_file("logo.png", "include/logo.h", &options)?;
//! println!("embedded {} bytes", conversion.byte_count);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod convert;
mod error;

pub mod header;
pub mod literal;
pub mod validate;

#[cfg(test)]
mod test_util;

pub use convert::{convert_file, Conversion};
pub use error::{Error, Result};
pub use header::{
    emit_header, namespace_wrappers, HeaderExporter, HeaderOptions, DEFAULT_NAME,
    NAMESPACE_SENTINEL,
};
pub use literal::{format_byte, render_literal, BYTES_PER_LINE};
pub use validate::validate_paths;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{convert_file, Conversion, Error, HeaderExporter, HeaderOptions};
}
