//! C++ header emission.
//!
//! Wraps a rendered literal in a minimal compilation unit: an include guard,
//! the `<array>` include, an optional namespace, and one
//! `static constexpr std::array<uint8_t, N>` declaration.
//!
//! # Example
//!
//! ```
//! use file2header::{HeaderExporter, HeaderOptions};
//!
//! let exporter = HeaderExporter::new(HeaderOptions::new("blob"));
//! let header = exporter.export(&[0x00, 0x01, 0xff]);
//!
//! assert!(header.contains("std::array<uint8_t, 3> blob = {"));
//! ```

use std::fmt::Write;

use crate::literal::render_literal;

/// Identifier used for the array when none is given.
pub const DEFAULT_NAME: &str = "data";

/// Command-line value meaning "do not wrap the array in a namespace".
pub const NAMESPACE_SENTINEL: &str = "empty";

/// Parameters controlling the emitted declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Identifier of the emitted array.
    pub name: String,
    /// Enclosing namespace, if any.
    pub namespace: Option<String>,
}

impl HeaderOptions {
    /// Options for an array called `name` at global scope.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    /// Wrap the array in `namespace`.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Build options from raw command-line values, mapping
    /// [`NAMESPACE_SENTINEL`] to "no namespace".
    pub fn from_args(name: impl Into<String>, space: &str) -> Self {
        let options = Self::new(name);
        if space == NAMESPACE_SENTINEL {
            options
        } else {
            options.with_namespace(space)
        }
    }
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}

/// Opening and closing lines for `namespace`, or two empty strings.
pub fn namespace_wrappers(namespace: Option<&str>) -> (String, String) {
    match namespace {
        Some(space) => (format!("namespace {} {{\n", space), "}\n".to_string()),
        None => (String::new(), String::new()),
    }
}

/// Produce the header text for an already rendered `literal` of `count` bytes.
pub fn emit_header(literal: &str, name: &str, count: usize, namespace: Option<&str>) -> String {
    let (space_begin, space_end) = namespace_wrappers(namespace);
    let mut out = String::with_capacity(literal.len() + name.len() + 96);

    out.push_str("#pragma once\n\n");
    out.push_str("#include <array>\n\n");
    out.push_str(&space_begin);
    let _ = write!(
        out,
        "static constexpr std::array<uint8_t, {}> {} = {}",
        count, name, literal
    );
    out.push_str(&space_end);

    out
}

/// Renders byte buffers as headers using a fixed set of [`HeaderOptions`].
#[derive(Debug, Clone, Default)]
pub struct HeaderExporter {
    options: HeaderOptions,
}

impl HeaderExporter {
    /// Create a new exporter.
    pub fn new(options: HeaderOptions) -> Self {
        Self { options }
    }

    /// Render `bytes` into a complete header.
    pub fn export(&self, bytes: &[u8]) -> String {
        let literal = render_literal(bytes);
        emit_header(
            &literal,
            &self.options.name,
            bytes.len(),
            self.options.namespace.as_deref(),
        )
    }
}
