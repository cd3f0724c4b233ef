//! Byte array literal rendering.
//!
//! Turns a byte slice into a brace-delimited initializer list of hexadecimal
//! values, wrapped every [`BYTES_PER_LINE`] entries:
//!
//! ```text
//! {
//! 	0x0, 0x1, 0xff,
//! };
//! ```

/// Number of byte values emitted on each line of the literal.
pub const BYTES_PER_LINE: usize = 16;

/// Render a single byte as a lowercase, unpadded hex token (`0x0`, `0xa`, `0xff`).
#[inline]
pub fn format_byte(byte: u8) -> String {
    format!("{:#x}", byte)
}

/// Render `bytes` as an initializer list, including the trailing `;` and newline.
///
/// Every byte appears exactly once and in order. An empty slice renders as
/// `"{\n};\n"`.
pub fn render_literal(bytes: &[u8]) -> String {
    // "0xff, " is at most 6 chars, plus a tab and newline per line
    let lines = bytes.len().div_ceil(BYTES_PER_LINE);
    let mut out = String::with_capacity(bytes.len() * 6 + lines * 2 + 5);

    out.push_str("{\n");
    for chunk in bytes.chunks(BYTES_PER_LINE) {
        out.push('\t');
        for &byte in chunk {
            out.push_str(&format_byte(byte));
            out.push_str(", ");
        }
        out.push('\n');
    }
    out.push_str("};\n");

    out
}
