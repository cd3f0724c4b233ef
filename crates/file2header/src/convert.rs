//! File-to-header conversion.

use std::fs;
use std::path::{self, Path, PathBuf};

use crate::header::{HeaderExporter, HeaderOptions};
use crate::validate::validate_paths;
use crate::Result;

/// Outcome of a successful [`convert_file`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Absolute path of the source file.
    pub input: PathBuf,
    /// Absolute path of the written header.
    pub output: PathBuf,
    /// Number of bytes embedded, which is also the declared array length.
    pub byte_count: usize,
}

/// Convert the file at `input` into a header written to `output`.
///
/// Both paths are made absolute and validated before anything is read. The
/// output is created or truncated; if validation fails it is left untouched.
pub fn convert_file<P, Q>(input: P, output: Q, options: &HeaderOptions) -> Result<Conversion>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = path::absolute(input.as_ref())?;
    let output = path::absolute(output.as_ref())?;

    validate_paths(&input, &output)?;

    let data = fs::read(&input)?;
    log::debug!("read {} bytes from {}", data.len(), input.display());

    let header = HeaderExporter::new(options.clone()).export(&data);
    fs::write(&output, header)?;

    log::info!(
        "embedded {} bytes from {} as '{}' in {}",
        data.len(),
        input.display(),
        options.name,
        output.display()
    );

    Ok(Conversion {
        input,
        output,
        byte_count: data.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::scratch_dir;
    use crate::Error;

    #[test]
    fn test_convert_without_namespace() {
        let dir = scratch_dir("convert-plain");
        let input = dir.join("blob.bin");
        let output = dir.join("blob.h");
        fs::write(&input, [0x00u8, 0x01, 0xff]).unwrap();

        let conversion = convert_file(&input, &output, &HeaderOptions::new("blob")).unwrap();

        assert_eq!(conversion.byte_count, 3);
        assert_eq!(conversion.output, output);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "#pragma once\n\
             \n\
             #include <array>\n\
             \n\
             static constexpr std::array<uint8_t, 3> blob = {\n\
             \t0x0, 0x1, 0xff, \n\
             };\n"
        );
    }

    #[test]
    fn test_convert_with_namespace() {
        let dir = scratch_dir("convert-namespace");
        let input = dir.join("blob.bin");
        let output = dir.join("blob.h");
        fs::write(&input, [0x00u8, 0x01, 0xff]).unwrap();

        let options = HeaderOptions::new("blob").with_namespace("assets");
        convert_file(&input, &output, &options).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "#pragma once\n\
             \n\
             #include <array>\n\
             \n\
             namespace assets {\n\
             static constexpr std::array<uint8_t, 3> blob = {\n\
             \t0x0, 0x1, 0xff, \n\
             };\n\
             }\n"
        );
    }

    #[test]
    fn test_convert_overwrites_existing_output() {
        let dir = scratch_dir("convert-overwrite");
        let input = dir.join("in.bin");
        let output = dir.join("out.h");
        fs::write(&input, b"").unwrap();
        fs::write(&output, "stale contents that are longer than the header").unwrap();

        convert_file(&input, &output, &HeaderOptions::default()).unwrap();

        assert!(fs::read_to_string(&output)
            .unwrap()
            .ends_with("std::array<uint8_t, 0> data = {\n};\n"));
    }

    #[test]
    fn test_missing_input_creates_no_output() {
        let dir = scratch_dir("convert-missing-input");
        let output = dir.join("out.h");

        let err = convert_file(dir.join("nope.bin"), &output, &HeaderOptions::default()).unwrap_err();

        assert!(matches!(err, Error::InputNotFound(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_input_leaves_existing_output() {
        let dir = scratch_dir("convert-keep-output");
        let output = dir.join("out.h");
        fs::write(&output, "keep me").unwrap();

        assert!(convert_file(dir.join("nope.bin"), &output, &HeaderOptions::default()).is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
    }

    #[test]
    fn test_large_input_line_count() {
        let dir = scratch_dir("convert-large");
        let input = dir.join("in.bin");
        let output = dir.join("out.h");
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        fs::write(&input, &data).unwrap();

        convert_file(&input, &output, &HeaderOptions::default()).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.contains("std::array<uint8_t, 1000> data"));
        assert_eq!(text.lines().filter(|l| l.starts_with('\t')).count(), 63);
    }
}
