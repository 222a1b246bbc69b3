//! File — the conversion orchestrator.
//!
//! One linear pass: validate, compile once, read the whole file, apply the
//! line converter to every non-blank line, accumulate counts and a capped
//! sample, optionally persist the result as JSON. No checkpointing, no
//! resumability; a failure mid-stream aborts with nothing written.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::{debug, info};

use crate::error::ConvertError;
use crate::pattern::normalize::strip_bom;
use crate::pattern::PatternSpec;

use super::line::convert_line;
use super::model::{ConversionResult, Extraction, SAMPLE_CAP};

/// Convert `path` with `spec`, optionally writing the result to `out_path`.
///
/// Fails with [`ConvertError::NotFound`] when the input does not exist and
/// with [`ConvertError::InvalidPattern`] when the spec's normalized
/// expression does not compile; in the latter case nothing is read. The
/// pattern is compiled exactly once and reused for every line.
///
/// The input is read with lossy UTF-8 decoding (invalid byte sequences are
/// replaced, never fatal), a leading BOM is stripped, and a literal
/// two-character `\n` sequence anywhere in the buffer is treated as a line
/// break before splitting — an accommodation for inputs whose newlines were
/// escaped rather than literal. Lines that are empty or whitespace-only
/// after trimming are excluded entirely: not counted, not matched.
pub fn convert_file(
    path: impl AsRef<Path>,
    spec: &PatternSpec,
    out_path: Option<&Path>,
) -> Result<ConversionResult, ConvertError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }

    // Compiling is the validation; the error detail travels in the variant.
    let compiled = Regex::new(spec.normalized()).map_err(|e| ConvertError::InvalidPattern {
        name: spec.name.clone(),
        reason: e.to_string(),
    })?;

    debug!(pattern = %spec.name, path = %path.display(), "starting conversion");

    let bytes = fs::read(path)?;
    let mut text = String::from_utf8_lossy(&bytes).into_owned();
    if text.contains("\\n") {
        text = text.replace("\\n", "\n");
    }
    let text = strip_bom(&text);

    let mut processed: u64 = 0;
    let mut matched: u64 = 0;
    let mut samples: Vec<Extraction> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        processed += 1;
        if let Some(extraction) = convert_line(line, &compiled, spec.groups()) {
            matched += 1;
            if samples.len() < SAMPLE_CAP {
                samples.push(extraction);
            }
        }
    }

    let result = ConversionResult {
        pattern_name: spec.name.clone(),
        processed,
        matched,
        samples,
    };

    if let Some(out) = out_path {
        let json = serde_json::to_string_pretty(&result)?;
        fs::write(out, json)?;
    }

    info!(
        pattern = %spec.name,
        processed = result.processed,
        matched = result.matched,
        "conversion finished"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_input(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).expect("create input file");
        file.write_all(content).expect("write input file");
        path
    }

    fn access_spec() -> PatternSpec {
        PatternSpec::new(
            "ACCESS",
            r#"(?P<ip>\d+\.\d+\.\d+\.\d+) - - \[(?P<time>[^\]]+)\] "(?P<req>[^"]+)""#,
        )
    }

    #[test]
    fn test_basic_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(
            &dir,
            "in.log",
            b"127.0.0.1 - - [2025-01-01T12:00:00Z] \"GET /index HTTP/1.1\"\nno match line\n",
        );

        let result = convert_file(&input, &access_spec(), None).unwrap();
        assert_eq!(result.pattern_name, "ACCESS");
        assert_eq!(result.processed, 2);
        assert_eq!(result.matched, 1);
        assert_eq!(result.samples.len(), 1);

        let sample = &result.samples[0];
        assert_eq!(sample["ip"], "127.0.0.1");
        assert_eq!(sample["time"], "2025-01-01T12:00:00Z");
        assert_eq!(sample["req"], "GET /index HTTP/1.1");
    }

    #[test]
    fn test_placeholder_spec_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "in.log", b"value=42\n");

        let spec = PatternSpec::new("NUM", "value=%INT%");
        let result = convert_file(&input, &spec, None).unwrap();
        assert_eq!(result.matched, 1);
        assert_eq!(result.samples[0]["int"], "42");
    }

    #[test]
    fn test_missing_input_fails_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");

        let err = convert_file(dir.path().join("absent.log"), &access_spec(), Some(&out))
            .unwrap_err();
        assert!(matches!(err, ConvertError::NotFound(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_invalid_pattern_fails_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "in.log", b"anything\n");
        let out = dir.path().join("out.json");

        let spec = PatternSpec::from_regex("BROKEN", "((unbalanced");
        let err = convert_file(&input, &spec, Some(&out)).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidPattern { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_blank_lines_are_excluded_from_processed() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "in.log", b"value=1\n\n   \n\t\nvalue=2\n");

        let spec = PatternSpec::new("NUM", "value=%INT%");
        let result = convert_file(&input, &spec, None).unwrap();
        assert_eq!(result.processed, 2);
        assert_eq!(result.matched, 2);
    }

    #[test]
    fn test_escaped_newlines_are_treated_as_line_breaks() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(
            &dir,
            "in.log",
            br#"127.0.0.1 - - [2025-01-01T12:00:00Z] "GET /index HTTP/1.1"\nno match line\n"#,
        );

        let result = convert_file(&input, &access_spec(), None).unwrap();
        assert_eq!(result.processed, 2);
        assert_eq!(result.matched, 1);
    }

    #[test]
    fn test_leading_bom_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let mut content = Vec::from(&b"\xef\xbb\xbf"[..]);
        content.extend_from_slice(b"value=7\n");
        let input = write_input(&dir, "in.log", &content);

        let spec = PatternSpec::new("NUM", "value=%INT%");
        let result = convert_file(&input, &spec, None).unwrap();
        assert_eq!(result.matched, 1);
        assert_eq!(result.samples[0]["int"], "7");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "in.log", b"value=1\n\xff\xfe garbage\nvalue=2\n");

        let spec = PatternSpec::new("NUM", "value=%INT%");
        let result = convert_file(&input, &spec, None).unwrap();
        assert_eq!(result.processed, 3);
        assert_eq!(result.matched, 2);
    }

    #[test]
    fn test_samples_are_capped_at_twenty_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let content: String = (0..21).map(|i| format!("value={i}\n")).collect();
        let input = write_input(&dir, "in.log", content.as_bytes());

        let spec = PatternSpec::new("NUM", "value=%INT%");
        let result = convert_file(&input, &spec, None).unwrap();
        assert_eq!(result.matched, 21);
        assert_eq!(result.samples.len(), SAMPLE_CAP);
        assert_eq!(result.samples[0]["int"], "0");
        assert_eq!(result.samples[19]["int"], "19");
    }

    #[test]
    fn test_output_is_written_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "in.log", b"value=42\n");
        let out = dir.path().join("out.json");
        fs::write(&out, "stale content that must disappear").unwrap();

        let spec = PatternSpec::new("NUM", "value=%INT%");
        let result = convert_file(&input, &spec, Some(&out)).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(!written.contains("stale"));
        let parsed: ConversionResult = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_zero_matches_still_yields_a_result() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "in.log", b"nothing numeric here\n");

        let spec = PatternSpec::new("NUM", "value=%INT%");
        let result = convert_file(&input, &spec, None).unwrap();
        assert_eq!(result.processed, 1);
        assert_eq!(result.matched, 0);
        assert!(result.samples.is_empty());
    }
}
