use std::io::BufRead;
use tracing::debug;

use crate::errors::{Result, VolleyError};

/// Text collected from the input stream
///
/// `body` holds every line in arrival order with terminators removed and
/// nothing inserted between them. `summary` is the first non-empty line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedText {
    /// All lines concatenated without separators
    pub body: String,

    /// First non-empty line
    pub summary: String,
}

impl AggregatedText {
    /// Returns `true` when no text was read
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    fn push_line(&mut self, line: &str) {
        self.body.push_str(line);
        if self.summary.is_empty() {
            self.summary = self.body.clone();
        }
    }
}

/// Read `reader` to the end and aggregate its lines
///
/// Line terminators (`\n` or `\r\n`) are stripped. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD.
///
/// # Errors
///
/// Returns [`VolleyError::InputRead`] if reading fails for any reason other
/// than reaching the end of the stream.
pub fn aggregate<R: BufRead>(mut reader: R) -> Result<AggregatedText> {
    let mut text = AggregatedText::default();
    let mut buf = Vec::new();
    let mut lines = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(VolleyError::InputRead)?;
        if read == 0 {
            break;
        }

        text.push_line(&String::from_utf8_lossy(strip_terminator(&buf)));
        lines += 1;
    }

    debug!(lines, bytes = text.body.len(), "Aggregated input");
    Ok(text)
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn test_lines_concatenated_without_separator() {
        let text = aggregate(Cursor::new("alert one\nextra detail\n")).unwrap();
        assert_eq!(text.body, "alert oneextra detail");
        assert_eq!(text.summary, "alert one");
    }

    #[test]
    fn test_empty_input() {
        let text = aggregate(Cursor::new("")).unwrap();
        assert_eq!(text, AggregatedText::default());
        assert!(text.is_empty());
    }

    #[test]
    fn test_last_line_without_newline() {
        let text = aggregate(Cursor::new("first\nsecond")).unwrap();
        assert_eq!(text.body, "firstsecond");
        assert_eq!(text.summary, "first");
    }

    #[test]
    fn test_crlf_stripped() {
        let text = aggregate(Cursor::new("one\r\ntwo\r\n")).unwrap();
        assert_eq!(text.body, "onetwo");
        assert_eq!(text.summary, "one");
    }

    #[test]
    fn test_summary_skips_leading_empty_lines() {
        let text = aggregate(Cursor::new("\n\ntrap received\nvarbind\n")).unwrap();
        assert_eq!(text.summary, "trap received");
        assert_eq!(text.body, "trap receivedvarbind");
    }

    #[test]
    fn test_only_blank_lines() {
        let text = aggregate(Cursor::new("\n\n\n")).unwrap();
        assert!(text.body.is_empty());
        assert!(text.summary.is_empty());
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        let text = aggregate(Cursor::new(b"ok\xffok\n".to_vec())).unwrap();
        assert_eq!(text.body, "ok\u{fffd}ok");
    }

    #[test]
    fn test_body_matches_concatenation() {
        let lines = ["a", "", "bc", " d ", "e\tf"];
        let input = lines.join("\n");
        let text = aggregate(Cursor::new(input)).unwrap();
        assert_eq!(text.body, lines.concat());
        assert_eq!(text.summary, "a");
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_read_error_propagates() {
        let result = aggregate(io::BufReader::new(FailingReader));
        match result {
            Err(VolleyError::InputRead(err)) => {
                assert_eq!(err.kind(), io::ErrorKind::BrokenPipe)
            }
            other => panic!("Expected InputRead error, got {other:?}"),
        }
    }
}
