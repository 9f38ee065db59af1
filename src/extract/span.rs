use thiserror::Error;

/// A SCIP range is either `[start_line, start_char, end_char]` (single line)
/// or `[start_line, start_char, end_line, end_char]`. Anything else means the
/// index is corrupt or from an incompatible protocol version.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected 3 or 4 integers in range, got {0}")]
pub struct MalformedRange(pub usize);

/// A decoded occurrence range. Line and character values are kept exactly as
/// the index encodes them (0-based lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start_line: i32,
    pub start_char: i32,
    pub end_line: i32,
    pub end_char: i32,
}

impl Span {
    /// Decode a raw SCIP range into a normalized span.
    pub fn decode(range: &[i32]) -> Result<Self, MalformedRange> {
        match *range {
            [line, start_char, end_char] => Ok(Self {
                start_line: line,
                start_char,
                end_line: line,
                end_char,
            }),
            [start_line, start_char, end_line, end_char] => Ok(Self {
                start_line,
                start_char,
                end_line,
                end_char,
            }),
            _ => Err(MalformedRange(range.len())),
        }
    }

    /// Slice the document's line array over this span, inclusive of both
    /// endpoints, and join with newlines. Out-of-bounds lines are clamped
    /// rather than panicking on a truncated source file.
    pub fn slice_lines(&self, lines: &[String]) -> String {
        if lines.is_empty() || self.end_line < self.start_line {
            return String::new();
        }
        let start = (self.start_line.max(0) as usize).min(lines.len());
        let end = ((self.end_line.max(0) as usize) + 1).min(lines.len());
        lines[start..end].join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_three_element_range() {
        let span = Span::decode(&[7, 2, 15]).unwrap();
        assert_eq!(span.start_line, 7);
        assert_eq!(span.start_char, 2);
        assert_eq!(span.end_line, 7);
        assert_eq!(span.end_char, 15);
    }

    #[test]
    fn test_decode_four_element_range() {
        let span = Span::decode(&[10, 2, 12, 3]).unwrap();
        assert_eq!(span.start_line, 10);
        assert_eq!(span.start_char, 2);
        assert_eq!(span.end_line, 12);
        assert_eq!(span.end_char, 3);
    }

    #[test]
    fn test_decode_rejects_other_lengths() {
        assert_eq!(Span::decode(&[]), Err(MalformedRange(0)));
        assert_eq!(Span::decode(&[1, 2]), Err(MalformedRange(2)));
        assert_eq!(Span::decode(&[1, 2, 3, 4, 5]), Err(MalformedRange(5)));
    }

    #[test]
    fn test_slice_lines_is_inclusive() {
        let lines: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let span = Span::decode(&[1, 0, 2, 1]).unwrap();
        assert_eq!(span.slice_lines(&lines), "b\nc");
    }

    #[test]
    fn test_slice_lines_single_line() {
        let lines: Vec<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let span = Span::decode(&[0, 0, 1]).unwrap();
        assert_eq!(span.slice_lines(&lines), "a");
    }

    #[test]
    fn test_slice_lines_clamps_out_of_bounds() {
        let lines: Vec<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let span = Span::decode(&[1, 0, 9, 0]).unwrap();
        assert_eq!(span.slice_lines(&lines), "b");
    }
}
