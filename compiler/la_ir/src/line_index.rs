//! Byte-offset -> line-number mapping.
//!
//! Grounded on the teacher's `ori_diagnostic::span_utils::offset_to_line_col`,
//! but precomputed once per source file instead of rescanning the source on
//! every lookup: the checker looks up a line number for nearly every AST
//! node, so an O(log n) binary search beats an O(n) rescan per call.

/// Precomputed newline offsets for fast offset -> 1-based line lookup.
pub struct LineIndex {
    /// Byte offset of the start of each line (line 0 always starts at 0).
    line_starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineIndex { line_starts }
    }

    /// 1-based line number containing byte `offset`.
    pub fn line(&self, offset: u32) -> u32 {
        match self.line_starts.binary_search(&offset) {
            Ok(idx) => u32::try_from(idx).unwrap_or(u32::MAX) + 1,
            Err(idx) => u32::try_from(idx).unwrap_or(u32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_is_one() {
        let idx = LineIndex::new("abc\ndef\n");
        assert_eq!(idx.line(0), 1);
        assert_eq!(idx.line(2), 1);
    }

    #[test]
    fn second_line_after_newline() {
        let idx = LineIndex::new("abc\ndef\n");
        assert_eq!(idx.line(4), 2);
        assert_eq!(idx.line(6), 2);
    }

    #[test]
    fn third_line() {
        let idx = LineIndex::new("a\nb\nc\n");
        assert_eq!(idx.line(4), 3);
    }
}
