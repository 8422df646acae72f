//! Forward-only cursor over normalized tooltip lines.

use super::IndexedLine;

/// Walks the tooltip body line by line.
///
/// Multi-line constructs (an item-set block) consume the lines that follow
/// their header through [`LineCursor::skip_lines`] and
/// [`LineCursor::skip_lines_while`]; whatever they skip is reported back
/// through [`LineCursor::consumed_since`].
///
/// # Examples
///
/// ```
/// use item_tooltip_parser::parser::{IndexedLine, LineCursor};
///
/// let lines = ["Tier set (0/5)", "Helm", "Robe", "(2) Set: +10 Spirit", "Sell Price: 4g"]
///     .iter()
///     .enumerate()
///     .map(|(index, text)| IndexedLine { index, text: text.to_string() })
///     .collect();
///
/// let mut cursor = LineCursor::new(lines);
/// let header = cursor.next().unwrap();
/// let mark = cursor.position();
/// assert_eq!(cursor.skip_lines(2), 2);
/// assert_eq!(cursor.skip_lines_while(|line| line.starts_with('(')), 1);
/// assert_eq!(cursor.consumed_since(mark).len(), 3);
/// assert_eq!(header.text, "Tier set (0/5)");
/// assert_eq!(cursor.peek().map(|l| l.text.as_str()), Some("Sell Price: 4g"));
/// ```
#[derive(Debug, Clone)]
pub struct LineCursor {
    lines: Vec<IndexedLine>,
    position: usize,
}

impl LineCursor {
    pub fn new(lines: Vec<IndexedLine>) -> Self {
        Self { lines, position: 0 }
    }

    pub fn peek(&self) -> Option<&IndexedLine> {
        self.lines.get(self.position)
    }

    /// Number of lines already consumed.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.lines.len() - self.position
    }

    /// Skips up to `count` lines and returns how many were skipped.
    pub fn skip_lines(&mut self, count: usize) -> usize {
        let skipped = count.min(self.remaining());
        self.position += skipped;
        skipped
    }

    /// Skips lines while `predicate` holds and returns how many were skipped.
    pub fn skip_lines_while(&mut self, predicate: impl Fn(&str) -> bool) -> usize {
        let start = self.position;
        while self.peek().is_some_and(|line| predicate(&line.text)) {
            self.position += 1;
        }
        self.position - start
    }

    /// Lines consumed between `mark` and the current position.
    pub fn consumed_since(&self, mark: usize) -> &[IndexedLine] {
        let start = mark.min(self.position);
        &self.lines[start..self.position]
    }
}

impl Iterator for LineCursor {
    type Item = IndexedLine;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.get(self.position)?.clone();
        self.position += 1;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(texts: &[&str]) -> LineCursor {
        LineCursor::new(
            texts
                .iter()
                .enumerate()
                .map(|(index, text)| IndexedLine {
                    index,
                    text: text.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_skip_lines_stops_at_end() {
        let mut cursor = cursor(&["a", "b"]);
        assert_eq!(cursor.skip_lines(5), 2);
        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.next().is_none());
    }

    #[test]
    fn test_skip_lines_while_leaves_first_mismatch() {
        let mut cursor = cursor(&["(2) Set: a", "(4) Set: b", "Sell Price: 1s"]);
        assert_eq!(cursor.skip_lines_while(|l| l.starts_with('(')), 2);
        assert_eq!(cursor.next().map(|l| l.index), Some(2));
    }

    #[test]
    fn test_consumed_since_empty_without_skips() {
        let mut cursor = cursor(&["a", "b"]);
        cursor.next();
        let mark = cursor.position();
        assert!(cursor.consumed_since(mark).is_empty());
    }
}
