//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Calculates byte offset for a given line and column.
    ///
    /// # Arguments
    ///
    /// * `line` - 1-indexed line number
    /// * `column` - 1-indexed column number, in bytes
    ///
    /// # Returns
    ///
    /// Byte offset from the start of the file, or 0 if out of bounds.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }

        let mut offset = 0;
        for (i, line_content) in self.content.split_inclusive('\n').enumerate() {
            if i + 1 == line {
                return offset + column.saturating_sub(1);
            }
            offset += line_content.len();
        }

        offset
    }

    /// Byte offset and length of the first non-blank run on `line`.
    ///
    /// Indentation findings always point at the first token of a line, so
    /// this gives a span without re-deriving byte columns from expanded
    /// tab columns.
    #[must_use]
    pub fn line_content_span(&self, line: usize) -> (usize, usize) {
        let Some(text) = self.content.lines().nth(line.saturating_sub(1)) else {
            return (self.offset_for(line, 1), 0);
        };
        let indent = text.len() - text.trim_start().len();
        let word = text[indent..]
            .find(char::is_whitespace)
            .unwrap_or(text.len() - indent);
        (self.offset_for(line, indent + 1), word)
    }
}
