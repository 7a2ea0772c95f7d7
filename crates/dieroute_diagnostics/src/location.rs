//! Line-level locations inside input files.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in an input file: the file label, a 1-based line number, and
/// optionally the text of that line for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// The file name or path as shown to the user.
    pub file: String,
    /// 1-based line number.
    pub line: u32,
    /// The offending line's content, if available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Location {
    /// Creates a location without line text.
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            text: None,
        }
    }

    /// Attaches the line's content for display under the location.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_and_line() {
        let loc = Location::new("design.net", 12);
        assert_eq!(loc.to_string(), "design.net:12");
        assert!(loc.text.is_none());
    }

    #[test]
    fn with_text_attaches_line() {
        let loc = Location::new("design.net", 3).with_text("g1 x");
        assert_eq!(loc.text.as_deref(), Some("g1 x"));
    }
}
