//! Error types for input loading and node-name decoding.

use std::path::PathBuf;

/// Errors that stop input loading.
///
/// Line-level problems are reported as diagnostics; this type only carries
/// the conditions that end the load.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// An input file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Error diagnostics were emitted while reading the inputs.
    #[error("input loading failed with {errors} error(s)")]
    Invalid {
        /// Number of error diagnostics emitted.
        errors: usize,
    },
}

/// A node name that does not follow the `g<digits>` / `gp<digits>` scheme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeIdError {
    /// The name has neither the `g` nor the `gp` prefix.
    #[error("node name `{0}` does not start with `g` or `gp`")]
    UnknownPrefix(String),

    /// The part after the prefix is empty or not all digits.
    #[error("node name `{0}` has no numeric suffix")]
    MissingNumber(String),

    /// The decoded number does not fit in an endpoint id.
    #[error("node name `{0}` is out of range")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_io() {
        let err = InputError::Io {
            path: PathBuf::from("design.net"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot read design.net: not found");
    }

    #[test]
    fn display_node_id() {
        assert_eq!(
            NodeIdError::UnknownPrefix("x1".into()).to_string(),
            "node name `x1` does not start with `g` or `gp`"
        );
    }
}
