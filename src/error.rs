//! Error types for decoding, encoding and fixture checking.

use std::path::PathBuf;

use serde_json::error::Category;
use thiserror::Error;

/// Errors while decoding a JSON document into a schema type.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input is not valid JSON (syntax error or truncated input).
    #[error("malformed JSON at line {line}, column {column}: {source}")]
    Malformed {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Input is valid JSON but a value has the wrong type for its field.
    #[error("type mismatch at line {line}, column {column}: {source}")]
    TypeMismatch {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// Line of the offending input (1-based), as reported by the parser.
    pub fn line(&self) -> usize {
        match self {
            Self::Malformed { line, .. } | Self::TypeMismatch { line, .. } => *line,
        }
    }

    /// Column of the offending input (1-based), as reported by the parser.
    pub fn column(&self) -> usize {
        match self {
            Self::Malformed { column, .. } | Self::TypeMismatch { column, .. } => *column,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        let (line, column) = (source.line(), source.column());
        match source.classify() {
            Category::Data => DecodeError::TypeMismatch {
                line,
                column,
                source,
            },
            // Io can only come from reader-based parsing, which the codec never
            // uses; treat it as unreadable input.
            Category::Syntax | Category::Eof | Category::Io => DecodeError::Malformed {
                line,
                column,
                source,
            },
        }
    }
}

/// Errors while encoding a schema value to JSON.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("cannot encode value: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for EncodeError {
    fn from(source: serde_json::Error) -> Self {
        EncodeError::Serialize { source }
    }
}

/// Errors while loading or round-tripping a fixture document.
#[derive(Debug, Error)]
pub enum FixtureError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Codec errors (exit code 2)
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("cannot determine document kind: {reason}")]
    UnknownKind { reason: String },

    #[error("unknown spec version \"{value}\": expected 1.0, 1.1, 1.2, 1.2-draft or 3.0")]
    UnknownVersion { value: String },

    #[error("version {version} has no {kind} document")]
    UnsupportedVersion {
        kind: crate::types::DocumentKind,
        version: crate::types::SpecVersion,
    },

    // Round-trip failure (exit code 1)
    #[error("round trip changed the document: {difference}")]
    Mismatch { difference: JsonDifference },
}

impl FixtureError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            FixtureError::FileNotFound { .. } | FixtureError::ReadError { .. } => 3,
            FixtureError::Mismatch { .. } => 1,
            _ => 2,
        }
    }
}

/// First point at which two JSON documents diverge.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct JsonDifference {
    /// JSON Pointer (RFC 6901) to the differing value. Empty for the root.
    pub path: String,
    /// Value in the original document, `None` if the key is missing there.
    pub expected: Option<serde_json::Value>,
    /// Value in the re-encoded document, `None` if the key is missing there.
    pub actual: Option<serde_json::Value>,
}

impl std::fmt::Display for JsonDifference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        match (&self.expected, &self.actual) {
            (Some(e), Some(a)) => write!(f, "{}: expected {}, got {}", path, e, a),
            (Some(e), None) => write!(f, "{}: expected {}, missing after round trip", path, e),
            (None, Some(a)) => write!(f, "{}: unexpected {} after round trip", path, a),
            (None, None) => write!(f, "{}: values differ", path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn syntax_error_is_malformed() {
        let err: DecodeError = serde_json::from_str::<serde_json::Value>("{\"ver\":")
            .unwrap_err()
            .into();
        assert!(matches!(err, DecodeError::Malformed { .. }));
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn wrong_type_is_type_mismatch() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Probe {
            seq: i64,
        }
        let err: DecodeError = serde_json::from_str::<Probe>(r#"{"seq":"first"}"#)
            .unwrap_err()
            .into();
        assert!(matches!(err, DecodeError::TypeMismatch { .. }));
        assert!(err.column() > 0);
    }

    #[test]
    fn fixture_error_exit_codes() {
        let err = FixtureError::FileNotFound {
            path: PathBuf::from("request.json"),
        };
        assert_eq!(err.exit_code(), 3);

        let err = FixtureError::UnknownVersion {
            value: "9.9".into(),
        };
        assert_eq!(err.exit_code(), 2);

        let err = FixtureError::Mismatch {
            difference: JsonDifference {
                path: "/seq".into(),
                expected: Some(json!(0)),
                actual: None,
            },
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn difference_display() {
        let diff = JsonDifference {
            path: "/assets/0/id".into(),
            expected: Some(json!(1)),
            actual: Some(json!(2)),
        };
        assert_eq!(diff.to_string(), "/assets/0/id: expected 1, got 2");

        let diff = JsonDifference {
            path: String::new(),
            expected: None,
            actual: Some(json!({})),
        };
        assert_eq!(diff.to_string(), "/: unexpected {} after round trip");
    }
}
