//! Round-trip conformance checks over fixture documents.
//!
//! Each `.json` file is decoded with the schema for its kind and version,
//! re-encoded, and compared with the original. Any semantic difference is a
//! failure:
//! - E001: file can't be read, isn't JSON, or doesn't decode
//! - E002: decoded value can't be encoded
//! - E003: re-encoded document differs from the original
//! - W001: no `ver` in the document, default version assumed

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::value::RawValue;

use crate::codec::{decode, verify_same};
use crate::document::Document;
use crate::error::{EncodeError, FixtureError};
use crate::loader::{parse_value, read_document};
use crate::native1::Wrapped;
use crate::types::{declared_ver, detect_kind, unwrap_native, DocumentKind, SpecVersion};

/// Overrides for kind and version detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Decode every document as this kind instead of detecting it.
    pub kind: Option<DocumentKind>,
    /// Decode every document against this version instead of reading `ver`.
    pub version: Option<SpecVersion>,
}

impl CheckOptions {
    /// Options that detect both kind and version from each document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: DocumentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn version(mut self, version: SpecVersion) -> Self {
        self.version = Some(version);
        self
    }
}

/// Outcome of a successful round trip.
#[derive(Debug, Clone)]
pub struct RoundTrip {
    pub document: Document,
    /// The document had no `ver` and the kind's default version was used.
    pub version_defaulted: bool,
    /// The document sat under a legacy `native` root key.
    pub wrapped: bool,
}

impl RoundTrip {
    pub fn kind(&self) -> DocumentKind {
        self.document.kind()
    }

    pub fn version(&self) -> SpecVersion {
        self.document.version()
    }

    /// Re-encode the document, restoring the legacy wrapper if it had one.
    pub fn to_bytes(&self, pretty: bool) -> Result<Vec<u8>, EncodeError> {
        let encoded = if pretty {
            self.document.encode_pretty()?
        } else {
            self.document.encode()?
        };
        if !self.wrapped {
            return Ok(encoded);
        }
        let mut out = Vec::with_capacity(encoded.len() + 12);
        out.extend_from_slice(b"{\"native\":");
        out.extend_from_slice(&encoded);
        out.push(b'}');
        Ok(out)
    }
}

/// Decode, re-encode and compare a single document.
///
/// # Errors
///
/// `FixtureError::UnknownKind` if the kind can't be detected and wasn't given,
/// codec errors from decoding or encoding, and `FixtureError::Mismatch` when
/// the re-encoded document differs from the input.
pub fn round_trip_document(bytes: &[u8], options: &CheckOptions) -> Result<RoundTrip, FixtureError> {
    let value = parse_value(bytes)?;

    let kind = match options.kind {
        Some(kind) => kind,
        None => detect_kind(&value).ok_or_else(|| FixtureError::UnknownKind {
            reason: "no request, response or body fields found".to_string(),
        })?,
    };

    let wrapped = kind != DocumentKind::Body && unwrap_native(&value).is_some();

    let (version, version_defaulted) = match (options.version, declared_ver(&value)) {
        (Some(version), _) => (version, false),
        (None, Some(ver)) => {
            let version = SpecVersion::from_ver(ver).ok_or_else(|| FixtureError::UnknownVersion {
                value: ver.to_string(),
            })?;
            (version, false)
        }
        (None, None) => (kind.default_version(), true),
    };
    log::debug!(
        "round trip as {} {}{}",
        kind,
        version,
        if wrapped { " (wrapped)" } else { "" }
    );

    // The inner object is sliced out raw so ext payloads keep their bytes.
    let inner: Option<Box<RawValue>> = if wrapped {
        Some(decode::<Wrapped<Box<RawValue>>>(bytes)?.into_inner())
    } else {
        None
    };
    let source = inner.as_deref().map_or(bytes, |raw| raw.get().as_bytes());

    let document = Document::decode(kind, version, source)?;
    let encoded = document.encode()?;
    verify_same(source, &encoded)?;

    Ok(RoundTrip {
        document,
        version_defaulted,
        wrapped,
    })
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single diagnostic message from checking a file.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: String,
    pub file: PathBuf,
    /// JSON Pointer to the issue, "/" for whole-document problems.
    pub path: String,
    pub message: String,
}

/// Status of a checked file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Ok,
    Error,
    Warning,
}

/// Result of checking a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_version")]
    pub version: Option<SpecVersion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

fn serialize_version<S: serde::Serializer>(
    version: &Option<SpecVersion>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match version {
        Some(v) => serializer.serialize_str(v.as_str()),
        None => serializer.serialize_none(),
    }
}

/// Result of checking a directory or set of files.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub path: PathBuf,
    pub files_checked: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub warnings: usize,
    pub results: Vec<FileResult>,
}

impl CheckResult {
    /// Returns true if all files passed (no errors).
    pub fn is_ok(&self) -> bool {
        self.errors == 0
    }
}

/// Check a file or directory.
///
/// If path is a directory, recursively finds all .json files.
/// If `strict` is true, files with warnings count as failed.
pub fn check(path: &Path, options: &CheckOptions, strict: bool) -> CheckResult {
    let files = collect_json_files(path);
    let mut results = Vec::new();
    let mut total_errors = 0;
    let mut total_warnings = 0;

    for file in &files {
        let file_result = check_file(file, path, options);
        total_errors += file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        total_warnings += file_result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();
        results.push(file_result);
    }

    let failed = results
        .iter()
        .filter(|r| {
            if strict {
                r.status != FileStatus::Ok
            } else {
                r.status == FileStatus::Error
            }
        })
        .count();

    CheckResult {
        path: path.to_path_buf(),
        files_checked: files.len(),
        passed: files.len() - failed,
        failed,
        errors: total_errors,
        warnings: total_warnings,
        results,
    }
}

/// Check a single fixture file.
pub fn check_file(file: &Path, base_path: &Path, options: &CheckOptions) -> FileResult {
    log::debug!("checking {}", file.display());
    let display = file.strip_prefix(base_path).unwrap_or(file);
    let display = if display.as_os_str().is_empty() {
        file.file_name().map(Path::new).unwrap_or(file)
    } else {
        display
    };

    let outcome = read_document(file).and_then(|bytes| round_trip_document(&bytes, options));

    let mut diagnostics = Vec::new();
    let (kind, version) = match outcome {
        Ok(trip) => {
            if trip.version_defaulted {
                diagnostics.push(Diagnostic {
                    severity: Severity::Warning,
                    code: "W001".to_string(),
                    file: file.to_path_buf(),
                    path: "/ver".to_string(),
                    message: format!(
                        "document has no ver, checked as {} {}",
                        trip.kind(),
                        trip.version()
                    ),
                });
            }
            (Some(trip.kind()), Some(trip.version()))
        }
        Err(err) => {
            diagnostics.push(diagnostic_for(&err, file));
            (None, None)
        }
    };

    let status = if diagnostics.iter().any(|d| d.severity == Severity::Error) {
        FileStatus::Error
    } else if diagnostics.is_empty() {
        FileStatus::Ok
    } else {
        FileStatus::Warning
    };

    FileResult {
        file: display.to_path_buf(),
        status,
        kind,
        version,
        diagnostics,
    }
}

fn diagnostic_for(err: &FixtureError, file: &Path) -> Diagnostic {
    let (code, path) = match err {
        FixtureError::Encode(_) => ("E002", "/".to_string()),
        FixtureError::Mismatch { difference } => (
            "E003",
            if difference.path.is_empty() {
                "/".to_string()
            } else {
                difference.path.clone()
            },
        ),
        _ => ("E001", "/".to_string()),
    };
    Diagnostic {
        severity: Severity::Error,
        code: code.to_string(),
        file: file.to_path_buf(),
        path,
        message: err.to_string(),
    }
}

/// Collect all .json files in a path (file or directory).
fn collect_json_files(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            return vec![path.to_path_buf()];
        }
        return vec![];
    }

    let mut files = Vec::new();
    collect_files_recursive(path, &mut files);
    files.sort();
    files
}

fn collect_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        log::debug!("cannot read directory {}", dir.display());
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files_recursive(&path, files);
        } else if path.extension().map(|e| e == "json").unwrap_or(false) {
            files.push(path);
        }
    }
}
