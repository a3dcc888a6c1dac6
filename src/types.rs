//! Document kinds, spec versions and detection from raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root key of a legacy (pre-1.1) native document.
pub const NATIVE_WRAPPER_KEY: &str = "native";

/// Root key of an OpenRTB 3.x body.
pub const OPENRTB_ROOT_KEY: &str = "openrtb";

/// Keys only a native response carries at its root.
const RESPONSE_KEYS: &[&str] = &["link", "imptrackers", "jstracker", "assetsurl", "dcourl"];

/// Keys only a native request carries at its root.
const REQUEST_KEYS: &[&str] = &[
    "layout",
    "adunit",
    "context",
    "contextsubtype",
    "plcmttype",
    "plcmtcnt",
    "seq",
    "aurlsupport",
    "durlsupport",
];

/// Which top-level document a JSON text holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Native Ad Request (native markup request object).
    Request,
    /// Native Ad Response (native markup response object).
    Response,
    /// OpenRTB 3.x body envelope.
    Body,
}

impl DocumentKind {
    /// Parse a kind name as used on the command line.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "request" => Some(DocumentKind::Request),
            "response" => Some(DocumentKind::Response),
            "body" => Some(DocumentKind::Body),
            _ => None,
        }
    }

    /// Version assumed when a document does not state one.
    pub fn default_version(self) -> SpecVersion {
        match self {
            DocumentKind::Request | DocumentKind::Response => SpecVersion::V1_2,
            DocumentKind::Body => SpecVersion::V3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Request => "request",
            DocumentKind::Response => "response",
            DocumentKind::Body => "body",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spec version a document is decoded against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpecVersion {
    /// Native 1.0.
    V1_0,
    /// Native 1.1.
    V1_1,
    /// Native 1.2 public-comment draft.
    V1_2Draft,
    /// Native 1.2.
    V1_2,
    /// OpenRTB 3.x.
    V3,
}

impl SpecVersion {
    /// Parse a version string as used on the command line.
    ///
    /// Accepts `1.0`, `1.1`, `1.2`, `1.2-draft` and `3.0` (`3` and `3.x` too).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "1.0" => Some(SpecVersion::V1_0),
            "1.1" => Some(SpecVersion::V1_1),
            "1.2-draft" | "1.2draft" => Some(SpecVersion::V1_2Draft),
            "1.2" => Some(SpecVersion::V1_2),
            "3" | "3.0" | "3.x" => Some(SpecVersion::V3),
            _ => None,
        }
    }

    /// Map the value of a document's `ver` field to a version.
    ///
    /// Minor revisions collapse onto their release (`1.2.1` -> 1.2). A `ver`
    /// never selects the draft; that has to be asked for explicitly.
    pub fn from_ver(ver: &str) -> Option<Self> {
        let mut parts = ver.trim().split('.');
        match (parts.next(), parts.next()) {
            (Some("3"), _) => Some(SpecVersion::V3),
            (Some("1"), None | Some("0")) => Some(SpecVersion::V1_0),
            (Some("1"), Some("1")) => Some(SpecVersion::V1_1),
            (Some("1"), Some("2")) => Some(SpecVersion::V1_2),
            _ => None,
        }
    }

    /// Whether a document of `kind` exists in this version.
    pub fn supports(self, kind: DocumentKind) -> bool {
        match self {
            SpecVersion::V3 => kind == DocumentKind::Body,
            _ => kind != DocumentKind::Body,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SpecVersion::V1_0 => "1.0",
            SpecVersion::V1_1 => "1.1",
            SpecVersion::V1_2Draft => "1.2-draft",
            SpecVersion::V1_2 => "1.2",
            SpecVersion::V3 => "3.0",
        }
    }
}

impl std::fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the inner object of a legacy `{"native": {...}}` document.
pub fn unwrap_native(document: &Value) -> Option<&Value> {
    let map = document.as_object()?;
    if map.len() == 1 {
        map.get(NATIVE_WRAPPER_KEY).filter(|v| v.is_object())
    } else {
        None
    }
}

/// Detect which kind of document `document` is from its shape.
///
/// - `openrtb` at the root: Body
/// - link / legacy trackers / assetsurl at the root: Response
/// - layout / placement fields at the root: Request
/// - otherwise the assets and event trackers decide
///
/// Legacy wrapped documents are looked through.
pub fn detect_kind(document: &Value) -> Option<DocumentKind> {
    let root = unwrap_native(document).unwrap_or(document);
    let map = root.as_object()?;

    if map.contains_key(OPENRTB_ROOT_KEY) {
        return Some(DocumentKind::Body);
    }
    if RESPONSE_KEYS.iter().any(|k| map.contains_key(*k)) {
        return Some(DocumentKind::Response);
    }
    if REQUEST_KEYS.iter().any(|k| map.contains_key(*k)) {
        return Some(DocumentKind::Request);
    }

    // Response trackers name a single `method`; request trackers list `methods`.
    if let Some(Value::Array(trackers)) = map.get("eventtrackers") {
        if trackers.iter().any(|t| t.get("method").is_some()) {
            return Some(DocumentKind::Response);
        }
        if trackers.iter().any(|t| t.get("methods").is_some()) {
            return Some(DocumentKind::Request);
        }
    }

    // Request assets describe what is wanted, response assets carry content.
    if let Some(Value::Array(assets)) = map.get("assets") {
        let carries_content = assets.iter().any(|a| {
            a.pointer("/title/text").is_some()
                || a.pointer("/img/url").is_some()
                || a.pointer("/video/vasttag").is_some()
                || a.pointer("/data/value").is_some()
                || a.get("link").is_some()
        });
        return Some(if carries_content {
            DocumentKind::Response
        } else {
            DocumentKind::Request
        });
    }

    None
}

/// The raw `ver` string a document declares, looking through the legacy
/// wrapper and into an OpenRTB 3.x body.
pub fn declared_ver(document: &Value) -> Option<&str> {
    if let Some(ver) = document.pointer("/openrtb/ver").and_then(Value::as_str) {
        return Some(ver);
    }
    let root = unwrap_native(document).unwrap_or(document);
    root.get("ver").and_then(Value::as_str)
}

/// Read the spec version a document declares, if any.
pub fn detect_version(document: &Value) -> Option<SpecVersion> {
    declared_ver(document).and_then(SpecVersion::from_ver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_parse() {
        assert_eq!(DocumentKind::parse("request"), Some(DocumentKind::Request));
        assert_eq!(DocumentKind::parse("Response"), Some(DocumentKind::Response));
        assert_eq!(DocumentKind::parse("body"), Some(DocumentKind::Body));
        assert_eq!(DocumentKind::parse("bid"), None);
    }

    #[test]
    fn version_parse() {
        assert_eq!(SpecVersion::parse("1.0"), Some(SpecVersion::V1_0));
        assert_eq!(SpecVersion::parse("1.2-draft"), Some(SpecVersion::V1_2Draft));
        assert_eq!(SpecVersion::parse("3.x"), Some(SpecVersion::V3));
        assert_eq!(SpecVersion::parse("2.5"), None);
    }

    #[test]
    fn version_from_ver_field() {
        assert_eq!(SpecVersion::from_ver("1"), Some(SpecVersion::V1_0));
        assert_eq!(SpecVersion::from_ver("1.1"), Some(SpecVersion::V1_1));
        assert_eq!(SpecVersion::from_ver("1.2.1"), Some(SpecVersion::V1_2));
        assert_eq!(SpecVersion::from_ver("3.0"), Some(SpecVersion::V3));
        assert_eq!(SpecVersion::from_ver("2.6"), None);
        assert_eq!(SpecVersion::from_ver("3"), Some(SpecVersion::V3));
        assert_eq!(SpecVersion::from_ver("30"), None);
        assert_eq!(SpecVersion::from_ver("3abc"), None);
        assert_eq!(SpecVersion::from_ver("12"), None);
    }

    #[test]
    fn version_supports_kind() {
        assert!(SpecVersion::V1_1.supports(DocumentKind::Request));
        assert!(!SpecVersion::V1_1.supports(DocumentKind::Body));
        assert!(SpecVersion::V3.supports(DocumentKind::Body));
        assert!(!SpecVersion::V3.supports(DocumentKind::Response));
    }

    #[test]
    fn detect_body() {
        let doc = json!({"openrtb": {"ver": "3.0", "request": {"id": "1"}}});
        assert_eq!(detect_kind(&doc), Some(DocumentKind::Body));
        assert_eq!(detect_version(&doc), Some(SpecVersion::V3));
    }

    #[test]
    fn detect_response_by_link() {
        let doc = json!({"ver": "1.1", "link": {"url": "https://example.com"}});
        assert_eq!(detect_kind(&doc), Some(DocumentKind::Response));
        assert_eq!(detect_version(&doc), Some(SpecVersion::V1_1));
    }

    #[test]
    fn detect_request_by_assets() {
        let doc = json!({"ver": "1.2", "assets": [{"id": 1, "title": {"len": 90}}]});
        assert_eq!(detect_kind(&doc), Some(DocumentKind::Request));
    }

    #[test]
    fn detect_response_by_asset_content() {
        let doc = json!({"assets": [{"id": 1, "title": {"text": "Hello"}}]});
        assert_eq!(detect_kind(&doc), Some(DocumentKind::Response));
        assert_eq!(detect_version(&doc), None);
    }

    #[test]
    fn detect_by_event_trackers() {
        let req = json!({"eventtrackers": [{"event": 1, "methods": [1, 2]}]});
        let resp = json!({"eventtrackers": [{"event": 1, "method": 1, "url": "https://t"}]});
        assert_eq!(detect_kind(&req), Some(DocumentKind::Request));
        assert_eq!(detect_kind(&resp), Some(DocumentKind::Response));
    }

    #[test]
    fn detect_through_legacy_wrapper() {
        let doc = json!({"native": {"ver": "1", "layout": 3, "assets": []}});
        assert!(unwrap_native(&doc).is_some());
        assert_eq!(detect_kind(&doc), Some(DocumentKind::Request));
        assert_eq!(detect_version(&doc), Some(SpecVersion::V1_0));
    }

    #[test]
    fn declared_ver_is_raw() {
        assert_eq!(declared_ver(&json!({"ver": "2.5", "assets": []})), Some("2.5"));
        assert_eq!(detect_version(&json!({"ver": "2.5", "assets": []})), None);
        assert_eq!(declared_ver(&json!({"ver": 1.2})), None);
    }

    #[test]
    fn detect_nothing_recognisable() {
        assert_eq!(detect_kind(&json!({"foo": 1})), None);
        assert_eq!(detect_kind(&json!([1, 2])), None);
    }
}
