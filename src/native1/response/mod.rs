//! Native Ad Response documents.
//!
//! Response assets changed shape in 1.2 (they can describe themselves for
//! asset-URL delivery), so each version module declares its own asset and
//! tracker objects. [`Link`] is the same everywhere.
//!
//! In the embedded delivery mode a response asset is matched to the request
//! asset with the same `id` and inherits whatever it leaves out. In asset-URL
//! mode the renderer never sees the request, so every attribute has to be
//! spelled out. None of this matching happens here; the types only carry the
//! identifiers.

pub mod v1_0;
pub mod v1_1;
pub mod v1_2;
pub mod v1_2_draft;

use serde::{Deserialize, Serialize};

use crate::ext::Ext;

/// Link object: the destination of a click.
///
/// A response carries a default link; an asset may carry its own, which
/// applies when that asset is clicked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Required. Landing URL of the clickable link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Third-party tracker URLs to fire on click of the URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clicktrackers: Option<Vec<String>>,

    /// Fallback URL for a deep link, used if the URL given in `url` is not
    /// supported by the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Link {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn link_round_trips() {
        let json = r#"{"url":"deeplink://item/1","clicktrackers":["https://t.example/c"],"fallback":"https://example.com/item/1"}"#;
        let link: Link = decode_str(json).unwrap();
        assert_eq!(link.fallback.as_deref(), Some("https://example.com/item/1"));
        assert_eq!(encode(&link).unwrap(), json.as_bytes());
    }

    #[test]
    fn new_sets_only_url() {
        assert_eq!(
            encode(&Link::new("https://example.com")).unwrap(),
            br#"{"url":"https://example.com"}"#
        );
    }
}
