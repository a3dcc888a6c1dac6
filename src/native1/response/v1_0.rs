//! Native Ad Response 1.0.

use serde::{Deserialize, Serialize};

use super::Link;
use crate::ext::Ext;
use crate::native1::{EventTrackingMethod, EventType};

/// Native response object, 1.0 (section 5.1).
///
/// Before 1.1 the response could sit under a `native` root key; decode such
/// documents as [`Wrapped<Response>`](crate::native1::Wrapped).
///
/// `imptrackers` and `jstracker` are slated for replacement by
/// `eventtrackers`. All three may be present together; they are carried
/// independently and never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Recommended. Version of the Native Markup in use. Default "1.0".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,

    /// Recommended. The native ad's assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<Asset>>,

    /// Required. Default destination link for the ad. Always written.
    #[serde(default, deserialize_with = "crate::codec::null_as_default")]
    pub link: Link,

    /// Impression tracking URLs, expected to return a 1x1 image or 204.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imptrackers: Option<Vec<String>>,

    /// JavaScript impression tracker, already wrapped in `<script>` tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jstracker: Option<String>,

    /// Tracking objects to run with the ad.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventtrackers: Option<Vec<EventTracker>>,

    /// URL of a page informing the user about the buyer's targeting activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Response {
    pub const DEFAULT_VERSION: &'static str = "1.0";

    pub fn version(&self) -> &str {
        self.ver.as_deref().unwrap_or(Self::DEFAULT_VERSION)
    }

    /// Response asset answering the request asset with `id`.
    pub fn asset(&self, id: i64) -> Option<&Asset> {
        self.assets.as_deref()?.iter().find(|a| a.id == Some(id))
    }

    /// Link followed when `asset` is clicked: its own, else the ad's default.
    pub fn click_link<'a>(&'a self, asset: &'a Asset) -> &'a Link {
        asset.link.as_ref().unwrap_or(&self.link)
    }
}

/// Asset response object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Required. Matches the ID of the request asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Set to 1 if the asset is required. Default 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<i8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<Image>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,

    /// Link for this asset; overrides the response's default link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Required. The text of the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Required. URL of the image asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Required. VAST XML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vasttag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Data {
    /// Optional display name of the data type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Required. Formatted string of data to display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Event tracker response object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventTracker {
    /// Required. Type of event to track.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventType>,

    /// Required. Type of tracking requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<EventTrackingMethod>,

    /// URL of the image or js. Required for image or js.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn missing_link_is_written_empty() {
        let resp: Response = decode_str(r#"{"ver":"1.0"}"#).unwrap();
        assert_eq!(resp.link, Link::default());
        assert_eq!(encode(&resp).unwrap(), br#"{"ver":"1.0","link":{}}"#);
    }

    #[test]
    fn legacy_and_event_trackers_coexist() {
        let json = r#"{"link":{"url":"https://example.com"},"imptrackers":["https://t.example/i"],"jstracker":"<script></script>","eventtrackers":[{"event":1,"method":1,"url":"https://t.example/e"}]}"#;
        let resp: Response = decode_str(json).unwrap();
        assert_eq!(resp.imptrackers.as_ref().unwrap().len(), 1);
        assert_eq!(resp.eventtrackers.as_ref().unwrap().len(), 1);
        assert_eq!(encode(&resp).unwrap(), json.as_bytes());
    }

    #[test]
    fn asset_link_overrides_default() {
        let resp: Response = decode_str(
            r#"{"link":{"url":"https://default"},"assets":[{"id":1,"title":{"text":"T"}},{"id":2,"img":{"url":"https://img"},"link":{"url":"https://own"}}]}"#,
        )
        .unwrap();
        let title = resp.asset(1).unwrap();
        let image = resp.asset(2).unwrap();
        assert_eq!(resp.click_link(title).url.as_deref(), Some("https://default"));
        assert_eq!(resp.click_link(image).url.as_deref(), Some("https://own"));
        assert!(resp.asset(3).is_none());
    }

    #[test]
    fn response_without_assets_has_none() {
        let resp: Response = decode_str(r#"{"link":{}}"#).unwrap();
        assert!(resp.assets.is_none());
        assert!(resp.asset(1).is_none());
        assert_eq!(resp.version(), "1.0");
    }
}
