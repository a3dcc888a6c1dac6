//! Native Ad Response 1.2.
//!
//! 1.2 adds asset-URL and DCO-URL delivery. Because a renderer fetching assets
//! from `assetsurl` never sees the request, the asset objects gained the
//! attributes that embedded responses infer from the matching request asset
//! (`title.len`, `img.type`, `data.type`, `data.len`), and asset `id` became
//! optional.

use serde::{Deserialize, Serialize};

use super::Link;
use crate::ext::Ext;
use crate::native1::{DataAssetType, EventTrackingMethod, EventType, ImageAssetType};

/// Native response object, 1.2.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Recommended. Version of the Native Markup in use. Default "1.2".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,

    /// Recommended. Required if there is no `assetsurl`; recommended as a
    /// fallback even when there is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<Asset>>,

    /// URL of an alternate source for the assets object. The expected response
    /// is a JSON object mirroring the `assets` field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assetsurl: Option<String>,

    /// Beta. URL where a dynamic creative specification may be found for
    /// populating this ad, per the Dynamic Content Ads Specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dcourl: Option<String>,

    /// Required. Default destination link for the ad. Always written.
    #[serde(default, deserialize_with = "crate::codec::null_as_default")]
    pub link: Link,

    /// To be deprecated, replaced by `eventtrackers`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imptrackers: Option<Vec<String>>,

    /// To be deprecated, replaced by `eventtrackers`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jstracker: Option<String>,

    /// Tracking objects to run with the ad, in response to the methods the
    /// request declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventtrackers: Option<Vec<EventTracker>>,

    /// If the request indicated support, URL of a page informing the user about
    /// the buyer's targeting activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Response {
    pub const DEFAULT_VERSION: &'static str = "1.2";

    pub fn version(&self) -> &str {
        self.ver.as_deref().unwrap_or(Self::DEFAULT_VERSION)
    }

    pub fn asset(&self, id: i64) -> Option<&Asset> {
        self.assets.as_deref()?.iter().find(|a| a.id == Some(id))
    }

    pub fn click_link<'a>(&'a self, asset: &'a Asset) -> &'a Link {
        asset.link.as_ref().unwrap_or(&self.link)
    }

    /// Whether the assets are delivered by URL rather than embedded.
    pub fn uses_assets_url(&self) -> bool {
        self.assetsurl.is_some() || self.dcourl.is_some()
    }

    /// Trackers for `event` fired with `method`.
    pub fn trackers_for(
        &self,
        event: EventType,
        method: EventTrackingMethod,
    ) -> impl Iterator<Item = &EventTracker> {
        self.eventtrackers
            .iter()
            .flatten()
            .filter(move |t| t.event == Some(event) && t.method == Some(method))
    }
}

/// Asset response object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Optional if using `assetsurl`/`dcourl`, otherwise required. Matches the
    /// ID of the request asset.
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

    /// Length of the title. Required for `assetsurl`/`dcourl` responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Required for `assetsurl`/`dcourl` responses, not for embedded ones.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ImageAssetType>,

    /// Required. URL of the image asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Width in device-independent pixels. Recommended for embedded responses,
    /// required for `assetsurl`/`dcourl`.
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
    /// Required for `assetsurl`/`dcourl` responses.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<DataAssetType>,

    /// Required for `assetsurl`/`dcourl` responses if a length limit was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<i64>,

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

    /// URL of the image or js. Required for image or js, optional for custom.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Custom key/value data agreed with the exchange, kept uninterpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Ext>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}
