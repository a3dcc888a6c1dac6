//! Native Ad Response, 1.2 public-comment draft.
//!
//! Shares the 1.2 asset and tracker objects; the draft response had no
//! `privacy` field.

use serde::{Deserialize, Serialize};

use super::Link;
use crate::ext::Ext;

pub use super::v1_2::{Asset, Data, EventTracker, Image, Title, Video};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<Asset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assetsurl: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dcourl: Option<String>,

    /// Required. Always written.
    #[serde(default, deserialize_with = "crate::codec::null_as_default")]
    pub link: Link,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub imptrackers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jstracker: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventtrackers: Option<Vec<EventTracker>>,

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
}

impl From<Response> for super::v1_2::Response {
    fn from(draft: Response) -> Self {
        super::v1_2::Response {
            ver: draft.ver,
            assets: draft.assets,
            assetsurl: draft.assetsurl,
            dcourl: draft.dcourl,
            link: draft.link,
            imptrackers: draft.imptrackers,
            jstracker: draft.jstracker,
            eventtrackers: draft.eventtrackers,
            privacy: None,
            ext: draft.ext,
        }
    }
}
