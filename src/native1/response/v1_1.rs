//! Native Ad Response 1.1.
//!
//! The asset and tracker objects are unchanged from 1.0 and are re-exported
//! from there. The response object is now the document root.

use serde::{Deserialize, Serialize};

use super::Link;
use crate::ext::Ext;

pub use super::v1_0::{Asset, Data, EventTracker, Image, Title, Video};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Recommended. Default "1.1".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<Asset>>,

    /// Required. Always written.
    #[serde(default, deserialize_with = "crate::codec::null_as_default")]
    pub link: Link,

    /// To be deprecated, replaced by `eventtrackers`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imptrackers: Option<Vec<String>>,

    /// To be deprecated, replaced by `eventtrackers`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jstracker: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventtrackers: Option<Vec<EventTracker>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Response {
    pub const DEFAULT_VERSION: &'static str = "1.1";

    pub fn version(&self) -> &str {
        self.ver.as_deref().unwrap_or(Self::DEFAULT_VERSION)
    }

    pub fn asset(&self, id: i64) -> Option<&Asset> {
        self.assets.as_deref()?.iter().find(|a| a.id == Some(id))
    }

    pub fn click_link<'a>(&'a self, asset: &'a Asset) -> &'a Link {
        asset.link.as_ref().unwrap_or(&self.link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn full_response_round_trips() {
        let json = r#"{"ver":"1.1","assets":[{"id":1,"required":1,"title":{"text":"Buy now"}},{"id":3,"data":{"label":"Rating","value":"5"}}],"link":{"url":"https://example.com"},"privacy":"https://example.com/privacy","ext":{"seat":"x"}}"#;
        let resp: Response = decode_str(json).unwrap();
        assert_eq!(resp.asset(3).unwrap().data.as_ref().unwrap().value.as_deref(), Some("5"));
        assert_eq!(encode(&resp).unwrap(), json.as_bytes());
    }

    #[test]
    fn fields_from_1_2_are_ignored() {
        let resp: Response =
            decode_str(r#"{"assetsurl":"https://a","dcourl":"https://d","link":{}}"#).unwrap();
        assert_eq!(encode(&resp).unwrap(), br#"{"link":{}}"#);
    }
}
