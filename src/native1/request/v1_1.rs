//! Native Ad Request 1.1.

use serde::{Deserialize, Serialize};

use super::Asset;
use crate::ext::Ext;
use crate::native1::{AdUnit, ContextSubtype, ContextType, Layout, PlacementType};

/// Native Markup Request object, 1.1.
///
/// 1.1 replaces `layout`/`adunit` with `context`, `contextsubtype` and
/// `plcmttype`. The old fields are still accepted but marked for deprecation.
/// The object itself is the document root; there is no `native` wrapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Version of the Native Markup in use. Default "1.1".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,

    /// Deprecated. Layout ID of the native ad unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,

    /// Deprecated. Ad unit ID of the native ad unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adunit: Option<AdUnit>,

    /// Recommended. Context in which the ad appears.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextType>,

    /// A more detailed context in which the ad appears.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contextsubtype: Option<ContextSubtype>,

    /// Recommended. Design/format/layout of the ad unit being offered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plcmttype: Option<PlacementType>,

    /// Number of identical placements in this layout. Default 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plcmtcnt: Option<i64>,

    /// 0 for the first ad, 1 for the second, and so on. Default 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,

    /// Required. Assets the bid response must comply with.
    #[serde(default, deserialize_with = "crate::codec::null_as_default")]
    pub assets: Vec<Asset>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Request {
    pub const DEFAULT_VERSION: &'static str = "1.1";
    pub const DEFAULT_PLACEMENT_COUNT: i64 = 1;
    pub const DEFAULT_SEQUENCE: i64 = 0;

    pub fn version(&self) -> &str {
        self.ver.as_deref().unwrap_or(Self::DEFAULT_VERSION)
    }

    pub fn placement_count(&self) -> i64 {
        self.plcmtcnt.unwrap_or(Self::DEFAULT_PLACEMENT_COUNT)
    }

    pub fn sequence(&self) -> i64 {
        self.seq.unwrap_or(Self::DEFAULT_SEQUENCE)
    }

    pub fn asset(&self, id: i64) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn context_fields() {
        let req: Request = decode_str(
            r#"{"ver":"1.1","context":2,"contextsubtype":22,"plcmttype":1,"assets":[]}"#,
        )
        .unwrap();
        assert_eq!(req.context, Some(ContextType::SOCIAL));
        assert_eq!(req.contextsubtype, Some(ContextSubtype::CHAT));
        assert_eq!(req.plcmttype, Some(PlacementType::IN_FEED));
        assert_eq!(req.version(), "1.1");
    }

    #[test]
    fn deprecated_fields_still_round_trip() {
        let json = r#"{"layout":3,"adunit":1,"assets":[]}"#;
        let req: Request = decode_str(json).unwrap();
        assert_eq!(encode(&req).unwrap(), json.as_bytes());
    }

    #[test]
    fn explicit_zero_sequence_is_kept() {
        let req: Request = decode_str(r#"{"seq":0,"assets":[]}"#).unwrap();
        assert_eq!(req.seq, Some(0));
        assert_eq!(encode(&req).unwrap(), br#"{"seq":0,"assets":[]}"#);
    }
}
