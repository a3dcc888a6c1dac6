//! Native Ad Request 1.0.

use serde::{Deserialize, Serialize};

use super::Asset;
use crate::ext::Ext;
use crate::native1::{AdUnit, Layout};

/// Native Markup Request object, 1.0 (section 4.1).
///
/// Sent as a JSON-encoded string in the bid request's `imp.native.request`, or
/// as a direct object on exchanges that allow it. 1.0 documents may also appear
/// under a `native` root key; decode those as
/// [`Wrapped<Request>`](crate::native1::Wrapped).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Version of the Native Markup in use. Default "1.0".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,

    /// Recommended. Layout ID of the native ad unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,

    /// Recommended. Ad unit ID of the native ad unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adunit: Option<AdUnit>,

    /// Number of identical placements in this layout. Default 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plcmtcnt: Option<i64>,

    /// 0 for the first ad, 1 for the second, and so on. Default 0.
    ///
    /// Not normally combined with `plcmtcnt`: either several identical
    /// placements are auctioned together (`plcmtcnt > 1`, `seq = 0`) or distinct
    /// feed items are auctioned separately (`plcmtcnt = 1`, `seq >= 1`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,

    /// Required. Assets the bid response must comply with.
    #[serde(default, deserialize_with = "crate::codec::null_as_default")]
    pub assets: Vec<Asset>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Request {
    pub const DEFAULT_VERSION: &'static str = "1.0";
    pub const DEFAULT_PLACEMENT_COUNT: i64 = 1;
    pub const DEFAULT_SEQUENCE: i64 = 0;

    /// Declared version, or the 1.0 default when absent.
    pub fn version(&self) -> &str {
        self.ver.as_deref().unwrap_or(Self::DEFAULT_VERSION)
    }

    pub fn placement_count(&self) -> i64 {
        self.plcmtcnt.unwrap_or(Self::DEFAULT_PLACEMENT_COUNT)
    }

    pub fn sequence(&self) -> i64 {
        self.seq.unwrap_or(Self::DEFAULT_SEQUENCE)
    }

    /// Look up a requested asset by its ID.
    pub fn asset(&self, id: i64) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn defaults_are_reported_not_stored() {
        let req: Request = decode_str(r#"{"assets":[]}"#).unwrap();
        assert_eq!(req.version(), "1.0");
        assert_eq!(req.placement_count(), 1);
        assert_eq!(req.sequence(), 0);
        assert_eq!(encode(&req).unwrap(), br#"{"assets":[]}"#);
    }

    #[test]
    fn layout_and_adunit() {
        let req: Request =
            decode_str(r#"{"ver":"1.0","layout":6,"adunit":2,"plcmtcnt":3,"assets":[]}"#)
                .unwrap();
        assert_eq!(req.layout, Some(Layout::CONTENT_STREAM));
        assert_eq!(req.adunit, Some(AdUnit::RECOMMENDATION_WIDGETS));
        assert_eq!(req.placement_count(), 3);
    }

    #[test]
    fn fields_from_later_versions_are_ignored() {
        let req: Request =
            decode_str(r#"{"context":1,"plcmttype":1,"privacy":1,"assets":[]}"#).unwrap();
        assert_eq!(encode(&req).unwrap(), br#"{"assets":[]}"#);
    }

    #[test]
    fn asset_lookup() {
        let req: Request =
            decode_str(r#"{"assets":[{"id":1,"title":{"len":25}},{"id":4,"data":{"type":1}}]}"#)
                .unwrap();
        assert!(req.asset(4).unwrap().data.is_some());
        assert!(req.asset(2).is_none());
    }
}
