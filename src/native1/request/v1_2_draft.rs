//! Native Ad Request, 1.2 public-comment draft.
//!
//! Same as 1.2 except that the draft had no `privacy` flag.

use serde::{Deserialize, Serialize};

use super::{Asset, EventTracker};
use crate::ext::Ext;
use crate::native1::{ContextSubtype, ContextType, PlacementType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Version of the Native Markup in use. Default "1.2".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contextsubtype: Option<ContextSubtype>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plcmttype: Option<PlacementType>,

    /// Default 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plcmtcnt: Option<i64>,

    /// Default 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,

    /// Required.
    #[serde(default, deserialize_with = "crate::codec::null_as_default")]
    pub assets: Vec<Asset>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aurlsupport: Option<i8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub durlsupport: Option<i8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventtrackers: Option<Vec<EventTracker>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Request {
    pub const DEFAULT_VERSION: &'static str = "1.2";

    pub fn version(&self) -> &str {
        self.ver.as_deref().unwrap_or(Self::DEFAULT_VERSION)
    }

    pub fn placement_count(&self) -> i64 {
        self.plcmtcnt.unwrap_or(1)
    }

    pub fn sequence(&self) -> i64 {
        self.seq.unwrap_or(0)
    }
}

/// Promote a draft request to 1.2. Nothing is lost; `privacy` stays unset.
impl From<Request> for super::v1_2::Request {
    fn from(draft: Request) -> Self {
        super::v1_2::Request {
            ver: draft.ver,
            context: draft.context,
            contextsubtype: draft.contextsubtype,
            plcmttype: draft.plcmttype,
            plcmtcnt: draft.plcmtcnt,
            seq: draft.seq,
            assets: draft.assets,
            aurlsupport: draft.aurlsupport,
            durlsupport: draft.durlsupport,
            eventtrackers: draft.eventtrackers,
            privacy: None,
            ext: draft.ext,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn privacy_is_not_part_of_the_draft() {
        let req: Request = decode_str(r#"{"ver":"1.2","privacy":1,"assets":[]}"#).unwrap();
        assert_eq!(encode(&req).unwrap(), br#"{"ver":"1.2","assets":[]}"#);
    }

    #[test]
    fn promotes_to_final() {
        let draft: Request =
            decode_str(r#"{"plcmtcnt":2,"aurlsupport":1,"assets":[{"id":1}],"ext":{"x":1}}"#)
                .unwrap();
        let fin: crate::native1::request::v1_2::Request = draft.into();
        assert_eq!(fin.placement_count(), 2);
        assert!(fin.supports_assets_url());
        assert_eq!(fin.privacy, None);
        assert_eq!(fin.ext.unwrap().get(), r#"{"x":1}"#);
    }
}
