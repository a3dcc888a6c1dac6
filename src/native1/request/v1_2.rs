//! Native Ad Request 1.2.

use serde::{Deserialize, Serialize};

use super::{Asset, EventTracker};
use crate::ext::Ext;
use crate::native1::{ContextSubtype, ContextType, EventTrackingMethod, EventType, PlacementType};

/// Native Markup Request object, 1.2.
///
/// `layout` and `adunit` are gone. Adds asset-URL / DCO-URL support flags,
/// event trackers and the privacy flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Version of the Native Markup in use. Default "1.2".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,

    /// Recommended. Context in which the ad appears.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ContextType>,

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

    /// Whether the supply source supports returning an `assetsurl` instead of
    /// an asset object. 0 or absent means unsupported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aurlsupport: Option<i8>,

    /// Whether the supply source supports returning a `dcourl` instead of an
    /// asset object. Beta feature. 0 or absent means unsupported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durlsupport: Option<i8>,

    /// Event types the publisher can track, with the methods per event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eventtrackers: Option<Vec<EventTracker>>,

    /// Recommended. Set to 1 if the supply source / impression supports a
    /// buyer-specific privacy notice. Default 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<i8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Request {
    pub const DEFAULT_VERSION: &'static str = "1.2";
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

    pub fn supports_assets_url(&self) -> bool {
        self.aurlsupport == Some(1)
    }

    pub fn supports_dco_url(&self) -> bool {
        self.durlsupport == Some(1)
    }

    pub fn supports_privacy(&self) -> bool {
        self.privacy == Some(1)
    }

    /// Whether the publisher can track `event` with `method`.
    pub fn can_track(&self, event: EventType, method: EventTrackingMethod) -> bool {
        self.eventtrackers.as_deref().is_some_and(|trackers| {
            trackers
                .iter()
                .any(|t| t.event == Some(event) && t.supports(method))
        })
    }
}
