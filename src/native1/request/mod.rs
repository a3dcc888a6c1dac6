//! Native Ad Request documents and the asset objects they share.
//!
//! The asset request objects did not change between 1.0 and 1.2, so every
//! version's `Request` carries the same [`Asset`].

pub mod v1_0;
pub mod v1_1;
pub mod v1_2;
pub mod v1_2_draft;

use serde::{Deserialize, Serialize};

use super::{DataAssetType, EventTrackingMethod, EventType, ImageAssetType, Protocol};
use crate::ext::Ext;

/// Asset request object.
///
/// By convention exactly one of `title`, `img`, `video` or `data` is set. That
/// is not checked here; any combination decodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Required. Unique asset ID, assigned by the exchange. Typically a counter
    /// for the array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Set to 1 if the asset is required (the exchange will not accept a bid
    /// without it). Default 0.
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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Asset {
    /// Whether the bidder must supply this asset.
    pub fn is_required(&self) -> bool {
        self.required == Some(1)
    }

    /// Number of populated asset variants. Conformant assets have exactly one.
    pub fn variant_count(&self) -> usize {
        [
            self.title.is_some(),
            self.img.is_some(),
            self.video.is_some(),
            self.data.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

/// Title asset request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Required. Maximum length of the text in the title element. Recommended
    /// values are 25, 90 or 140.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Image asset request.
///
/// `w`/`h` are exact sizes; `wmin`/`hmin` are minimums. An exchange usually
/// sends one pair or the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Type of image element supported (icon, logo, main).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ImageAssetType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub wmin: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmin: Option<i64>,

    /// Whitelist of content MIME types supported. Absent means all types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Video asset request. Mirrors the OpenRTB 2.x video object's core fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Required. Content MIME types supported, e.g. `video/mp4`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimes: Option<Vec<String>>,

    /// Required. Minimum video ad duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minduration: Option<i64>,

    /// Required. Maximum video ad duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxduration: Option<i64>,

    /// Required. Video protocols the publisher can accept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocols: Option<Vec<Protocol>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Data asset request: brand name, description, rating, price and similar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Data {
    /// Required. Type ID of the element supported by the publisher.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<DataAssetType>,

    /// Maximum length of the text in the element's response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Event tracker request (1.2 and the 1.2 draft): an event the publisher can
/// track and the methods it supports for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventTracker {
    /// Required. Type of event available for tracking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<EventType>,

    /// Required. Tracking methods available for this event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<EventTrackingMethod>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl EventTracker {
    pub fn supports(&self, method: EventTrackingMethod) -> bool {
        self.methods
            .as_deref()
            .is_some_and(|methods| methods.contains(&method))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn asset_with_title() {
        let asset: Asset = decode_str(r#"{"id":1,"required":1,"title":{"len":90}}"#).unwrap();
        assert_eq!(asset.id, Some(1));
        assert!(asset.is_required());
        assert_eq!(asset.title.as_ref().unwrap().len, Some(90));
        assert_eq!(asset.variant_count(), 1);
    }

    #[test]
    fn asset_variants_are_not_exclusive() {
        let asset: Asset =
            decode_str(r#"{"id":2,"img":{"type":3},"data":{"type":2,"len":140}}"#).unwrap();
        assert_eq!(asset.variant_count(), 2);
        assert!(!asset.is_required());

        let empty: Asset = decode_str(r#"{"id":3}"#).unwrap();
        assert_eq!(empty.variant_count(), 0);
    }

    #[test]
    fn image_type_field_name() {
        let image = Image {
            kind: Some(ImageAssetType::MAIN),
            wmin: Some(300),
            hmin: Some(250),
            ..Default::default()
        };
        assert_eq!(
            encode(&image).unwrap(),
            br#"{"type":3,"wmin":300,"hmin":250}"#
        );
    }

    #[test]
    fn empty_mimes_differs_from_absent() {
        let explicit: Image = decode_str(r#"{"mimes":[]}"#).unwrap();
        let absent: Image = decode_str("{}").unwrap();
        assert_eq!(explicit.mimes, Some(vec![]));
        assert_eq!(absent.mimes, None);
        assert_eq!(encode(&explicit).unwrap(), br#"{"mimes":[]}"#);
        assert_eq!(encode(&absent).unwrap(), b"{}");
    }

    #[test]
    fn video_protocols() {
        let video: Video = decode_str(
            r#"{"mimes":["video/mp4"],"minduration":5,"maxduration":30,"protocols":[2,3,7]}"#,
        )
        .unwrap();
        assert_eq!(
            video.protocols,
            Some(vec![Protocol::VAST_2_0, Protocol::VAST_3_0, Protocol::VAST_4_0])
        );
    }

    #[test]
    fn event_tracker_methods() {
        let tracker: EventTracker = decode_str(r#"{"event":1,"methods":[1,2]}"#).unwrap();
        assert_eq!(tracker.event, Some(EventType::IMPRESSION));
        assert!(tracker.supports(EventTrackingMethod::JS));
        assert!(!EventTracker::default().supports(EventTrackingMethod::IMAGE));
    }
}
