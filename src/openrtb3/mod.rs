//! OpenRTB 3.0 transaction layer.
//!
//! A [`Body`] wraps either a [`Request`] or a [`Response`] under a single
//! `openrtb` key. Domain-layer objects (AdCOM placements, context and media)
//! are carried as raw JSON so any domain spec round-trips unchanged.

mod codes;
mod request;
mod response;

use serde::{Deserialize, Serialize};

use crate::ext::Ext;

pub use codes::{AuctionType, DeliveryMethod, NoBidReason};
pub use request::{Deal, Item, Metric, Request, Source};
pub use response::{Bid, Macro, Response, Seatbid};

/// Domain-layer object (AdCOM by default) kept uninterpreted.
pub type DomainObject = Ext;

/// Top-level OpenRTB 3.0 document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Required.
    #[serde(default, deserialize_with = "crate::codec::null_as_default")]
    pub openrtb: Openrtb,
}

/// Openrtb object: version information plus exactly one of request/response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Openrtb {
    /// Required. Version of the transaction layer, e.g. "3.0".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,

    /// Domain spec the domain objects follow. Default "adcom".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domainspec: Option<String>,

    /// Required. Version of the domain spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domainver: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<Request>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Response>,
}

impl Openrtb {
    pub const DEFAULT_DOMAIN_SPEC: &'static str = "adcom";

    pub fn domain_spec(&self) -> &str {
        self.domainspec
            .as_deref()
            .unwrap_or(Self::DEFAULT_DOMAIN_SPEC)
    }
}

impl Body {
    pub fn request(request: Request) -> Self {
        Self {
            openrtb: Openrtb {
                ver: Some("3.0".to_string()),
                request: Some(request),
                ..Default::default()
            },
        }
    }

    pub fn response(response: Response) -> Self {
        Self {
            openrtb: Openrtb {
                ver: Some("3.0".to_string()),
                response: Some(response),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn body_request_constructor() {
        let body = Body::request(Request {
            id: Some("abc".into()),
            ..Default::default()
        });
        assert_eq!(
            encode(&body).unwrap(),
            br#"{"openrtb":{"ver":"3.0","request":{"id":"abc"}}}"#
        );
        assert_eq!(body.openrtb.domain_spec(), "adcom");
    }

    #[test]
    fn body_keeps_domain_objects_raw() {
        let json = r#"{"openrtb":{"ver":"3.0","domainspec":"adcom","domainver":"1.0","response":{"id":"r","seatbid":[{"bid":[{"item":"1","media":{"ad":{"display":{"adm":"<div/>"}}}}]}]}}}"#;
        let body: Body = decode_str(json).unwrap();
        let bid = body.openrtb.response.as_ref().unwrap().bids().next().unwrap();
        assert_eq!(
            bid.media.as_ref().unwrap().get(),
            r#"{"ad":{"display":{"adm":"<div/>"}}}"#
        );
        assert_eq!(encode(&body).unwrap(), json.as_bytes());
    }

    #[test]
    fn empty_body_writes_openrtb() {
        let body: Body = decode_str("{}").unwrap();
        assert_eq!(encode(&body).unwrap(), br#"{"openrtb":{}}"#);
    }
}
