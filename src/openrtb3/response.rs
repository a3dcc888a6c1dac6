//! OpenRTB 3.0 transaction layer: response side.

use serde::{Deserialize, Serialize};

use super::{DomainObject, NoBidReason};
use crate::ext::Ext;

/// Response object: a bidder's answer to a request, or a no-bid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Required. ID of the request this responds to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Bidder-generated response ID for logging and tracking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bidid: Option<String>,

    /// Reason for not bidding, if applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbr: Option<NoBidReason>,

    /// Bid currency, ISO-4217. Default "USD".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cur: Option<String>,

    /// Data the bidder asks the exchange to store (cookie-data in browsers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdata: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub seatbid: Option<Vec<Seatbid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Response {
    pub fn currency(&self) -> &str {
        self.cur.as_deref().unwrap_or("USD")
    }

    pub fn is_no_bid(&self) -> bool {
        self.nbr.is_some() || self.bids().next().is_none()
    }

    /// All bids across all seats, in document order.
    pub fn bids(&self) -> impl Iterator<Item = &Bid> {
        self.seatbid
            .iter()
            .flatten()
            .flat_map(|seat| seat.bid.iter().flatten())
    }
}

/// Seatbid object: bids made on behalf of one buyer seat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Seatbid {
    /// ID of the buyer seat on whose behalf the bids are made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,

    /// 1 if the bids must win or lose as a group. Default 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<i8>,

    /// Required. At least one bid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid: Option<Vec<Bid>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Bid object: an offer to buy one item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    /// Bidder-generated ID of the bid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Required. ID of the item this bid is for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,

    /// Required. Bid price in CPM, in the response currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// ID of the deal this bid is for, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal: Option<String>,

    /// Tactic ID, to aid reporting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tactic: Option<String>,

    /// Pending notice URL, called when the bid wins the auction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,

    /// Billing notice URL, called when the impression is billable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burl: Option<String>,

    /// Loss notice URL, called when the bid is known to have lost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lurl: Option<String>,

    /// Advisory seconds the bidder is willing to wait between auction and
    /// billing notice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// ID of previously transmitted media, to be used instead of `media`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<String>,

    /// Bidder-specific macros for substitution in the media markup.
    #[serde(rename = "macro", skip_serializing_if = "Option::is_none")]
    pub macros: Option<Vec<Macro>>,

    /// Domain-layer media object (the ad itself).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<DomainObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Macro object: a bidder-defined macro and its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Macro {
    /// Required. Name of the macro, e.g. `CPM` for `${CPM}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn bids_across_seats() {
        let resp: Response = decode_str(
            r#"{"id":"r","seatbid":[{"seat":"a","bid":[{"id":"1","item":"i","price":1.2}]},{"seat":"b","bid":[{"id":"2","item":"i","price":0.9},{"id":"3","item":"j","price":2.0}]}]}"#,
        )
        .unwrap();
        let ids: Vec<_> = resp.bids().filter_map(|b| b.id.as_deref()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(!resp.is_no_bid());
        assert_eq!(resp.currency(), "USD");
    }

    #[test]
    fn no_bid_response() {
        let resp: Response = decode_str(r#"{"id":"r","nbr":2}"#).unwrap();
        assert!(resp.is_no_bid());
        assert_eq!(resp.nbr, Some(NoBidReason::INVALID_REQUEST));
    }

    #[test]
    fn macro_field_name() {
        let json = r#"{"item":"i","macro":[{"key":"TIMESTAMP","value":"1127987134"}]}"#;
        let bid: Bid = decode_str(json).unwrap();
        assert_eq!(bid.macros.as_ref().unwrap()[0].key.as_deref(), Some("TIMESTAMP"));
        assert_eq!(encode(&bid).unwrap(), json.as_bytes());
    }
}
