//! OpenRTB 3.0 transaction layer: request side.

use serde::{Deserialize, Serialize};

use super::{AuctionType, DeliveryMethod, DomainObject};
use crate::ext::Ext;

/// Request object: the bid opportunity offered to a bidder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Required. Unique ID of this request within the supply chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// 1 for test mode (auctions are not billable). Default 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<i8>,

    /// Maximum time in milliseconds the exchange allows for bids to arrive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmax: Option<i64>,

    /// Auction type. Default 2 (second price plus).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<AuctionType>,

    /// Accepted currencies for bids, ISO-4217 alpha codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cur: Option<Vec<String>>,

    /// Restriction list of buyer seats, allow or block per `wseat`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat: Option<Vec<String>>,

    /// 1 if `seat` is an allow list, 0 if a block list. Default 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wseat: Option<i8>,

    /// Data the exchange stored for the bidder (cookie-data in browsers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdata: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,

    /// Required. Items (placements) offered, at least one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Vec<Item>>,

    /// 1 if all items are offered as a package (all or none). Default 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<i8>,

    /// Domain-layer context (site, app, device, user, regs, restrictions).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<DomainObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Request {
    pub fn auction_type(&self) -> AuctionType {
        self.at.unwrap_or(AuctionType::SECOND_PRICE_PLUS)
    }

    pub fn is_test(&self) -> bool {
        self.test == Some(1)
    }

    /// Whether `seat` lists allowed seats (the default) rather than blocked ones.
    pub fn seats_are_allow_list(&self) -> bool {
        self.wseat.unwrap_or(1) == 1
    }
}

/// Source object: the upstream source and its security signatures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Transaction ID common to all participants in this bid request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,

    /// Timestamp of the signature, Unix milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,

    /// Digital signature used to authenticate the request origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ds: Option<String>,

    /// Ordered, period-separated list of fields covered by `ds`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dsmap: Option<String>,

    /// File name of the signing certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,

    /// Raw digest string that was signed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,

    /// Payment ID chain string (TAG Payment ID Protocol).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pchain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Item object: a unit of goods being offered, typically an ad placement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Required. Unique within this request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Number of instances offered (e.g. identical DOOH screens). Default 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<i64>,

    /// Sequence number when several items are offered in one ad pod.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<i64>,

    /// Minimum bid price in CPM.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flr: Option<f64>,

    /// Currency of `flr`. Default "USD".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flrcur: Option<String>,

    /// Advisory seconds between auction and the actual impression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Timestamp (Unix ms) when the item is expected to be fulfilled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dt: Option<i64>,

    /// Delivery method for the item's media. Default 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dlvy: Option<DeliveryMethod>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<Vec<Metric>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal: Option<Vec<Deal>>,

    /// 1 if the item is only available through the listed deals. Default 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<i8>,

    /// Required. Domain-layer placement specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<DomainObject>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

impl Item {
    pub fn quantity(&self) -> i64 {
        self.qty.unwrap_or(1)
    }

    pub fn floor_currency(&self) -> &str {
        self.flrcur.as_deref().unwrap_or("USD")
    }

    pub fn is_private(&self) -> bool {
        self.private == Some(1)
    }
}

/// Deal object: terms of a specific deal between buyer and seller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    /// Required. Unique ID of the deal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Deal-specific minimum bid price in CPM.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flr: Option<f64>,

    /// Default "USD".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flrcur: Option<String>,

    /// Overrides the request-level auction type for this deal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at: Option<AuctionType>,

    /// Buyer seats allowed to bid on this deal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wseat: Option<Vec<String>>,

    /// Advertiser domains allowed to bid on this deal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wadomain: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}

/// Metric object: a quality metric for the item, e.g. expected viewability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Required. Type of metric, e.g. "viewability", "session_depth".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Required. Metric value, normally in `[0.0, 1.0]` for probabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Source of the value, "EXCHANGE" if it is the exchange itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<Ext>,
}
