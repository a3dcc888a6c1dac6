//! OpenRTB 3.0 code lists.

code_list! {
    /// Auction type (list 3.2.1 / `request.at`, `deal.at`).
    AuctionType {
        FIRST_PRICE = 1 => "First Price",
        SECOND_PRICE_PLUS = 2 => "Second Price Plus",
        /// Fixed price; for deals the deal floor is the agreed price.
        FIXED_PRICE = 3 => "Fixed Price",
    }
}

code_list! {
    /// Reason for not bidding (list 3.2.2 / `response.nbr`).
    NoBidReason {
        UNKNOWN_ERROR = 0 => "Unknown Error",
        TECHNICAL_ERROR = 1 => "Technical Error",
        INVALID_REQUEST = 2 => "Invalid Request",
        KNOWN_WEB_CRAWLER = 3 => "Known Web Crawler",
        SUSPECTED_NON_HUMAN_TRAFFIC = 4 => "Suspected Non-Human Traffic",
        CLOUD_DATA_CENTER_PROXY_IP = 5 => "Cloud, Data Center, or Proxy IP",
        UNSUPPORTED_DEVICE = 6 => "Unsupported Device",
        BLOCKED_PUBLISHER_OR_SITE = 7 => "Blocked Publisher or Site",
        UNMATCHED_USER = 8 => "Unmatched User",
        DAILY_USER_CAP_MET = 9 => "Daily User Cap Met",
        DAILY_DOMAIN_CAP_MET = 10 => "Daily Domain Cap Met",
        ADS_TXT_AUTHORIZATION_UNAVAILABLE = 11 => "Ads.txt Authorization Unavailable",
        ADS_TXT_AUTHORIZATION_VIOLATION = 12 => "Ads.txt Authorization Violation",
        ADS_CERT_AUTHENTICATION_UNAVAILABLE = 13 => "Ads.cert Authentication Unavailable",
        ADS_CERT_AUTHENTICATION_VIOLATION = 14 => "Ads.cert Authentication Violation",
        INSUFFICIENT_AUCTION_TIME = 15 => "Insufficient Auction Time",
        INCOMPLETE_SUPPLY_CHAIN = 16 => "Incomplete SupplyChain",
        BLOCKED_SUPPLY_CHAIN_NODE = 17 => "Blocked SupplyChain Node",
    }
}

code_list! {
    /// When the item's media must be delivered (`item.dlvy`).
    DeliveryMethod {
        EITHER = 0 => "Either method",
        IN_TRANSACTION = 1 => "Delivered with the transaction",
        IN_ADVANCE = 2 => "Delivered in advance of the transaction",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(AuctionType::SECOND_PRICE_PLUS.label(), Some("Second Price Plus"));
        assert_eq!(NoBidReason::UNMATCHED_USER.to_string(), "Unmatched User (8)");
        assert_eq!(DeliveryMethod(7).label(), None);
    }

    #[test]
    fn exchange_specific_reasons() {
        assert!(NoBidReason(500).is_exchange_specific());
        assert!(!NoBidReason::TECHNICAL_ERROR.is_exchange_specific());
    }
}
