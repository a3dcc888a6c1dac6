//! OpenRTB Schema
//!
//! Typed JSON models for OpenRTB Native Ads 1.0, 1.1, 1.2 (and the 1.2
//! public-comment draft) plus the OpenRTB 3.0 body envelope.
//!
//! Every model round-trips: decoding a document and encoding it again yields
//! the same JSON, field for field. Fields a document leaves out stay out,
//! unknown fields are dropped, and `ext` objects are passed through untouched.
//!
//! # Example
//!
//! ```
//! use openrtb_schema::native1::request::v1_2::Request;
//! use openrtb_schema::{decode, encode};
//!
//! let json = r#"{"ver":"1.2","plcmtcnt":1,"assets":[{"id":1,"required":1,"title":{"len":90}}]}"#;
//!
//! let request: Request = decode(json.as_bytes()).unwrap();
//! assert_eq!(request.placement_count(), 1);
//! assert!(request.assets[0].is_required());
//!
//! // Nothing is added or lost on the way back out
//! assert_eq!(encode(&request).unwrap(), json.as_bytes());
//! ```
//!
//! # Versions
//!
//! | Version | Request | Response |
//! |---------|---------|----------|
//! | 1.0 | [`native1::request::v1_0`] | [`native1::response::v1_0`] |
//! | 1.1 | [`native1::request::v1_1`] | [`native1::response::v1_1`] |
//! | 1.2-draft | [`native1::request::v1_2_draft`] | [`native1::response::v1_2_draft`] |
//! | 1.2 | [`native1::request::v1_2`] | [`native1::response::v1_2`] |
//! | 3.0 | [`openrtb3::Body`] | [`openrtb3::Body`] |
//!
//! When the kind or version of a document is only known at runtime, use
//! [`Document::decode`] or [`round_trip_document`].

#[macro_use]
mod macros;

mod codec;
mod compare;
mod conformance;
mod document;
mod error;
mod ext;
mod loader;
mod types;

pub mod native1;
pub mod openrtb3;

pub use codec::{decode, decode_str, encode, encode_pretty, round_trip};
pub use compare::{first_difference, json_eq};
pub use conformance::{
    check, check_file, round_trip_document, CheckOptions, CheckResult, Diagnostic, FileResult,
    FileStatus, RoundTrip, Severity,
};
pub use document::Document;
pub use error::{DecodeError, EncodeError, FixtureError, JsonDifference};
pub use ext::Ext;
pub use loader::{load_value, load_value_str, parse_value, read_document};
pub use macros::EXCHANGE_SPECIFIC_MIN;
pub use types::{
    declared_ver, detect_kind, detect_version, unwrap_native, DocumentKind, SpecVersion,
    NATIVE_WRAPPER_KEY, OPENRTB_ROOT_KEY,
};
