//! Any supported top-level document, selected by kind and version.

use crate::codec::{self, encode, encode_pretty};
use crate::error::{DecodeError, EncodeError, FixtureError};
use crate::native1::{request, response};
use crate::openrtb3;
use crate::types::{DocumentKind, SpecVersion};

/// A decoded document of any kind and version.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    RequestV1_0(request::v1_0::Request),
    RequestV1_1(request::v1_1::Request),
    RequestV1_2Draft(request::v1_2_draft::Request),
    RequestV1_2(request::v1_2::Request),
    ResponseV1_0(response::v1_0::Response),
    ResponseV1_1(response::v1_1::Response),
    ResponseV1_2Draft(response::v1_2_draft::Response),
    ResponseV1_2(response::v1_2::Response),
    Body(openrtb3::Body),
}

impl Document {
    /// Decode `bytes` as the schema for `kind` at `version`.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::UnsupportedVersion` if `version` has no document of
    /// that kind, or `FixtureError::Decode` if the bytes do not decode.
    pub fn decode(
        kind: DocumentKind,
        version: SpecVersion,
        bytes: &[u8],
    ) -> Result<Self, FixtureError> {
        use DocumentKind as K;
        use SpecVersion as V;

        let decoded: Result<Self, DecodeError> = match (kind, version) {
            (K::Request, V::V1_0) => codec::decode(bytes).map(Document::RequestV1_0),
            (K::Request, V::V1_1) => codec::decode(bytes).map(Document::RequestV1_1),
            (K::Request, V::V1_2Draft) => codec::decode(bytes).map(Document::RequestV1_2Draft),
            (K::Request, V::V1_2) => codec::decode(bytes).map(Document::RequestV1_2),
            (K::Response, V::V1_0) => codec::decode(bytes).map(Document::ResponseV1_0),
            (K::Response, V::V1_1) => codec::decode(bytes).map(Document::ResponseV1_1),
            (K::Response, V::V1_2Draft) => codec::decode(bytes).map(Document::ResponseV1_2Draft),
            (K::Response, V::V1_2) => codec::decode(bytes).map(Document::ResponseV1_2),
            (K::Body, V::V3) => codec::decode(bytes).map(Document::Body),
            (kind, version) => return Err(FixtureError::UnsupportedVersion { kind, version }),
        };
        Ok(decoded?)
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::RequestV1_0(_)
            | Document::RequestV1_1(_)
            | Document::RequestV1_2Draft(_)
            | Document::RequestV1_2(_) => DocumentKind::Request,
            Document::ResponseV1_0(_)
            | Document::ResponseV1_1(_)
            | Document::ResponseV1_2Draft(_)
            | Document::ResponseV1_2(_) => DocumentKind::Response,
            Document::Body(_) => DocumentKind::Body,
        }
    }

    pub fn version(&self) -> SpecVersion {
        match self {
            Document::RequestV1_0(_) | Document::ResponseV1_0(_) => SpecVersion::V1_0,
            Document::RequestV1_1(_) | Document::ResponseV1_1(_) => SpecVersion::V1_1,
            Document::RequestV1_2Draft(_) | Document::ResponseV1_2Draft(_) => {
                SpecVersion::V1_2Draft
            }
            Document::RequestV1_2(_) | Document::ResponseV1_2(_) => SpecVersion::V1_2,
            Document::Body(_) => SpecVersion::V3,
        }
    }

    /// Encode as compact JSON.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        match self {
            Document::RequestV1_0(v) => encode(v),
            Document::RequestV1_1(v) => encode(v),
            Document::RequestV1_2Draft(v) => encode(v),
            Document::RequestV1_2(v) => encode(v),
            Document::ResponseV1_0(v) => encode(v),
            Document::ResponseV1_1(v) => encode(v),
            Document::ResponseV1_2Draft(v) => encode(v),
            Document::ResponseV1_2(v) => encode(v),
            Document::Body(v) => encode(v),
        }
    }

    /// Encode as indented JSON.
    pub fn encode_pretty(&self) -> Result<Vec<u8>, EncodeError> {
        match self {
            Document::RequestV1_0(v) => encode_pretty(v),
            Document::RequestV1_1(v) => encode_pretty(v),
            Document::RequestV1_2Draft(v) => encode_pretty(v),
            Document::RequestV1_2(v) => encode_pretty(v),
            Document::ResponseV1_0(v) => encode_pretty(v),
            Document::ResponseV1_1(v) => encode_pretty(v),
            Document::ResponseV1_2Draft(v) => encode_pretty(v),
            Document::ResponseV1_2(v) => encode_pretty(v),
            Document::Body(v) => encode_pretty(v),
        }
    }
}
