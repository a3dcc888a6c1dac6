//! OpenRTB Native Ads 1.x.
//!
//! Request and response documents live in per-version modules under
//! [`request`] and [`response`]. The versions share no base type: each one is
//! its own set of records so that a field a version does not define can never
//! be written for it.

mod codes;
pub mod request;
pub mod response;

use serde::{Deserialize, Serialize};

pub use codes::{
    AdUnit, ContextSubtype, ContextType, DataAssetType, EventTrackingMethod, EventType,
    ImageAssetType, Layout, PlacementType, Protocol,
};

/// Legacy root node of a native document.
///
/// Before 1.1 the Native standard could be read as requiring the request or response to
/// sit under a single `native` key. From 1.1 on the object itself is the root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wrapped<T> {
    pub native: T,
}

impl<T> Wrapped<T> {
    pub fn new(native: T) -> Self {
        Self { native }
    }

    pub fn into_inner(self) -> T {
        self.native
    }
}
