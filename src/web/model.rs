//! View models returned by the web tier.
//!
//! Page rendering lives client-side; these are the JSON shapes the pages and
//! their AJAX calls consume.

use serde::Serialize;

use crate::model::{national_park::NationalParkDto, trail::TrailDto};

/// Payload for the landing page: both catalogues, fetched concurrently.
#[derive(Debug, Serialize)]
pub struct IndexVm {
    pub national_park_list: Vec<NationalParkDto>,
    pub trail_list: Vec<TrailDto>,
}

/// Envelope for AJAX table listings.
#[derive(Debug, Serialize)]
pub struct TableDataVm<T> {
    pub data: Vec<T>,
}

/// Outcome of a JSON delete request.
#[derive(Debug, Serialize)]
pub struct DeleteResultVm {
    pub success: bool,
    pub message: String,
}
