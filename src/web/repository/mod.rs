//! Typed HTTP clients for the API's resources.
//!
//! `HttpRepository<T>` implements the CRUD verbs once for every resource
//! type; `AccountRepository` covers the two non-CRUD account endpoints.

pub mod account;
pub mod http;

use crate::model::{national_park::NationalParkDto, trail::TrailDto};
use http::Resource;

impl Resource for NationalParkDto {
    fn id(&self) -> i32 {
        self.id
    }
}

impl Resource for TrailDto {
    fn id(&self) -> i32 {
        self.id
    }
}
