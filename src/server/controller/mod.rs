//! HTTP request handlers for the API.
//!
//! Controllers validate access, convert DTOs into parameter models, call the
//! service layer, and translate results back into HTTP responses. Payloads
//! that fail to deserialize are rejected here with 400 Bad Request before
//! any service code runs.

pub mod national_park;
pub mod trail;
pub mod user;
