//! Wire DTOs shared between the API and the web client.
//!
//! These types define the JSON shapes exchanged over HTTP. The API converts
//! domain models into DTOs at the controller boundary; the web tier
//! deserializes the same DTOs from API responses and posts them back when
//! creating or updating records.

pub mod api;
pub mod national_park;
pub mod trail;
pub mod user;
