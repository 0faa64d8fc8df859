//! Parky: a national park and trail catalogue.
//!
//! The crate ships two tiers that run as separate binaries:
//!
//! - `server` - the REST API backend exposing national parks, trails, and
//!   user authentication over HTTP with JWT bearer tokens
//! - `web` - the browser-facing site that consumes the API over HTTP and
//!   keeps visitor identity in server-side sessions
//!
//! The `model` module holds the wire DTOs shared by both tiers: the API
//! serializes them in responses and the web tier deserializes the same
//! shapes from API responses.

pub mod model;
pub mod server;
pub mod web;
