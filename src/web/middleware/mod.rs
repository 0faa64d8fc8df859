//! Session-based access guards applied inside controllers.

pub mod auth;
