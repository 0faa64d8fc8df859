//! Page and AJAX handlers for the web tier.

pub mod home;
pub mod national_park;
