//! Repository tests running against an in-memory SQLite database.

mod national_park;
mod trail;
mod user;
