pub mod prelude;

pub mod national_park;
pub mod trail;
pub mod user;
