use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::national_park::NationalParkRepository,
    model::national_park::{CreateNationalParkParams, UpdateNationalParkParams},
};

mod create;
mod delete;
mod exists;
mod get_all;
mod get_by_id;
mod update;
