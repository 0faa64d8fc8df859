use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::model::trail::Difficulty;
use crate::server::{
    data::trail::TrailRepository,
    model::trail::{CreateTrailParams, UpdateTrailParams},
};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod get_in_national_park;
mod update;
