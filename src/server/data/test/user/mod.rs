use entity::prelude::User as UserEntity;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::user::UserRepository;

mod create;
mod find_by_username;
mod is_unique_username;
