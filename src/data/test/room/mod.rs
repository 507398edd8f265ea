use crate::{
    data::room::RoomRepository,
    error::AppError,
    model::room::{CreateRoomParam, RoomKind, RoomRef},
};
use sea_orm::EntityTrait;
use std::collections::BTreeSet;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_ref;
mod find_matching;
