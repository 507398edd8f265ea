use crate::{data::booking_lock::BookingLockRepository, model::room::RoomRef};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod acquire;
