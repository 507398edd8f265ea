use crate::{
    data::reservation::ReservationRepository,
    error::AppError,
    model::{
        reservation::{ReservationDetails, ReservationStatus},
        room::RoomRef,
        time_range::TimeRange,
    },
};
use chrono::NaiveDate;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory, factory::reservation::ReservationFactory};

mod create;
mod find_active_by_room_and_date;
mod find_by_status;
mod find_by_user;
mod transition_status;
mod update_details;

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}
