use crate::{
    data::notification::NotificationRepository, model::notification::NotificationIcon,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
