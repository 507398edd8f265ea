use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, Role},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod find_by_id;
mod get_all_admins;
