use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::user_role::UserRoleRepository;

mod delete_by_user;
mod roles_of;
