use entity::sea_orm_active_enums::ItemStatus;
use sea_orm::{DbErr, EntityTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::user::UserRepository;

mod count;
mod find_active_by_id;
mod find_by_email;
mod set_otp;
