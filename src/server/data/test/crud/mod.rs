use entity::{product, sea_orm_active_enums::ItemStatus, sewing_line_delivery};
use sea_orm::{ActiveValue, DbErr, EntityTrait, PaginatorTrait, SqlErr, Value};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        product::UpsertProductDto,
        production::UpsertSewingLineDeliveryDto,
        query::{FindRequest, PaginatorDto},
    },
    server::{
        data::crud::CrudRepository,
        model::{query::FindQuery, resource::Resource},
    },
};

mod create;
mod create_many;
mod delete_by;
mod find;
mod sync_by;
mod update_by;

fn new_product(code: &str) -> product::ActiveModel {
    product::Entity::into_new(UpsertProductDto {
        product_code: Some(code.to_string()),
        ..Default::default()
    })
}

fn delivery_changes(sewing_line_id: i32, quantity_sewed: f64) -> sewing_line_delivery::ActiveModel {
    sewing_line_delivery::Entity::into_changes(UpsertSewingLineDeliveryDto {
        sewing_line_id: Some(sewing_line_id),
        quantity_sewed: Some(quantity_sewed),
        ..Default::default()
    })
}
