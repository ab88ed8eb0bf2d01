//! Products and the tables tagging a product with colors, groups and print placements.

use async_trait::async_trait;
use chrono::Utc;
use entity::{color, group, print, printable_place, product, product_color, product_group};
use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    model::product::{
        UpsertPrintablePlaceDto, UpsertProductColorDto, UpsertProductDto, UpsertProductGroupDto,
    },
    server::{
        data::related::Embedder,
        error::AppError,
        model::{
            related::Embedded,
            resource::{common_column, common_columns, set, set_some, Resource},
        },
    },
};

impl Resource for product::Entity {
    type Entity = Self;
    type Model = product::Model;
    type ActiveModel = product::ActiveModel;
    type Column = product::Column;
    type Payload = UpsertProductDto;

    const NAME: &'static str = "Product";
    const REQUIRED: &'static [&'static str] = &["productCode"];

    common_columns!(product);

    fn column(field: &str) -> Option<product::Column> {
        Some(match field {
            "productCode" => product::Column::ProductCode,
            "quantityPO" => product::Column::QuantityPo,
            "dateInputNPL" => product::Column::DateInputNpl,
            "dateOutputFCR" => product::Column::DateOutputFcr,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertProductDto) -> product::ActiveModel {
        product::ActiveModel {
            product_code: set(dto.product_code),
            quantity_po: set_some(dto.quantity_po),
            date_input_npl: set_some(dto.date_input_npl),
            date_output_fcr: set_some(dto.date_output_fcr),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl Resource for product_color::Entity {
    type Entity = Self;
    type Model = product_color::Model;
    type ActiveModel = product_color::ActiveModel;
    type Column = product_color::Column;
    type Payload = UpsertProductColorDto;

    const NAME: &'static str = "Product color";
    const REQUIRED: &'static [&'static str] = &["productID", "colorID"];

    common_columns!(product_color);

    fn column(field: &str) -> Option<product_color::Column> {
        Some(match field {
            "productID" => product_color::Column::ProductId,
            "colorID" => product_color::Column::ColorId,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertProductColorDto) -> product_color::ActiveModel {
        product_color::ActiveModel {
            product_id: set(dto.product_id),
            color_id: set(dto.color_id),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    async fn embed(
        db: &DatabaseConnection,
        rows: Vec<product_color::Model>,
    ) -> Result<Vec<Embedded<product_color::Model>>, AppError> {
        Ok(Embedder::<Self>::new(rows)
            .attach::<product::Entity>(db, "product", |row| Some(row.product_id))
            .await?
            .attach::<color::Entity>(db, "color", |row| Some(row.color_id))
            .await?
            .into_rows())
    }
}

#[async_trait]
impl Resource for product_group::Entity {
    type Entity = Self;
    type Model = product_group::Model;
    type ActiveModel = product_group::ActiveModel;
    type Column = product_group::Column;
    type Payload = UpsertProductGroupDto;

    const NAME: &'static str = "Product group";
    const REQUIRED: &'static [&'static str] = &["productID", "groupID"];

    common_columns!(product_group);

    fn column(field: &str) -> Option<product_group::Column> {
        Some(match field {
            "productID" => product_group::Column::ProductId,
            "groupID" => product_group::Column::GroupId,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertProductGroupDto) -> product_group::ActiveModel {
        product_group::ActiveModel {
            product_id: set(dto.product_id),
            group_id: set(dto.group_id),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    async fn embed(
        db: &DatabaseConnection,
        rows: Vec<product_group::Model>,
    ) -> Result<Vec<Embedded<product_group::Model>>, AppError> {
        Ok(Embedder::<Self>::new(rows)
            .attach::<product::Entity>(db, "product", |row| Some(row.product_id))
            .await?
            .attach::<group::Entity>(db, "group", |row| Some(row.group_id))
            .await?
            .into_rows())
    }
}

#[async_trait]
impl Resource for printable_place::Entity {
    type Entity = Self;
    type Model = printable_place::Model;
    type ActiveModel = printable_place::ActiveModel;
    type Column = printable_place::Column;
    type Payload = UpsertPrintablePlaceDto;

    const NAME: &'static str = "Printable place";
    const REQUIRED: &'static [&'static str] = &["productID", "printID"];

    common_columns!(printable_place);

    fn column(field: &str) -> Option<printable_place::Column> {
        Some(match field {
            "productID" => printable_place::Column::ProductId,
            "printID" => printable_place::Column::PrintId,
            _ => return common_column::<Self>(field),
        })
    }

    fn into_changes(dto: UpsertPrintablePlaceDto) -> printable_place::ActiveModel {
        printable_place::ActiveModel {
            product_id: set(dto.product_id),
            print_id: set(dto.print_id),
            status: set(dto.status),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }

    async fn embed(
        db: &DatabaseConnection,
        rows: Vec<printable_place::Model>,
    ) -> Result<Vec<Embedded<printable_place::Model>>, AppError> {
        Ok(Embedder::<Self>::new(rows)
            .attach::<product::Entity>(db, "product", |row| Some(row.product_id))
            .await?
            .attach::<print::Entity>(db, "print", |row| Some(row.print_id))
            .await?
            .into_rows())
    }
}
