use sea_orm::entity::prelude::*;
use serde::Serialize;

use crate::sea_orm_active_enums::ItemStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "sample_sewing")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(rename = "productID")]
    pub product_id: i32,
    #[serde(rename = "dateSubmissionNPL")]
    pub date_submission_npl: Option<DateTimeUtc>,
    #[serde(rename = "dateApprovalSO")]
    pub date_approval_so: Option<DateTimeUtc>,
    #[serde(rename = "dateApprovalPP")]
    pub date_approval_pp: Option<DateTimeUtc>,
    pub date_submission_first_time: Option<DateTimeUtc>,
    pub date_submission_second_time: Option<DateTimeUtc>,
    pub date_submission_third_time: Option<DateTimeUtc>,
    #[serde(rename = "dateSubmissionForthTime")]
    pub date_submission_fourth_time: Option<DateTimeUtc>,
    pub date_submission_fifth_time: Option<DateTimeUtc>,
    pub status: ItemStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
