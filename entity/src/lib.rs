//! SeaORM entities for the garment production tracker.
//!
//! One module per table. Models serialise to the camelCase JSON shape served by
//! the API (acronyms such as `productID` or `quantityPO` keep their casing), and
//! `user::Model` never serialises its credential columns.

pub mod prelude;
pub mod sea_orm_active_enums;

pub mod accessory_note;
pub mod color;
pub mod completion;
pub mod cutting_group;
pub mod garment_accessory;
pub mod garment_accessory_note;
pub mod group;
pub mod importation;
pub mod print;
pub mod printable_place;
pub mod product;
pub mod product_color;
pub mod product_group;
pub mod role;
pub mod sample_sewing;
pub mod sewing_line;
pub mod sewing_line_delivery;
pub mod user;
pub mod user_role;
