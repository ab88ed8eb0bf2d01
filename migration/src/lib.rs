pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_product_table;
mod m20251020_000002_create_color_table;
mod m20251020_000003_create_group_table;
mod m20251020_000004_create_print_table;
mod m20251020_000005_create_sewing_line_table;
mod m20251020_000006_create_accessory_note_table;
mod m20251020_000007_create_role_table;
mod m20251020_000008_create_user_table;
mod m20251020_000009_create_user_role_table;
mod m20251020_000010_create_product_color_table;
mod m20251020_000011_create_product_group_table;
mod m20251020_000012_create_printable_place_table;
mod m20251020_000013_create_importation_table;
mod m20251020_000014_create_sample_sewing_table;
mod m20251020_000015_create_cutting_group_table;
mod m20251020_000016_create_sewing_line_delivery_table;
mod m20251020_000017_create_garment_accessory_table;
mod m20251020_000018_create_garment_accessory_note_table;
mod m20251020_000019_create_completion_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_product_table::Migration),
            Box::new(m20251020_000002_create_color_table::Migration),
            Box::new(m20251020_000003_create_group_table::Migration),
            Box::new(m20251020_000004_create_print_table::Migration),
            Box::new(m20251020_000005_create_sewing_line_table::Migration),
            Box::new(m20251020_000006_create_accessory_note_table::Migration),
            Box::new(m20251020_000007_create_role_table::Migration),
            Box::new(m20251020_000008_create_user_table::Migration),
            Box::new(m20251020_000009_create_user_role_table::Migration),
            Box::new(m20251020_000010_create_product_color_table::Migration),
            Box::new(m20251020_000011_create_product_group_table::Migration),
            Box::new(m20251020_000012_create_printable_place_table::Migration),
            Box::new(m20251020_000013_create_importation_table::Migration),
            Box::new(m20251020_000014_create_sample_sewing_table::Migration),
            Box::new(m20251020_000015_create_cutting_group_table::Migration),
            Box::new(m20251020_000016_create_sewing_line_delivery_table::Migration),
            Box::new(m20251020_000017_create_garment_accessory_table::Migration),
            Box::new(m20251020_000018_create_garment_accessory_note_table::Migration),
            Box::new(m20251020_000019_create_completion_table::Migration),
        ]
    }
}
