pub use super::accessory_note::Entity as AccessoryNote;
pub use super::color::Entity as Color;
pub use super::completion::Entity as Completion;
pub use super::cutting_group::Entity as CuttingGroup;
pub use super::garment_accessory::Entity as GarmentAccessory;
pub use super::garment_accessory_note::Entity as GarmentAccessoryNote;
pub use super::group::Entity as Group;
pub use super::importation::Entity as Importation;
pub use super::print::Entity as Print;
pub use super::printable_place::Entity as PrintablePlace;
pub use super::product::Entity as Product;
pub use super::product_color::Entity as ProductColor;
pub use super::product_group::Entity as ProductGroup;
pub use super::role::Entity as Role;
pub use super::sample_sewing::Entity as SampleSewing;
pub use super::sewing_line::Entity as SewingLine;
pub use super::sewing_line_delivery::Entity as SewingLineDelivery;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
