//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that need a parent row (a product, a user)
//! take its id as an argument so tests stay explicit about foreign keys.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let product = factory::create_product(&db).await?;
//!     let line = factory::create_sewing_line(&db).await?;
//!     let delivery = factory::create_delivery(&db, product.id, line.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let product = factory::product::ProductFactory::new(&db)
//!     .product_code("PO-0042")
//!     .quantity_po(1200.0)
//!     .status(ItemStatus::Inactive)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `product` - Create product entities
//! - `color` - Create color entities
//! - `sewing_line` - Create sewing line entities
//! - `accessory_note` - Create accessory note entities
//! - `role` - Create role entities
//! - `user` - Create user entities
//! - `user_role` - Create user-role relationship entities
//! - `sewing_line_delivery` - Create sewing line delivery entities
//! - `garment_accessory_note` - Create garment accessory note entities
//! - `helpers` - Shared id counter and multi-entity shortcuts

pub mod accessory_note;
pub mod color;
pub mod garment_accessory_note;
pub mod helpers;
pub mod product;
pub mod role;
pub mod sewing_line;
pub mod sewing_line_delivery;
pub mod user;
pub mod user_role;

// Re-export commonly used factory functions for concise usage
pub use accessory_note::create_accessory_note;
pub use color::create_color;
pub use garment_accessory_note::create_garment_accessory_note;
pub use product::create_product;
pub use role::{create_admin_role, create_role};
pub use sewing_line::create_sewing_line;
pub use sewing_line_delivery::create_delivery;
pub use user::create_user;
pub use user_role::create_user_role;
