//! Database fixtures for the garment tracker's tests.
//!
//! Every test gets its own in-memory SQLite database. [`builder::TestBuilder`]
//! picks the tables; `with_user_tables` and `with_product_tables` cover the two
//! groups most tests need, created parents first so foreign keys resolve. The
//! [`factory`] module then inserts products, lines, deliveries, users and roles
//! with unique default codes and names, so a test only spells out the columns
//! it asserts on.
//!
//! ```rust,ignore
//! let test = TestBuilder::new().with_product_tables().build().await.unwrap();
//! let db = test.db.as_ref().unwrap();
//!
//! let product = factory::create_product(db).await?;
//! let line = factory::create_sewing_line(db).await?;
//! factory::create_delivery(db, product.id, line.id).await?;
//! ```
//!
//! Setup failures surface as [`error::TestError`].

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
