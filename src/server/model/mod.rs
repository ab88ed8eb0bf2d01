//! Server-side resource definitions and query parameters.
//!
//! Each table exposed over the API implements [`resource::Resource`], which binds the
//! SeaORM entity to its request body and JSON field whitelist. The repository,
//! service and controller layers are written once against that trait. The `query`
//! module turns a list request into a typed SeaORM condition for a resource.

pub mod catalog;
pub mod product;
pub mod production;
pub mod query;
pub mod related;
pub mod resource;
pub mod user;
