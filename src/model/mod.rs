//! Wire types shared by every endpoint: the response envelope, the list query
//! body and the per-resource request bodies.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod product;
pub mod production;
pub mod query;
pub mod user;
