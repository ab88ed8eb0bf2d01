//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They check request members against what a table requires, turn
//! empty results into not-found errors and coordinate the repositories with
//! token signing and outgoing mail.

pub mod auth;
pub mod mail;
pub mod resource;
pub mod token;
pub mod user;
