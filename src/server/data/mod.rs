//! Database repository layer.
//!
//! `CrudRepository` implements the table operations shared by every resource on top
//! of the `Resource` trait. The user and user-role repositories add the lookups the
//! authentication flow needs, and `related` batch-loads the rows embedded in read
//! responses. Repositories return SeaORM models and `DbErr`; turning missing rows
//! into HTTP errors is left to the service layer.

pub mod crud;
pub mod related;
pub mod user;
pub mod user_role;

#[cfg(test)]
mod test;
