//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: REST endpoints for the garment
//! production records, authentication, data access and infrastructure. The
//! backend uses Axum as the web framework and SeaORM over SQLite for storage.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, role guards and envelope replies
//! - **Service Layer** (`service/`) - Validation, upsert and sync rules, auth, tokens and mail
//! - **Data Layer** (`data/`) - Generic CRUD repository plus user specific queries
//! - **Model Layer** (`model/`) - The `Resource` binding of each table and the list query builder
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer authentication and request extractors
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token service, mailer)
//! - **Startup** (`startup`) - Database connection, administrator seed, HTTP client and CORS
//! - **Router** (`router`) - Route table and OpenAPI documentation
//! - **Utilities** (`util/`) - Password hashing and one-time password generation
//!
//! # Request Flow
//!
//! 1. **Router** matches the path; protected routes pass through `require_auth`
//! 2. **Controller** extracts the body and path, checks roles, calls the service
//! 3. **Service** validates and orchestrates repository calls
//! 4. **Data** builds and runs the SeaORM queries
//! 5. **Controller** wraps the result in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
