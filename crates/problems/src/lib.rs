//! Domain models and persistence for the coding-problem platform.
//!
//! [`database::ProblemStore`] is the seam the seeder talks to;
//! [`database::Database`] implements it on PostgreSQL.

pub mod auth;
pub mod database;
pub mod errors;
pub mod models;
