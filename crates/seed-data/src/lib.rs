//! Fixture problems for the coding-problem platform.
//!
//! This crate holds a fixed set of programming exercises and the loader that
//! writes them to the platform database under an admin account.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let db = Database::new(pool);
//! let summary = Seeder::new(db).run(&fixtures::all()).await?;
//! ```

pub mod config;
pub mod db;
pub mod fixtures;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{AdminConfig, InsertMode, SeedConfig};
    pub use crate::db::{AdminAccount, SeedError, SeedSummary, Seeder};
    pub use crate::fixtures::{self, ProblemFixture};
    pub use problems::database::{Database, ProblemStore};
}
