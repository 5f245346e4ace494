//! Database integration for seeding fixture problems.
//!
//! The [`Seeder`] ensures an admin account exists and inserts the fixtures
//! through any [`problems::database::ProblemStore`].

mod seeder;

pub use seeder::{AdminAccount, PLACEHOLDER_PASSWORD_HASH, SeedError, SeedSummary, Seeder};
