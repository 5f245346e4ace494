use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "difficulty", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    User,
}

/// Competitive tier shown next to a user's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "league", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum League {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// Languages the platform offers starter code and examples for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    JavaScript,
    Python,
    Java,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub league: League,
    pub created_at: OffsetDateTime,
}

/// Fields needed to create a user. `password` is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: UserRole,
    pub league: League,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: String,
    pub output: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSolution {
    pub language: Language,
    pub code: String,
}

/// A problem as stored, without the large JSON columns.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Problem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub difficulty: Difficulty,
    pub created_at: OffsetDateTime,
}

/// Insert payload for a problem. Map-shaped columns keep a stable key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProblem {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub companies: Vec<String>,
    pub constraints: String,
    pub hints: Option<String>,
    pub editorial: Option<String>,
    pub testcases: Vec<TestCase>,
    pub examples: std::collections::BTreeMap<Language, Example>,
    pub code_snippets: std::collections::BTreeMap<Language, String>,
    pub reference_solutions: Vec<ReferenceSolution>,
}
