use async_trait::async_trait;
use sqlx::{PgPool, types::Json};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{NewProblem, NewUser, Problem, User, UserRole};

/// Storage operations the seeder needs from the platform database.
#[async_trait]
pub trait ProblemStore: Send + Sync {
    /// Returns the first user holding `role`, if any.
    async fn find_user_by_role(&self, role: UserRole) -> Result<Option<User>, AppError>;

    async fn create_user(&self, user: &NewUser) -> Result<User, AppError>;

    async fn create_problem(&self, problem: &NewProblem, user_id: Uuid)
    -> Result<Problem, AppError>;

    /// Returns the oldest problem with this exact title, if any.
    async fn find_problem_by_title(&self, title: &str) -> Result<Option<Problem>, AppError>;

    /// Releases the underlying connection(s). Called once per run.
    async fn close(&self);
}

/// Applies the embedded schema migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Migrations applied");
    Ok(())
}

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn count_users_by_role(&self, role: UserRole) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = $1")
            .bind(role)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_user_problems(&self, user_id: Uuid) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM problems WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ProblemStore for Database {
    async fn find_user_by_role(&self, role: UserRole) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as(
            r#"
            SELECT id, email, name, role, league, created_at
            FROM users
            WHERE role = $1
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(role)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, AppError> {
        let created = sqlx::query_as(
            r#"
            INSERT INTO users (id, email, name, password, role, league, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING id, email, name, role, league, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password)
        .bind(user.role)
        .bind(user.league)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn create_problem(
        &self,
        problem: &NewProblem,
        user_id: Uuid,
    ) -> Result<Problem, AppError> {
        let created = sqlx::query_as(
            r#"
            INSERT INTO problems (
                id, user_id, title, description, difficulty,
                tags, companies, constraints, hints, editorial,
                testcases, examples, code_snippets, reference_solutions,
                created_at
            )
            VALUES (
                $1, $2, $3, $4, $5,
                $6, $7, $8, $9, $10,
                $11, $12, $13, $14,
                NOW()
            )
            RETURNING id, user_id, title, difficulty, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&problem.title)
        .bind(&problem.description)
        .bind(problem.difficulty)
        .bind(&problem.tags)
        .bind(&problem.companies)
        .bind(&problem.constraints)
        .bind(&problem.hints)
        .bind(&problem.editorial)
        .bind(Json(&problem.testcases))
        .bind(Json(&problem.examples))
        .bind(Json(&problem.code_snippets))
        .bind(Json(&problem.reference_solutions))
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn find_problem_by_title(&self, title: &str) -> Result<Option<Problem>, AppError> {
        let problem = sqlx::query_as(
            r#"
            SELECT id, user_id, title, difficulty, created_at
            FROM problems
            WHERE title = $1
            ORDER BY created_at
            LIMIT 1
            "#,
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(problem)
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }
}
