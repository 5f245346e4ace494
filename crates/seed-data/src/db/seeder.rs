//! Loader that writes the fixture set through a [`ProblemStore`].

use thiserror::Error;
use tracing::{debug, error, info};
use uuid::Uuid;

use problems::auth::hash_password;
use problems::database::ProblemStore;
use problems::errors::AppError;
use problems::models::{League, NewUser, User, UserRole};

use crate::config::{AdminConfig, InsertMode};
use crate::fixtures::ProblemFixture;

/// Stored when no admin password is configured. Not a usable credential.
pub const PLACEHOLDER_PASSWORD_HASH: &str =
    "$2b$10$placeholderplaceholderplaceholderplaceholderplacehold";

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Seeding failed: {0}")]
    Store(#[from] AppError),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// The admin the problems are attributed to.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub user: User,
    /// True when this run created the account.
    pub created: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub admin_id: Uuid,
    pub admin_created: bool,
    pub inserted: usize,
    pub skipped: usize,
}

/// Seeds fixture problems into a store, owned by a single admin.
pub struct Seeder<S> {
    store: S,
    admin: AdminConfig,
    insert_mode: InsertMode,
}

impl<S: ProblemStore> Seeder<S> {
    /// Creates a seeder with the default admin and [`InsertMode::Append`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            admin: AdminConfig::default(),
            insert_mode: InsertMode::default(),
        }
    }

    /// Sets the fields used if the admin has to be created.
    pub fn with_admin(mut self, admin: AdminConfig) -> Self {
        self.admin = admin;
        self
    }

    pub fn with_insert_mode(mut self, mode: InsertMode) -> Self {
        self.insert_mode = mode;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the existing admin, or creates one.
    ///
    /// If several admins exist, whichever the store returns first is used.
    pub async fn ensure_admin(&self) -> Result<AdminAccount, SeedError> {
        if let Some(user) = self.store.find_user_by_role(UserRole::Admin).await? {
            info!("Using existing admin {} ({})", user.email, user.id);
            return Ok(AdminAccount {
                user,
                created: false,
            });
        }

        let password = match &self.admin.password {
            Some(plain) => hash_password(plain)?,
            None => PLACEHOLDER_PASSWORD_HASH.to_string(),
        };

        let user = self
            .store
            .create_user(&NewUser {
                email: self.admin.email.clone(),
                name: self.admin.name.clone(),
                password,
                role: UserRole::Admin,
                league: League::Bronze,
            })
            .await?;

        info!("Created admin {} ({})", user.email, user.id);
        Ok(AdminAccount {
            user,
            created: true,
        })
    }

    /// Seeds `fixtures` in order, then closes the store.
    ///
    /// The first store error stops the run. Problems inserted before it stay
    /// in the database. The store is closed exactly once either way.
    pub async fn run(&self, fixtures: &[&ProblemFixture]) -> Result<SeedSummary, SeedError> {
        let result = self.seed_all(fixtures).await;

        self.store.close().await;

        match &result {
            Ok(summary) => info!(
                "Seeded {} problems ({} skipped) for admin {}",
                summary.inserted, summary.skipped, summary.admin_id
            ),
            Err(e) => error!("{e}"),
        }

        result
    }

    async fn seed_all(&self, fixtures: &[&ProblemFixture]) -> Result<SeedSummary, SeedError> {
        let admin = self.ensure_admin().await?;

        let mut summary = SeedSummary {
            admin_id: admin.user.id,
            admin_created: admin.created,
            inserted: 0,
            skipped: 0,
        };

        info!("Seeding {} problems...", fixtures.len());

        for (i, fixture) in fixtures.iter().enumerate() {
            if self.insert_mode == InsertMode::SkipExisting
                && self
                    .store
                    .find_problem_by_title(fixture.title)
                    .await?
                    .is_some()
            {
                debug!("Skipping '{}', already stored", fixture.title);
                summary.skipped += 1;
                continue;
            }

            let problem = self
                .store
                .create_problem(&fixture.to_new_problem(), admin.user.id)
                .await?;
            summary.inserted += 1;

            info!(
                "  Created problem '{}' ({}) [{}/{}]",
                problem.title,
                problem.id,
                i + 1,
                fixtures.len()
            );
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use problems::auth::verify_password;
    use problems::models::{NewProblem, Problem};
    use std::sync::{Arc, Mutex};
    use time::OffsetDateTime;

    use crate::fixtures;

    #[derive(Default)]
    struct State {
        users: Vec<(User, String)>,
        problems: Vec<Problem>,
        insert_attempts: usize,
        close_calls: usize,
    }

    /// Store calls that can be made to fail on every invocation.
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Call {
        FindUserByRole,
        CreateUser,
        FindProblemByTitle,
    }

    /// In-memory store. Clones share state so several runs can be observed.
    #[derive(Clone, Default)]
    struct MemoryStore {
        state: Arc<Mutex<State>>,
        /// 1-based insert attempt that fails.
        fail_on_insert: Option<usize>,
        failing_call: Option<Call>,
    }

    impl MemoryStore {
        fn failing_on(n: usize) -> Self {
            Self {
                fail_on_insert: Some(n),
                ..Self::default()
            }
        }

        fn failing_call(call: Call) -> Self {
            Self {
                failing_call: Some(call),
                ..Self::default()
            }
        }

        fn check(&self, call: Call) -> Result<(), AppError> {
            if self.failing_call == Some(call) {
                return Err(AppError::Database(sqlx::Error::PoolTimedOut));
            }
            Ok(())
        }

        fn with_admin(email: &str) -> (Self, Uuid) {
            let store = Self::default();
            let id = Uuid::new_v4();
            store.state.lock().unwrap().users.push((
                User {
                    id,
                    email: email.to_string(),
                    name: "Existing".to_string(),
                    role: UserRole::Admin,
                    league: League::Gold,
                    created_at: OffsetDateTime::now_utc(),
                },
                "hash".to_string(),
            ));
            (store, id)
        }

        fn admin_count(&self) -> usize {
            self.state
                .lock()
                .unwrap()
                .users
                .iter()
                .filter(|(u, _)| u.role == UserRole::Admin)
                .count()
        }

        fn problem_count(&self) -> usize {
            self.state.lock().unwrap().problems.len()
        }

        fn close_calls(&self) -> usize {
            self.state.lock().unwrap().close_calls
        }
    }

    #[async_trait]
    impl ProblemStore for MemoryStore {
        async fn find_user_by_role(&self, role: UserRole) -> Result<Option<User>, AppError> {
            self.check(Call::FindUserByRole)?;
            let state = self.state.lock().unwrap();
            Ok(state
                .users
                .iter()
                .find(|(u, _)| u.role == role)
                .map(|(u, _)| u.clone()))
        }

        async fn create_user(&self, user: &NewUser) -> Result<User, AppError> {
            self.check(Call::CreateUser)?;
            let created = User {
                id: Uuid::new_v4(),
                email: user.email.clone(),
                name: user.name.clone(),
                role: user.role,
                league: user.league,
                created_at: OffsetDateTime::now_utc(),
            };
            self.state
                .lock()
                .unwrap()
                .users
                .push((created.clone(), user.password.clone()));
            Ok(created)
        }

        async fn create_problem(
            &self,
            problem: &NewProblem,
            user_id: Uuid,
        ) -> Result<Problem, AppError> {
            let mut state = self.state.lock().unwrap();
            state.insert_attempts += 1;
            if self.fail_on_insert == Some(state.insert_attempts) {
                return Err(AppError::Database(sqlx::Error::PoolClosed));
            }

            let created = Problem {
                id: Uuid::new_v4(),
                user_id,
                title: problem.title.clone(),
                difficulty: problem.difficulty,
                created_at: OffsetDateTime::now_utc(),
            };
            state.problems.push(created.clone());
            Ok(created)
        }

        async fn find_problem_by_title(&self, title: &str) -> Result<Option<Problem>, AppError> {
            self.check(Call::FindProblemByTitle)?;
            let state = self.state.lock().unwrap();
            Ok(state.problems.iter().find(|p| p.title == title).cloned())
        }

        async fn close(&self) {
            self.state.lock().unwrap().close_calls += 1;
        }
    }

    #[tokio::test]
    async fn test_run_on_empty_store() {
        let store = MemoryStore::default();
        let fixtures = fixtures::all();

        let summary = Seeder::new(store.clone()).run(&fixtures).await.unwrap();

        assert!(summary.admin_created);
        assert_eq!(summary.inserted, 25);
        assert_eq!(summary.skipped, 0);
        assert_eq!(store.admin_count(), 1);
        assert_eq!(store.problem_count(), 25);
        assert_eq!(store.close_calls(), 1);
    }

    #[tokio::test]
    async fn test_second_run_reuses_admin_but_duplicates_problems() {
        let store = MemoryStore::default();
        let fixtures = fixtures::all();

        let first = Seeder::new(store.clone()).run(&fixtures).await.unwrap();
        let second = Seeder::new(store.clone()).run(&fixtures).await.unwrap();

        assert!(first.admin_created);
        assert!(!second.admin_created);
        assert_eq!(first.admin_id, second.admin_id);
        assert_eq!(store.admin_count(), 1);
        assert_eq!(store.problem_count(), 50);
    }

    #[tokio::test]
    async fn test_existing_admin_is_reused() {
        let (store, admin_id) = MemoryStore::with_admin("existing@x.com");

        let summary = Seeder::new(store.clone())
            .run(&fixtures::all())
            .await
            .unwrap();

        assert!(!summary.admin_created);
        assert_eq!(summary.admin_id, admin_id);
        assert_eq!(store.admin_count(), 1);

        let state = store.state.lock().unwrap();
        assert_eq!(state.problems.len(), 25);
        assert!(state.problems.iter().all(|p| p.user_id == admin_id));
    }

    #[tokio::test]
    async fn test_failure_keeps_earlier_rows_and_closes_once() {
        let n = 7;
        let store = MemoryStore::failing_on(n);

        let result = Seeder::new(store.clone()).run(&fixtures::all()).await;

        assert!(matches!(result, Err(SeedError::Store(AppError::Database(_)))));
        assert_eq!(store.problem_count(), n - 1);
        assert_eq!(store.close_calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_on_first_insert() {
        let store = MemoryStore::failing_on(1);

        let result = Seeder::new(store.clone()).run(&fixtures::all()).await;

        assert!(result.is_err());
        assert_eq!(store.admin_count(), 1);
        assert_eq!(store.problem_count(), 0);
        assert_eq!(store.close_calls(), 1);
    }

    #[tokio::test]
    async fn test_admin_errors_abort_before_any_insert() {
        for call in [Call::FindUserByRole, Call::CreateUser] {
            let store = MemoryStore::failing_call(call);

            let result = Seeder::new(store.clone()).run(&fixtures::all()).await;

            assert!(matches!(result, Err(SeedError::Store(AppError::Database(_)))));
            assert_eq!(store.admin_count(), 0);
            assert_eq!(store.problem_count(), 0);
            assert_eq!(store.state.lock().unwrap().insert_attempts, 0);
            assert_eq!(store.close_calls(), 1);
        }
    }

    #[tokio::test]
    async fn test_title_lookup_error_aborts_skip_existing_run() {
        let store = MemoryStore::failing_call(Call::FindProblemByTitle);

        let result = Seeder::new(store.clone())
            .with_insert_mode(InsertMode::SkipExisting)
            .run(&fixtures::all())
            .await;

        assert!(matches!(result, Err(SeedError::Store(AppError::Database(_)))));
        assert_eq!(store.admin_count(), 1);
        assert_eq!(store.problem_count(), 0);
        assert_eq!(store.close_calls(), 1);
    }

    #[tokio::test]
    async fn test_title_lookup_not_used_in_append_mode() {
        let store = MemoryStore::failing_call(Call::FindProblemByTitle);

        let summary = Seeder::new(store.clone())
            .run(&fixtures::all())
            .await
            .unwrap();

        assert_eq!(summary.inserted, 25);
        assert_eq!(store.close_calls(), 1);
    }

    #[tokio::test]
    async fn test_problems_inserted_in_fixture_order() {
        let store = MemoryStore::default();
        let fixtures = fixtures::all();

        Seeder::new(store.clone()).run(&fixtures).await.unwrap();

        let state = store.state.lock().unwrap();
        let stored: Vec<&str> = state.problems.iter().map(|p| p.title.as_str()).collect();
        let expected: Vec<&str> = fixtures.iter().map(|f| f.title).collect();
        assert_eq!(stored, expected);
    }

    #[tokio::test]
    async fn test_skip_existing_is_idempotent() {
        let store = MemoryStore::default();
        let fixtures = fixtures::all();

        let first = Seeder::new(store.clone())
            .with_insert_mode(InsertMode::SkipExisting)
            .run(&fixtures)
            .await
            .unwrap();
        let second = Seeder::new(store.clone())
            .with_insert_mode(InsertMode::SkipExisting)
            .run(&fixtures)
            .await
            .unwrap();

        // The repeated "Merge Two Sorted Lists" is skipped on the first run too.
        assert_eq!(first.inserted, 24);
        assert_eq!(first.skipped, 1);
        assert_eq!(second.inserted, 0);
        assert_eq!(second.skipped, 25);
        assert_eq!(store.problem_count(), 24);
    }

    #[tokio::test]
    async fn test_ensure_admin_uses_placeholder_without_password() {
        let store = MemoryStore::default();

        let admin = Seeder::new(store.clone()).ensure_admin().await.unwrap();

        assert!(admin.created);
        assert_eq!(admin.user.role, UserRole::Admin);
        assert_eq!(admin.user.league, League::Bronze);
        assert_eq!(admin.user.email, "admin@example.com");
        let state = store.state.lock().unwrap();
        assert_eq!(state.users[0].1, PLACEHOLDER_PASSWORD_HASH);
        assert_eq!(state.close_calls, 0);
    }

    #[tokio::test]
    async fn test_ensure_admin_hashes_configured_password() {
        let store = MemoryStore::default();
        let seeder = Seeder::new(store.clone()).with_admin(AdminConfig {
            email: "ops@x.com".to_string(),
            name: "Ops".to_string(),
            password: Some("s3cret-pass".to_string()),
        });

        let admin = seeder.ensure_admin().await.unwrap();
        let again = seeder.ensure_admin().await.unwrap();

        assert!(admin.created);
        assert!(!again.created);
        assert_eq!(admin.user.id, again.user.id);
        assert_eq!(seeder.store().admin_count(), 1);

        let state = store.state.lock().unwrap();
        let stored_hash = &state.users[0].1;
        assert!(verify_password("s3cret-pass", stored_hash).unwrap());
    }
}
