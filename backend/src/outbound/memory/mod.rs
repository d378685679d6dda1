//! In-memory `UserRepository` adapter.
//!
//! Used when no database URL is configured and throughout the test suite.
//! It mirrors the PostgreSQL schema's behaviour: identifiers come from a
//! monotonically increasing sequence starting at 1, and a second insert with
//! an already stored email is rejected the way the unique index rejects it.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, NewUser, User, UserId};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<User>,
    last_id: i64,
}

/// Process-local user store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Table>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        // A panic while holding the lock cannot leave a half-written row.
        self.table.lock().unwrap_or_else(|err| err.into_inner())
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    /// Whether the store holds no users.
    pub fn is_empty(&self) -> bool {
        self.lock().rows.is_empty()
    }

    /// Number of stored users whose email equals `email` exactly.
    pub fn count_with_email(&self, email: &str) -> usize {
        self.lock()
            .rows
            .iter()
            .filter(|user| user.email().as_ref() == email)
            .count()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .lock()
            .rows
            .iter()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn insert(&self, new_user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut table = self.lock();
        if table.rows.iter().any(|user| user.email() == new_user.email()) {
            return Err(UserPersistenceError::duplicate_email(
                new_user.email().as_ref(),
            ));
        }

        let next = table.last_id + 1;
        let id = UserId::new(next)
            .map_err(|err| UserPersistenceError::query(format!("invalid sequence value: {err}")))?;
        table.last_id = next;

        let user = new_user.clone().into_user(id);
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock().rows.iter().find(|user| user.id() == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryUserRepository {
        InMemoryUserRepository::new()
    }

    fn candidate(name: &str, email: &str) -> NewUser {
        NewUser::try_from_strings(name, email).expect("valid input")
    }

    fn email(raw: &str) -> EmailAddress {
        EmailAddress::new(raw).expect("valid email")
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_email_returns_none_when_empty(repo: InMemoryUserRepository) {
        let found = repo
            .find_by_email(&email("ana@example.com"))
            .await
            .expect("lookup");
        assert!(found.is_none());
        assert!(repo.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn insert_assigns_sequential_ids(repo: InMemoryUserRepository) {
        let first = repo.insert(&candidate("Ana", "ana@example.com")).await.expect("insert");
        let second = repo.insert(&candidate("Bea", "bea@example.com")).await.expect("insert");

        assert_eq!(first.id().get(), 1);
        assert_eq!(second.id().get(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn insert_rejects_stored_email_like_a_unique_index(repo: InMemoryUserRepository) {
        repo.insert(&candidate("Ana", "ana@example.com")).await.expect("insert");

        let err = repo
            .insert(&candidate("Other", "ana@example.com"))
            .await
            .expect_err("unique violation");

        assert_eq!(err, UserPersistenceError::duplicate_email("ana@example.com"));
        assert_eq!(repo.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn lookups_find_inserted_rows(repo: InMemoryUserRepository) {
        let ana = repo.insert(&candidate("Ana", "ana@example.com")).await.expect("insert");

        let by_email = repo.find_by_email(&email("ana@example.com")).await.expect("lookup");
        let by_id = repo.find_by_id(ana.id()).await.expect("lookup");

        assert_eq!(by_email, Some(ana.clone()));
        assert_eq!(by_id, Some(ana));
    }
}
