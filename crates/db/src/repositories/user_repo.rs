//! Repository for the `Users` tab.
//!
//! Uniqueness of usernames and emails is not enforced here; callers that
//! care check with [`UserRepo::find_by_email`] first.

use chrono::Utc;
use vhub_core::types::DbId;

use super::{apply, SheetRepo};
use crate::error::StoreError;
use crate::models::user::{CreateUser, UpdateUser, User, DEFAULT_ROLE};

pub struct UserRepo {
    inner: SheetRepo<User>,
}

impl UserRepo {
    pub fn new(inner: SheetRepo<User>) -> Self {
        Self { inner }
    }

    pub async fn create(&self, input: &CreateUser) -> Result<User, StoreError> {
        let now = Utc::now();
        self.inner
            .create(|id| User {
                id,
                username: input.username.clone(),
                email: input.email.clone(),
                full_name: input.full_name.clone().unwrap_or_default(),
                role: input
                    .role
                    .clone()
                    .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
                permissions: input.permissions.clone().unwrap_or_default(),
                metadata: input.metadata.clone().unwrap_or_default(),
                created_at: now,
            })
            .await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<User>, StoreError> {
        self.inner.find_by_id(id).await
    }

    /// Case-insensitive email lookup.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let email = email.trim();
        Ok(self
            .inner
            .list()
            .await?
            .into_iter()
            .find(|u| u.email.trim().eq_ignore_ascii_case(email)))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .inner
            .list()
            .await?
            .into_iter()
            .find(|u| u.username == username))
    }

    pub async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.inner.list().await
    }

    pub async fn update(&self, id: DbId, input: &UpdateUser) -> Result<Option<User>, StoreError> {
        self.inner
            .update(id, |user| {
                apply(&mut user.username, &input.username);
                apply(&mut user.email, &input.email);
                apply(&mut user.full_name, &input.full_name);
                apply(&mut user.role, &input.role);
                apply(&mut user.permissions, &input.permissions);
                apply(&mut user.metadata, &input.metadata);
            })
            .await
    }

    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.inner.delete(id).await
    }
}
