//! Repository for the `Messages` tab, including threads.

use chrono::Utc;
use vhub_core::threads::{reply_count, thread_for_reply};
use vhub_core::types::DbId;

use super::{apply, SheetRepo};
use crate::error::StoreError;
use crate::models::message::{CreateMessage, Message, UpdateMessage, DEFAULT_COMMITTEE};

pub struct MessageRepo {
    inner: SheetRepo<Message>,
}

impl MessageRepo {
    pub fn new(inner: SheetRepo<Message>) -> Self {
        Self { inner }
    }

    /// Post a new root message; it starts its own thread.
    pub async fn create(&self, input: &CreateMessage) -> Result<Message, StoreError> {
        let now = Utc::now();
        self.inner
            .create(|id| Message {
                id,
                sender: input.sender.clone(),
                content: input.content.clone(),
                timestamp: now,
                parent_id: None,
                thread_id: id,
                reply_count: 0,
                committee: input
                    .committee
                    .clone()
                    .unwrap_or_else(|| DEFAULT_COMMITTEE.to_string()),
            })
            .await
    }

    /// Reply to `parent_id`, joining its thread, then recount the thread
    /// root's replies.
    ///
    /// Returns `None` if the parent does not exist.
    pub async fn create_reply(
        &self,
        parent_id: DbId,
        input: &CreateMessage,
    ) -> Result<Option<Message>, StoreError> {
        let Some(parent) = self.inner.find_by_id(parent_id).await? else {
            return Ok(None);
        };
        let thread_id = thread_for_reply(parent.id, Some(parent.thread_id));
        let now = Utc::now();

        let reply = self
            .inner
            .create(|id| Message {
                id,
                sender: input.sender.clone(),
                content: input.content.clone(),
                timestamp: now,
                parent_id: Some(parent.id),
                thread_id,
                reply_count: 0,
                committee: input
                    .committee
                    .clone()
                    .unwrap_or_else(|| parent.committee.clone()),
            })
            .await?;

        self.refresh_reply_count(thread_id).await?;
        Ok(Some(reply))
    }

    /// Recompute and store the reply count on a thread's root message.
    ///
    /// Returns the new count, or `None` if the root no longer exists.
    pub async fn refresh_reply_count(&self, thread_id: DbId) -> Result<Option<i64>, StoreError> {
        let messages = self.inner.list().await?;
        let count = reply_count(thread_id, messages.iter().map(|m| (m.id, m.thread_id)));

        let root = self
            .inner
            .update(thread_id, |root| root.reply_count = count)
            .await?;
        if root.is_none() {
            tracing::debug!(thread_id, "Thread root missing; reply count not stored");
        }
        Ok(root.map(|r| r.reply_count))
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Message>, StoreError> {
        self.inner.find_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<Message>, StoreError> {
        self.inner.list().await
    }

    /// Root and replies of one thread, oldest first.
    pub async fn list_thread(&self, thread_id: DbId) -> Result<Vec<Message>, StoreError> {
        let mut messages = self.inner.list_where(|m| m.thread_id == thread_id).await?;
        messages.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));
        Ok(messages)
    }

    pub async fn list_by_committee(&self, committee: &str) -> Result<Vec<Message>, StoreError> {
        self.inner.list_where(|m| m.committee == committee).await
    }

    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateMessage,
    ) -> Result<Option<Message>, StoreError> {
        self.inner
            .update(id, |message| {
                apply(&mut message.content, &input.content);
                apply(&mut message.committee, &input.committee);
            })
            .await
    }

    /// Delete a message. Deleting a reply recounts its thread.
    pub async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let Some(message) = self.inner.find_by_id(id).await? else {
            return Ok(false);
        };
        let deleted = self.inner.delete(id).await?;
        if deleted && !message.is_root() {
            self.refresh_reply_count(message.thread_id).await?;
        }
        Ok(deleted)
    }
}
