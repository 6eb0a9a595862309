//! Message threading rules.
//!
//! A thread is identified by the id of its root message. Every reply carries
//! the root's `thread_id`, so counting replies is a scan over one key.

use crate::types::DbId;

/// Thread a reply joins, given its parent's id and stored thread id.
///
/// Rows written before thread ids existed have `0` or no thread id; such a
/// parent is treated as the root of its own thread.
pub fn thread_for_reply(parent_id: DbId, parent_thread_id: Option<DbId>) -> DbId {
    match parent_thread_id {
        Some(thread_id) if thread_id > 0 => thread_id,
        _ => parent_id,
    }
}

/// Number of replies in `thread_id`: every message sharing the thread id
/// other than the root itself.
pub fn reply_count<I>(thread_id: DbId, messages: I) -> i64
where
    I: IntoIterator<Item = (DbId, DbId)>,
{
    messages
        .into_iter()
        .filter(|&(id, thread)| thread == thread_id && id != thread_id)
        .count() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_inherits_parent_thread() {
        assert_eq!(thread_for_reply(7, Some(5)), 5);
    }

    #[test]
    fn legacy_parent_without_thread_starts_one() {
        assert_eq!(thread_for_reply(7, None), 7);
        assert_eq!(thread_for_reply(7, Some(0)), 7);
    }

    #[test]
    fn reply_count_excludes_root_and_other_threads() {
        let messages = [(5, 5), (6, 5), (7, 7), (8, 5), (9, 7)];
        assert_eq!(reply_count(5, messages), 2);
        assert_eq!(reply_count(7, messages), 1);
        assert_eq!(reply_count(42, messages), 0);
    }
}
