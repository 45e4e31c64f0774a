//! Select-then-act workflows for reading and deleting memos.

use crate::core::{Memo, MemoSummary};
use crate::error::MemoError;
use crate::storage::Store;

use super::picker::{Selection, Selector};

/// Prompt shown when choosing a memo to read.
pub const READ_PROMPT: &str = "Choose a memo you want to see";

/// Prompt shown when choosing a memo to delete.
pub const DELETE_PROMPT: &str = "Choose a memo you want to delete";

/// Result of the interactive read workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// There were no memos to choose from.
    Empty,
    /// The user aborted the prompt.
    Cancelled,
    /// The chosen memo no longer exists.
    NotFound(i64),
    /// The chosen memo.
    Shown(Memo),
}

/// Result of the interactive delete workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// There were no memos to choose from.
    Empty,
    /// The user aborted the prompt; nothing was deleted.
    Cancelled,
    /// The chosen memo no longer exists.
    NotFound(i64),
    /// The memo that was removed.
    Deleted(MemoSummary),
}

enum Picked {
    Empty,
    Cancelled,
    Chosen(i64),
}

fn pick(store: &Store, selector: &mut dyn Selector, prompt: &str) -> Result<Picked, MemoError> {
    let entries = store.list()?;
    if entries.is_empty() {
        return Ok(Picked::Empty);
    }

    match selector.select(prompt, &entries)? {
        Selection::Cancelled => {
            tracing::debug!("selection cancelled");
            Ok(Picked::Cancelled)
        }
        Selection::Chosen(id) => {
            tracing::debug!(id, "memo selected");
            Ok(Picked::Chosen(id))
        }
    }
}

/// Let the user choose a memo and fetch its full content.
///
/// # Errors
///
/// Returns an error if the store cannot be queried or the prompt fails.
pub fn read_memo(store: &Store, selector: &mut dyn Selector) -> Result<ReadOutcome, MemoError> {
    Ok(match pick(store, selector, READ_PROMPT)? {
        Picked::Empty => ReadOutcome::Empty,
        Picked::Cancelled => ReadOutcome::Cancelled,
        Picked::Chosen(id) => store
            .get(id)?
            .map_or(ReadOutcome::NotFound(id), ReadOutcome::Shown),
    })
}

/// Let the user choose a memo and delete it.
///
/// # Errors
///
/// Returns an error if the store cannot be queried or the prompt fails.
pub fn delete_memo(store: &Store, selector: &mut dyn Selector) -> Result<DeleteOutcome, MemoError> {
    let id = match pick(store, selector, DELETE_PROMPT)? {
        Picked::Empty => return Ok(DeleteOutcome::Empty),
        Picked::Cancelled => return Ok(DeleteOutcome::Cancelled),
        Picked::Chosen(id) => id,
    };

    let Some(memo) = store.get(id)? else {
        return Ok(DeleteOutcome::NotFound(id));
    };

    if store.delete(id)? {
        Ok(DeleteOutcome::Deleted(memo.summary()))
    } else {
        Ok(DeleteOutcome::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::interactive::MockSelector;

    fn store_with(contents: &[&str]) -> Store {
        let store = Store::open_in_memory().unwrap();
        for content in contents {
            store.add(content).unwrap();
        }
        store
    }

    #[test]
    fn test_read_shows_chosen_memo() {
        let store = store_with(&["Buy milk\nand eggs", "Call mom"]);
        let mut selector = MockSelector::new();
        selector
            .expect_select()
            .withf(|prompt, entries| prompt == READ_PROMPT && entries.len() == 2)
            .times(1)
            .returning(|_, entries| Ok(Selection::Chosen(entries[0].id)));

        let outcome = read_memo(&store, &mut selector).unwrap();

        assert_eq!(
            outcome,
            ReadOutcome::Shown(Memo {
                id: 1,
                content: "Buy milk\nand eggs".to_string()
            })
        );
    }

    #[test]
    fn test_duplicate_labels_resolve_by_id() {
        let store = store_with(&["Same\nfirst body", "Same\nsecond body"]);
        let mut selector = MockSelector::new();
        selector
            .expect_select()
            .returning(|_, entries| Ok(Selection::Chosen(entries[1].id)));

        let outcome = read_memo(&store, &mut selector).unwrap();

        match outcome {
            ReadOutcome::Shown(memo) => assert_eq!(memo.content, "Same\nsecond body"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_empty_store_skips_prompt() {
        let store = store_with(&[]);
        let mut selector = MockSelector::new();
        selector.expect_select().times(0);

        assert_eq!(read_memo(&store, &mut selector).unwrap(), ReadOutcome::Empty);
        assert_eq!(
            delete_memo(&store, &mut selector).unwrap(),
            DeleteOutcome::Empty
        );
    }

    #[test]
    fn test_cancel_leaves_store_untouched() {
        let store = store_with(&["keep me"]);
        let mut selector = MockSelector::new();
        selector
            .expect_select()
            .withf(|prompt, _| prompt == DELETE_PROMPT)
            .returning(|_, _| Ok(Selection::Cancelled));

        let outcome = delete_memo(&store, &mut selector).unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_delete_removes_only_chosen() {
        let store = store_with(&["one", "two", "three"]);
        let mut selector = MockSelector::new();
        selector
            .expect_select()
            .returning(|_, entries| Ok(Selection::Chosen(entries[1].id)));

        let outcome = delete_memo(&store, &mut selector).unwrap();

        assert_eq!(
            outcome,
            DeleteOutcome::Deleted(MemoSummary {
                id: 2,
                label: "two".to_string()
            })
        );
        let labels: Vec<_> = store.list().unwrap().into_iter().map(|m| m.label).collect();
        assert_eq!(labels, vec!["one", "three"]);
    }

    #[test]
    fn test_vanished_memo_is_not_found() {
        let store = store_with(&["ghost"]);
        let mut selector = MockSelector::new();
        selector
            .expect_select()
            .returning(|_, _| Ok(Selection::Chosen(99)));

        assert_eq!(
            read_memo(&store, &mut selector).unwrap(),
            ReadOutcome::NotFound(99)
        );
        assert_eq!(
            delete_memo(&store, &mut selector).unwrap(),
            DeleteOutcome::NotFound(99)
        );
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_prompt_failure_propagates() {
        let store = store_with(&["x"]);
        let mut selector = MockSelector::new();
        selector
            .expect_select()
            .returning(|_, _| Err(MemoError::Prompt("no tty".to_string())));

        let result = read_memo(&store, &mut selector);
        assert!(matches!(result, Err(MemoError::Prompt(_))));
    }
}
