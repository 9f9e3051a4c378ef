//! Confirm-then-apply mutations for list resources held in a [`RequestState`].
//!
//! A console action stages its mutation (taking a snapshot), sends it upstream
//! and then either commits the record the server confirmed or aborts. Local
//! data never changes before the server has answered.

use crate::{model::Identified, view::RequestState};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<T> {
    Insert(T),
    Replace(T),
    Remove(String),
}

impl<T: Identified> Mutation<T> {
    pub fn target_id(&self) -> &str {
        match self {
            Mutation::Insert(item) | Mutation::Replace(item) => item.id(),
            Mutation::Remove(id) => id,
        }
    }
}

/// What a resource does once the server confirmed a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Apply the confirmed record to the local list.
    ApplyConfirmed,
    /// Discard the local list and fetch it again.
    Refetch,
}

#[derive(Debug)]
#[must_use]
pub struct Staged<T> {
    description: String,
    snapshot: Vec<T>,
    revision: u64,
}

impl<T> Staged<T> {
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<T: Identified + Clone> RequestState<Vec<T>> {
    pub fn stage(&self, description: impl Into<String>) -> Staged<T> {
        Staged {
            description: description.into(),
            snapshot: self.data().clone(),
            revision: self.revision(),
        }
    }

    pub fn commit(&mut self, staged: Staged<T>, confirmed: Mutation<T>) {
        tracing::debug!(
            action = %staged.description,
            target = confirmed.target_id(),
            "applying confirmed mutation"
        );

        let items = self.data_mut();
        match confirmed {
            Mutation::Insert(item) => {
                if let Some(existing) = items.iter_mut().find(|i| i.id() == item.id()) {
                    *existing = item;
                } else {
                    items.push(item);
                }
            }
            Mutation::Replace(item) => {
                if let Some(existing) = items.iter_mut().find(|i| i.id() == item.id()) {
                    *existing = item;
                }
            }
            Mutation::Remove(id) => items.retain(|i| i.id() != id),
        }
    }

    /// Restores the snapshot unless newer data landed meanwhile, and records the error.
    pub fn abort<E: Display>(&mut self, staged: Staged<T>, error: E) {
        tracing::warn!(action = %staged.description, %error, "mutation rejected by server");

        if self.revision() == staged.revision {
            self.restore_data(staged.snapshot);
        }
        self.record_error(error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{Phase, Settlement};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        label: &'static str,
    }

    impl Identified for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, label: &'static str) -> Item {
        Item { id: id.into(), label }
    }

    fn loaded(items: Vec<Item>) -> RequestState<Vec<Item>> {
        let mut state = RequestState::default();
        let ticket = state.dispatch();
        state.resolve::<String>(ticket, Ok(items));
        state
    }

    #[test]
    fn confirmed_insert_replace_and_remove() {
        let mut state = loaded(vec![item("1", "one"), item("2", "two")]);

        let staged = state.stage("create");
        state.commit(staged, Mutation::Insert(item("3", "three")));

        let staged = state.stage("update");
        state.commit(staged, Mutation::Replace(item("1", "uno")));

        let staged = state.stage("delete");
        state.commit(staged, Mutation::Remove("2".into()));

        assert_eq!(state.data(), &vec![item("1", "uno"), item("3", "three")]);
    }

    #[test]
    fn data_is_untouched_until_confirmation_and_restored_on_abort() {
        let mut state = loaded(vec![item("1", "one")]);
        let before = state.data().clone();

        let staged = state.stage("delete 1");
        assert_eq!(state.data(), &before);

        state.abort(staged, "Request failed with status code 500");
        assert_eq!(state.data(), &before);
        assert_eq!(state.error(), Some("Request failed with status code 500"));
    }

    #[test]
    fn abort_keeps_newer_data() {
        let mut state = loaded(vec![item("1", "one")]);
        let staged = state.stage("update 1");

        let ticket = state.dispatch();
        state.resolve::<String>(ticket, Ok(vec![item("1", "fresh"), item("2", "two")]));

        state.abort(staged, "conflict");
        assert_eq!(state.data().len(), 2);
        assert_eq!(state.data()[0].label, "fresh");
    }

    #[test]
    fn list_fetched_before_a_confirmed_create_cannot_drop_it() {
        let mut state = loaded(vec![item("1", "one")]);

        let refresh = state.dispatch();
        let staged = state.stage("create");
        state.commit(staged, Mutation::Insert(item("2", "two")));

        let settled = state.resolve::<String>(refresh, Ok(vec![item("1", "one")]));

        assert_eq!(settled, Settlement::Superseded);
        assert_eq!(state.data(), &vec![item("1", "one"), item("2", "two")]);
        assert_eq!(state.phase(), Phase::Success);
    }

    #[test]
    fn rejected_mutation_does_not_block_a_pending_refresh() {
        let mut state = loaded(vec![item("1", "one")]);

        let staged = state.stage("delete 1");
        let refresh = state.dispatch();
        state.abort(staged, "Forbidden");

        let settled = state.resolve::<String>(refresh, Ok(vec![item("1", "uno")]));
        assert_eq!(settled, Settlement::Applied);
        assert_eq!(state.data(), &vec![item("1", "uno")]);
    }

    #[test]
    fn insert_of_known_id_replaces_instead_of_duplicating() {
        let mut state = loaded(vec![item("1", "one")]);
        let staged = state.stage("create");
        state.commit(staged, Mutation::Insert(item("1", "again")));
        assert_eq!(state.data(), &vec![item("1", "again")]);
    }
}
