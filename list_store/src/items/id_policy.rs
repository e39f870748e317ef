use serde::Deserialize;

use super::ItemId;

/// How [`ListStore`](super::ListStore) picks the id of a new item.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// `len + 1`. Can hand out an id that is still in use once an item
    /// has been deleted.
    #[default]
    Length,

    /// Counter that only moves forward; deleted ids are never reused.
    /// Once it reaches `ItemId::MAX` it stays there.
    Monotonic,
}

impl IdPolicy {
    pub(crate) fn next_id(&self, current_len: usize, last_issued: ItemId) -> ItemId {
        match self {
            IdPolicy::Length => (current_len as ItemId).saturating_add(1),
            IdPolicy::Monotonic => last_issued.saturating_add(1),
        }
    }
}

impl std::fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdPolicy::Length => write!(f, "length"),
            IdPolicy::Monotonic => write!(f, "monotonic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_policy_ignores_history() {
        assert_eq!(IdPolicy::Length.next_id(1, 2), 2);
        assert_eq!(IdPolicy::Length.next_id(0, 7), 1);
    }

    #[test]
    fn monotonic_policy_ignores_length() {
        assert_eq!(IdPolicy::Monotonic.next_id(1, 2), 3);
        assert_eq!(IdPolicy::Monotonic.next_id(0, 0), 1);
    }

    #[test]
    fn monotonic_policy_saturates() {
        assert_eq!(IdPolicy::Monotonic.next_id(0, ItemId::MAX), ItemId::MAX);
    }
}
