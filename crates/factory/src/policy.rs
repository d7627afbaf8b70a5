//! Duplicate-key handling.

use serde::{Deserialize, Serialize};

/// What [`crate::FactoryRegistry::register`] does when the key is already present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
	/// Replace factory, args and instance, keeping the entry's original position.
	#[default]
	ReplaceInPlace,
	/// Remove the existing entry and append the replacement at the end.
	MoveToEnd,
	/// Refuse the registration; the existing entry is left untouched.
	Reject,
}

/// Result of storing a freshly constructed entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum InsertAction {
	/// Key was new; entry appended.
	InsertedNew,
	/// Key existed; entry replaced in its slot.
	ReplacedInPlace,
	/// Key existed; old entry dropped and replacement appended.
	MovedToEnd,
}

impl std::fmt::Display for DuplicatePolicy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::ReplaceInPlace => write!(f, "replace_in_place"),
			Self::MoveToEnd => write!(f, "move_to_end"),
			Self::Reject => write!(f, "reject"),
		}
	}
}
