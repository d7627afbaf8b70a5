use crate::policy::DuplicatePolicy;

/// Registration failure.
///
/// Factory failures pass through [`RegisterError::Construct`] untouched; the
/// variant is transparent so its `Display` and `source` are the factory's own.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError<E> {
	/// Keys must be non-empty strings.
	#[error("registry key must not be empty")]
	EmptyKey,

	/// The key is already registered and the registry policy refuses replacement.
	#[error("duplicate key {key:?} rejected under policy {policy}")]
	DuplicateKey { key: String, policy: DuplicatePolicy },

	/// The factory itself failed.
	#[error(transparent)]
	Construct(E),
}

impl<E> RegisterError<E> {
	/// Returns the factory error, if construction is what failed.
	pub fn into_construct(self) -> Option<E> {
		match self {
			Self::Construct(err) => Some(err),
			_ => None,
		}
	}
}

/// Default error type for factories built on [`crate::Args`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstructError {
	#[error("missing constructor argument at position {index}")]
	MissingArg { index: usize },

	#[error("constructor argument {index}: expected {expected}, found {found}")]
	ArgType {
		index: usize,
		expected: &'static str,
		found: &'static str,
	},

	#[error("invalid constructor arguments: {0}")]
	Invalid(String),
}

/// Errors produced while loading a [`crate::RegistryConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to parse registry config: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("registry label must not be empty")]
	EmptyLabel,
}
