//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::policy::DuplicatePolicy;

/// Label used when none is configured.
pub const DEFAULT_LABEL: &str = "factories";

/// Tunables for a [`crate::FactoryRegistry`].
///
/// Missing fields fall back to their defaults, so an empty TOML document is a
/// valid config:
///
/// ```toml
/// label = "strategies"
/// duplicate_policy = "move_to_end"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
	/// Name attached to log events emitted by the registry.
	pub label: String,
	pub duplicate_policy: DuplicatePolicy,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			label: DEFAULT_LABEL.to_owned(),
			duplicate_policy: DuplicatePolicy::default(),
		}
	}
}

impl RegistryConfig {
	/// Parses and validates a config from TOML source.
	pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(src)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.label.trim().is_empty() {
			return Err(ConfigError::EmptyLabel);
		}
		Ok(())
	}
}
