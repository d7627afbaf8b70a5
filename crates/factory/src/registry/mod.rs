//! Insertion-ordered factory registry.
//!
//! # Role
//!
//! [`FactoryRegistry`] owns an ordered sequence of [`Entry`] values. Every
//! registration constructs its instance immediately; lookups then address the
//! stored instance by key or by position.
//!
//! # Invariants
//!
//! - Keys are unique and non-empty.
//!   - Enforced in: [`FactoryRegistry::register`].
//! - Registry order is insertion order; removal shifts later entries down.
//!   - Enforced in: [`FactoryRegistry::unregister`] (`shift_remove`).
//! - A failed construction leaves the registry exactly as it was.
//!   - Enforced in: [`FactoryRegistry::register`], [`FactoryRegistry::rebuild`]
//!     (construct before mutating).
//!
//! # Concurrency
//!
//! None. Mutation takes `&mut self`; wrap in [`crate::SharedRegistry`] to share.

mod entry;

use std::any::Any;
use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace, warn};

pub use entry::{Entry, EntryView, Registration};

use crate::args::Args;
use crate::config::RegistryConfig;
use crate::error::{ConstructError, RegisterError};
use crate::factory::{AnyInstance, Factory};
use crate::policy::{DuplicatePolicy, InsertAction};

/// Ordered, keyed registry of eagerly constructed instances.
///
/// `T` is the instance type, `A` the argument list type and `E` the error
/// type shared by every factory in the registry.
pub struct FactoryRegistry<T, A = Args, E = ConstructError> {
	label: String,
	policy: DuplicatePolicy,
	entries: IndexMap<String, Entry<T, A, E>, FxBuildHasher>,
}

impl<T, A, E> Default for FactoryRegistry<T, A, E> {
	fn default() -> Self {
		Self::with_config(RegistryConfig::default())
	}
}

impl<T, A, E> FactoryRegistry<T, A, E> {
	/// Creates an empty registry with the default config.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_policy(label: impl Into<String>, policy: DuplicatePolicy) -> Self {
		Self {
			label: label.into(),
			policy,
			entries: IndexMap::default(),
		}
	}

	pub fn with_config(config: RegistryConfig) -> Self {
		Self::with_policy(config.label, config.duplicate_policy)
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn policy(&self) -> DuplicatePolicy {
		self.policy
	}

	/// Constructs an instance with `factory` and stores it under `key`.
	///
	/// Returns the new instance. Re-registering an existing key follows the
	/// registry's [`DuplicatePolicy`]. If the factory fails its error is
	/// returned as [`RegisterError::Construct`] and nothing is stored.
	pub fn register<F>(
		&mut self,
		key: impl Into<String>,
		factory: F,
		args: A,
	) -> Result<&mut T, RegisterError<E>>
	where
		F: Factory<T, A, E> + Send + Sync + 'static,
	{
		let index = self.register_entry(Registration::new(key, factory, args))?;
		Ok(self.instance_at_mut(index))
	}

	/// Registers each item in order, stopping at the first failure.
	///
	/// Items registered before a failure stay registered.
	pub fn register_many<I, R>(&mut self, registrations: I) -> Result<&mut Self, RegisterError<E>>
	where
		I: IntoIterator<Item = R>,
		R: Into<Registration<T, A, E>>,
	{
		for registration in registrations {
			self.register_entry(registration.into())?;
		}
		Ok(self)
	}

	/// Stores a registration and returns the slot it landed in.
	pub(crate) fn register_entry(
		&mut self,
		registration: Registration<T, A, E>,
	) -> Result<usize, RegisterError<E>> {
		let Registration { key, factory, args } = registration;
		if key.is_empty() {
			return Err(RegisterError::EmptyKey);
		}

		let existing = self.entries.get_index_of(&key);
		if existing.is_some() && self.policy == DuplicatePolicy::Reject {
			debug!(registry = %self.label, %key, "duplicate registration rejected");
			return Err(RegisterError::DuplicateKey {
				key,
				policy: self.policy,
			});
		}

		let instance = factory.construct(&args).map_err(RegisterError::Construct)?;
		let entry = Entry {
			key: key.clone(),
			factory,
			args,
			instance,
		};

		let (index, action) = match (existing, self.policy) {
			(None, _) => (self.entries.insert_full(key, entry).0, InsertAction::InsertedNew),
			(Some(_), DuplicatePolicy::MoveToEnd) => {
				self.entries.shift_remove(&key);
				(self.entries.insert_full(key, entry).0, InsertAction::MovedToEnd)
			}
			(Some(index), _) => {
				self.entries[index] = entry;
				(index, InsertAction::ReplacedInPlace)
			}
		};

		debug!(
			registry = %self.label,
			key = %self.entries[index].key,
			index,
			?action,
			"factory registered"
		);
		Ok(index)
	}

	/// Panics if `index` is out of bounds; only called with slots returned by
	/// [`Self::register_entry`].
	pub(crate) fn instance_at_mut(&mut self, index: usize) -> &mut T {
		&mut self.entries[index].instance
	}

	/// Returns the instance registered under `key`.
	pub fn get(&self, key: &str) -> Option<&T> {
		self.entries.get(key).map(|entry| &entry.instance)
	}

	pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
		self.entries.get_mut(key).map(|entry| &mut entry.instance)
	}

	/// Returns the zero-based position of `key` in registry order.
	pub fn index(&self, key: &str) -> Option<usize> {
		self.entries.get_index_of(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Returns a fresh snapshot of every `{key, instance}` pair in registry order.
	pub fn all(&self) -> Vec<EntryView<'_, T>> {
		self.iter().collect()
	}

	pub fn iter(&self) -> impl Iterator<Item = EntryView<'_, T>> {
		self.entries.values().map(Entry::view)
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn entry(&self, key: &str) -> Option<&Entry<T, A, E>> {
		self.entries.get(key)
	}

	/// Returns the arguments captured when `key` was registered.
	pub fn args(&self, key: &str) -> Option<&A> {
		self.entries.get(key).map(|entry| &entry.args)
	}

	/// Removes `key`, keeping the relative order of the remaining entries.
	///
	/// Removing an absent key is a no-op.
	pub fn unregister(&mut self, key: &str) -> &mut Self {
		match self.entries.shift_remove_full(key) {
			Some((index, _, _)) => debug!(registry = %self.label, key, index, "factory unregistered"),
			None => trace!(registry = %self.label, key, "unregister of unknown key"),
		}
		self
	}

	/// Re-runs the stored factory with the stored args and swaps in the new instance.
	///
	/// Returns `Ok(None)` for an unknown key. On failure the previous instance
	/// is kept.
	pub fn rebuild(&mut self, key: &str) -> Result<Option<&mut T>, E> {
		let Some(entry) = self.entries.get_mut(key) else {
			return Ok(None);
		};
		match entry.factory.construct(&entry.args) {
			Ok(instance) => {
				entry.instance = instance;
				debug!(registry = %self.label, key, "factory rebuilt");
				Ok(Some(&mut entry.instance))
			}
			Err(err) => {
				warn!(registry = %self.label, key, "factory rebuild failed; keeping previous instance");
				Err(err)
			}
		}
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}
}

impl<A, E> FactoryRegistry<AnyInstance, A, E> {
	/// Returns the instance under `key` if it is an `S`.
	pub fn get_as<S: Any>(&self, key: &str) -> Option<&S> {
		self.get(key)?.downcast_ref()
	}

	pub fn get_as_mut<S: Any>(&mut self, key: &str) -> Option<&mut S> {
		self.get_mut(key)?.downcast_mut()
	}
}

impl<T: fmt::Debug, A, E> fmt::Debug for FactoryRegistry<T, A, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FactoryRegistry")
			.field("label", &self.label)
			.field("policy", &self.policy)
			.field("entries", &self.all())
			.finish()
	}
}
