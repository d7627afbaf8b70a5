//! Lock-guarded registry handle for use across threads.

use std::sync::Arc;

use parking_lot::{
	MappedRwLockReadGuard, MappedRwLockWriteGuard, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use crate::args::Args;
use crate::config::RegistryConfig;
use crate::error::{ConstructError, RegisterError};
use crate::factory::Factory;
use crate::registry::{FactoryRegistry, Registration};

/// Cloneable handle to a [`FactoryRegistry`] behind a read-write lock.
///
/// Every operation takes the lock for its own duration only. Guards returned
/// by [`Self::register`] and [`Self::get`] hold the lock until dropped.
pub struct SharedRegistry<T, A = Args, E = ConstructError> {
	inner: Arc<RwLock<FactoryRegistry<T, A, E>>>,
}

impl<T, A, E> Clone for SharedRegistry<T, A, E> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<T, A, E> Default for SharedRegistry<T, A, E> {
	fn default() -> Self {
		Self::from(FactoryRegistry::default())
	}
}

impl<T, A, E> From<FactoryRegistry<T, A, E>> for SharedRegistry<T, A, E> {
	fn from(registry: FactoryRegistry<T, A, E>) -> Self {
		Self {
			inner: Arc::new(RwLock::new(registry)),
		}
	}
}

impl<T, A, E> SharedRegistry<T, A, E> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: RegistryConfig) -> Self {
		Self::from(FactoryRegistry::with_config(config))
	}

	/// Registers under the write lock and returns a guard over the new instance.
	pub fn register<F>(
		&self,
		key: impl Into<String>,
		factory: F,
		args: A,
	) -> Result<MappedRwLockWriteGuard<'_, T>, RegisterError<E>>
	where
		F: Factory<T, A, E> + Send + Sync + 'static,
	{
		let mut registry = self.inner.write();
		let index = registry.register_entry(Registration::new(key, factory, args))?;
		Ok(RwLockWriteGuard::map(registry, |registry| {
			registry.instance_at_mut(index)
		}))
	}

	/// Registers every item under a single write lock.
	pub fn register_many<I, R>(&self, registrations: I) -> Result<&Self, RegisterError<E>>
	where
		I: IntoIterator<Item = R>,
		R: Into<Registration<T, A, E>>,
	{
		self.inner.write().register_many(registrations)?;
		Ok(self)
	}

	pub fn get(&self, key: &str) -> Option<MappedRwLockReadGuard<'_, T>> {
		RwLockReadGuard::try_map(self.inner.read(), |registry| registry.get(key)).ok()
	}

	pub fn index(&self, key: &str) -> Option<usize> {
		self.inner.read().index(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.inner.read().contains(key)
	}

	/// Keys in registry order, copied out of the lock.
	pub fn keys(&self) -> Vec<String> {
		self.inner.read().keys().map(str::to_owned).collect()
	}

	pub fn unregister(&self, key: &str) -> &Self {
		self.inner.write().unregister(key);
		self
	}

	pub fn len(&self) -> usize {
		self.inner.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.read().is_empty()
	}

	pub fn read(&self) -> RwLockReadGuard<'_, FactoryRegistry<T, A, E>> {
		self.inner.read()
	}

	pub fn write(&self) -> RwLockWriteGuard<'_, FactoryRegistry<T, A, E>> {
		self.inner.write()
	}
}
