use std::fmt;

use crate::args::Args;
use crate::error::ConstructError;
use crate::factory::Factory;

pub(crate) type BoxedFactory<T, A, E> = Box<dyn Factory<T, A, E> + Send + Sync>;

/// A stored registration: key, factory, captured args and the instance they produced.
pub struct Entry<T, A = Args, E = ConstructError> {
	pub(crate) key: String,
	pub(crate) factory: BoxedFactory<T, A, E>,
	pub(crate) args: A,
	pub(crate) instance: T,
}

impl<T, A, E> Entry<T, A, E> {
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Arguments captured at registration and passed to every construction.
	pub fn args(&self) -> &A {
		&self.args
	}

	pub fn instance(&self) -> &T {
		&self.instance
	}

	pub fn instance_mut(&mut self) -> &mut T {
		&mut self.instance
	}

	pub fn view(&self) -> EntryView<'_, T> {
		EntryView {
			key: &self.key,
			instance: &self.instance,
		}
	}
}

impl<T: fmt::Debug, A: fmt::Debug, E> fmt::Debug for Entry<T, A, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Entry")
			.field("key", &self.key)
			.field("args", &self.args)
			.field("instance", &self.instance)
			.finish_non_exhaustive()
	}
}

/// Read-only `{key, instance}` projection of an entry.
pub struct EntryView<'a, T> {
	pub key: &'a str,
	pub instance: &'a T,
}

impl<T> Clone for EntryView<'_, T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for EntryView<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for EntryView<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EntryView")
			.field("key", &self.key)
			.field("instance", self.instance)
			.finish()
	}
}

/// A pending registration, as consumed by
/// [`FactoryRegistry::register_many`](crate::FactoryRegistry::register_many).
///
/// `(key, factory, args)` tuples convert into this, which is convenient when
/// every item shares one factory type. Mixing factory types in one batch
/// takes explicit [`Registration::new`] calls.
pub struct Registration<T, A = Args, E = ConstructError> {
	pub(crate) key: String,
	pub(crate) factory: BoxedFactory<T, A, E>,
	pub(crate) args: A,
}

impl<T, A, E> Registration<T, A, E> {
	pub fn new<F>(key: impl Into<String>, factory: F, args: A) -> Self
	where
		F: Factory<T, A, E> + Send + Sync + 'static,
	{
		Self {
			key: key.into(),
			factory: Box::new(factory),
			args,
		}
	}

	pub fn key(&self) -> &str {
		&self.key
	}
}

impl<K, F, T, A, E> From<(K, F, A)> for Registration<T, A, E>
where
	K: Into<String>,
	F: Factory<T, A, E> + Send + Sync + 'static,
{
	fn from((key, factory, args): (K, F, A)) -> Self {
		Self::new(key, factory, args)
	}
}

impl<T, A: fmt::Debug, E> fmt::Debug for Registration<T, A, E> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registration")
			.field("key", &self.key)
			.field("args", &self.args)
			.finish_non_exhaustive()
	}
}
