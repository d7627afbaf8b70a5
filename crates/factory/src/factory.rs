//! The constructible-type contract.
//!
//! A registry never looks inside what it registers: anything implementing
//! [`Factory`] can produce an instance from a borrowed argument list. Plain
//! closures qualify through a blanket impl, and types that know how to build
//! themselves implement [`Constructible`] and are registered through
//! [`constructor`].

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use crate::args::Args;
use crate::error::ConstructError;

/// Type-erased instance for registries holding unrelated types.
pub type AnyInstance = Box<dyn Any + Send + Sync>;

/// Produces `T` from an ordered argument list.
pub trait Factory<T, A = Args, E = ConstructError> {
	fn construct(&self, args: &A) -> Result<T, E>;
}

impl<T, A, E, F> Factory<T, A, E> for F
where
	F: Fn(&A) -> Result<T, E>,
{
	fn construct(&self, args: &A) -> Result<T, E> {
		self(args)
	}
}

/// A type that builds itself from an argument list.
pub trait Constructible<A = Args, E = ConstructError>: Sized {
	fn construct(args: &A) -> Result<Self, E>;
}

/// [`Factory`] backed by a [`Constructible`] type.
pub struct Constructor<S> {
	_marker: PhantomData<fn() -> S>,
}

/// Returns the factory for a [`Constructible`] type.
pub const fn constructor<S>() -> Constructor<S> {
	Constructor {
		_marker: PhantomData,
	}
}

impl<S> Clone for Constructor<S> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<S> Copy for Constructor<S> {}

impl<S> fmt::Debug for Constructor<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Constructor<{}>", std::any::type_name::<S>())
	}
}

impl<S, A, E> Factory<S, A, E> for Constructor<S>
where
	S: Constructible<A, E>,
{
	fn construct(&self, args: &A) -> Result<S, E> {
		S::construct(args)
	}
}

/// Factory whose output is passed through a conversion.
pub struct Map<F, M, T> {
	factory: F,
	map: M,
	_marker: PhantomData<fn() -> T>,
}

impl<F, M, T, U, A, E> Factory<U, A, E> for Map<F, M, T>
where
	F: Factory<T, A, E>,
	M: Fn(T) -> U,
{
	fn construct(&self, args: &A) -> Result<U, E> {
		self.factory.construct(args).map(&self.map)
	}
}

/// Adapters over any [`Factory`].
pub trait FactoryExt<T, A, E>: Factory<T, A, E> + Sized {
	/// Converts each constructed instance, e.g. into a boxed trait object.
	fn map<U, M>(self, map: M) -> Map<Self, M, T>
	where
		M: Fn(T) -> U,
	{
		Map {
			factory: self,
			map,
			_marker: PhantomData,
		}
	}

	/// Boxes each constructed instance as an [`AnyInstance`].
	fn into_any(self) -> Map<Self, fn(T) -> AnyInstance, T>
	where
		T: Any + Send + Sync,
	{
		self.map(box_any::<T> as fn(T) -> AnyInstance)
	}
}

impl<T, A, E, F: Factory<T, A, E>> FactoryExt<T, A, E> for F {}

fn box_any<T: Any + Send + Sync>(value: T) -> AnyInstance {
	Box::new(value)
}
