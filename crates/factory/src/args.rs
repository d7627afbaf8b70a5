//! Dynamic constructor arguments.
//!
//! [`Args`] is the default argument list handed to factories: an ordered
//! sequence of [`Value`]s captured at registration time. Factories that want
//! a statically typed argument list can use any other `A` instead.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::ConstructError;

/// A single constructor argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Str(String),
	List(Vec<Value>),
}

impl Value {
	/// Short type name used in error messages.
	pub const fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Int(_) => "int",
			Self::Float(_) => "float",
			Self::Str(_) => "string",
			Self::List(_) => "list",
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(i) => Some(*i),
			_ => None,
		}
	}

	/// Integers widen to floats.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Self::Float(f) => Some(*f),
			Self::Int(i) => Some(*i as f64),
			_ => None,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(b) => Some(*b),
			_ => None,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int(value.into())
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Self::Int(value.into())
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(value: Vec<T>) -> Self {
		Self::List(value.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

/// Ordered constructor argument list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Args(Vec<Value>);

impl Args {
	pub const fn new() -> Self {
		Self(Vec::new())
	}

	pub fn push(&mut self, value: impl Into<Value>) {
		self.0.push(value.into());
	}

	pub fn into_vec(self) -> Vec<Value> {
		self.0
	}

	/// Returns the argument at `index`, or [`ConstructError::MissingArg`].
	pub fn require(&self, index: usize) -> Result<&Value, ConstructError> {
		self.0.get(index).ok_or(ConstructError::MissingArg { index })
	}

	pub fn str(&self, index: usize) -> Result<&str, ConstructError> {
		let value = self.require(index)?;
		value.as_str().ok_or_else(|| mismatch(index, "string", value))
	}

	pub fn int(&self, index: usize) -> Result<i64, ConstructError> {
		let value = self.require(index)?;
		value.as_int().ok_or_else(|| mismatch(index, "int", value))
	}

	pub fn float(&self, index: usize) -> Result<f64, ConstructError> {
		let value = self.require(index)?;
		value.as_float().ok_or_else(|| mismatch(index, "float", value))
	}

	pub fn bool(&self, index: usize) -> Result<bool, ConstructError> {
		let value = self.require(index)?;
		value.as_bool().ok_or_else(|| mismatch(index, "bool", value))
	}
}

fn mismatch(index: usize, expected: &'static str, found: &Value) -> ConstructError {
	ConstructError::ArgType {
		index,
		expected,
		found: found.kind(),
	}
}

impl Deref for Args {
	type Target = [Value];

	fn deref(&self) -> &[Value] {
		&self.0
	}
}

impl FromIterator<Value> for Args {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl From<Vec<Value>> for Args {
	fn from(values: Vec<Value>) -> Self {
		Self(values)
	}
}

impl IntoIterator for Args {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Args {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Builds an [`Args`] list, converting each element with [`Value::from`].
///
/// ```
/// use forge_factory::{Value, args};
///
/// let args = args!["arg1", 2, true];
/// assert_eq!(args[0], Value::from("arg1"));
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
	() => {
		$crate::Args::new()
	};
	($($value:expr),+ $(,)?) => {
		<$crate::Args as ::core::iter::FromIterator<$crate::Value>>::from_iter([
			$($crate::Value::from($value)),+
		])
	};
}
