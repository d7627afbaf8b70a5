//! Ordered, keyed registry of eagerly constructed factory instances.
//!
//! A [`FactoryRegistry`] maps string keys to instances built by a
//! [`Factory`] at registration time, from an argument list captured alongside
//! them. Entries keep their insertion order, so they can be addressed by key,
//! by position, or enumerated as a whole.
//!
//! ```
//! use forge_factory::{Args, ConstructError, FactoryRegistry, args};
//!
//! #[derive(Debug)]
//! struct Greeter {
//! 	greeting: String,
//! }
//!
//! fn greeter(args: &Args) -> Result<Greeter, ConstructError> {
//! 	Ok(Greeter {
//! 		greeting: args.str(0)?.to_owned(),
//! 	})
//! }
//!
//! let mut registry = FactoryRegistry::new();
//! let hello = registry.register("hello", greeter, args!["hello"])?;
//! assert_eq!(hello.greeting, "hello");
//!
//! registry.register("hi", greeter, args!["hi"])?;
//! assert_eq!(registry.index("hi"), Some(1));
//! assert!(registry.unregister("hello").get("hello").is_none());
//! # Ok::<(), forge_factory::RegisterError<ConstructError>>(())
//! ```
//!
//! # Modules
//!
//! - [`registry`] - The registry, its entries and pending registrations
//! - [`factory`] - The constructible-type contract and adapters
//! - [`args`] - Dynamic argument values
//! - [`policy`] - Duplicate-key handling
//! - [`config`] - TOML-loadable registry settings
//! - [`shared`] - Lock-guarded handle for cross-thread use

pub mod args;
pub mod config;
pub mod error;
pub mod factory;
pub mod policy;
pub mod registry;
pub mod shared;

pub use args::{Args, Value};
pub use config::RegistryConfig;
pub use error::{ConfigError, ConstructError, RegisterError};
pub use factory::{AnyInstance, Constructible, Constructor, Factory, FactoryExt, Map, constructor};
pub use policy::DuplicatePolicy;
pub use registry::{Entry, EntryView, FactoryRegistry, Registration};
pub use shared::SharedRegistry;
