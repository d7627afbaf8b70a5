use forge_factory::{
	AnyInstance, Args, ConstructError, Constructible, FactoryExt, FactoryRegistry, Registration,
	Value, args, constructor,
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// Records whatever it was constructed with.
#[derive(Debug)]
struct FactoryStub {
	args: Vec<Value>,
}

impl Constructible for FactoryStub {
	fn construct(args: &Args) -> Result<Self, ConstructError> {
		Ok(Self {
			args: args.to_vec(),
		})
	}
}

type Registry = FactoryRegistry<FactoryStub>;

#[fixture]
fn registry() -> Registry {
	FactoryRegistry::new()
}

fn stub() -> forge_factory::Constructor<FactoryStub> {
	constructor::<FactoryStub>()
}

mod index {
	use super::*;
	use pretty_assertions::assert_eq;

	#[rstest]
	fn returns_insertion_position(mut registry: Registry) {
		registry.register("stub1", stub(), args![]).unwrap();
		registry.register("stub2", stub(), args![]).unwrap();

		assert_eq!(registry.index("stub1"), Some(0));
		assert_eq!(registry.index("stub2"), Some(1));
	}

	#[rstest]
	fn missing_key_has_no_position(mut registry: Registry) {
		registry.register("stub1", stub(), args![]).unwrap();

		assert_eq!(registry.index("stub2"), None);
	}
}

mod get {
	use super::*;

	#[rstest]
	fn returns_distinct_instances(mut registry: Registry) {
		registry.register("stub1", stub(), args![]).unwrap();
		registry.register("stub2", stub(), args![]).unwrap();

		let first = registry.get("stub1").unwrap();
		let second = registry.get("stub2").unwrap();
		assert!(!std::ptr::eq(first, second));
	}

	#[rstest]
	fn lookup_is_exact(mut registry: Registry) {
		registry.register("stub", stub(), args![]).unwrap();

		assert!(registry.get("Stub").is_none());
		assert!(registry.get("stub ").is_none());
		assert!(registry.get("stub").is_some());
	}
}

mod all {
	use super::*;
	use pretty_assertions::assert_eq;

	#[rstest]
	fn returns_entries_in_order(mut registry: Registry) {
		registry.register("stub1", stub(), args![]).unwrap();
		registry.register("stub2", stub(), args![]).unwrap();

		let entries = registry.all();

		assert_eq!(entries.len(), 2);
		assert_eq!(entries[0].key, "stub1");
		assert_eq!(entries[1].key, "stub2");
		assert!(!std::ptr::eq(entries[0].instance, entries[1].instance));
	}

	#[rstest]
	fn empty_registry(registry: Registry) {
		assert!(registry.all().is_empty());
	}
}

mod register_many {
	use super::*;
	use pretty_assertions::assert_eq;

	#[rstest]
	fn registers_each_with_own_args(mut registry: Registry) {
		registry
			.register_many([
				("stub1", stub(), args!["arg1", 2, true]),
				("stub2", stub(), args!["arg2", 3, false]),
			])
			.unwrap();

		let first = registry.get("stub1").unwrap();
		assert_eq!(first.args, args!["arg1", 2, true].into_vec());

		let second = registry.get("stub2").unwrap();
		assert_eq!(second.args, args!["arg2", 3, false].into_vec());
	}

	#[rstest]
	fn empty_input_returns_same_registry(mut registry: Registry) {
		registry.register("stub1", stub(), args![1]).unwrap();
		registry.register("stub2", stub(), args![2]).unwrap();
		let keys_before: Vec<String> = registry.keys().map(str::to_owned).collect();

		let before: *const Registry = &registry;
		let returned = registry
			.register_many(Vec::<Registration<FactoryStub>>::new())
			.unwrap();
		assert!(std::ptr::eq(before, &*returned));

		assert_eq!(registry.keys().collect::<Vec<_>>(), keys_before);
		assert_eq!(registry.get("stub1").unwrap().args, vec![Value::Int(1)]);
	}

	#[rstest]
	fn mixes_factory_types(mut registry: Registry) {
		let fixed = |_: &Args| -> Result<FactoryStub, ConstructError> {
			Ok(FactoryStub {
				args: vec![Value::from("fixed")],
			})
		};

		registry
			.register_many([
				Registration::new("ctor", stub(), args![1]),
				Registration::new("closure", fixed, args![2]),
			])
			.unwrap();

		assert_eq!(registry.get("ctor").unwrap().args, vec![Value::Int(1)]);
		assert_eq!(registry.get("closure").unwrap().args, vec![Value::from("fixed")]);
		assert_eq!(registry.args("closure"), Some(&args![2]));
	}
}

mod register {
	use super::*;
	use pretty_assertions::assert_eq;

	#[rstest]
	fn forwards_args_to_constructor(mut registry: Registry) {
		registry.register("stub", stub(), args!["arg1", 2, true]).unwrap();

		let instance = registry.get("stub").unwrap();
		assert_eq!(
			instance.args,
			vec![Value::Str("arg1".into()), Value::Int(2), Value::Bool(true)]
		);
	}

	#[rstest]
	fn returns_the_new_instance(mut registry: Registry) {
		let returned: *const FactoryStub = registry.register("stub", stub(), args![7]).unwrap();

		assert!(std::ptr::eq(returned, registry.get("stub").unwrap()));
	}

	#[rstest]
	fn construction_runs_at_registration(mut registry: Registry) {
		let instance = registry.register("stub", stub(), args!["now"]).unwrap();
		instance.args.push(Value::Null);

		assert_eq!(registry.get("stub").unwrap().args.len(), 2);
	}
}

mod unregister {
	use super::*;
	use pretty_assertions::assert_eq;

	#[rstest]
	fn removes_the_entry(mut registry: Registry) {
		registry.register("stub", stub(), args![]).unwrap();
		assert_eq!(registry.index("stub"), Some(0));
		assert!(registry.get("stub").is_some());

		registry.unregister("stub");

		assert_eq!(registry.index("stub"), None);
		assert!(registry.get("stub").is_none());
	}

	#[rstest]
	fn returns_same_registry(mut registry: Registry) {
		registry.register("stub", stub(), args![]).unwrap();

		let before: *const Registry = &registry;
		let returned: *const Registry = registry.unregister("stub");
		assert!(std::ptr::eq(before, returned));
	}

	#[rstest]
	fn unknown_key_is_noop(mut registry: Registry) {
		registry.register("stub", stub(), args![]).unwrap();

		registry.unregister("other");

		assert_eq!(registry.len(), 1);
	}

	#[rstest]
	fn reregistering_appends(mut registry: Registry) {
		registry.register("a", stub(), args![]).unwrap();
		registry.register("b", stub(), args![]).unwrap();

		registry.unregister("a");
		registry.register("a", stub(), args![]).unwrap();

		assert_eq!(registry.keys().collect::<Vec<_>>(), ["b", "a"]);
	}
}

/// Registries of unrelated types go through `AnyInstance`.
#[test]
fn heterogeneous_registry() {
	#[derive(Debug, PartialEq)]
	struct Port(i64);

	impl Constructible for Port {
		fn construct(args: &Args) -> Result<Self, ConstructError> {
			args.int(0).map(Port)
		}
	}

	let mut registry: FactoryRegistry<AnyInstance> = FactoryRegistry::new();
	registry
		.register_many([
			Registration::new("stub", constructor::<FactoryStub>().into_any(), args!["x"]),
			Registration::new("port", constructor::<Port>().into_any(), args![8080]),
		])
		.unwrap();

	assert_eq!(registry.get_as::<Port>("port"), Some(&Port(8080)));
	assert!(registry.get_as::<Port>("stub").is_none());

	let err = registry
		.register("bad", constructor::<Port>().into_any(), args!["not a port"])
		.unwrap_err();
	assert_eq!(
		err.into_construct(),
		Some(ConstructError::ArgType {
			index: 0,
			expected: "int",
			found: "string",
		})
	);
	assert_eq!(registry.index("bad"), None);
}
