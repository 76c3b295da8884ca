use crate::{FtypeId, Operation, RegistryBuilder, TypeRegistry, registry};

#[test]
fn builtin_registers_every_identifier() {
	let reg = registry();
	assert_eq!(reg.len(), FtypeId::COUNT);
	for id in FtypeId::ALL {
		let descriptor = reg.lookup(id);
		assert_eq!(descriptor.id, id);
		assert_eq!(descriptor.name(), id.name());
		assert!(!descriptor.pretty_name.is_empty());
	}
	let ids: Vec<_> = reg.iter().map(|descriptor| descriptor.id).collect();
	assert_eq!(ids, FtypeId::ALL.to_vec());
}

#[test]
fn builtin_wire_sizes() {
	let reg = registry();
	assert_eq!(reg.lookup(FtypeId::UInt16).wire_size, 2);
	assert_eq!(reg.lookup(FtypeId::Ether).wire_size, 6);
	assert_eq!(reg.lookup(FtypeId::Bytes).wire_size, 0);
	assert_eq!(reg.lookup(FtypeId::Ipv4).wire_size, 4);
	assert_eq!(reg.lookup(FtypeId::Ipv6).wire_size, 16);
	assert_eq!(reg.lookup(FtypeId::Ipv6).pretty_name, "IPv6 address");
}

#[test]
fn supports_reflects_optional_operations() {
	let reg = registry();
	assert!(reg.lookup(FtypeId::Ipv6).supports(Operation::BitwiseAnd));
	assert!(!reg.lookup(FtypeId::Ipv6).supports(Operation::Contains));
	assert!(reg.lookup(FtypeId::Bytes).supports(Operation::Contains));
	assert!(!reg.lookup(FtypeId::String).supports(Operation::BitwiseAnd));
	assert!(!reg.lookup(FtypeId::UInt8).supports(Operation::Contains));
	assert!(reg.lookup(FtypeId::UInt8).supports(Operation::Slice));
}

#[test]
fn global_registry_is_shared() {
	assert!(std::ptr::eq(registry(), registry()));
}

#[test]
fn empty_registry_get_misses() {
	let reg = RegistryBuilder::new().build();
	assert!(reg.is_empty());
	assert!(reg.get(FtypeId::Ipv6).is_none());
}

#[test]
#[should_panic(expected = "no descriptor registered for FT_IPv6")]
fn lookup_of_unregistered_panics() {
	let reg = RegistryBuilder::new().build();
	let _ = reg.lookup(FtypeId::Ipv6);
}

#[test]
#[should_panic(expected = "duplicate registration for FT_IPv6")]
fn duplicate_registration_panics() {
	let descriptor = *TypeRegistry::builtin().lookup(FtypeId::Ipv6);
	let mut builder = RegistryBuilder::new();
	builder.register(descriptor);
	builder.register(descriptor);
}
