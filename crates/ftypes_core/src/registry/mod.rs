use std::sync::OnceLock;

use crate::{FtypeId, TypeDescriptor, types};

static BUILTIN: OnceLock<TypeRegistry> = OnceLock::new();

/// Process-wide registry of the built-in types, built on first use.
pub fn registry() -> &'static TypeRegistry {
	BUILTIN.get_or_init(TypeRegistry::builtin)
}

/// Single-writer table used while registering descriptors.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
	slots: [Option<TypeDescriptor>; FtypeId::COUNT],
}

impl RegistryBuilder {
	/// Create an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register one descriptor.
	///
	/// # Panics
	///
	/// Panics when a descriptor is already registered under the same
	/// identifier; that is a build defect, not a runtime condition.
	pub fn register(&mut self, descriptor: TypeDescriptor) -> &mut Self {
		let slot = &mut self.slots[descriptor.id.index()];
		if let Some(first) = slot {
			panic!("duplicate registration for {} (first: {:?})", descriptor.id, first.pretty_name);
		}
		tracing::trace!(ftype = %descriptor.id, wire_size = descriptor.wire_size, "type registered");
		*slot = Some(descriptor);
		self
	}

	/// Freeze into a read-only registry.
	pub fn build(self) -> TypeRegistry {
		let registry = TypeRegistry { slots: self.slots };
		tracing::debug!(types = registry.len(), "type registry built");
		registry
	}
}

/// Immutable identifier -> descriptor table.
#[derive(Debug)]
pub struct TypeRegistry {
	slots: [Option<TypeDescriptor>; FtypeId::COUNT],
}

impl TypeRegistry {
	/// Build a registry holding every built-in type.
	pub fn builtin() -> Self {
		let mut builder = RegistryBuilder::new();
		types::register_builtin(&mut builder);
		builder.build()
	}

	/// Descriptor for `id`.
	///
	/// # Panics
	///
	/// Panics when `id` was never registered; identifiers are a closed set, so
	/// a miss means the registry was assembled incorrectly.
	pub fn lookup(&self, id: FtypeId) -> &TypeDescriptor {
		match self.get(id) {
			Some(descriptor) => descriptor,
			None => panic!("no descriptor registered for {id}"),
		}
	}

	/// Descriptor for `id`, if registered.
	pub fn get(&self, id: FtypeId) -> Option<&TypeDescriptor> {
		self.slots[id.index()].as_ref()
	}

	/// Registered descriptors in identifier order.
	pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
		self.slots.iter().flatten()
	}

	/// Number of registered descriptors.
	pub fn len(&self) -> usize {
		self.iter().count()
	}

	/// Whether nothing is registered.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[cfg(test)]
mod tests;
