//! Field-value type engine for protocol analysis.
//!
//! Every decoded protocol field is a [`FieldValue`]: a type identifier plus a
//! type-specific payload. Operations on values (parse, render, raw access,
//! ordering, intersection, slicing) are dispatched through the immutable
//! [`TypeRegistry`] to the owning type's [`TypeDescriptor`].

mod bytes;
mod codec;
mod compare;
mod descriptor;
mod error;
mod ftype;
mod options;
mod registry;
mod resolve;
mod slice;
mod types;
mod value;

/// Comparison and masking engine entry points.
pub use compare::{bitwise_and, cmp_order, contains, eq, ge, gt, le, lt, ne};
/// Per-type descriptor record and the trait each field type implements.
pub use descriptor::{FieldType, TypeDescriptor};
/// Error and result aliases.
pub use error::{FtypeError, Result};
/// Type identifiers, operation markers, and rendering selectors.
pub use ftype::{FieldDisplay, FtypeId, Operation, ReprStyle};
/// Literal parsing limits and switches.
pub use options::ParseOptions;
/// Registry construction and lookup.
pub use registry::{RegistryBuilder, TypeRegistry, registry};
/// Hostname resolution collaborators.
pub use resolve::{HostsResolver, NoResolver, Resolver};
/// Slice operator and multi-range selectors.
pub use slice::{DRange, DRangeNode, RangeEnd, slice, slice_drange};
/// Address-with-prefix payloads.
pub use types::prefix::{AddrPrefix, Ipv4Prefix, Ipv6Prefix};
/// Field value container.
pub use value::FieldValue;
