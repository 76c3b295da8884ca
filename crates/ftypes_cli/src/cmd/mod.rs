/// Literal comparison command.
pub mod cmp;
/// Literal parse and render command.
pub mod parse;
/// Byte-range extraction command.
pub mod slice;
/// Registered type listing command.
pub mod types;

pub(crate) mod util;
