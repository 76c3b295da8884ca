use std::cmp::Ordering;

use crate::codec::{quoted_len, write_quoted};
use crate::types::byte_array::contains_run;
use crate::{FieldDisplay, FieldType, FieldValue, FtypeError, FtypeId, Operation, ParseOptions, RegistryBuilder, ReprStyle, Resolver, Result, TypeDescriptor};

struct StringType;

static STRING: StringType = StringType;

pub(crate) fn register(builder: &mut RegistryBuilder) {
	builder.register(TypeDescriptor::new("Character string", 0, &STRING));
}

fn text_of(value: &FieldValue) -> &str {
	value.as_str().unwrap_or_default()
}

impl FieldType for StringType {
	fn ftype(&self) -> FtypeId {
		FtypeId::String
	}

	fn parse_text(&self, input: &str, _options: &ParseOptions, _resolver: &dyn Resolver) -> Result<FieldValue> {
		Ok(FieldValue::string(input))
	}

	/// Wire strings end at the first NUL; the rest must be UTF-8.
	fn parse_bytes(&self, bytes: &[u8]) -> Result<FieldValue> {
		let end = bytes.iter().position(|byte| *byte == 0).unwrap_or(bytes.len());
		let text = std::str::from_utf8(&bytes[..end]).map_err(|err| FtypeError::InvalidUtf8 {
			valid_up_to: err.valid_up_to(),
		})?;
		Ok(FieldValue::string(text))
	}

	fn repr_len(&self, value: &FieldValue, style: ReprStyle, _display: FieldDisplay) -> usize {
		match style {
			ReprStyle::Display => text_of(value).len(),
			ReprStyle::Filter => quoted_len(text_of(value)),
		}
	}

	fn render(&self, value: &FieldValue, style: ReprStyle, _display: FieldDisplay) -> String {
		let text = text_of(value);
		match style {
			ReprStyle::Display => text.to_owned(),
			ReprStyle::Filter => {
				let mut out = String::with_capacity(quoted_len(text));
				write_quoted(&mut out, text);
				out
			}
		}
	}

	fn cmp_order(&self, a: &FieldValue, b: &FieldValue) -> Ordering {
		text_of(a).as_bytes().cmp(text_of(b).as_bytes())
	}

	fn contains(&self, a: &FieldValue, b: &FieldValue) -> Result<bool> {
		Ok(contains_run(text_of(a).as_bytes(), text_of(b).as_bytes()))
	}

	fn supports(&self, op: Operation) -> bool {
		op != Operation::BitwiseAnd
	}
}

#[cfg(test)]
mod tests;
