//! Layout: the compiled, ordered field list of one struct instance.

use crate::{errors::ConfigError, field::FieldSpec};

/// A field together with its byte offset from the start of the struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutField {
    pub offset: u64,
    pub spec: FieldSpec,
}

/// A compiled struct layout: fields in memory order and the total struct size.
///
/// Use [StructLayout::compile] to build one from [FieldSpec]s. The layout is
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructLayout {
    fields: Vec<LayoutField>,
    total_size: u64,
}

impl StructLayout {
    /// Compiles an ordered field list, assigning cumulative offsets.
    ///
    /// Fails if a data field has zero width or the sizes overflow `u64`.
    pub fn compile(fields: &[FieldSpec]) -> Result<Self, ConfigError> {
        let mut compiled = Vec::with_capacity(fields.len());
        let mut offset = 0u64;

        for field in fields {
            if let FieldSpec::Data { name, size: 0 } = field {
                return Err(ConfigError::EmptyDataField { name: name.clone() });
            }

            compiled.push(LayoutField {
                offset,
                spec: field.clone(),
            });

            offset = offset
                .checked_add(field.size())
                .ok_or(ConfigError::AddressOverflow)?;
        }

        Ok(Self {
            fields: compiled,
            total_size: offset,
        })
    }

    /// Sum of all field sizes, skip fields included.
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn fields(&self) -> &[LayoutField] {
        &self.fields
    }

    /// Number of fields that produce output.
    pub fn data_field_count(&self) -> usize {
        self.fields.iter().filter(|f| !f.spec.is_skip()).count()
    }
}
