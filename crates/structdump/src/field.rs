//! Definition of the fields that make up a [crate::layout::StructLayout].

/// A single entry of a struct layout, in memory order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// Spacer: advances the read cursor by `size` bytes without reading or rendering anything.
    Skip { size: u64 },
    /// Named field whose `size` bytes are read and rendered as hex.
    Data { name: String, size: u64 },
}

impl FieldSpec {
    /// Name reserved for spacer fields in textual configurations.
    pub const SKIP_NAME: &'static str = "skip";

    pub fn skip(size: u64) -> Self {
        FieldSpec::Skip { size }
    }

    pub fn data(name: impl Into<String>, size: u64) -> Self {
        FieldSpec::Data {
            name: name.into(),
            size,
        }
    }

    /// Builds a field from a `(name, size)` pair, treating the name `skip` as a spacer.
    pub fn named(name: &str, size: u64) -> Self {
        if name == Self::SKIP_NAME {
            FieldSpec::skip(size)
        } else {
            FieldSpec::data(name, size)
        }
    }

    /// Width of the field in bytes.
    pub fn size(&self) -> u64 {
        match self {
            FieldSpec::Skip { size } | FieldSpec::Data { size, .. } => *size,
        }
    }

    /// Name of a data field; `None` for spacers.
    pub fn name(&self) -> Option<&str> {
        match self {
            FieldSpec::Skip { .. } => None,
            FieldSpec::Data { name, .. } => Some(name),
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, FieldSpec::Skip { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_skip_becomes_spacer() {
        assert_eq!(FieldSpec::named("skip", 3), FieldSpec::Skip { size: 3 });
        assert!(FieldSpec::named("skip", 3).is_skip());
    }

    #[test]
    fn test_named_data() {
        let field = FieldSpec::named("hp", 2);
        assert_eq!(field.name(), Some("hp"));
        assert_eq!(field.size(), 2);
        assert!(!field.is_skip());
    }

    #[test]
    fn test_skip_name_is_case_sensitive() {
        assert_eq!(FieldSpec::named("Skip", 1), FieldSpec::data("Skip", 1));
    }
}
