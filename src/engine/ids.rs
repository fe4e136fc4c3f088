//! Unique identifier generation.

use uuid::Uuid;

/// Source of identifiers for newly created entries.
///
/// Implementations must return a value not returned before within the
/// process lifetime.
pub trait IdGenerator {
    /// Returns a fresh identifier.
    fn generate(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &G {
    fn generate(&self) -> String {
        (**self).generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_generator_unique() {
        let ids: HashSet<String> = (0..100).map(|_| UuidGenerator.generate()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_uuid_generator_format() {
        let id = UuidGenerator.generate();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
