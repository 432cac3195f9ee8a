//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same entity when their identifiers match, even if the
/// rest of their state differs.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison (ignores every attribute but the id).
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Shelf {
        id: u32,
        label: &'static str,
    }

    impl Entity for Shelf {
        type Id = u32;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    #[test]
    fn same_identity_ignores_other_attributes() {
        let a = Shelf { id: 7, label: "fiction" };
        let renamed = Shelf { id: 7, label: "novels" };
        let other = Shelf { id: 8, label: "fiction" };
        assert_ne!(a.label, renamed.label);
        assert!(a.same_identity_as(&renamed));
        assert!(!a.same_identity_as(&other));
    }
}
