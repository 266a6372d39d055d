//! Compact arena identifiers.
//!
//! Every id is a `u32` index into the arena of whichever table produced it.
//! Ids from different tables must not be mixed.

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Create an id from an arena index
            pub fn new(index: usize) -> Self {
                Self(index as u32)
            }

            /// Get the index into the arena
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

arena_id!(
    /// Identifier of a source file in the declaration table.
    FileId
);
arena_id!(
    /// Identifier of a declaration node.
    DeclId
);
arena_id!(
    /// Identifier of a property or method slot.
    MemberId
);
arena_id!(
    /// Identifier of a resolved symbol.
    SymbolId
);
arena_id!(
    /// Identifier of a resolved type reference.
    TypeId
);
