//! Flag types for the AST.
//!
//! Bit values follow TypeScript's `NodeFlags` and `ModifierFlags` so the
//! serialized `Flags` field of a variable declaration list reads the same as
//! the compiler's.

use crate::syntax_kind::SyntaxKind;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags::bitflags! {
    /// Flags for AST nodes, matching TypeScript's NodeFlags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u32 {
        const NONE                = 0;
        const LET                 = 1 << 0;
        const CONST               = 1 << 1;
        const USING               = 1 << 2;
        const AWAIT_USING         = Self::CONST.bits() | Self::USING.bits();
        const NESTED_NAMESPACE    = 1 << 3;
        const SYNTHESIZED         = 1 << 4;
        const NAMESPACE           = 1 << 5;
        const GLOBAL_AUGMENTATION = 1 << 11;

        const BLOCK_SCOPED = Self::LET.bits() | Self::CONST.bits() | Self::USING.bits();
    }
}

bitflags::bitflags! {
    /// Modifier flags for declarations, matching TypeScript's ModifierFlags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u32 {
        const NONE      = 0;
        const PUBLIC    = 1 << 0;
        const PRIVATE   = 1 << 1;
        const PROTECTED = 1 << 2;
        const READONLY  = 1 << 3;
        const OVERRIDE  = 1 << 4;
        const EXPORT    = 1 << 5;
        const ABSTRACT  = 1 << 6;
        const AMBIENT   = 1 << 7;
        const STATIC    = 1 << 8;
        const ACCESSOR  = 1 << 9;
        const ASYNC     = 1 << 10;
        const DEFAULT   = 1 << 11;
        const CONST     = 1 << 12;
        const IN        = 1 << 13;
        const OUT       = 1 << 14;

        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const PARAMETER_PROPERTY_MODIFIER = Self::ACCESSIBILITY_MODIFIER.bits() | Self::READONLY.bits() | Self::OVERRIDE.bits();
    }
}

bitflags::bitflags! {
    /// Scanner facts about the current token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TokenFlags: u16 {
        const NONE                 = 0;
        const PRECEDING_LINE_BREAK = 1 << 0;
        const UNTERMINATED         = 1 << 2;
        const SCIENTIFIC           = 1 << 4;
        const HEX_SPECIFIER        = 1 << 6;
        const IS_INVALID           = 1 << 13;
    }
}

impl ModifierFlags {
    /// The flag for a modifier keyword, or `NONE` for any other kind.
    pub fn from_kind(kind: SyntaxKind) -> ModifierFlags {
        match kind {
            SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
            SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
            SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
            SyntaxKind::ReadonlyKeyword => ModifierFlags::READONLY,
            SyntaxKind::OverrideKeyword => ModifierFlags::OVERRIDE,
            SyntaxKind::ExportKeyword => ModifierFlags::EXPORT,
            SyntaxKind::AbstractKeyword => ModifierFlags::ABSTRACT,
            SyntaxKind::DeclareKeyword => ModifierFlags::AMBIENT,
            SyntaxKind::StaticKeyword => ModifierFlags::STATIC,
            SyntaxKind::AccessorKeyword => ModifierFlags::ACCESSOR,
            SyntaxKind::AsyncKeyword => ModifierFlags::ASYNC,
            SyntaxKind::DefaultKeyword => ModifierFlags::DEFAULT,
            SyntaxKind::ConstKeyword => ModifierFlags::CONST,
            SyntaxKind::InKeyword => ModifierFlags::IN,
            SyntaxKind::OutKeyword => ModifierFlags::OUT,
            _ => ModifierFlags::NONE,
        }
    }
}

impl Serialize for NodeFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for NodeFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(NodeFlags::from_bits_retain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_flag_values() {
        assert_eq!(NodeFlags::LET.bits(), 1);
        assert_eq!(NodeFlags::CONST.bits(), 2);
        assert_eq!(NodeFlags::NAMESPACE.bits(), 32);
        assert_eq!(NodeFlags::GLOBAL_AUGMENTATION.bits(), 2048);
    }

    #[test]
    fn test_modifier_flags_from_kind() {
        assert_eq!(ModifierFlags::from_kind(SyntaxKind::DeclareKeyword), ModifierFlags::AMBIENT);
        assert_eq!(ModifierFlags::from_kind(SyntaxKind::StringKeyword), ModifierFlags::NONE);
        assert!(ModifierFlags::ACCESSIBILITY_MODIFIER.contains(ModifierFlags::PROTECTED));
    }
}
