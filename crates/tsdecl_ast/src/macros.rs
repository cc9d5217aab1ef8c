//! Declarative macros that generate the kind-dispatch code for AST nodes.

/// Implement [`AstNode`](crate::node::AstNode) for concrete node structs.
///
/// Each entry names the struct and the pattern of kinds it may carry. The
/// same pattern backs `deserialize_kind`, which every struct's `kind` field
/// decodes through, so a nested node cannot carry a foreign `Kind`.
macro_rules! impl_ast_node {
    ($($ty:ty => $pat:pat $(if $guard:expr)?),* $(,)?) => {
        $(
            impl $ty {
                #[doc(hidden)]
                pub fn deserialize_kind<'de, D: serde::Deserializer<'de>>(
                    deserializer: D,
                ) -> Result<$crate::syntax_kind::SyntaxKind, D::Error> {
                    $crate::interchange::deserialize_node_kind::<Self, D>(deserializer)
                }
            }

            impl $crate::node::AstNode for $ty {
                #[inline]
                fn kind(&self) -> $crate::syntax_kind::SyntaxKind {
                    self.kind
                }

                #[inline]
                fn accepts(kind: $crate::syntax_kind::SyntaxKind) -> bool {
                    matches!(kind, $pat $(if $guard)?)
                }
            }
        )*
    };
}

/// Declare a tagged-variant node enum.
///
/// From one list of `Variant(Type)` entries this generates the enum itself,
/// `From` conversions, its `AstNode` impl, and serde impls. Serialization is
/// transparent (the wrapped node already writes its own `Kind`); decoding
/// reads `Kind` first and hands the value to the one variant that accepts it.
macro_rules! kind_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident($ty:ty),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $($(#[$vmeta])* $variant($ty),)+
        }

        $(
            impl From<$ty> for $name {
                #[inline]
                fn from(node: $ty) -> Self {
                    $name::$variant(node)
                }
            }
        )+

        impl $crate::node::AstNode for $name {
            fn kind(&self) -> $crate::syntax_kind::SyntaxKind {
                match self {
                    $($name::$variant(node) => $crate::node::AstNode::kind(node),)+
                }
            }

            fn accepts(kind: $crate::syntax_kind::SyntaxKind) -> bool {
                false $(|| <$ty as $crate::node::AstNode>::accepts(kind))+
            }
        }

        impl $name {
            /// Names of the variants accepting `kind`. A well-formed enum
            /// returns at most one.
            pub fn variants_accepting(kind: $crate::syntax_kind::SyntaxKind) -> Vec<&'static str> {
                let mut found = Vec::new();
                $(
                    if <$ty as $crate::node::AstNode>::accepts(kind) {
                        found.push(stringify!($variant));
                    }
                )+
                found
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                tsdecl_core::ensure_sufficient_stack(|| match self {
                    $($name::$variant(node) => serde::Serialize::serialize(node, serializer),)+
                })
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                use serde::de::Error as _;

                tsdecl_core::ensure_sufficient_stack(|| -> Result<Self, D::Error> {
                    let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                    let kind = $crate::interchange::read_kind(&value).map_err(D::Error::custom)?;
                    $(
                        if <$ty as $crate::node::AstNode>::accepts(kind) {
                            return serde_json::from_value::<$ty>(value)
                                .map($name::$variant)
                                .map_err(D::Error::custom);
                        }
                    )+
                    Err(D::Error::custom($crate::interchange::InterchangeError::UnexpectedKind {
                        kind,
                        expected: stringify!($name),
                    }))
                })
            }
        }
    };
}
