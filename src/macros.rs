/// Lowest code reserved for exchange-specific values in the IAB code lists.
pub const EXCHANGE_SPECIFIC_MIN: i64 = 500;

/// Declare an open integer code list.
///
/// The generated type is a transparent newtype over `i64`, so unknown and
/// exchange-specific codes decode and re-encode unchanged. Registered codes get
/// an associated constant and a label.
macro_rules! code_list {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $label:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: Self = Self($value);
            )*

            /// Human-readable name of a registered code.
            pub fn label(self) -> Option<&'static str> {
                match self.0 {
                    $( $value => Some($label), )*
                    _ => None,
                }
            }

            /// Whether the code falls in the range reserved for exchange-specific use.
            pub fn is_exchange_specific(self) -> bool {
                self.0 >= $crate::macros::EXCHANGE_SPECIFIC_MIN
            }
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                Self(code)
            }
        }

        impl From<$name> for i64 {
            fn from(code: $name) -> i64 {
                code.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.label() {
                    Some(label) => write!(f, "{} ({})", label, self.0),
                    None => write!(f, "{}", self.0),
                }
            }
        }
    };
}
