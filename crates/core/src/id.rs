//! Strongly-typed sequential identifiers.
//!
//! Every entity kind gets its own id newtype so a `ProductId` can never be
//! passed where a `SaleId` is expected, even though both are plain counters.

/// Identifier issued by a [`Repository`](crate::Repository) counter.
///
/// Issued ids start at 1 and only grow; zero and negative raw values are
/// representable (they come from user input) but never issued.
pub trait SequentialId:
    Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug + core::fmt::Display
{
    /// Wrap a raw counter value.
    fn from_raw(raw: i64) -> Self;

    /// Raw counter value.
    fn raw(self) -> i64;

    /// Whether this value could ever have been issued.
    fn is_issuable(self) -> bool {
        self.raw() > 0
    }
}

/// Declare a sequential id newtype.
///
/// ```ignore
/// shopdesk_core::sequential_id!(ProductId, "ProductId");
/// ```
#[macro_export]
macro_rules! sequential_id {
    ($t:ident, $name:literal) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $t(i64);

        impl $t {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl $crate::SequentialId for $t {
            fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            fn raw(self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl ::core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| $crate::DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}
