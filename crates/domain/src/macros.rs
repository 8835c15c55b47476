//! Macro for implementing Display and FromStr for configuration enums
//!
//! Configuration enums are read from environment variables and config files
//! as lowercase strings. This macro gives them one consistent, case-insensitive
//! conversion in both directions.
//!
//! # Example
//!
//! ```rust
//! use messenger_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Gender {
//!     Female,
//!     Male,
//! }
//!
//! impl_domain_enum_conversions!(Gender {
//!     Female => "female",
//!     Male => "male",
//! });
//!
//! assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
//! ```

/// Implements Display and FromStr traits for configuration enums
///
/// This macro generates:
/// - Display trait: converts enum variants to their lowercase strings
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// Parse errors carry the enum name and the rejected input.
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
