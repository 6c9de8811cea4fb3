//! Macro for implementing Display and FromStr for wire enums
//!
//! The DLP API spells enum values as SCREAMING_SNAKE_CASE names. This macro
//! gives an enum a `Display` that prints that name and a case-insensitive
//! `FromStr` that accepts it back.
//!
//! # Example
//!
//! ```rust
//! use dlpscope_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Severity {
//!     Low,
//!     High,
//! }
//!
//! impl_wire_enum_conversions!(Severity {
//!     Low => "LOW",
//!     High => "HIGH",
//! });
//!
//! assert_eq!(Severity::High.to_string(), "HIGH");
//! assert_eq!("low".parse::<Severity>(), Ok(Severity::Low));
//! ```

/// Implements Display and FromStr traits for wire enums
///
/// The string for each variant must be written in upper case; parsing
/// upper-cases its input before matching.
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $($str => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    )),
                }
            }
        }
    };
}
