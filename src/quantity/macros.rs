/// Define a decimal quantity newtype.
///
/// The quantity (de)serializes as a plain number and displays with the fixed precision
/// followed by the unit suffix. The bare `@define` form leaves formatting to the caller.
macro_rules! quantity {
    (@define $(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[must_use]
        #[derive(
            ::derive_more::Add,
            ::derive_more::AddAssign,
            ::derive_more::FromStr,
            ::derive_more::Sub,
            ::derive_more::SubAssign,
            ::derive_more::Sum,
            ::serde::Deserialize,
            ::serde::Serialize,
            ::std::clone::Clone,
            ::std::marker::Copy,
            ::std::cmp::Eq,
            ::std::cmp::Ord,
            ::std::cmp::PartialEq,
            ::std::cmp::PartialOrd,
            ::std::default::Default,
            ::std::hash::Hash,
        )]
        pub struct $name(#[serde(with = "rust_decimal::serde::float")] pub ::rust_decimal::Decimal);

        #[allow(dead_code)]
        impl $name {
            pub const ZERO: Self = Self(::rust_decimal::Decimal::ZERO);

            pub fn is_negative(self) -> bool {
                self.0 < ::rust_decimal::Decimal::ZERO
            }
        }

        impl ::std::ops::Mul<::rust_decimal::Decimal> for $name {
            type Output = Self;

            fn mul(self, rhs: ::rust_decimal::Decimal) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl ::std::ops::Div<::rust_decimal::Decimal> for $name {
            type Output = Self;

            fn div(self, rhs: ::rust_decimal::Decimal) -> Self::Output {
                Self(self.0 / rhs)
            }
        }
    };

    ($(#[$meta:meta])* $name:ident, suffix: $suffix:literal, precision: $precision:literal) => {
        quantity!(@define $(#[$meta])* $name);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{:.*} {}", $precision, self.0, $suffix)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(formatter, "{:?}{}", self.0, $suffix)
            }
        }
    };

}

/// Implement the commutative product of two quantities.
macro_rules! implement_mul {
    ($lhs:ty, $rhs:ty, $output:ident) => {
        impl ::std::ops::Mul<$rhs> for $lhs {
            type Output = $output;

            fn mul(self, rhs: $rhs) -> Self::Output {
                $output(self.0 * rhs.0)
            }
        }

        impl ::std::ops::Mul<$lhs> for $rhs {
            type Output = $output;

            fn mul(self, rhs: $lhs) -> Self::Output {
                $output(self.0 * rhs.0)
            }
        }
    };
}
