//! Macros for defining unit conversions.

/// Generates `From` implementations for every pair of units within a dimension.
#[macro_export]
macro_rules! impl_unit_conversions {
    ($unit:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<$crate::Quantity<$first>> for $crate::Quantity<$rest> {
                fn from(value: $crate::Quantity<$first>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl From<$crate::Quantity<$rest>> for $crate::Quantity<$first> {
                fn from(value: $crate::Quantity<$rest>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}
