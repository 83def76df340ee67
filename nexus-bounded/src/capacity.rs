//! Validated container capacity.
//!
//! Every container is sized exactly once, at construction. Constructors accept
//! anything implementing [`IntoCapacity`], so a capacity can come straight
//! from code (`8`, `8u16`), or from text read out of a config file or an
//! environment variable (`"8"`).
//!
//! | Input | Accepted when | Otherwise |
//! |-------|---------------|-----------|
//! | integer | `> 0` | [`CapacityError::InvalidBound`] |
//! | text | parses as an integer `> 0` | `InvalidType` / `InvalidBound` |
//! | float | never | [`CapacityError::InvalidType`] |

use core::fmt;
use core::num::{IntErrorKind, NonZeroUsize};
use core::str::FromStr;

use crate::error::CapacityError;

/// A fixed, strictly positive element count.
///
/// # Example
///
/// ```
/// use nexus_bounded::{Capacity, CapacityError, IntoCapacity};
///
/// assert_eq!(Capacity::new(5).unwrap().get(), 5);
/// assert_eq!("12".parse::<Capacity>().unwrap().get(), 12);
/// assert!(matches!(0i32.into_capacity(), Err(CapacityError::InvalidBound { .. })));
/// assert_eq!(2.5f64.into_capacity(), Err(CapacityError::InvalidType));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// Capacity used by the containers' `Default` impls.
    pub const DEFAULT: Self = match NonZeroUsize::new(16) {
        Some(n) => Self(n),
        None => unreachable!(),
    };

    /// Validates `value` as a capacity.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`IntoCapacity::into_capacity`].
    pub fn new(value: impl IntoCapacity) -> Result<Self, CapacityError> {
        value.into_capacity()
    }

    /// Returns the capacity as a `usize`.
    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Checks that the capacity does not exceed `max`.
    pub(crate) fn ensure_at_most(self, max: usize) -> Result<Self, CapacityError> {
        if self.get() > max {
            return Err(CapacityError::InvalidBound {
                value: self.get() as i128,
                max,
            });
        }
        Ok(self)
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(n: NonZeroUsize) -> Self {
        Self(n)
    }
}

impl From<Capacity> for usize {
    fn from(c: Capacity) -> Self {
        c.get()
    }
}

impl FromStr for Capacity {
    type Err = CapacityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.into_capacity()
    }
}

/// Conversion into a validated [`Capacity`].
///
/// Implemented for all primitive integers, both float types, `&str`,
/// `String`, `NonZeroUsize` and `Capacity`.
pub trait IntoCapacity {
    /// Validates `self` as a capacity.
    ///
    /// # Errors
    ///
    /// - [`CapacityError::InvalidType`] if the value is not an integer
    /// - [`CapacityError::InvalidBound`] if the value is `<= 0` or does not
    ///   fit in `usize`
    fn into_capacity(self) -> Result<Capacity, CapacityError>;
}

fn from_wide(value: i128) -> Result<Capacity, CapacityError> {
    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .map(Capacity)
        .ok_or(CapacityError::bound(value))
}

macro_rules! impl_into_capacity_for_int {
    ($($ty:ty),*) => {
        $(
            impl IntoCapacity for $ty {
                #[inline]
                fn into_capacity(self) -> Result<Capacity, CapacityError> {
                    from_wide(self as i128)
                }
            }
        )*
    };
}

impl_into_capacity_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl IntoCapacity for u128 {
    fn into_capacity(self) -> Result<Capacity, CapacityError> {
        from_wide(i128::try_from(self).unwrap_or(i128::MAX))
    }
}

impl IntoCapacity for f32 {
    fn into_capacity(self) -> Result<Capacity, CapacityError> {
        Err(CapacityError::InvalidType)
    }
}

impl IntoCapacity for f64 {
    fn into_capacity(self) -> Result<Capacity, CapacityError> {
        Err(CapacityError::InvalidType)
    }
}

impl IntoCapacity for &str {
    fn into_capacity(self) -> Result<Capacity, CapacityError> {
        match self.trim().parse::<i128>() {
            Ok(value) => from_wide(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Err(CapacityError::bound(i128::MAX)),
                IntErrorKind::NegOverflow => Err(CapacityError::bound(i128::MIN)),
                _ => Err(CapacityError::InvalidType),
            },
        }
    }
}

impl IntoCapacity for &String {
    fn into_capacity(self) -> Result<Capacity, CapacityError> {
        self.as_str().into_capacity()
    }
}

impl IntoCapacity for String {
    fn into_capacity(self) -> Result<Capacity, CapacityError> {
        self.as_str().into_capacity()
    }
}

impl IntoCapacity for NonZeroUsize {
    fn into_capacity(self) -> Result<Capacity, CapacityError> {
        Ok(Capacity(self))
    }
}

impl IntoCapacity for Capacity {
    fn into_capacity(self) -> Result<Capacity, CapacityError> {
        Ok(self)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Capacity, IntoCapacity};
    use serde::de::{self, Deserializer, Visitor};
    use serde::{Deserialize, Serialize, Serializer};

    impl Serialize for Capacity {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_u64(self.get() as u64)
        }
    }

    struct CapacityVisitor;

    impl Visitor<'_> for CapacityVisitor {
        type Value = Capacity;

        fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("a positive integer capacity")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Capacity, E> {
            v.into_capacity().map_err(E::custom)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Capacity, E> {
            v.into_capacity().map_err(E::custom)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Capacity, E> {
            v.into_capacity().map_err(E::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Capacity, E> {
            v.into_capacity().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Capacity {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(CapacityVisitor)
        }
    }
}
