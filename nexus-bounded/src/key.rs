//! Handle type for nodes in a bounded arena.
//!
//! Nodes link to each other through keys rather than pointers. A reserved
//! sentinel (`NONE`) marks the end of a chain, which keeps a node at
//! `value + one integer` instead of `value + Option<integer>`.

/// A copyable node handle with a sentinel "none" value.
///
/// Implemented for the unsigned integer types. Containers default to `u32`,
/// which caps capacity at `u32::MAX` nodes.
///
/// # Example
///
/// ```
/// use nexus_bounded::Key;
///
/// let key: u32 = 42;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// assert_eq!(u32::from_usize(7).as_usize(), 7);
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug {
    /// Sentinel value representing "no node".
    ///
    /// Never handed out by storage, so it can terminate a chain.
    const NONE: Self;

    /// Creates a key from a slot position.
    fn from_usize(val: usize) -> Self;

    /// Returns the slot position this key refers to.
    fn as_usize(self) -> usize;

    /// Largest number of nodes addressable with this key type.
    ///
    /// Slot positions run `0..max_nodes()`, so the sentinel is never a
    /// valid position.
    #[inline]
    fn max_nodes() -> usize {
        Self::NONE.as_usize()
    }

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    debug_assert!(val < <$ty>::MAX as usize, "key out of range");
                    val as Self
                }

                #[inline]
                fn as_usize(self) -> usize {
                    // Saturate so u64 keys on 32-bit targets still report a
                    // usable `max_nodes`.
                    usize::try_from(self).unwrap_or(usize::MAX)
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u8, u16, u32, u64, usize);
