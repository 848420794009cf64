use std::fmt;

/// Recursion depth of the Koch curve.
///
/// Always within `[Depth::MIN, Depth::MAX]`. Every constructor clamps, so
/// out-of-range input is never rejected.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Depth(u8);

impl Depth {
    pub const MIN: Depth = Depth(0);
    pub const MAX: Depth = Depth(10);

    /// Clamps `n` into `[0, 10]`.
    #[inline]
    pub fn clamped(n: i64) -> Self {
        Self(n.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// One level deeper, saturating at [`Depth::MAX`].
    #[inline]
    pub fn deeper(self) -> Self {
        Self::clamped(self.0 as i64 + 1)
    }

    /// One level shallower, saturating at [`Depth::MIN`].
    #[inline]
    pub fn shallower(self) -> Self {
        Self::clamped(self.0 as i64 - 1)
    }
}

impl From<Depth> for i64 {
    #[inline]
    fn from(d: Depth) -> i64 {
        d.0 as i64
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
