use core::fmt;

/// One reading of the time-stamp counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TscSample(u64);

impl TscSample {
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TscSample {
    #[inline]
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<TscSample> for u64 {
    #[inline]
    fn from(sample: TscSample) -> Self {
        sample.0
    }
}

/// Plain decimal, no separators.
impl fmt::Display for TscSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
