use std::fmt;

/// Opaque reference to a native texture. The zero value is the sentinel
/// meaning "no resource allocated".
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawTex(usize);

impl RawTex {
    pub const SENTINEL: Self = Self(0);

    pub const fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> usize {
        self.0
    }

    pub const fn is_sentinel(self) -> bool {
        self.0 == 0
    }
}

impl Default for RawTex {
    fn default() -> Self {
        Self::SENTINEL
    }
}

impl fmt::Debug for RawTex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawTex({:#x})", self.0)
    }
}
