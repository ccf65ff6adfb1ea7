// File: crates/atlas-core/src/scale.rs
// Summary: Linear value-to-pixel scale and data extents.

/// Minimum and maximum of the finite values, or `None` when there are none.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.into_iter().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}

/// Maps a data domain linearly onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Scale whose domain is the extent of `values`; `None` for empty input.
    pub fn from_values<I>(values: I, range: (f64, f64)) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        extent(values).map(|domain| Self::new(domain, range))
    }

    /// Widen the domain so that it also covers `other`.
    pub fn union_domain(mut self, other: (f64, f64)) -> Self {
        self.domain = (self.domain.0.min(other.0), self.domain.1.max(other.1));
        self
    }

    #[inline]
    fn span(&self) -> f64 {
        self.domain.1 - self.domain.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.span().abs() < 1e-12
    }

    /// Data value to pixel. A collapsed domain lands in the middle of the range.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.is_degenerate() {
            return (r0 + r1) * 0.5;
        }
        (v - self.domain.0) / self.span() * (r1 - r0) + r0
    }

    /// Pixel back to data value.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (r0, r1) = self.range;
        if (r1 - r0).abs() < 1e-12 {
            return self.domain.0;
        }
        (px - r0) / (r1 - r0) * self.span() + self.domain.0
    }
}
