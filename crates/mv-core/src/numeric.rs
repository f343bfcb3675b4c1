use crate::RenderError;

/// Pass `v` through, or reject NaN and infinities.
pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, RenderError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RenderError::NonFinite { what, value: v })
    }
}

/// Closed interval grown point by point. Non-finite samples are skipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn symmetric(half_width: f64) -> Self {
        Self::new(-half_width, half_width)
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Tightest span around the finite values, `None` if there are none.
    pub fn enclosing(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Span>, v| match acc {
                None => Some(Span::new(v, v)),
                Some(s) => Some(Span::new(s.min.min(v), s.max.max(v))),
            })
    }

    pub fn union(self, other: Span) -> Span {
        Span::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Widen by `fraction` of the width on both ends; a degenerate span is
    /// opened to `±0.5` around its value so the axis stays drawable.
    pub fn padded(self, fraction: f64) -> Span {
        let w = self.width();
        if w <= 0.0 {
            return Span::new(self.min - 0.5, self.max + 0.5);
        }
        Span::new(self.min - w * fraction, self.max + w * fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_passes_and_rejects() {
        assert_eq!(ensure_finite(2.5, "time"), Ok(2.5));
        assert!(matches!(
            ensure_finite(f64::INFINITY, "angle"),
            Err(RenderError::NonFinite { what: "angle", .. })
        ));
    }

    #[test]
    fn span_skips_non_finite() {
        let s = Span::enclosing([1.0, f64::NAN, -2.0, f64::INFINITY, 4.0]).unwrap();
        assert_eq!(s, Span::new(-2.0, 4.0));
        assert!(Span::enclosing([f64::NAN]).is_none());
        assert!(Span::enclosing(Vec::new()).is_none());
    }

    #[test]
    fn padded_opens_degenerate_span() {
        let s = Span::new(3.0, 3.0).padded(0.05);
        assert_eq!(s, Span::new(2.5, 3.5));

        let s = Span::new(0.0, 10.0).padded(0.05);
        assert!((s.min + 0.5).abs() < 1e-12);
        assert!((s.max - 10.5).abs() < 1e-12);
    }
}
