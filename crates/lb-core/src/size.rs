//! Font size input policy.
//!
//! Size comes from a free-form UI field. It is never rejected: anything that
//! is not a finite number becomes the default, and the result is clamped.

pub const DEFAULT_FONT_SIZE: f32 = 48.0;
pub const MIN_FONT_SIZE: f32 = 8.0;
pub const MAX_FONT_SIZE: f32 = 800.0;

/// Default and bounds applied to raw size input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizePolicy {
    pub default: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for SizePolicy {
    fn default() -> Self {
        Self {
            default: DEFAULT_FONT_SIZE,
            min: MIN_FONT_SIZE,
            max: MAX_FONT_SIZE,
        }
    }
}

impl SizePolicy {
    /// Parse a size field, substituting the default for non-numeric input.
    pub fn parse(&self, input: &str) -> f32 {
        let raw = match input.trim().parse::<f32>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                log::debug!("size: {input:?} is not numeric, using {}", self.default);
                self.default
            }
        };
        self.clamp(raw)
    }

    /// Clamp into `[min, max]`. An inverted range resolves to `max`, and a
    /// NaN bound is ignored.
    pub fn clamp(&self, size: f32) -> f32 {
        size.max(self.min).min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_uses_default() {
        let p = SizePolicy::default();
        assert_eq!(p.parse("abc"), 48.0);
        assert_eq!(p.parse(""), 48.0);
        assert_eq!(p.parse("NaN"), 48.0);
        assert_eq!(p.parse("inf"), 48.0);
    }

    #[test]
    fn out_of_range_is_clamped() {
        let p = SizePolicy::default();
        assert_eq!(p.parse("1000"), 800.0);
        assert_eq!(p.parse("0"), 8.0);
        assert_eq!(p.parse("-20"), 8.0);
    }

    #[test]
    fn in_range_passes_through() {
        let p = SizePolicy::default();
        assert_eq!(p.parse(" 72 "), 72.0);
        assert_eq!(p.parse("12.5"), 12.5);
    }

    #[test]
    fn inverted_or_nan_bounds_do_not_panic() {
        let inverted = SizePolicy {
            default: 48.0,
            min: 900.0,
            max: 800.0,
        };
        assert_eq!(inverted.parse("x"), 800.0);
        assert_eq!(inverted.parse("850"), 800.0);

        let nan = SizePolicy {
            default: 48.0,
            min: f32::NAN,
            max: f32::NAN,
        };
        assert_eq!(nan.parse("12"), 12.0);
    }
}
