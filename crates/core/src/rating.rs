//! Customer rating summary of a product.

use serde::Serialize;

use crate::value_object::ValueObject;

/// Highest possible average rating.
pub const MAX_RATE: f64 = 5.0;

/// Normalized rating: average `rate` in `[0, 5]` and number of reviews.
///
/// Catalog feeds disagree on the rating shape; every shape is reduced to this
/// one at load time so filtering and sorting see a single representation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct Rating {
    rate: f64,
    count: u64,
}

impl ValueObject for Rating {}

impl Rating {
    /// Build a rating, clamping `rate` into `[0, 5]`. Non-finite rates become 0.
    pub fn new(rate: f64, count: u64) -> Self {
        let rate = if rate.is_finite() { rate.clamp(0.0, MAX_RATE) } else { 0.0 };
        Self { rate, count }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Whole stars to draw for this rating (`rate` rounded half away from zero).
    pub fn stars(&self) -> usize {
        self.rate.round() as usize
    }

    /// `"4.3 ★ • 214 reviews"`.
    pub fn label(&self) -> String {
        format!("{:.1} ★ • {} reviews", self.rate, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_clamped_into_range() {
        assert_eq!(Rating::new(7.2, 1).rate(), 5.0);
        assert_eq!(Rating::new(-1.0, 1).rate(), 0.0);
        assert_eq!(Rating::new(f64::NAN, 3).rate(), 0.0);
    }

    #[test]
    fn label_and_stars() {
        let rating = Rating::new(4.3, 214);
        assert_eq!(rating.label(), "4.3 ★ • 214 reviews");
        assert_eq!(rating.stars(), 4);
        assert_eq!(Rating::new(4.6, 0).stars(), 5);
    }
}
