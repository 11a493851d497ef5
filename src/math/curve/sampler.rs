use serde::{
    Deserialize,
    Serialize
};

use crate::fit::fiterror::FitError;
use crate::geometry::point::Point2D;
use crate::math::curve::curve::Curve;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    x_start: f64,
    x_end: f64,
    x_increment: f64
}

impl SampleRange {
    pub fn new(x_start: f64, x_end: f64, x_increment: f64) -> SampleRange {
        SampleRange { x_start, x_end, x_increment }
    }

    pub fn x_start(&self) -> f64 {
        self.x_start
    }

    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    pub fn x_increment(&self) -> f64 {
        self.x_increment
    }

    pub fn sample<C: Curve + ?Sized>(&self, curve: &C) -> Result<Vec<Point2D>, FitError> {
        sample_curve(curve, self.x_start, self.x_end, self.x_increment)
    }
}

impl Default for SampleRange {
    fn default() -> SampleRange {
        SampleRange::new(-10.0, 10.0, 1.0)
    }
}

/// x 從 `x_start` 起每次累加 `x_increment`，直到超過 `x_end`（含端點）。
///
/// 累加造成的浮點漂移不做修正，最後一點可能略小於 `x_end`。
/// 端點必須是有限值；步長相對於 x 太小、加上去 x 不變時回傳錯誤。
pub fn sample_curve<C: Curve + ?Sized>(
    curve: &C,
    x_start: f64,
    x_end: f64,
    x_increment: f64,
) -> Result<Vec<Point2D>, FitError> {
    if !x_increment.is_finite() || x_increment <= 0.0 {
        return Err(FitError::InvalidSampleStep(x_increment));
    }
    if !x_start.is_finite() || !x_end.is_finite() {
        return Err(FitError::InvalidSampleRange { x_start, x_end });
    }

    let mut points = Vec::new();
    let mut x = x_start;
    while x <= x_end {
        points.push(curve.point_at(x));
        let next = x + x_increment;
        if next == x {
            return Err(FitError::InvalidSampleStep(x_increment));
        }
        x = next;
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::curve::polynomial::Polynomial;

    #[test]
    fn integer_step_covers_both_ends() {
        let p = Polynomial::new(vec![1.0, -2.0, 0.5]);
        let points = sample_curve(&p, -10.0, 10.0, 1.0).unwrap();

        assert_eq!(points.len(), 21);
        assert_eq!(points[0].x(), -10.0);
        assert_eq!(points[20].x(), 10.0);
        for point in &points {
            assert_relative_eq!(point.y(), p.value(point.x()), epsilon = 1e-12);
        }
    }

    #[test]
    fn default_range_matches_integer_grid() {
        let p = Polynomial::new(vec![1.0, 0.0, 0.0, 0.0]);
        let points = SampleRange::default().sample(&p).unwrap();

        assert_eq!(points.len(), 21);
        assert_relative_eq!(points[0].y(), -1000.0);
        assert_relative_eq!(points[20].y(), 1000.0);
    }

    #[test]
    fn fractional_step_accumulates_without_correction() {
        let p = Polynomial::new(vec![1.0]);
        let points = sample_curve(&p, 0.0, 1.0, 0.1).unwrap();

        // 0.1 累加十次為 0.9999999999999999，仍 <= 1.0
        assert_eq!(points.len(), 11);
        assert!(points[10].x() <= 1.0);
        assert_relative_eq!(points[10].x(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn reversed_range_is_empty() {
        let p = Polynomial::new(vec![1.0]);
        assert!(sample_curve(&p, 5.0, -5.0, 1.0).unwrap().is_empty());
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let p = Polynomial::new(vec![1.0]);

        assert!(matches!(sample_curve(&p, 0.0, 1.0, 0.0), Err(FitError::InvalidSampleStep(_))));
        assert!(matches!(sample_curve(&p, 0.0, 1.0, -1.0), Err(FitError::InvalidSampleStep(_))));
        assert!(matches!(sample_curve(&p, 0.0, 1.0, f64::NAN), Err(FitError::InvalidSampleStep(_))));
    }

    #[test]
    fn step_absorbed_by_large_x_is_rejected() {
        let p = Polynomial::new(vec![1.0]);

        assert!(matches!(
            sample_curve(&p, 1e16, 1e16 + 4.0, 1.0),
            Err(FitError::InvalidSampleStep(_))
        ));
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        let p = Polynomial::new(vec![1.0]);

        assert!(matches!(
            sample_curve(&p, f64::NEG_INFINITY, 0.0, 1.0),
            Err(FitError::InvalidSampleRange { .. })
        ));
        assert!(matches!(
            sample_curve(&p, 0.0, f64::INFINITY, 1.0),
            Err(FitError::InvalidSampleRange { .. })
        ));
        assert!(matches!(
            sample_curve(&p, f64::NAN, 1.0, 1.0),
            Err(FitError::InvalidSampleRange { .. })
        ));
    }

    #[test]
    fn sampling_is_restartable() {
        let p = Polynomial::new(vec![2.0, 1.0]);
        let range = SampleRange::new(-1.0, 1.0, 0.5);

        assert_eq!(range.sample(&p).unwrap(), range.sample(&p).unwrap());
    }
}
