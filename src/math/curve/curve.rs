use crate::geometry::point::Point2D;

/// y = f(x) 形式的曲線
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn point_at(&self, x: f64) -> Point2D {
        Point2D::new(x, self.value(x))
    }
}
