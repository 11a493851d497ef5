use nalgebra::{
    DMatrix,
    DVector
};

use crate::fit::fiterror::FitError;
use crate::geometry::point::Point2D;

/// 每列為 (x^degree, x^(degree-1), ..., x, 1)，係數順序與 `Polynomial` 相同（高次在前）
pub fn design_matrix(points: &[Point2D], degree: usize) -> Result<DMatrix<f64>, FitError> {
    if points.is_empty() {
        return Err(FitError::EmptyPointSet);
    }

    let cols = degree + 1;
    Ok(DMatrix::from_fn(points.len(), cols, |i, j| {
        points[i].x().powi((degree - j) as i32)
    }))
}

pub fn target_vector(points: &[Point2D]) -> DVector<f64> {
    DVector::from_iterator(points.len(), points.iter().map(|p| p.y()))
}

/// 顯示用的原始座標矩陣：每列 (x, y, 1)，不可直接餵給 solver
pub fn coordinate_matrix(points: &[Point2D]) -> DMatrix<f64> {
    DMatrix::from_fn(points.len(), 3, |i, j| match j {
        0 => points[i].x(),
        1 => points[i].y(),
        _ => 1.0,
    })
}
