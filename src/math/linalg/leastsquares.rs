use log::{
    debug,
    warn
};
use nalgebra::{
    DMatrix,
    DVector
};

use crate::fit::fiterror::FitError;
use crate::geometry::point::Point2D;
use crate::math::curve::polynomial::Polynomial;
use crate::math::linalg::designmatrix::{
    design_matrix,
    target_vector
};

// ─────────────────────────────────────────────────────────────────────────────
// Least squares: min ||A·c - b||
// ─────────────────────────────────────────────────────────────────────────────
//
// 主要路徑：Householder QR
//   A = Q·R  →  R·c = Qᵀ·b，上三角回代
//
// 列數少於欄數（under-determined）或 R 的對角線數值上為 0（rank deficient）時，
// 改用 SVD 求最小範數解。

fn rank_tolerance(max_abs: f64, rows: usize, cols: usize) -> f64 {
    max_abs * rows.max(cols) as f64 * f64::EPSILON
}

fn solve_by_qr(a: &DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
    let (rows, cols) = a.shape();
    if rows < cols {
        return None;
    }

    let qr = a.clone().qr();
    let r = qr.r();
    let diagonal = r.diagonal();
    let max_abs = diagonal.amax();
    let tolerance = rank_tolerance(max_abs, rows, cols);
    if max_abs == 0.0 || diagonal.iter().any(|d| d.abs() <= tolerance) {
        return None;
    }

    let qtb = qr.q().tr_mul(b);
    r.solve_upper_triangular(&qtb)
}

fn solve_by_svd(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, FitError> {
    let (rows, cols) = a.shape();
    let svd = a.clone().svd(true, true);
    let tolerance = rank_tolerance(svd.singular_values.max(), rows, cols);
    svd.solve(b, tolerance)
        .map_err(|message| FitError::Solve(message.to_owned()))
}

pub fn least_squares(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, FitError> {
    if a.nrows() == 0 {
        return Err(FitError::EmptyPointSet);
    }
    if a.nrows() != b.len() {
        return Err(FitError::Solve(format!(
            "design matrix has {} rows but target has {} values",
            a.nrows(),
            b.len()
        )));
    }

    match solve_by_qr(a, b) {
        Some(solution) => Ok(solution),
        None => {
            warn!(
                "{}x{} system is rank deficient or under-determined, falling back to SVD",
                a.nrows(),
                a.ncols()
            );
            solve_by_svd(a, b)
        }
    }
}

/// 擬合 `degree` 次多項式，回傳係數高次在前
pub fn solve_coefficients(points: &[Point2D], degree: usize) -> Result<Polynomial, FitError> {
    let a = design_matrix(points, degree)?;
    let b = target_vector(points);
    let solution = least_squares(&a, &b)?;
    debug!("degree {} fit on {} points: {:?}", degree, points.len(), solution.as_slice());
    Ok(Polynomial::new(solution.iter().copied().collect()))
}

/// 殘差的 2-norm：||A·c - b||
pub fn residual_norm(points: &[Point2D], polynomial: &Polynomial) -> Result<f64, FitError> {
    let a = design_matrix(points, polynomial.degree())?;
    let b = target_vector(points);
    let c = DVector::from_column_slice(polynomial.coefs());
    Ok((a * c - b).norm())
}
