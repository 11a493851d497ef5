use log::error;
use nalgebra::DMatrix;

use crate::fit::fiterror::FitError;

/// 直接求反矩陣，只給顯示／驗證用；擬合流程走 QR，不經過這裡。
pub fn invert_square_matrix(matrix: &DMatrix<f64>) -> Result<DMatrix<f64>, FitError> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        error!("matrix must be square to compute its inverse, got {}x{}", rows, cols);
        return Err(FitError::NotSquare { rows, cols });
    }

    matrix.clone().try_inverse().ok_or_else(|| {
        error!("{}x{} matrix is singular", rows, cols);
        FitError::Singular
    })
}
