use std::io::Write;
use std::path::Path;

use nalgebra::DMatrix;

use crate::fit::fiterror::FitError;
use crate::fit::pointdump::{
    save_point_dump,
    write_point_dump
};
use crate::geometry::point::{
    Point2D,
    PointSet
};
use crate::math::curve::polynomial::Polynomial;
use crate::math::linalg::designmatrix::coordinate_matrix;
use crate::math::linalg::inverse::invert_square_matrix;

/// 一次擬合的完整結果：選到的點、矩陣、係數、方程式與取樣點
pub struct CurveReport {
    task_name: String,
    candidates: PointSet,
    chosen: PointSet,
    design_matrix: DMatrix<f64>,
    polynomial: Polynomial,
    equation: String,
    samples: Vec<Point2D>,
    output_file: String
}

impl CurveReport {
    pub fn new(
        task_name: String,
        candidates: PointSet,
        chosen: PointSet,
        design_matrix: DMatrix<f64>,
        polynomial: Polynomial,
        samples: Vec<Point2D>,
        output_file: String,
    ) -> CurveReport {
        let equation = polynomial.equation();
        CurveReport {
            task_name,
            candidates,
            chosen,
            design_matrix,
            polynomial,
            equation,
            samples,
            output_file
        }
    }

    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    pub fn candidates(&self) -> &PointSet {
        &self.candidates
    }

    pub fn chosen(&self) -> &PointSet {
        &self.chosen
    }

    pub fn design_matrix(&self) -> &DMatrix<f64> {
        &self.design_matrix
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn samples(&self) -> &[Point2D] {
        &self.samples
    }

    pub fn output_file(&self) -> &str {
        &self.output_file
    }

    /// 選到的點組成的 (x, y, 1) 矩陣
    pub fn start_matrix(&self) -> DMatrix<f64> {
        coordinate_matrix(self.chosen.points())
    }

    /// 只有三個點時 start matrix 才是方陣；其餘情況不求反矩陣，回傳 `None`
    pub fn start_matrix_inverse(&self) -> Option<Result<DMatrix<f64>, FitError>> {
        let start_matrix = self.start_matrix();
        if start_matrix.is_square() {
            Some(invert_square_matrix(&start_matrix))
        } else {
            None
        }
    }

    /// renderer 使用的頂點格式：(x, y, 0) 連續排列
    pub fn vertices(&self) -> Vec<f32> {
        self.samples
            .iter()
            .flat_map(|p| [p.x() as f32, p.y() as f32, 0.0])
            .collect()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), FitError> {
        write_point_dump(writer, &self.equation, &self.samples)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), FitError> {
        save_point_dump(path, &self.equation, &self.samples)
    }

    pub fn save(&self) -> Result<(), FitError> {
        self.save_to(&self.output_file)
    }
}
