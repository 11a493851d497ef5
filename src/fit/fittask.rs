use log::info;
use serde::{
    Deserialize,
    Serialize
};

use crate::fit::curvereport::CurveReport;
use crate::fit::fiterror::FitError;
use crate::geometry::point::PointSet;
use crate::geometry::triangle::best_triangle;
use crate::math::curve::sampler::SampleRange;
use crate::math::linalg::designmatrix::design_matrix;
use crate::math::linalg::leastsquares::solve_coefficients;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointSelection {
    /// 全部點都拿去擬合
    #[default]
    All,
    /// 先挑面積最大的三角形，只用那三個頂點
    BestTriangle
}

#[derive(Debug, Clone)]
pub struct FitTask {
    name: String,
    degree: usize,
    points: PointSet,
    plane: Option<PointSet>,
    selection: PointSelection,
    sample_range: SampleRange,
    output_file: String
}

impl FitTask {
    pub fn new(
        name: String,
        degree: usize,
        points: PointSet,
        selection: PointSelection,
        sample_range: SampleRange,
        output_file: String,
    ) -> FitTask {
        FitTask {
            name,
            degree,
            points,
            plane: None,
            selection,
            sample_range,
            output_file
        }
    }

    /// 附上只供顯示的參考點（不參與擬合）
    pub fn with_plane(mut self, plane: PointSet) -> FitTask {
        self.plane = Some(plane);
        self
    }

    /// 二次：在工作點集中挑最大三角形，再擬合拋物線
    pub fn parabola() -> FitTask {
        let plane = PointSet::from_pairs(&[
            (2.0, 2.0),
            (2.0, 4.0),
            (4.0, 2.0),
            (4.0, 4.0),
            (3.0, 4.5),
            (6.0, 2.0),
            (6.0, 4.0),
        ]);
        let points = PointSet::from_pairs(&[(2.0, 2.0), (3.0, 4.5), (6.0, 4.0)]);
        FitTask::new(
            "parabola".to_owned(),
            2,
            points,
            PointSelection::BestTriangle,
            SampleRange::default(),
            "parabola_points.txt".to_owned(),
        ).with_plane(plane)
    }

    /// 三次：四個固定點直接擬合
    pub fn cubic() -> FitTask {
        let points = PointSet::from_pairs(&[(1.0, 2.0), (2.0, 3.0), (3.0, 5.0), (4.0, 10.0)]);
        FitTask::new(
            "cubic".to_owned(),
            3,
            points,
            PointSelection::All,
            SampleRange::default(),
            "cubic_points.txt".to_owned(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut PointSet {
        &mut self.points
    }

    pub fn plane(&self) -> Option<&PointSet> {
        self.plane.as_ref()
    }

    pub fn selection(&self) -> PointSelection {
        self.selection
    }

    pub fn sample_range(&self) -> SampleRange {
        self.sample_range
    }

    pub fn output_file(&self) -> &str {
        &self.output_file
    }

    pub fn select_points(&self) -> Result<PointSet, FitError> {
        match self.selection {
            PointSelection::All => Ok(self.points.clone()),
            PointSelection::BestTriangle => best_triangle(self.points.points())
                .map(|triangle| triangle.to_point_set())
                .ok_or(FitError::NoTriangle(self.points.len()))
        }
    }

    pub fn run(&self) -> Result<CurveReport, FitError> {
        let chosen = self.select_points()?;
        let matrix = design_matrix(chosen.points(), self.degree)?;
        let polynomial = solve_coefficients(chosen.points(), self.degree)?;
        let samples = self.sample_range.sample(&polynomial)?;
        info!(
            "task '{}': degree {} on {} points, {} samples",
            self.name,
            self.degree,
            chosen.len(),
            samples.len()
        );

        Ok(CurveReport::new(
            self.name.clone(),
            self.points.clone(),
            chosen,
            matrix,
            polynomial,
            samples,
            self.output_file.clone(),
        ))
    }
}
