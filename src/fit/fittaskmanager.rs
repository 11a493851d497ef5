use std::rc::Rc;

use serde::Deserialize;

use crate::fit::fittask::{
    FitTask,
    PointSelection
};
use crate::geometry::point::PointSet;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::{
    ManagerError,
    parse_json_value
};
use crate::math::curve::sampler::SampleRange;

pub const MAX_DEGREE: usize = 10;

#[derive(Deserialize)]
struct FitTaskJsonProp {
    name: String,
    degree: usize,
    points: Vec<(f64, f64)>,
    #[serde(default)]
    plane: Option<Vec<(f64, f64)>>,
    #[serde(default)]
    selection: PointSelection,
    #[serde(default)]
    sample_range: SampleRange,
    #[serde(default)]
    output_file: Option<String>
}

fn get_fit_task_from_json(json_value: serde_json::Value) -> Result<Rc<FitTask>, ManagerError> {
    let prop: FitTaskJsonProp = parse_json_value(json_value)?;

    if prop.degree == 0 || prop.degree > MAX_DEGREE {
        return Err(ManagerError::invalid_task(
            &prop.name,
            format!("degree must be between 1 and {}, got {}", MAX_DEGREE, prop.degree),
        ));
    }
    if prop.points.is_empty() {
        return Err(ManagerError::invalid_task(&prop.name, "no points given"));
    }
    let step = prop.sample_range.x_increment();
    if !step.is_finite() || step <= 0.0 {
        return Err(ManagerError::invalid_task(
            &prop.name,
            format!("x_increment must be positive, got {}", step),
        ));
    }
    let (x_start, x_end) = (prop.sample_range.x_start(), prop.sample_range.x_end());
    if !x_start.is_finite() || !x_end.is_finite() {
        return Err(ManagerError::invalid_task(
            &prop.name,
            format!("sample range must be finite, got [{}, {}]", x_start, x_end),
        ));
    }

    let output_file = prop.output_file
        .unwrap_or_else(|| format!("{}_points.txt", prop.name));
    let mut task = FitTask::new(
        prop.name,
        prop.degree,
        PointSet::from_pairs(&prop.points),
        prop.selection,
        prop.sample_range,
        output_file,
    );
    if let Some(plane) = prop.plane {
        task = task.with_plane(PointSet::from_pairs(&plane));
    }
    Ok(Rc::new(task))
}


pub struct FitTaskManager;


impl FitTaskManager {
    pub fn new() -> Manager<Rc<FitTask>> {
        Manager::new(get_fit_task_from_json)
    }

    /// 內建的 parabola 與 cubic 兩個工作
    pub fn builtin() -> Manager<Rc<FitTask>> {
        let manager = Self::new();
        for task in [FitTask::parabola(), FitTask::cubic()] {
            manager.insert(task.name().to_owned(), Rc::new(task));
        }
        manager
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::fit::fiterror::FitError;
    use crate::geometry::point::Point2D;

    #[test]
    fn builtin_registers_parabola_and_cubic() {
        let manager = FitTaskManager::builtin();

        assert_eq!(manager.names(), vec!["cubic".to_owned(), "parabola".to_owned()]);
        assert_eq!(manager.get("parabola").unwrap().degree(), 2);
        assert_eq!(manager.get("cubic").unwrap().output_file(), "cubic_points.txt");
    }

    #[test]
    fn task_from_json_with_defaults() {
        let manager = FitTaskManager::new();
        manager.insert_obj_from_json(json!({
            "name": "line",
            "degree": 1,
            "points": [[0.0, 1.0], [1.0, 3.0]]
        })).unwrap();

        let task = manager.get("line").unwrap();
        assert_eq!(task.selection(), PointSelection::All);
        assert_eq!(task.sample_range(), SampleRange::default());
        assert_eq!(task.output_file(), "line_points.txt");
        assert_eq!(task.points().get(1), Some(&Point2D::new(1.0, 3.0)));
        assert!(task.plane().is_none());
    }

    #[test]
    fn task_from_json_with_every_field() {
        let manager = FitTaskManager::new();
        manager.insert_obj_from_json(json!({
            "name": "wide",
            "degree": 2,
            "points": [[2.0, 2.0], [3.0, 4.5], [6.0, 4.0], [4.0, 4.0]],
            "plane": [[0.0, 0.0]],
            "selection": "BestTriangle",
            "sample_range": { "x_start": -1.0, "x_end": 1.0, "x_increment": 0.5 },
            "output_file": "wide.txt"
        })).unwrap();

        let task = manager.get("wide").unwrap();
        assert_eq!(task.selection(), PointSelection::BestTriangle);
        assert_eq!(task.sample_range(), SampleRange::new(-1.0, 1.0, 0.5));
        assert_eq!(task.plane().map(|p| p.len()), Some(1));
        assert_eq!(task.run().unwrap().samples().len(), 5);
    }

    #[test]
    fn invalid_degree_is_rejected() {
        let manager = FitTaskManager::new();
        let result = manager.insert_obj_from_json(json!({
            "name": "flat",
            "degree": 0,
            "points": [[0.0, 1.0]]
        }));

        assert!(matches!(result, Err(ManagerError::InvalidTaskError { .. })));
        assert!(!manager.contains("flat"));
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let manager = FitTaskManager::new();
        let result = manager.insert_obj_from_json(json!({
            "name": "stuck",
            "degree": 1,
            "points": [[0.0, 1.0], [1.0, 2.0]],
            "sample_range": { "x_start": 0.0, "x_end": 1.0, "x_increment": 0.0 }
        }));

        assert!(matches!(result, Err(ManagerError::InvalidTaskError { .. })));
    }

    #[test]
    fn step_absorbed_by_range_fails_at_run() {
        let manager = FitTaskManager::new();
        manager.insert_obj_from_json(json!({
            "name": "far",
            "degree": 1,
            "points": [[0.0, 1.0], [1.0, 2.0]],
            "sample_range": { "x_start": 1e16, "x_end": 1.0000000000000004e16, "x_increment": 1.0 }
        })).unwrap();

        let result = manager.get("far").unwrap().run();
        assert!(matches!(result, Err(FitError::InvalidSampleStep(_))));
    }

    #[test]
    fn unknown_selection_is_a_parse_error() {
        let manager = FitTaskManager::new();
        let result = manager.insert_obj_from_json(json!({
            "name": "odd",
            "degree": 1,
            "points": [[0.0, 1.0]],
            "selection": "Random"
        }));

        assert!(matches!(result, Err(ManagerError::JsonParseError(_))));
    }
}
