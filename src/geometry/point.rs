use std::fmt;

use serde::{
    Deserialize,
    Serialize
};

use crate::geometry::pointiterator::PointIterator;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    x: f64,
    y: f64
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(pair: (f64, f64)) -> Point2D {
        Point2D::new(pair.0, pair.1)
    }
}

/// 兩位小數輸出，與 point dump 檔案格式一致
impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// PointSet
// ─────────────────────────────────────────────────────────────────────────────
//
// 有序的點集合，允許重複點。順序只影響輸出顯示，不影響擬合與三角形搜尋。

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point2D>
}

impl PointSet {
    pub fn new() -> PointSet {
        PointSet { points: Vec::new() }
    }

    pub fn from_points(points: Vec<Point2D>) -> PointSet {
        PointSet { points }
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> PointSet {
        PointSet {
            points: pairs.iter().map(|&pair| Point2D::from(pair)).collect()
        }
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Point2D> {
        self.points.get(index)
    }

    pub fn add_point(&mut self, x: f64, y: f64) {
        self.points.push(Point2D::new(x, y));
    }

    /// 移除指定位置的點；index 超出範圍時不做任何事（回傳 `None`）
    pub fn remove_point_by_index(&mut self, index: usize) -> Option<Point2D> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    pub fn iter(&self) -> PointIterator<'_> {
        PointIterator::new(&self.points)
    }

    pub fn to_vec(&self) -> Vec<Point2D> {
        self.points.clone()
    }
}

impl From<Vec<Point2D>> for PointSet {
    fn from(points: Vec<Point2D>) -> PointSet {
        PointSet::from_points(points)
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = Point2D;
    type IntoIter = PointIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_point_appends_in_order() {
        let mut set = PointSet::new();
        set.add_point(1.0, 2.0);
        set.add_point(3.0, 4.0);
        set.add_point(1.0, 2.0);

        assert_eq!(set.len(), 3);
        assert_eq!(set.get(0), Some(&Point2D::new(1.0, 2.0)));
        assert_eq!(set.get(2), Some(&Point2D::new(1.0, 2.0)));
    }

    #[test]
    fn remove_point_by_index_mutates_caller_set() {
        let mut set = PointSet::from_pairs(&[(2.0, 2.0), (3.0, 4.5), (6.0, 4.0)]);

        let removed = set.remove_point_by_index(1);

        assert_eq!(removed, Some(Point2D::new(3.0, 4.5)));
        assert_eq!(set.points(), &[Point2D::new(2.0, 2.0), Point2D::new(6.0, 4.0)]);
    }

    #[test]
    fn remove_point_out_of_range_is_noop() {
        let mut set = PointSet::from_pairs(&[(2.0, 2.0), (3.0, 4.5)]);

        assert_eq!(set.remove_point_by_index(2), None);
        assert_eq!(set.remove_point_by_index(usize::MAX), None);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Point2D::new(3.0, 4.5).to_string(), "(3.00, 4.50)");
        assert_eq!(Point2D::new(-10.0, -1.0 / 3.0).to_string(), "(-10.00, -0.33)");
    }
}
