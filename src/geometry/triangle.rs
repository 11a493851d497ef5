use crate::geometry::point::{
    Point2D,
    PointSet
};
use crate::geometry::pointiterator::PointIterator;

// ─────────────────────────────────────────────────────────────────────────────
// Triangle area (Shoelace)
// ─────────────────────────────────────────────────────────────────────────────
//
//   A = | x1(y2 - y3) + x2(y3 - y1) + x3(y1 - y2) | / 2
//
// 共線或重合的點面積為 0。

pub fn triangle_area(p1: &Point2D, p2: &Point2D, p3: &Point2D) -> f64 {
    0.5 * (p1.x() * (p2.y() - p3.y())
         + p2.x() * (p3.y() - p1.y())
         + p3.x() * (p1.y() - p2.y())).abs()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point2D; 3]
}

impl Triangle {
    pub fn new(p1: Point2D, p2: Point2D, p3: Point2D) -> Triangle {
        Triangle { vertices: [p1, p2, p3] }
    }

    pub fn vertices(&self) -> &[Point2D; 3] {
        &self.vertices
    }

    pub fn area(&self) -> f64 {
        triangle_area(&self.vertices[0], &self.vertices[1], &self.vertices[2])
    }

    pub fn iter(&self) -> PointIterator<'_> {
        PointIterator::new(&self.vertices)
    }

    pub fn to_point_set(&self) -> PointSet {
        PointSet::from_points(self.vertices.to_vec())
    }
}

/// 窮舉所有有序 (i, j, k) 組合（含重複索引），保留面積嚴格大於目前最大值者。
///
/// 最大值初始為 0，所以退化三角形永遠不會被選中；同面積時先出現者勝出。
/// 點數少於 3 或找不到正面積的三角形時回傳 `None`。
pub fn best_triangle(points: &[Point2D]) -> Option<Triangle> {
    if points.len() < 3 {
        return None;
    }

    let mut max_area = 0.0;
    let mut best: Option<Triangle> = None;

    for p1 in points {
        for p2 in points {
            for p3 in points {
                let area = triangle_area(p1, p2, p3);
                if area > max_area {
                    max_area = area;
                    best = Some(Triangle::new(*p1, *p2, *p3));
                }
            }
        }
    }

    best
}
