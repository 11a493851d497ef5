use std::iter::FusedIterator;

use crate::geometry::point::Point2D;

/// 借用點序列的游標，逐一回傳元素；走完之後永遠回傳 `None`，不會繞回開頭。
pub struct PointIterator<'a> {
    points: &'a [Point2D],
    index: usize,
}

impl<'a> PointIterator<'a> {
    pub fn new(points: &'a [Point2D]) -> PointIterator<'a> {
        PointIterator { points, index: 0 }
    }

    pub fn position(&self) -> usize {
        self.index
    }
}

impl<'a> Iterator for PointIterator<'a> {
    type Item = Point2D;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.points.len() {
            let result = Some(self.points[self.index]);
            self.index += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.points.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for PointIterator<'a> {}

impl<'a> FusedIterator for PointIterator<'a> {}
