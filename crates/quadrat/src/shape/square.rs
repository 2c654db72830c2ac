use quadrat_macro_tools::Fields;

use crate::math::{axis::AxisDirection, point::Point, vector::Vector, FloatNum};

use super::{CenterPoint, ComputeArea, ProjectionOnAxis};

// axis aligned square, anchored by its top left corner
// side length is stored verbatim, the area is never cached
#[derive(Clone, Debug, Fields)]
#[r]
#[w(set)]
pub struct Square {
    top_left: Point,
    side_length: FloatNum,
}

impl Square {
    pub fn new(top_left: impl Into<Point>, side_length: FloatNum) -> Self {
        Self {
            top_left: top_left.into(),
            side_length,
        }
    }

    pub fn translate(&mut self, vector: &Vector) {
        self.top_left += vector;
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        let (left, right) = self.projection_on_axis(AxisDirection::X);
        let (top, bottom) = self.projection_on_axis(AxisDirection::Y);
        (left..=right).contains(&point.x()) && (top..=bottom).contains(&point.y())
    }
}

impl From<(FloatNum, FloatNum, FloatNum)> for Square {
    fn from((top_left_x, top_left_y, side_length): (FloatNum, FloatNum, FloatNum)) -> Self {
        Self::new((top_left_x, top_left_y), side_length)
    }
}

impl ComputeArea for Square {
    #[inline]
    fn compute_area(&self) -> FloatNum {
        self.side_length * self.side_length
    }
}

impl CenterPoint for Square {
    fn center_point(&self) -> Point {
        let half_side = self.side_length * 0.5;
        self.top_left + Vector::new(half_side, half_side)
    }
}

impl ProjectionOnAxis for Square {
    fn projection_on_axis(&self, axis: AxisDirection) -> (FloatNum, FloatNum) {
        use AxisDirection::*;
        match axis {
            X => (self.top_left.x(), self.top_left.x() + self.side_length),
            Y => (self.top_left.y(), self.top_left.y() + self.side_length),
        }
    }
}
