use std::ops::Deref;

use crate::math::{axis::AxisDirection, point::Point, FloatNum};

pub mod elastic;
pub mod square;

pub trait ComputeArea {
    fn compute_area(&self) -> FloatNum;
}

impl<T, Z> ComputeArea for T
where
    T: Deref<Target = Z>,
    Z: ComputeArea,
{
    fn compute_area(&self) -> FloatNum {
        self.deref().compute_area()
    }
}

pub trait CenterPoint {
    fn center_point(&self) -> Point;
}

impl<T, Z> CenterPoint for T
where
    T: Deref<Target = Z>,
    Z: CenterPoint,
{
    fn center_point(&self) -> Point {
        self.deref().center_point()
    }
}

pub trait ProjectionOnAxis {
    // (min, max) of the shape along the axis
    fn projection_on_axis(&self, axis: AxisDirection) -> (FloatNum, FloatNum);
}

impl<T, Z> ProjectionOnAxis for T
where
    T: Deref<Target = Z>,
    Z: ProjectionOnAxis,
{
    fn projection_on_axis(&self, axis: AxisDirection) -> (FloatNum, FloatNum) {
        self.deref().projection_on_axis(axis)
    }
}

pub use elastic::ElasticSquare;
pub use square::Square;
