use thiserror::Error;

use crate::math::FloatNum;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ShapeError {
    // a negative target area has no real square root
    #[error("can't assign area {0} to a square, target area must be non negative")]
    InvalidAreaAssignment(FloatNum),
}
