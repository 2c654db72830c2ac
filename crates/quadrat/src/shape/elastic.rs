use quadrat_macro_tools::Deref;

use crate::error::ShapeError;
use crate::math::{point::Point, FloatNum};

use super::Square;

// square whose area can be assigned, the side length is back derived
#[derive(Clone, Debug, Deref)]
pub struct ElasticSquare {
    #[deref]
    square: Square,
}

impl ElasticSquare {
    pub fn new(top_left: impl Into<Point>, side_length: FloatNum) -> Self {
        let square = Square::new(top_left, side_length);
        Self { square }
    }

    // overwrite the side length so that the next area read yields `area`,
    // up to floating point rounding
    pub fn set_area(&mut self, area: FloatNum) -> Result<&mut Self, ShapeError> {
        if area.is_nan() || area < 0. {
            return Err(ShapeError::InvalidAreaAssignment(area));
        }

        self.square.set_side_length(area.sqrt());

        Ok(self)
    }
}

#[cfg(test)]
mod tests {

    use rand::prelude::*;

    use crate::prelude::*;

    #[test]
    fn test_area_assign_back_derives_side_length() {
        let mut square = ElasticSquare::new((10., 10.), 10.);
        assert_eq!(square.compute_area(), 100.);

        square.set_area(144.).unwrap();
        assert_eq!(square.side_length(), 12.);
    }

    #[test]
    fn test_area_assign_round_trip() {
        let mut rng = rand::thread_rng();
        let mut square = ElasticSquare::new((0., 0.), 1.);

        for _ in 0..100 {
            let area: FloatNum = rng.gen_range(0.0..1.0e6);
            square.set_area(area).unwrap();

            let read_back = square.compute_area();
            assert!((read_back - area).abs() <= area * 1e-9);
        }
    }

    #[test]
    fn test_negative_area_assign_rejected() {
        let mut square = ElasticSquare::new((0., 0.), 3.);

        let result = square.set_area(-25.);
        assert_eq!(result.unwrap_err(), ShapeError::InvalidAreaAssignment(-25.));

        // failed assignment leaves the stored state untouched
        assert_eq!(square.side_length(), 3.);
        assert_eq!(square.compute_area(), 9.);
    }

    #[test]
    fn test_nan_area_assign_rejected() {
        let mut square = ElasticSquare::new((0., 0.), 3.);
        assert!(square.set_area(FloatNum::NAN).is_err());
        assert_eq!(square.side_length(), 3.);
    }

    #[test]
    fn test_side_length_write_through_deref() {
        let mut square = ElasticSquare::new((10., 10.), 10.);

        square.set_side_length(9.7);
        assert_eq!(square.compute_area(), 9.7 * 9.7);

        square.set_area(0.).unwrap();
        assert_eq!(square.side_length(), 0.);
    }

    #[test]
    fn test_shared_square_api_through_deref() {
        let square = ElasticSquare::new((2., 4.), 10.);
        assert_eq!(square.center_point(), Point::new(7., 9.));
        assert!(square.contains_point(&Point::new(3., 5.)));
        assert_eq!(square.projection_on_axis(AxisDirection::Y), (4., 14.));
    }
}
