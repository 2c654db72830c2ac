use quadrat::prelude::*;

fn main() -> Result<(), ShapeError> {
    let square1 = Square::new((0., 0.), 10.);
    let square2 = Square::new((5.5, 7.25), 9.5);

    dbg!(square1.compute_area());
    dbg!(square2.top_left());
    dbg!(square2.center_point());

    let mut square = Square::new((8., 7.), 15.);
    println!("area is {}", square.compute_area());

    square.set_side_length(9.7);
    println!("area is {}", square.compute_area());

    let mut elastic = ElasticSquare::new((10., 10.), 10.);
    println!("area is {}", elastic.compute_area());

    elastic.set_area(144.)?;
    println!("side length is {}", elastic.side_length());

    Ok(())
}
