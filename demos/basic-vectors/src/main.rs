use std::f64::consts::FRAC_PI_2;

use log::info;
use tubevec::{
    math::{Axis, Vector, VectorError},
    vector,
};

fn main() -> Result<(), VectorError> {
    env_logger::init();

    let a = vector![1, 0, 0];
    let b = vector![0, 1, 0];

    info!("a + b = {}", &a + &b);
    info!("a . b = {}", a.dot(&b));
    info!("a x b = {}", a.cross(&b)?);

    let (angle, axis) = a.angle(&b)?;
    info!("angle from a to b = {angle} about {axis}");

    let mut rotated = vector![1, 0];
    rotated.rotate(FRAC_PI_2).rotate_about(FRAC_PI_2, Axis::X);
    info!("[1 0] rotated about Z then X = {rotated}");

    // RUST_LOG=trace shows the length reconciliation going on here.
    let truncated = vector![1, 2, 3].added([&vector![1, 2, 3, 4, 5]]);
    let unit = Vector::zeros(3).normalized();
    info!("truncated sum = {truncated}, zero unit = {unit}");

    if let Err(error) = vector![1, 2].angle(&vector![1, 2, 3]) {
        info!("expected failure: {error}");
    }

    Ok(())
}
