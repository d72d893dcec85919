use nalgebra::Vector2;

/// Wrap an angle in degrees into `[min, max)` using modular wrap-around.
///
/// `max - min` is the period; for yaw this is `wrap_degrees(yaw, -180.0, 180.0)`.
pub fn wrap_degrees(value: f32, min: f32, max: f32) -> f32 {
    let period = max - min;
    let wrapped = (value - min).rem_euclid(period) + min;

    // rem_euclid can round up to exactly `period` for tiny negative inputs.
    if wrapped >= max { min } else { wrapped }
}

/// Rotate a planar (XZ) vector by `yaw_degrees` around +Y.
///
/// `x' = x cos - z sin`, `z' = z cos + x sin`.
pub fn rotate_planar(xz: Vector2<f32>, yaw_degrees: f32) -> Vector2<f32> {
    let (sin, cos) = yaw_degrees.to_radians().sin_cos();
    Vector2::new(xz.x * cos - xz.y * sin, xz.y * cos + xz.x * sin)
}
