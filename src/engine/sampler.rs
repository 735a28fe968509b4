//! Reading colors back from a rendered wheel.

use log::trace;

use super::wheel::WheelSurface;
use super::{Color, Point};

/// Returns the color of the pixel containing `point`.
///
/// Coordinates are floored to the pixel grid and clamped to the surface, so
/// a point on the far edge (`x == size`) reads the last column. Points inside
/// the square but outside the circle are not rejected; they read the
/// transparent background, which is black.
pub fn sample_at(surface: &WheelSurface, point: Point) -> Color {
    let x = to_pixel_index(point.x, surface.size());
    let y = to_pixel_index(point.y, surface.size());

    let color = surface
        .pixel(x, y)
        .map_or(Color::BLACK, |px| {
            let [r, g, b, _] = px.0;
            Color::new(r, g, b)
        });

    trace!("sampled {color} at ({x}, {y})");
    color
}

fn to_pixel_index(coord: f32, size: u32) -> u32 {
    let max = size.saturating_sub(1);
    // NaN and negatives land on 0
    (coord.floor().max(0.0) as u32).min(max)
}
