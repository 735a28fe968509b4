//! Hue wheel rasterization.
//!
//! The wheel is painted with `tiny_skia` (via resvg's re-export) as 360
//! overlapping pie wedges, each filled with a radial gradient running from
//! white at the center, through the fully saturated hue at half radius, to a
//! darkened hue at the rim. The painted pixmap is converted to an
//! [`RgbaImage`] once, which is what the sampler reads from.

use image::{Rgba, RgbaImage};
use log::debug;
use resvg::tiny_skia::{
    self, FillRule, GradientStop, Paint, Path, PathBuilder, Pixmap, RadialGradient, Shader,
    SpreadMode, Transform,
};

use super::{Color, Point, WheelGeometry};
use crate::error::{Error, Result};

/// Each wedge extends this far past its own angle on both sides, so adjacent
/// wedges overlap by one degree and no anti-aliasing seams show.
const WEDGE_HALF_SPAN_DEGREES: f32 = 1.0;

/// Gradient stops as `(fraction of radius, HSL lightness)`; the center stop
/// is plain white.
const SATURATED_STOP: (f32, f32) = (0.5, 0.5);
const RIM_STOP: (f32, f32) = (1.0, 0.25);

// ============================================================================
// WheelSurface
// ============================================================================

/// A rasterized hue wheel.
///
/// Pixels outside the circle are fully transparent, which samples as black.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSurface {
    image: RgbaImage,
    geometry: WheelGeometry,
}

impl WheelSurface {
    pub fn geometry(&self) -> WheelGeometry {
        self.geometry
    }

    pub fn size(&self) -> u32 {
        self.geometry.size
    }

    /// The raw RGBA pixel at integer coordinates, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Renders a `size` x `size` hue wheel.
pub fn render_wheel(size: u32) -> Result<WheelSurface> {
    if size == 0 {
        return Err(Error::EmptySurface);
    }
    let mut pixmap = Pixmap::new(size, size).ok_or(Error::SurfaceTooLarge(size))?;
    let geometry = WheelGeometry::new(size);
    let center = geometry.center();
    let radius = geometry.radius();

    for angle in 0..360u16 {
        let hue = f32::from(angle);
        let (Some(path), Some(shader)) = (
            wedge_path(center, radius, hue),
            wedge_gradient(center, radius, hue),
        ) else {
            continue;
        };

        let paint = Paint {
            shader,
            anti_alias: true,
            ..Paint::default()
        };
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    debug!("rendered {size}x{size} hue wheel");

    Ok(WheelSurface {
        image: pixmap_to_rgba_image(&pixmap),
        geometry,
    })
}

// ============================================================================
// Wedges
// ============================================================================

/// Builds the pie slice for `hue`, spanning one degree either side of it.
fn wedge_path(center: Point, radius: f32, hue: f32) -> Option<Path> {
    let start = (hue - WEDGE_HALF_SPAN_DEGREES).to_radians();
    let end = (hue + WEDGE_HALF_SPAN_DEGREES).to_radians();

    let mut pb = PathBuilder::new();
    pb.move_to(center.x, center.y);
    let (sx, sy) = polar(center, radius, start);
    pb.line_to(sx, sy);
    push_arc(&mut pb, center, radius, start, end);
    pb.close();
    pb.finish()
}

/// Appends a circular arc from `start` to `end` (radians) as a single cubic.
///
/// Accurate to well under a pixel for the small spans used here.
fn push_arc(pb: &mut PathBuilder, center: Point, radius: f32, start: f32, end: f32) {
    let k = 4.0 / 3.0 * ((end - start) / 4.0).tan() * radius;
    let (x0, y0) = polar(center, radius, start);
    let (x1, y1) = polar(center, radius, end);
    pb.cubic_to(
        x0 - k * start.sin(),
        y0 + k * start.cos(),
        x1 + k * end.sin(),
        y1 - k * end.cos(),
        x1,
        y1,
    );
}

fn polar(center: Point, radius: f32, theta: f32) -> (f32, f32) {
    (
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
    )
}

fn wedge_gradient(center: Point, radius: f32, hue: f32) -> Option<Shader<'static>> {
    let origin = tiny_skia::Point::from_xy(center.x, center.y);
    let stops = vec![
        GradientStop::new(0.0, to_skia_color(Color::WHITE)),
        GradientStop::new(SATURATED_STOP.0, to_skia_color(Color::from_hsl(hue, 1.0, SATURATED_STOP.1))),
        GradientStop::new(RIM_STOP.0, to_skia_color(Color::from_hsl(hue, 1.0, RIM_STOP.1))),
    ];
    RadialGradient::new(
        origin,
        origin,
        radius,
        stops,
        SpreadMode::Pad,
        Transform::identity(),
    )
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255)
}

// ============================================================================
// Pixmap Conversion
// ============================================================================

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        let Some(pixel) = pixmap.pixel(x, y) else {
            return Rgba([0, 0, 0, 0]);
        };
        // tiny_skia stores premultiplied alpha
        let (r, g, b, a) = unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
        Rgba([r, g, b, a])
    })
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(render_wheel(0), Err(Error::EmptySurface)));
    }

    #[test]
    fn oversized_surface_is_rejected() {
        let err = render_wheel(u32::MAX).unwrap_err();
        assert!(matches!(err, Error::SurfaceTooLarge(u32::MAX)));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn surface_has_requested_size() {
        let wheel = render_wheel(64).unwrap();
        assert_eq!(wheel.size(), 64);
        assert_eq!(wheel.image().dimensions(), (64, 64));
        assert!(wheel.pixel(63, 63).is_some());
        assert!(wheel.pixel(64, 0).is_none());
    }

    #[test]
    fn corners_stay_transparent() {
        let wheel = render_wheel(100).unwrap();
        for (x, y) in [(0, 0), (99, 0), (0, 99), (99, 99)] {
            assert_eq!(wheel.pixel(x, y).unwrap().0[3], 0, "corner ({x}, {y})");
        }
    }

    #[test]
    fn body_of_wheel_is_opaque() {
        // Close to the center the wedges are thinner than a pixel and only
        // partially cover it, so only check the outer body.
        let wheel = render_wheel(300).unwrap();
        let geometry = wheel.geometry();
        for angle in [0.0, 45.0, 133.0, 270.5] {
            for fraction in [0.5, 0.8] {
                let p = geometry.point_at(angle, fraction);
                let alpha = wheel.pixel(p.x as u32, p.y as u32).unwrap().0[3];
                assert!(alpha >= 250, "angle {angle} fraction {fraction}: alpha {alpha}");
            }
        }
    }

    #[test]
    fn hues_follow_the_angle() {
        let wheel = render_wheel(300).unwrap();
        let geometry = wheel.geometry();

        let green = geometry.point_at(120.0, 0.5);
        let px = wheel.pixel(green.x as u32, green.y as u32).unwrap().0;
        assert!(px[1] > px[0] && px[1] > px[2], "expected green, got {px:?}");

        let blue = geometry.point_at(240.0, 0.5);
        let px = wheel.pixel(blue.x as u32, blue.y as u32).unwrap().0;
        assert!(px[2] > px[0] && px[2] > px[1], "expected blue, got {px:?}");
    }

    #[test]
    fn unpremultiply_restores_color() {
        assert_eq!(unpremultiply(0, 0, 0, 0), (0, 0, 0, 0));
        assert_eq!(unpremultiply(85, 0, 40, 85), (255, 0, 120, 85));
    }
}
