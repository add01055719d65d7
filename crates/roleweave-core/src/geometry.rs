//! Canvas geometry: points, screen/canvas transforms, and placement math.
//!
//! All coordinates are in device-independent virtual canvas units. The shell
//! reports pointer input in screen pixels; a [`CanvasFrame`] (canvas origin in
//! screen space plus the active zoom factor) maps between the two. Keeping the
//! transforms here, independent of any pointer-event object, keeps the drag
//! and layout math testable without a rendering surface.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use std::ops::{Add, Sub};

/// Lower bound of the canvas zoom factor.
pub const MIN_ZOOM: f64 = 0.5;
/// Upper bound of the canvas zoom factor.
pub const MAX_ZOOM: f64 = 2.0;

/// A point in 2-D canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Maps screen-space pointer coordinates into canvas-local coordinates.
///
/// `origin` is the canvas' top-left corner in screen space (the bounding-box
/// origin); `zoom` is the scale applied to the canvas content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    pub origin: Point,
    pub zoom: f64,
}

impl CanvasFrame {
    /// A frame with the given origin and a clamped zoom factor.
    pub fn new(origin: Point, zoom: f64) -> Self {
        Self {
            origin,
            zoom: clamp_zoom(zoom),
        }
    }

    /// A 1:1 frame, for canvases without zoom support.
    pub fn unscaled(origin: Point) -> Self {
        Self { origin, zoom: 1.0 }
    }

    /// Screen point to canvas-local point.
    pub fn to_canvas(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.origin.x) / self.zoom,
            (screen.y - self.origin.y) / self.zoom,
        )
    }

    /// Canvas-local point back to screen space.
    pub fn to_screen(&self, canvas: Point) -> Point {
        Point::new(
            canvas.x * self.zoom + self.origin.x,
            canvas.y * self.zoom + self.origin.y,
        )
    }
}

/// Clamps a zoom factor to the supported range.
pub fn clamp_zoom(value: f64) -> f64 {
    value.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Midpoint of the segment between two points.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Position of node `index` out of `count` on a circle around `center`.
///
/// The first node sits at 12 o'clock; the rest follow clockwise at equal
/// angular spacing.
pub fn radial_position(center: Point, radius: f64, index: usize, count: usize) -> Point {
    debug_assert!(count > 0);
    let angle = (2.0 * PI * index as f64) / count as f64 - FRAC_PI_2;
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Control point for a quadratic Bezier between `from` and `to`, offset
/// perpendicular to the chord. Purely cosmetic: keeps connectors from
/// overlapping when many of them share an endpoint.
pub fn curve_control(from: Point, to: Point, offset: f64) -> Point {
    let mid = midpoint(from, to);
    let angle = (to.y - from.y).atan2(to.x - from.x);
    Point::new(
        mid.x + offset * (angle + FRAC_PI_2).cos(),
        mid.y + offset * (angle + FRAC_PI_2).sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_round_trip() {
        let frame = CanvasFrame::new(Point::new(40.0, 12.0), 1.5);
        let canvas = frame.to_canvas(Point::new(100.0, 60.0));
        let back = frame.to_screen(canvas);
        assert!((back.x - 100.0).abs() < 1e-9);
        assert!((back.y - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_to_canvas_divides_by_zoom() {
        let frame = CanvasFrame::new(Point::new(10.0, 10.0), 2.0);
        let p = frame.to_canvas(Point::new(110.0, 10.0));
        assert!((p.x - 50.0).abs() < 1e-9);
        assert!((p.y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_clamped() {
        assert_eq!(clamp_zoom(0.1), MIN_ZOOM);
        assert_eq!(clamp_zoom(3.0), MAX_ZOOM);
        assert_eq!(clamp_zoom(1.3), 1.3);
        assert_eq!(CanvasFrame::new(Point::default(), 9.0).zoom, MAX_ZOOM);
    }

    #[test]
    fn test_first_radial_node_at_twelve_oclock() {
        let center = Point::new(450.0, 180.0);
        let p = radial_position(center, 150.0, 0, 4);
        assert!((p.x - 450.0).abs() < 1e-9);
        assert!((p.y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_radial_nodes_stay_on_circle() {
        let center = Point::new(450.0, 550.0);
        for i in 0..7 {
            let p = radial_position(center, 150.0, i, 7);
            let d = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
            assert!((d - 150.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_curve_control_is_perpendicular_to_chord() {
        let from = Point::new(0.0, 0.0);
        let to = Point::new(100.0, 0.0);
        let ctrl = curve_control(from, to, 30.0);
        // Horizontal chord: the control point hangs 30 units off the midpoint.
        assert!((ctrl.x - 50.0).abs() < 1e-9);
        assert!((ctrl.y - 30.0).abs() < 1e-9);
    }
}
