//! Unit shapes. Each fits the `[-1, 1]` square and is centered on the origin, so rotation
//! and scaling pivot on the shape's own center.

use {
  super::{BoundingBox, CanvasSpace, Shape, P2, V2},
  crate::{sdf::{SDF, Union}, config::ShapeKind},
  euclid::{Box2D, Point2D}
};

const SQRT_3: f64 = 1.7320508075688772;

fn unit_box<S>() -> Box2D<f64, S> {
  Box2D::new(
    Point2D::splat(-1.0),
    Point2D::splat(1.0)
  )
}

/// Unit circle
#[derive(Debug, Copy, Clone)]
pub struct Circle;

#[derive(Debug, Copy, Clone)]
pub struct Square;

/// Axis-aligned rectangle with the given half extents
#[derive(Debug, Copy, Clone)]
pub struct Rect {
  pub half: V2
}

/// Equilateral triangle pointing up, circumradius 1
#[derive(Debug, Copy, Clone)]
pub struct Triangle;

/// Regular hexagon with flat top and bottom edges, circumradius 1
#[derive(Debug, Copy, Clone)]
pub struct Hexagon;

/// Square standing on a corner
#[derive(Debug, Copy, Clone)]
pub struct Diamond;

/// Annulus between `inner_r` and 1
#[derive(Debug, Copy, Clone)]
pub struct Ring {
  pub inner_r: f64
}

pub type Cross = Union<Rect, Rect>;

pub fn cross(arm_width: f64) -> Cross {
  Rect { half: V2::new(1.0, arm_width / 2.0) }
    .union(Rect { half: V2::new(arm_width / 2.0, 1.0) })
}

impl<S> BoundingBox<f64, S> for Circle {
  fn bounding_box(&self) -> Box2D<f64, S> { unit_box() }}

impl<S> BoundingBox<f64, S> for Square {
  fn bounding_box(&self) -> Box2D<f64, S> { unit_box() }}

impl<S> BoundingBox<f64, S> for Rect {
  fn bounding_box(&self) -> Box2D<f64, S> {
    Box2D::new(
      Point2D::new(-self.half.x, -self.half.y),
      Point2D::new(self.half.x, self.half.y)
    )}}

impl<S> BoundingBox<f64, S> for Triangle {
  fn bounding_box(&self) -> Box2D<f64, S> { unit_box() }}

impl<S> BoundingBox<f64, S> for Hexagon {
  fn bounding_box(&self) -> Box2D<f64, S> { unit_box() }}

impl<S> BoundingBox<f64, S> for Diamond {
  fn bounding_box(&self) -> Box2D<f64, S> { unit_box() }}

impl<S> BoundingBox<f64, S> for Ring {
  fn bounding_box(&self) -> Box2D<f64, S> { unit_box() }}

fn box_sdf(pixel: P2, half: V2) -> f64 {
  let dist = pixel.to_vector().abs() - half;
  let outside_dist = dist
    .max(V2::splat(0.0))
    .length();
  let inside_dist = dist.x
    .max(dist.y)
    .min(0.0);
  outside_dist + inside_dist
}

impl SDF<f64> for Circle {
  fn sdf(&self, pixel: P2) -> f64 {
    pixel.to_vector().length() - 1.0
  }
}

impl SDF<f64> for Square {
  fn sdf(&self, pixel: P2) -> f64 {
    box_sdf(pixel, V2::splat(1.0))
  }
}

impl SDF<f64> for Rect {
  fn sdf(&self, pixel: P2) -> f64 {
    box_sdf(pixel, self.half)
  }
}

impl SDF<f64> for Triangle {
  fn sdf(&self, pixel: P2) -> f64 {
    // side length sqrt(3) for circumradius 1; y flipped so the apex points up on screen
    let r = SQRT_3 / 2.0;
    let mut p = V2::new(pixel.x.abs() - r, -pixel.y + r / SQRT_3);
    if p.x + SQRT_3 * p.y > 0.0 {
      p = V2::new(p.x - SQRT_3 * p.y, -SQRT_3 * p.x - p.y) / 2.0;
    }
    p.x -= p.x.clamp(-2.0 * r, 0.0);
    -p.length() * p.y.signum()
  }
}

impl SDF<f64> for Hexagon {
  fn sdf(&self, pixel: P2) -> f64 {
    let k = V2::new(-SQRT_3 / 2.0, 0.5);
    let r = SQRT_3 / 2.0; // inradius
    let tan30 = 1.0 / SQRT_3;
    let mut p = pixel.to_vector().abs();
    p -= k * (2.0 * k.dot(p).min(0.0));
    p -= V2::new(p.x.clamp(-tan30 * r, tan30 * r), r);
    p.length() * p.y.signum()
  }
}

impl SDF<f64> for Diamond {
  fn sdf(&self, pixel: P2) -> f64 {
    let s = std::f64::consts::FRAC_1_SQRT_2;
    let turned = P2::new((pixel.x + pixel.y) * s, (pixel.y - pixel.x) * s);
    box_sdf(turned, V2::splat(s))
  }
}

impl SDF<f64> for Ring {
  fn sdf(&self, pixel: P2) -> f64 {
    let mid = (1.0 + self.inner_r) / 2.0;
    let half_width = (1.0 - self.inner_r) / 2.0;
    (pixel.to_vector().length() - mid).abs() - half_width
  }
}

/// Stand-in used when a [`ShapeKind`] has to become a concrete SDF at runtime.
#[derive(Debug, Copy, Clone)]
pub enum UnitShape {
  Circle(Circle),
  Square(Square),
  Triangle(Triangle),
  Hexagon(Hexagon),
  Diamond(Diamond),
  Cross(Cross),
  Ring(Ring),
}

impl From<ShapeKind> for UnitShape {
  fn from(kind: ShapeKind) -> Self {
    match kind {
      ShapeKind::Circle => UnitShape::Circle(Circle),
      ShapeKind::Square => UnitShape::Square(Square),
      ShapeKind::Triangle => UnitShape::Triangle(Triangle),
      ShapeKind::Hexagon => UnitShape::Hexagon(Hexagon),
      ShapeKind::Diamond => UnitShape::Diamond(Diamond),
      ShapeKind::Cross => UnitShape::Cross(cross(0.4)),
      ShapeKind::Ring => UnitShape::Ring(Ring { inner_r: 0.6 }),
    }
  }
}

impl SDF<f64> for UnitShape {
  fn sdf(&self, pixel: P2) -> f64 {
    match self {
      UnitShape::Circle(s) => s.sdf(pixel),
      UnitShape::Square(s) => s.sdf(pixel),
      UnitShape::Triangle(s) => s.sdf(pixel),
      UnitShape::Hexagon(s) => s.sdf(pixel),
      UnitShape::Diamond(s) => s.sdf(pixel),
      UnitShape::Cross(s) => s.sdf(pixel),
      UnitShape::Ring(s) => s.sdf(pixel),
    }
  }
}

impl BoundingBox<f64, CanvasSpace> for UnitShape {
  fn bounding_box(&self) -> Box2D<f64, CanvasSpace> { unit_box() }
}
