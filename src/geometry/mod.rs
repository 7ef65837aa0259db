//! .
//!
//! Canvas coordinates: origin in the top-left corner, `y` pointing down, units are pixels.
//! Unit shapes live in `[-1, 1]` around the origin and are placed with [`Shape::rotate`],
//! [`Shape::scale`] and [`Shape::translate`], in that order.

use {
  euclid::{Point2D, Box2D, Vector2D, Rotation2D, Angle},
  crate::sdf::{SDF, Union}
};

pub mod shapes;
pub use shapes::*;

/// Canvas pixel basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasSpace;

pub type P2 = Point2D<f64, CanvasSpace>;
pub type V2 = Vector2D<f64, CanvasSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Something inside a rectangular area.
pub trait Shape: SDF<f64> + BoundingBox<f64, CanvasSpace> {
  fn translate(self, offset: V2) -> Translation<Self> where Self: Sized {
    Translation { shape: self, offset }
  }
  /// Rotate around the center of shape's bounding box, clockwise on screen
  fn rotate(self, angle: Angle<f64>) -> Rotation<Self> where Self: Sized {
    Rotation { shape: self, angle }
  }
  /// Scale around the center of shape's bounding box
  fn scale(self, scale: V2) -> Scale<Self> where Self: Sized {
    Scale { shape: self, scale }
  }
  /// Union of two SDFs.
  fn union<U>(self, other: U) -> Union<Self, U> where Self: Sized {
    Union { s1: self, s2: other }
  }
}
impl <T> Shape for T where T: SDF<f64> + BoundingBox<f64, CanvasSpace> {}

#[derive(Debug, Copy, Clone)]
pub struct Translation<S> {
  pub shape: S,
  pub offset: V2
}
impl <S> BoundingBox<f64, CanvasSpace> for Translation<S>
  where S: BoundingBox<f64, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f64, CanvasSpace> {
    self.shape.bounding_box().translate(self.offset)
  }
}

#[derive(Debug, Copy, Clone)]
pub struct Rotation<S> {
  pub shape: S,
  pub angle: Angle<f64>
}
impl <S> BoundingBox<f64, CanvasSpace> for Rotation<S>
  where S: BoundingBox<f64, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f64, CanvasSpace> {
    let bounding = self.shape.bounding_box();
    let pivot = bounding.center();
    let rot = |point: P2| Rotation2D::new(self.angle)
      .transform_point((point - pivot).to_point())
      + pivot.to_vector();
    update_bounding_box(bounding, rot)
  }
}

#[derive(Debug, Copy, Clone)]
pub struct Scale<S> {
  pub shape: S,
  pub scale: V2
}
impl <S> BoundingBox<f64, CanvasSpace> for Scale<S>
  where S: BoundingBox<f64, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<f64, CanvasSpace> {
    let c = self.shape.bounding_box().center().to_vector();
    self.shape.bounding_box()
      .translate(-c)
      .scale(self.scale.x, self.scale.y)
      .translate(c)
  }
}

fn update_bounding_box(
  bounding: Box2D<f64, CanvasSpace>,
  morphism: impl Fn(P2) -> P2
) -> Box2D<f64, CanvasSpace> {
  let pts = [
    [bounding.min.x, bounding.min.y],
    [bounding.max.x, bounding.min.y],
    [bounding.max.x, bounding.max.y],
    [bounding.min.x, bounding.max.y],
  ];
  let pts = pts.iter().cloned()
    .map(|p| morphism(p.into()));
  Box2D::from_points(pts)
}
