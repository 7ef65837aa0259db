use {
  euclid::{Point2D, Rotation2D, Box2D},
  crate::geometry::{CanvasSpace, Shape, Rotation, Scale, Translation, BoundingBox, P2},
  num_traits::Float
};

/// Signed distance function: negative inside, zero on the outline, positive outside.
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, CanvasSpace>) -> T;
}

impl <S> SDF<f64> for Translation<S>
  where S: Shape {
  fn sdf(&self, pixel: P2) -> f64 {
    self.shape.sdf(pixel - self.offset)
  }
}

impl <S> SDF<f64> for Rotation<S>
  where S: Shape {
  fn sdf(&self, pixel: P2) -> f64 {
    // sample with the inverse rotation
    let pivot = self.shape.bounding_box().center();
    let pixel = Rotation2D::new(-self.angle)
      .transform_point((pixel - pivot).to_point())
      + pivot.to_vector();

    self.shape.sdf(pixel)
  }
}

impl <S> SDF<f64> for Scale<S>
  where S: Shape {
  fn sdf(&self, pixel: P2) -> f64 {
    let c = self.shape.bounding_box().center();
    let pixel = ((pixel - c)
      .component_div(self.scale) + c.to_vector())
      .to_point();
    self.shape.sdf(pixel) * self.scale.x.abs().min(self.scale.y.abs())
  }
}

/// Union of two SDFs.
#[derive(Clone, Copy, Debug)]
pub struct Union<S1, S2> {
  pub s1: S1,
  pub s2: S2,
}

impl<T, S1, S2> SDF<T> for Union<S1, S2>
  where T: Float,
        S1: SDF<T>,
        S2: SDF<T> {
  fn sdf(&self, pixel: Point2D<T, CanvasSpace>) -> T {
    self.s1.sdf(pixel).min(self.s2.sdf(pixel))
  }}

impl<T, S1, S2> BoundingBox<T, CanvasSpace> for Union<S1, S2>
  where T: Copy + PartialOrd,
        S1: BoundingBox<T, CanvasSpace>,
        S2: BoundingBox<T, CanvasSpace> {
  fn bounding_box(&self) -> Box2D<T, CanvasSpace> {
    self.s1.bounding_box().union(&self.s2.bounding_box())
  }}
