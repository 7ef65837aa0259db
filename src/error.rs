//! .
//!
//! Only the outer edges of the crate can fail: preset files, color strings and image encoding.
//! Everything between [`cells`](crate::cells) and [`mapping`](crate::mapping) is total.

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error("malformed preset: {0}")]
  Json(#[from] serde_json::Error),
  #[cfg(feature = "image")]
  #[error(transparent)]
  Image(#[from] image::ImageError),
  #[error("invalid color {0:?}, expected #rgb or #rrggbb")]
  InvalidColor(String),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;

/// Render an error together with its chain of sources, one per line.
pub fn display(error: &(dyn std::error::Error + 'static)) -> String {
  let mut msg = "Error:\n".to_string();
  std::iter::successors(Some(error), |e| e.source())
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("└> {} - {}\n", index, error)));
  msg
}
