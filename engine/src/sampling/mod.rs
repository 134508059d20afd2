pub mod density;
pub mod frame_cursor;

/// A decoded camera frame. Sources hand these to the density estimator;
/// the engine never inspects pixels itself.
pub type Frame = image::DynamicImage;
