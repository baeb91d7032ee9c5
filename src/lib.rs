pub mod error;
pub mod hull;
pub mod math;

pub use error::{HullisError, Result};
pub use hull::compute_hull;
pub use math::Point2;
