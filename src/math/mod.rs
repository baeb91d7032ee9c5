pub mod angular;
pub mod intercept;
pub mod orient;

/// 2D point with integer coordinates.
pub type Point2 = nalgebra::Point2<i64>;
