/// Module containing the geometric value types: N-dimensional Vectors and Rectangles.
pub mod geometry;
/// Module containing utility functions that does not properly fit anywhere else.
pub mod utility;
