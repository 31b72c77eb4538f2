mod error;
pub use self::error::TypeMismatch;
mod rectangle;
pub use self::rectangle::Rectangle;
mod vector;
pub use self::vector::Vector;
pub use self::vector::DEFAULT_ABS_TOL;
pub use self::vector::DEFAULT_DISPLAY_DIGITS;
pub use self::vector::DEFAULT_REL_TOL;

#[cfg(test)]
mod tests;
