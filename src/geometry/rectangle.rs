use std::fmt::{Debug, Display, Formatter};

/// An axis aligned rectangle.
///
/// The rectangle is described by its top-left corner `(x, y)` and by its extents `height` and
/// `width`. No validation is performed on the extents, so a negative size is accepted as is.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle<T = f64> {
    /// Horizontal coordinate of the top-left corner.
    pub x: T,
    /// Vertical coordinate of the top-left corner.
    pub y: T,
    /// Vertical extent of the rectangle.
    pub height: T,
    /// Horizontal extent of the rectangle.
    pub width: T,
}

impl<T> Rectangle<T> {
    /// Constructs a rectangle with the given top-left corner and size.
    ///
    /// Note the order of the extents: height comes before width.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Rectangle;
    ///
    /// let rect = Rectangle::new(1.0, 2.0, 10.0, 20.0);
    ///
    /// assert_eq!(rect.height, 10.0);
    /// assert_eq!(rect.width, 20.0);
    /// ```
    pub fn new(x: T, y: T, height: T, width: T) -> Rectangle<T> {
        Rectangle {
            x,
            y,
            height,
            width,
        }
    }
}

impl<T: Copy> Rectangle<T> {
    /// Returns the top-left corner as an `(x, y)` tuple.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Rectangle;
    ///
    /// let rect = Rectangle::new(3, 4, 1, 1);
    ///
    /// assert_eq!(rect.top_left(), (3, 4));
    /// ```
    pub fn top_left(&self) -> (T, T) {
        (self.x, self.y)
    }
}

/// Floating point fields always show their decimal part, so `1.0` is rendered as `1.0` and not as
/// `1`.
/// # Examples
/// ```
/// use coopstructs::geometry::Rectangle;
///
/// let rect = Rectangle::new(1.0, 2.0, 3.0, 4.5);
///
/// assert_eq!(rect.to_string(), "TopLeft: <1.0, 2.0>, Size: H3.0 x W4.5");
/// assert_eq!(Rectangle::new(1, 2, 3, 4).to_string(), "TopLeft: <1, 2>, Size: H3 x W4");
/// ```
impl<T: Debug> Display for Rectangle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TopLeft: <{:?}, {:?}>, Size: H{:?} x W{:?}",
            self.x, self.y, self.height, self.width
        )
    }
}
