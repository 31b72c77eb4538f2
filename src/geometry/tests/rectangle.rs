use crate::geometry::{Rectangle, Vector};

#[test]
fn rectangle_new() {
    let rect = Rectangle::new(-1.5, 2.0, 10.0, 20.0);
    assert_eq!(rect.x, -1.5);
    assert_eq!(rect.y, 2.0);
    assert_eq!(rect.height, 10.0);
    assert_eq!(rect.width, 20.0);
}

#[test]
fn rectangle_negative_extents() {
    let rect = Rectangle::new(0, 0, -3, -4);
    assert_eq!(rect.height, -3);
    assert_eq!(rect.width, -4);
}

#[test]
fn rectangle_top_left() {
    let rect = Rectangle::new(7.25, -3.0, 1.0, 1.0);
    assert_eq!(rect.top_left(), (7.25, -3.0));
}

#[test]
fn rectangle_display_integers() {
    let rect = Rectangle::new(1, 2, 30, 40);
    assert_eq!(rect.to_string(), "TopLeft: <1, 2>, Size: H30 x W40");
}

#[test]
fn rectangle_display_floats() {
    let rect = Rectangle::new(0.5, 1.25, 3.0, 4.75);
    assert_eq!(format!("{}", rect), "TopLeft: <0.5, 1.25>, Size: H3.0 x W4.75");
}

#[test]
fn rectangle_copy() {
    let rect = Rectangle::new(1.0, 2.0, 3.0, 4.0);
    let copy = rect;
    assert_eq!(rect, copy);
}

#[test]
fn rectangle_display_whole_floats() {
    let rect = Rectangle::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(rect.to_string(), "TopLeft: <1.0, 2.0>, Size: H3.0 x W4.0");
    assert_eq!(
        Vector::xy(1.0, 2.0).to_string(),
        format!("<{:?}, {:?}>", rect.x, rect.y)
    );
}
