use crate::geometry::TypeMismatch;
use crate::utility::{format_float, is_close, round_to};
#[cfg(debug_assertions)]
use log::warn;
use overload::overload;
use std::collections::hash_map::DefaultHasher;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops;

/// Default relative tolerance used by [`Vector::equals`].
pub const DEFAULT_REL_TOL: f64 = 1E-9;
/// Default absolute tolerance used by [`Vector::equals`].
pub const DEFAULT_ABS_TOL: f64 = 0.0;
/// Default number of decimal digits used when displaying a [`Vector`].
pub const DEFAULT_DISPLAY_DIGITS: u32 = 2;

/// A vector with an arbitrary number of named components.
///
/// Each component is identified by an axis label, usually `x`, `y` or `z`, and the set of labels
/// of a vector is called its *kind*. Two vectors can be combined only if they share the same
/// kind: the order in which the axes were inserted is irrelevant for the math, but it is
/// preserved when displaying the vector.
///
/// Every operation returns a new vector, the only way to modify an existing one is by populating
/// it with [`Vector::insert`].
#[derive(Debug, Clone, Default)]
pub struct Vector {
    coords: Vec<(String, f64)>,
}

impl Vector {
    /// Constructs a vector without any axis.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let mut v = Vector::empty();
    /// v.insert("x", 1.0);
    /// v.insert("y", 2.0);
    ///
    /// assert_eq!(v, Vector::xy(1.0, 2.0));
    /// ```
    pub fn empty() -> Vector {
        Vector { coords: Vec::new() }
    }

    /// Constructs a vector from a sequence of `(label, value)` pairs, in order.
    ///
    /// If a label is repeated, the last value wins and the position of the first is kept.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let v = Vector::from_axes(vec![("x", 1.0), ("w", 4.5)]);
    ///
    /// assert_eq!(v.get("w"), Some(4.5));
    /// assert_eq!(v.dimensions(), 2);
    /// ```
    pub fn from_axes<I, L, V>(axes: I) -> Vector
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
        V: Into<f64>,
    {
        let mut vector = Vector::empty();
        for (label, value) in axes {
            vector.insert(label, value);
        }
        vector
    }

    /// Constructs a two dimensional vector with the given `(x, y)` components.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let v = Vector::xy(3.5, -2);
    ///
    /// assert_eq!(v.x(), Some(3.5));
    /// assert_eq!(v.y(), Some(-2.0));
    /// assert_eq!(v.z(), None);
    /// ```
    pub fn xy(x: impl Into<f64>, y: impl Into<f64>) -> Vector {
        Vector {
            coords: vec![("x".to_string(), x.into()), ("y".to_string(), y.into())],
        }
    }

    /// Constructs a three dimensional vector with the given `(x, y, z)` components.
    pub fn xyz(x: impl Into<f64>, y: impl Into<f64>, z: impl Into<f64>) -> Vector {
        Vector {
            coords: vec![
                ("x".to_string(), x.into()),
                ("y".to_string(), y.into()),
                ("z".to_string(), z.into()),
            ],
        }
    }

    /// Sets the value of an axis, adding it at the end if not already present.
    ///
    /// Returns the previous value of the axis, if any.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<f64>) -> Option<f64> {
        let label = label.into();
        let value = value.into();
        match self.coords.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, old)) => Some(std::mem::replace(old, value)),
            None => {
                self.coords.push((label, value));
                None
            }
        }
    }

    /// Returns the value of the axis with the given label, or None if the vector has no such
    /// axis.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.coords
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, value)| *value)
    }

    /// Returns the `x` component, if present.
    pub fn x(&self) -> Option<f64> {
        self.get("x")
    }

    /// Returns the `y` component, if present.
    pub fn y(&self) -> Option<f64> {
        self.get("y")
    }

    /// Returns the `z` component, if present.
    pub fn z(&self) -> Option<f64> {
        self.get("z")
    }

    /// Returns the `(x, y)` components as a tuple, or None if any of the two is missing.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// assert_eq!(Vector::xy(1, 2).as_xy(), Some((1.0, 2.0)));
    /// assert_eq!(Vector::from_axes(vec![("x", 1)]).as_xy(), None);
    /// ```
    pub fn as_xy(&self) -> Option<(f64, f64)> {
        Some((self.x()?, self.y()?))
    }

    /// Returns the axis labels, in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.coords.iter().map(|(label, _)| label.as_str())
    }

    /// Returns the `(label, value)` pairs, in insertion order.
    pub fn coords(&self) -> impl Iterator<Item = (&str, f64)> {
        self.coords.iter().map(|(label, value)| (label.as_str(), *value))
    }

    /// Returns the number of axes of the vector.
    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if the vector has no axes.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Checks whether two vectors have exactly the same set of axis labels, regardless of their
    /// order.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let xy = Vector::xy(0, 0);
    /// let yx = Vector::from_axes(vec![("y", 0), ("x", 0)]);
    ///
    /// assert!(xy.same_kind(&yx));
    /// assert!(!xy.same_kind(&Vector::xyz(0, 0, 0)));
    /// ```
    pub fn same_kind(&self, other: &Vector) -> bool {
        self.coords.len() == other.coords.len()
            && self.labels().all(|label| other.get(label).is_some())
    }

    /// Returns the sum of two vectors.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let sum = Vector::xy(1.0, 2.0).add(&Vector::xy(4.0, 5.5)).unwrap();
    ///
    /// assert_eq!(sum, Vector::xy(5.0, 7.5));
    /// ```
    /// # Errors
    /// Returns [`TypeMismatch`] if the two vectors are of different kind.
    pub fn add(&self, other: &Vector) -> Result<Vector, TypeMismatch> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Returns the difference between two vectors.
    /// # Errors
    /// Returns [`TypeMismatch`] if the two vectors are of different kind.
    pub fn subtract(&self, other: &Vector) -> Result<Vector, TypeMismatch> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Multiplies every component by a scalar.
    ///
    /// Equivalent to `vector * scalar` or `scalar * vector`.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let v = Vector::xy(1, 2);
    ///
    /// assert_eq!(v.scale(4.0), Vector::xy(4, 8));
    /// assert_eq!(4.0 * &v, &v * 4.0);
    /// ```
    #[must_use = "Vector::scale() does not act in place!"]
    pub fn scale(&self, scalar: f64) -> Vector {
        self.map(|value| value * scalar)
    }

    /// Divides every component by a scalar.
    ///
    /// No check is performed on the scalar: dividing by zero yields infinite or NaN components.
    #[must_use = "Vector::divide() does not act in place!"]
    pub fn divide(&self, scalar: f64) -> Vector {
        self.map(|value| value / scalar)
    }

    /// Performs the dot product between two vectors.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let v0 = Vector::xyz(1.0, 2.0, 3.0);
    /// let v1 = Vector::xyz(4.0, -5.0, 6.0);
    ///
    /// assert_eq!(v0.dot(&v1).unwrap(), 12.0);
    /// ```
    /// # Errors
    /// Returns [`TypeMismatch`] if the two vectors are of different kind.
    pub fn dot(&self, other: &Vector) -> Result<f64, TypeMismatch> {
        Ok(self.paired(other, "dot")?.map(|(_, a, b)| a * b).sum())
    }

    /// Performs the component-wise multiplication between two vectors.
    /// # Errors
    /// Returns [`TypeMismatch`] if the two vectors are of different kind.
    pub fn hadamard_product(&self, other: &Vector) -> Result<Vector, TypeMismatch> {
        self.zip_with(other, "hadamard_product", |a, b| a * b)
    }

    /// Performs the component-wise division between two vectors.
    ///
    /// If `digits` is given, every resulting component is rounded to that number of decimal
    /// digits. Components of `other` equal to zero yield infinite or NaN results.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let v0 = Vector::xy(1.0, 2.0);
    /// let v1 = Vector::xy(3.0, 4.0);
    ///
    /// assert_eq!(v0.hadamard_division(&v1, Some(2)).unwrap().x(), Some(0.33));
    /// assert_eq!(v0.hadamard_division(&v1, None).unwrap().y(), Some(0.5));
    /// ```
    /// # Errors
    /// Returns [`TypeMismatch`] if the two vectors are of different kind.
    pub fn hadamard_division(
        &self,
        other: &Vector,
        digits: Option<u32>,
    ) -> Result<Vector, TypeMismatch> {
        let result = self.zip_with(other, "hadamard_division", |a, b| match digits {
            Some(digits) => round_to(a / b, digits),
            None => a / b,
        })?;
        #[cfg(debug_assertions)]
        {
            if other.coords.iter().any(|(_, value)| *value == 0.0) {
                warn!("Hadamard division by a vector with a zero component: {}", other);
            }
        }
        Ok(result)
    }

    /// Returns the euclidean length (or magnitude) of the vector.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let v = Vector::xy(3.0, 4.0);
    ///
    /// assert_eq!(v.length(), 5.0);
    /// ```
    pub fn length(&self) -> f64 {
        self.length2().sqrt()
    }

    /// Returns the squared euclidean length of the vector.
    pub fn length2(&self) -> f64 {
        self.coords.iter().map(|(_, value)| value * value).sum()
    }

    /// Returns the vector with the same direction and a length of 1.0.
    ///
    /// A vector with a length of exactly zero has no direction, so None is returned.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let unit = Vector::xy(5.0, 0.0).unit();
    ///
    /// assert_eq!(unit, Some(Vector::xy(1.0, 0.0)));
    /// assert_eq!(Vector::xy(0.0, 0.0).unit(), None);
    /// ```
    #[must_use = "Vector::unit() does not act in place!"]
    pub fn unit(&self) -> Option<Vector> {
        let length = self.length();
        if length == 0.0 {
            None
        } else {
            Some(self.divide(length))
        }
    }

    /// Returns the euclidean distance between two vectors.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let distance = Vector::xy(1, 2).distance_from(&Vector::xy(4, 6)).unwrap();
    ///
    /// assert_eq!(distance, 5.0);
    /// ```
    /// # Errors
    /// Returns [`TypeMismatch`] if the two vectors are of different kind.
    pub fn distance_from(&self, other: &Vector) -> Result<f64, TypeMismatch> {
        let sum: f64 = self
            .paired(other, "distance_from")?
            .map(|(_, a, b)| (a - b) * (a - b))
            .sum();
        Ok(sum.sqrt())
    }

    /// Projects the current vector onto another one.
    ///
    /// The result is computed as `other.unit() * dot(self, other) / other.length()`. Projecting
    /// onto a zero-length vector yields NaN components.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let v = Vector::xy(2.0, 3.0);
    /// let onto = Vector::xy(4.0, 0.0);
    ///
    /// assert_eq!(v.project_onto(&onto).unwrap(), Vector::xy(2.0, 0.0));
    /// ```
    /// # Errors
    /// Returns [`TypeMismatch`] if the two vectors are of different kind.
    pub fn project_onto(&self, other: &Vector) -> Result<Vector, TypeMismatch> {
        self.check_kind(other, "project_onto")?;
        let dot = self.dot(other)?;
        let length = other.length();
        match other.unit() {
            Some(unit) => Ok(unit.scale(dot).divide(length)),
            None => {
                #[cfg(debug_assertions)]
                {
                    warn!("Projecting {} onto a zero-length vector", self);
                }
                Ok(other.divide(length).scale(dot).divide(length))
            }
        }
    }

    /// Checks whether every component lies in the range defined by the same component of two
    /// other vectors.
    ///
    /// The bounds are inclusive and can be given in any order.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let a = Vector::xy(1, 2);
    /// let b = Vector::xy(1, 3);
    /// let c = Vector::xy(1, 4);
    ///
    /// assert!(b.bounded_by(&c, &a).unwrap());
    /// assert!(!a.bounded_by(&b, &c).unwrap());
    /// ```
    /// # Errors
    /// Returns [`TypeMismatch`] if any of the two bounds is of a different kind.
    pub fn bounded_by(&self, a: &Vector, b: &Vector) -> Result<bool, TypeMismatch> {
        self.check_kind(a, "bounded_by")?;
        self.check_kind(b, "bounded_by")?;
        let bounded = self
            .coords
            .iter()
            .all(|(label, value)| match (a.get(label), b.get(label)) {
                (Some(a), Some(b)) => a.min(b) <= *value && *value <= a.max(b),
                _ => false,
            });
        Ok(bounded)
    }

    /// Checks whether two vectors are of the same kind and every component is approximately
    /// equal, using [`DEFAULT_REL_TOL`] and [`DEFAULT_ABS_TOL`].
    ///
    /// This is the same comparison performed by `==`.
    pub fn equals(&self, other: &Vector) -> bool {
        self.equals_within(other, DEFAULT_REL_TOL, DEFAULT_ABS_TOL)
    }

    /// Checks whether two vectors are of the same kind and every component is approximately
    /// equal.
    ///
    /// Two components `a` and `b` are equal if `|a-b| <= max(rel_tol * max(|a|,|b|), abs_tol)`.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let a = Vector::xy(1.0, 2.0);
    /// let b = Vector::xy(1.01, 2.0);
    ///
    /// assert!(!a.equals(&b));
    /// assert!(a.equals_within(&b, 0.0, 0.1));
    /// assert!(!a.equals_within(&Vector::xyz(1, 2, 0), 1.0, 1.0));
    /// ```
    pub fn equals_within(&self, other: &Vector, rel_tol: f64, abs_tol: f64) -> bool {
        self.same_kind(other)
            && self.coords.iter().all(|(label, a)| {
                other
                    .get(label)
                    .map_or(false, |b| is_close(*a, b, rel_tol, abs_tol))
            })
    }

    /// Returns the hash of the vector as computed by the [`Hash`] implementation.
    ///
    /// Only the kind of the vector contributes to the hash, so vectors comparing equal always
    /// hash to the same value.
    pub fn hash_value(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Renders the vector with every component rounded to the given number of decimal digits.
    /// # Examples
    /// ```
    /// use coopstructs::geometry::Vector;
    ///
    /// let v = Vector::xy(1.23456, 2);
    ///
    /// assert_eq!(v.to_string(), "<1.23, 2.0>");
    /// assert_eq!(v.to_string_digits(4), "<1.2346, 2.0>");
    /// ```
    pub fn to_string_digits(&self, digits: u32) -> String {
        format!("{:.*}", digits as usize, self)
    }

    fn map<F: Fn(f64) -> f64>(&self, op: F) -> Vector {
        Vector {
            coords: self
                .coords
                .iter()
                .map(|(label, value)| (label.clone(), op(*value)))
                .collect(),
        }
    }

    fn check_kind(&self, other: &Vector, operation: &'static str) -> Result<(), TypeMismatch> {
        if self.same_kind(other) {
            Ok(())
        } else {
            Err(TypeMismatch::new(operation, self.labels(), other.labels()))
        }
    }

    /// Pairs each component of `self` with the component of `other` sharing the same label.
    fn paired<'a>(
        &'a self,
        other: &'a Vector,
        operation: &'static str,
    ) -> Result<impl Iterator<Item = (&'a str, f64, f64)> + 'a, TypeMismatch> {
        self.check_kind(other, operation)?;
        Ok(self.coords.iter().filter_map(move |(label, a)| {
            other.get(label).map(|b| (label.as_str(), *a, b))
        }))
    }

    fn zip_with<F: Fn(f64, f64) -> f64>(
        &self,
        other: &Vector,
        operation: &'static str,
        op: F,
    ) -> Result<Vector, TypeMismatch> {
        let coords = self
            .paired(other, operation)?
            .map(|(label, a, b)| (label.to_string(), op(a, b)))
            .collect();
        Ok(Vector { coords })
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Vector) -> bool {
        self.equals(other)
    }
}

// tolerant equality is not transitive, and NaN components are never equal to themselves
impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut labels = self.labels().collect::<Vec<_>>();
        labels.sort_unstable();
        labels.hash(state);
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let digits = f
            .precision()
            .map_or(DEFAULT_DISPLAY_DIGITS, |precision| precision as u32);
        write!(f, "<")?;
        for (index, (_, value)) in self.coords.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", format_float(round_to(*value, digits)))?;
        }
        write!(f, ">")
    }
}

overload!((a: ?Vector) * (b: f64) -> Vector {a.scale(b)});
overload!((a: f64) * (b: ?Vector) -> Vector {b.scale(a)});
overload!((a: ?Vector) / (b: f64) -> Vector {a.divide(b)});
overload!(- (a: ?Vector) -> Vector {a.scale(-1.0)});
