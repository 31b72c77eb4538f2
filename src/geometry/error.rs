use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error returned when two vectors with different sets of axes are combined.
///
/// Carries the name of the failed operation, the axes of the vector on which the operation was
/// invoked and the axes of the offending operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    /// Name of the operation that failed, like `"add"` or `"bounded_by"`.
    pub operation: &'static str,
    /// Axis labels of the vector the operation was invoked on.
    pub expected: Vec<String>,
    /// Axis labels of the operand that caused the failure.
    pub found: Vec<String>,
}

impl TypeMismatch {
    pub(crate) fn new<'a, E, F>(operation: &'static str, expected: E, found: F) -> TypeMismatch
    where
        E: Iterator<Item = &'a str>,
        F: Iterator<Item = &'a str>,
    {
        TypeMismatch {
            operation,
            expected: expected.map(String::from).collect(),
            found: found.map(String::from).collect(),
        }
    }
}

impl Display for TypeMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vector kind mismatch in {}: expected axes [{}], found [{}]",
            self.operation,
            self.expected.join(", "),
            self.found.join(", ")
        )
    }
}

impl Error for TypeMismatch {}
