//! Two-dimensional point.

/// A two-dimensional point with `x` and `y` coordinates.
///
/// `T` is the coordinate representation. The type puts no bound on it: any `T` can be stored, and
/// equality is available whenever `T` itself can be compared. Two points are equal when their `x`
/// coordinates are equal and their `y` coordinates are equal, each compared with `T`'s own
/// equality. For floating point coordinates this means a point holding `NaN` is not equal to
/// itself.
///
/// Fields are public and carry no invariant, so a point can be built with a struct literal and
/// changed by plain assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point<T> {
    /// The x coordinate of the point.
    pub x: T,
    /// The y coordinate of the point.
    pub y: T,
}

impl<T> Point<T> {
    /// Creates a point from its coordinates.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}
