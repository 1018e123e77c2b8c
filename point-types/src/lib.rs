//! Generic two-dimensional point value type.
//!
//! ```
//! use point_types::Point;
//!
//! let origin = Point::new(0, 0);
//! let mut moved = origin;
//! moved.x = 99;
//!
//! assert_eq!(origin, Point { x: 0, y: 0 });
//! assert_ne!(origin, moved);
//! ```

pub mod point;
pub use point::Point;
