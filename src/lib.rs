//! Point-to-point distance calculators on planar, spherical, and
//! ellipsoidal Earth models.
//!
//! The core is the Vincenty inverse geodesic solver ([`geodesic`]): an
//! iterative method for the shortest-path distance between two points on
//! an oblate spheroid (WGS-84 by default), with a configurable
//! convergence policy and explicit failure reporting for the
//! near-antipodal pairs the iteration cannot resolve. The closed-form
//! spherical and planar formulas ([`baseline`]) are single-evaluation
//! references with no failure mode.
//!
//! ```
//! use geodist::{geodesic, GeodeticCoordinate};
//!
//! let nyc = GeodeticCoordinate::new(40.7128, -74.0060);
//! let la = GeodeticCoordinate::new(34.0522, -118.2437);
//!
//! let metres = geodesic::distance(nyc, la)?;
//! assert!(metres > 3_900_000.0 && metres < 3_960_000.0);
//! # Ok::<(), geodist::GeodesicError>(())
//! ```

pub mod baseline;
pub mod coord;
pub mod error;
pub mod geodesic;

pub use coord::GeodeticCoordinate;
pub use error::{CoordinateError, GeodesicError};
pub use geodesic::{ConvergencePolicy, Ellipsoid, GRS80, WGS84};
