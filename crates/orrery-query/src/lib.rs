//! Geometric queries for placing and testing bodies: ray–sphere intersection and
//! orbit circle generation.

pub mod error;
pub mod orbit;
pub mod ray;

pub use error::QueryError;
pub use orbit::circle_points;
pub use ray::{Ray, ray_intersects_sphere, ray_sphere_distance};
