//! Arc descriptors and the endpoint points derived from them.
//!
//! Every [`GlobeArc`] contributes a start and an end [`DerivedPoint`]. Points
//! that land on exactly the same `(lat, lng)` collapse into the first one
//! seen, and arcs whose color or coordinates cannot be used are reported
//! instead of being rendered.

mod arc;
mod derive;
mod error;
mod point;

pub use arc::GlobeArc;
pub use derive::{PointDerivation, dedup_by_coordinate, derive_points, expand_endpoints};
pub use error::PointError;
pub use point::{DerivedPoint, Endpoint};
