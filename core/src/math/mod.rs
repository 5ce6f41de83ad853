pub mod geo;
pub mod vector;

pub use geo::GeoProjection;
pub use vector::Vector2;
