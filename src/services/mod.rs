pub mod nominatim;
pub mod osrm;

pub use nominatim::{GeocodingError, GeocodingService};
pub use osrm::{RoutingError, RoutingService};
