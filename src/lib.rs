mod error;
mod geo;
mod polygon;
mod sources;
mod stations;
mod types;

pub use error::FlowGeoError;

pub use geo::{great_circle_km, perpendicular_distance, LatLon, LonLat};

pub use polygon::{is_ccw, simplify, validate};

pub use sources::{
    FieldAvailabilityChecker, HucLevel, InMemoryStationList, PolygonSource, StationListSource,
};

pub use stations::index::StationIndex;
pub use stations::resolver::{rank_by_distance, StationResolver, STALE_GRACE_DAYS};

pub use types::candidate::StationCandidate;
pub use types::query::ResolutionQuery;
pub use types::resolution::Resolution;
pub use types::ring::Ring;

pub use polygon::error::RingError;
pub use stations::error::ResolveError;
