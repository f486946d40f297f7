use crate::polygon::error::RingError;
use crate::stations::error::ResolveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowGeoError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Ring(#[from] RingError),
}
