use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CoordinateError {
    #[error("Latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("Non-finite coordinate ({lat}, {lon})")]
    NonFinite { lat: f64, lon: f64 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeodesicError {
    #[error("Invalid coordinate: {0}")]
    Coordinate(#[from] CoordinateError),

    #[error("Inverse solution did not converge within {max_iterations} iterations")]
    NonConvergence { max_iterations: usize },
}
