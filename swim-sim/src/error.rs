use swim_motion::BoundaryError;

/// Error types for simulation runs.
#[derive(Debug)]
pub enum SimError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Boundary(BoundaryError),
    Usage(String),
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Json(err)
    }
}

impl From<BoundaryError> for SimError {
    fn from(err: BoundaryError) -> Self {
        SimError::Boundary(err)
    }
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::Io(e) => write!(f, "IO error: {}", e),
            SimError::Json(e) => write!(f, "JSON error: {}", e),
            SimError::Boundary(e) => write!(f, "Invalid tank: {}", e),
            SimError::Usage(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SimError {}
