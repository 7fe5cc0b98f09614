use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    /// The service answered, but the response carries error entries.
    #[error("Remote error: {}", errors.join("; "))]
    Remote {
        errors: Vec<String>,
        warnings: Vec<String>,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed data: {0}")]
    MalformedData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    /// Some items of a batch failed; each was reported on its own.
    #[error("{failed} of {total} items failed")]
    PartialFailure { failed: usize, total: usize },

    /// A failure that came after the service had already sent warnings.
    #[error("{error}")]
    Warned {
        error: Box<DashError>,
        warnings: Vec<String>,
    },
}

impl DashError {
    /// Puts `earlier` warnings in front of any this error already carries.
    pub fn with_warnings(self, mut earlier: Vec<String>) -> Self {
        if earlier.is_empty() {
            return self;
        }
        match self {
            DashError::Remote { errors, warnings } => {
                earlier.extend(warnings);
                DashError::Remote {
                    errors,
                    warnings: earlier,
                }
            }
            DashError::Warned { error, warnings } => {
                earlier.extend(warnings);
                DashError::Warned {
                    error,
                    warnings: earlier,
                }
            }
            other => DashError::Warned {
                error: Box::new(other),
                warnings: earlier,
            },
        }
    }

    /// Service warnings to show alongside this error.
    pub fn warnings(&self) -> &[String] {
        match self {
            DashError::Remote { warnings, .. } | DashError::Warned { warnings, .. } => warnings,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
