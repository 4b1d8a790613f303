use thiserror::Error;

#[derive(Debug, Error)]
pub enum InktrackError {
    #[error("commission not found: {0}")]
    CommissionNotFound(String),

    #[error("commission already exists: {0}")]
    CommissionExists(String),

    #[error("invalid commission id '{0}': expected 'c-' followed by lowercase alphanumerics")]
    InvalidId(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error("invalid backend: {0}")]
    InvalidBackend(String),

    #[error("unknown status label in stored data: '{0}'")]
    UnknownStatusLabel(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("price must be non-negative, got {0}")]
    NegativePrice(f64),

    #[error("at most {max} reference attachments allowed, got {got}")]
    TooManyAttachments { max: usize, got: usize },

    #[error("local store full: {needed} bytes needed but capacity is {capacity} — delete finished commissions or raise local_capacity_bytes in config.yaml")]
    CapacityExceeded { needed: u64, capacity: u64 },

    #[error("image could not be processed — try a smaller PNG or JPEG")]
    ImageDecode(#[source] image::ImageError),

    #[error("store error: {0}")]
    Store(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, InktrackError>;
