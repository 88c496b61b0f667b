use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The planner cannot close the remaining gap with any allowed size.
    #[error(
        "planning stalled: capacity {capacity}, planned {planned}, smallest allowed size {smallest}"
    )]
    PlanningStall {
        capacity: u32,
        planned: u32,
        smallest: u32,
    },
    #[error("accuracy undefined for a sprint with zero predicted points")]
    ZeroPrediction,
    #[error("distribution error: {0}")]
    Distribution(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml parse error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("toml write error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
