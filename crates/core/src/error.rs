#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read label overrides file: {0}")]
    LabelFileRead(std::io::Error),
    #[error("failed to parse label overrides YAML: {0}")]
    LabelFileParse(serde_yaml::Error),
    #[error("practice-management API error: {0}")]
    Healthie(#[from] healthie::HealthieError),
}

pub type ChartResult<T> = std::result::Result<T, ChartError>;
