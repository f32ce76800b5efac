use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Invalid time '{value}' in row {row}: expected H:M:S")]
    InvalidClock { value: String, row: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Chart rendering error: {0}")]
    Chart(String),
}
