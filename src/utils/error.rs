use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Malformed API response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{source_name} returned no salaried \"{language}\" vacancies, average salary is undefined")]
    NoSalaryData {
        source_name: String,
        language: String,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
