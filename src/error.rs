use crate::registry::ConstantGroup;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataVizError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown {group} value: '{value}'")]
    UnknownValue { group: ConstantGroup, value: String },

    #[error("Duplicate value '{value}' in {group}: {first} and {second}")]
    DuplicateValue {
        group: ConstantGroup,
        value: String,
        first: &'static str,
        second: &'static str,
    },

    #[error("Unknown component key: '{0}'")]
    UnknownComponent(String),
}

pub type DvResult<T> = Result<T, DataVizError>;
