use crate::model::Model;

#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color {0:?}: expected 3, 4, 6 or 8 hex digits with an optional '#'")]
    InvalidFormat(String),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("{model} expects {expected} components, got {found}")]
    ComponentCount {
        model: Model,
        expected: usize,
        found: usize,
    },
    #[error("{0} has no numeric component form")]
    UnsupportedModel(Model),
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
