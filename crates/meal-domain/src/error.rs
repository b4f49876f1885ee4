use thiserror::Error;

/// Error del dominio de planificación de comidas
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DomainError {
    #[error("Error de validación: {0}")]
    ValidationError(String),

    #[error("Valor desconocido para {field}: {value}")]
    UnknownValue { field: &'static str, value: String },
}

impl DomainError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self { DomainError::ValidationError(msg.into()) }
}
