//! Modelo de formulario que los wizards usan como contenido de cada paso.
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

use meal_domain::DomainError;
use thiserror::Error;

use super::gateway::GatewayError;

/// Campo de un paso.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, hint: &'static str) -> Self { Self { key, label, hint } }
}

/// Contenido de un paso: texto introductorio y campos a completar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormSection {
    pub intro: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl FormSection {
    pub fn new(intro: &'static str, fields: Vec<FieldSpec>) -> Self { Self { intro, fields } }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> { self.fields.iter().find(|f| f.key == key) }
}

/// Errores de validación de formulario que devuelven los hooks.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("falta el campo '{0}'")]
    Missing(&'static str),
    #[error("valor inválido para '{field}': {value}")]
    Invalid { field: &'static str, value: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Respuestas crudas del usuario, compartidas entre el host y los hooks.
#[derive(Clone, Default)]
pub struct FormValues {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl FormValues {
    pub fn new() -> Self { Self::default() }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    /// Valor no vacío del campo o `FormError::Missing`.
    pub fn require(&self, key: &'static str) -> Result<String, FormError> {
        self.get(key).filter(|v| !v.trim().is_empty()).ok_or(FormError::Missing(key))
    }

    /// Valor del campo convertido con `FromStr`.
    pub fn parse<T: FromStr>(&self, key: &'static str) -> Result<T, FormError> {
        let raw = self.require(key)?;
        raw.trim().parse().map_err(|_| FormError::Invalid { field: key, value: raw })
    }

    /// Como `parse`, pero un campo ausente o vacío da `None`.
    pub fn parse_optional<T: FromStr>(&self, key: &'static str) -> Result<Option<T>, FormError> {
        match self.require(key) {
            Ok(_) => self.parse(key).map(Some),
            Err(FormError::Missing(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_map().entries(map.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reports_missing_and_invalid() {
        let v = FormValues::new();
        assert!(matches!(v.parse::<u32>("age"), Err(FormError::Missing("age"))));
        v.set("age", "treinta");
        let err = v.parse::<u32>("age").unwrap_err();
        assert_eq!(err.to_string(), "valor inválido para 'age': treinta");
        v.set("age", " 31 ");
        assert_eq!(v.parse::<u32>("age").unwrap(), 31);
    }

    #[test]
    fn optional_fields() {
        let v = FormValues::new();
        assert_eq!(v.parse_optional::<f64>("calories").unwrap(), None);
        v.set("calories", "  ");
        assert_eq!(v.parse_optional::<f64>("calories").unwrap(), None);
        v.set("calories", "1800");
        assert_eq!(v.parse_optional::<f64>("calories").unwrap(), Some(1800.0));
    }

    #[test]
    fn clones_share_answers() {
        let a = FormValues::new();
        let b = a.clone();
        a.set("name", "Plan");
        assert_eq!(b.get("name").as_deref(), Some("Plan"));
    }
}
