//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y expone `AppConfig`.
//!
//! Variables reconocidas:
//! - `MEALFLOW_INITIAL_STEP`: índice (0-based) con el que se montan los wizards.
//! - `MEALFLOW_LOG`: filtro de logging (sintaxis `EnvFilter`), por defecto `warn`.
//! - `MEALFLOW_EVENTS`: `1`/`true` para volcar el log de eventos al salir.
use once_cell::sync::Lazy;
use std::env;

use crate::errors::CoreError;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub wizard: WizardConfig,
    /// Filtro de logging para el subscriber del binario.
    pub log_filter: String,
    /// Volcar los eventos del wizard como JSON al terminar.
    pub dump_events: bool,
}

/// Parámetros con los que se montan los wizards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardConfig {
    pub initial_step: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { wizard: WizardConfig::default(),
               log_filter: "warn".into(),
               dump_events: false }
    }
}

impl AppConfig {
    /// Lee la configuración del entorno (tras cargar `.env`).
    pub fn from_env() -> Result<Self, CoreError> {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let mut cfg = Self::default();
        if let Some(raw) = get("MEALFLOW_INITIAL_STEP") {
            cfg.wizard.initial_step = raw.trim()
                                         .parse()
                                         .map_err(|_| CoreError::Config(format!("MEALFLOW_INITIAL_STEP inválido: {raw}")))?;
        }
        if let Some(filter) = get("MEALFLOW_LOG").filter(|f| !f.trim().is_empty()) {
            cfg.log_filter = filter;
        }
        if let Some(raw) = get("MEALFLOW_EVENTS") {
            cfg.dump_events = parse_flag(&raw).ok_or_else(|| CoreError::Config(format!("MEALFLOW_EVENTS inválido: {raw}")))?;
        }
        Ok(cfg)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
