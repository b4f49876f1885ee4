//! mealflow: wizards de la aplicación de planificación de comidas.
//!
//! Este crate es la capa anfitriona sobre `meal-core`:
//! - `config`: configuración desde entorno / `.env`.
//! - `errors`: errores de la aplicación.
//! - `workflow`: wizards de perfil y de plan, backend opaco y sesión de texto.

pub mod config;
pub mod errors;
pub mod workflow;
