//! Definiciones relacionadas a los pasos del wizard.
//!
//! Un paso es una unidad de contenido (genérica en `C`) con hooks asíncronos
//! opcionales que se ejecutan antes de confirmar una transición. Este módulo
//! define:
//! - `StepDescriptor`: configuración estática de un paso.
//! - `StepHook`: interfaz de los hooks `on_next` / `on_prev`.
//! - `StepStatus`: estado visible de cada paso respecto al paso activo.

pub mod descriptor;
pub mod hook;
mod status;

pub use descriptor::StepDescriptor;
pub use hook::{hook_fn, Direction, FnHook, HookContext, StepHook};
pub use status::StepStatus;
