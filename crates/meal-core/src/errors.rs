//! Errores del core del wizard.
//!
//! Sólo la construcción del stepper y el salto estricto producen
//! `StepperError`; los rechazos de hooks viajan sin envolver como `HookError`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error devuelto por un hook `on_next` / `on_prev`. Se propaga tal cual al
/// llamador de la navegación.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum StepperError {
    #[error("a wizard needs at least one step")] NoSteps,
    #[error("too many steps ({total}), step numbers must fit in u32")]
    TooManySteps { total: usize },
    #[error("step at position {position} has number {found}, expected {expected}")]
    StepNumberMismatch { position: usize, expected: u32, found: u32 },
    #[error("initial step {index} out of range (total {total})")]
    InitialStepOutOfRange { index: usize, total: usize },
    #[error("step {index} out of range (total {total})")]
    StepOutOfRange { index: usize, total: usize },
    #[error("a transition is already in flight")] TransitionInFlight,
}
