//! Registro de eventos de transición del wizard.
//!
//! - `StepperEventKind` describe lo observable de cada navegación.
//! - `EventLog` es un almacenamiento append-only; el stepper sólo escribe,
//!   nunca lee de él para decidir una transición.

pub mod store;
pub mod types;

pub use store::{EventLog, InMemoryEventLog};
pub use types::{IgnoreReason, StepperEvent, StepperEventKind};
