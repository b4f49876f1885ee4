//! meal-core: motor de wizards por pasos.
//!
//! Un wizard es una lista ordenada de `StepDescriptor` y un `Stepper` que
//! lleva el índice activo. Las transiciones esperan el hook del paso activo
//! y sólo se confirman si éste termina bien. `StepBar` enlaza la presentación
//! con la navegación.
pub mod bar;
pub mod engine;
pub mod errors;
pub mod event;
pub mod step;

pub use bar::{ControlState, StepBar, StepBarView, StepIndicator};
pub use engine::{NavigationOutcome, Stepper, StepperBuilder, StepperState};
pub use errors::{HookError, StepperError};
pub use event::{EventLog, IgnoreReason, InMemoryEventLog, StepperEvent, StepperEventKind};
pub use step::{hook_fn, Direction, FnHook, HookContext, StepDescriptor, StepHook, StepStatus};
