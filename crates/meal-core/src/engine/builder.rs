//! Builder para `Stepper`.
//!
//! Acumula los descriptores en orden, opcionalmente el índice inicial y un
//! log de eventos, y valida todo en `build`:
//! - la lista no puede estar vacía ni superar `u32::MAX` pasos;
//! - los `step_number` deben ser exactamente `1..=N` en orden;
//! - el índice inicial debe estar en `[0, N-1]`.
//!
//! ```ignore
//! let stepper = Stepper::builder()
//!     .add("Datos personales", personal)
//!     .add_with("Medidas", measures, |d| d.on_next(validate_measures))
//!     .initial_step(0)
//!     .build()?;
//! ```

use std::sync::Arc;

use uuid::Uuid;

use crate::engine::Stepper;
use crate::errors::StepperError;
use crate::event::EventLog;
use crate::step::StepDescriptor;

pub struct StepperBuilder<C> {
    steps: Vec<StepDescriptor<C>>,
    initial_step: usize,
    events: Option<Arc<dyn EventLog>>,
    wizard_id: Option<Uuid>,
}

impl<C> Default for StepperBuilder<C> {
    fn default() -> Self { Self::new() }
}

impl<C> StepperBuilder<C> {
    pub fn new() -> Self {
        Self { steps: Vec::new(),
               initial_step: 0,
               events: None,
               wizard_id: None }
    }

    /// Agrega un descriptor ya numerado por el host.
    #[inline]
    pub fn step(mut self, descriptor: StepDescriptor<C>) -> Self {
        self.steps.push(descriptor);
        self
    }

    /// Agrega un paso sin hooks numerándolo según su posición.
    #[inline]
    pub fn add(self, title: impl Into<String>, content: C) -> Self {
        self.add_with(title, content, |d| d)
    }

    /// Agrega un paso numerado según su posición y deja configurar sus hooks.
    pub fn add_with(self,
                    title: impl Into<String>,
                    content: C,
                    configure: impl FnOnce(StepDescriptor<C>) -> StepDescriptor<C>)
                    -> Self {
        // fuera de rango `build` lo rechaza con `TooManySteps`
        let number = step_number_for(self.steps.len()).unwrap_or(u32::MAX);
        let descriptor = configure(StepDescriptor::new(number, title, content));
        self.step(descriptor)
    }

    /// Índice (0-based) del paso activo al montar.
    pub fn initial_step(mut self, index: usize) -> Self {
        self.initial_step = index;
        self
    }

    pub fn event_log(mut self, log: Arc<dyn EventLog>) -> Self {
        self.events = Some(log);
        self
    }

    /// Fija el id del wizard (por defecto uno aleatorio).
    pub fn wizard_id(mut self, id: Uuid) -> Self {
        self.wizard_id = Some(id);
        self
    }

    /// Valida la configuración y monta el wizard.
    pub fn build(self) -> Result<Stepper<C>, StepperError> {
        if self.steps.is_empty() {
            return Err(StepperError::NoSteps);
        }
        if step_number_for(self.steps.len() - 1).is_none() {
            return Err(StepperError::TooManySteps { total: self.steps.len() });
        }
        for (position, step) in self.steps.iter().enumerate() {
            let expected = step_number_for(position).unwrap_or(u32::MAX);
            if step.step_number() != expected {
                return Err(StepperError::StepNumberMismatch { position,
                                                              expected,
                                                              found: step.step_number() });
            }
        }
        if self.initial_step >= self.steps.len() {
            return Err(StepperError::InitialStepOutOfRange { index: self.initial_step,
                                                             total: self.steps.len() });
        }
        let id = self.wizard_id.unwrap_or_else(Uuid::new_v4);
        Ok(Stepper::from_parts(id, self.steps, self.initial_step, self.events))
    }
}

/// Número 1-based del paso en `position`, `None` si no entra en `u32`.
fn step_number_for(position: usize) -> Option<u32> {
    position.checked_add(1).and_then(|n| u32::try_from(n).ok())
}
