//! Wizards anfitriones de la aplicación.
//!
//! Cada wizard arma su lista de pasos (`FormSection` como contenido), ata los
//! hooks `on_next` a la validación del dominio y a la persistencia vía
//! `MealPlanGateway`, y expone el resultado para el paso de resumen.

pub mod form;
pub mod gateway;
pub mod plan_wizard;
pub mod profile_wizard;
pub mod session;

use std::sync::Arc;

use meal_core::{EventLog, InMemoryEventLog, StepBar, StepperBuilder};

use form::{FormSection, FormValues};

pub use plan_wizard::PlanWizard;
pub use profile_wizard::ProfileWizard;

/// Opciones comunes de montaje.
#[derive(Clone, Default)]
pub struct WizardOptions {
    pub initial_step: usize,
    pub events: Option<Arc<InMemoryEventLog>>,
}

impl WizardOptions {
    pub(crate) fn apply<C>(&self, builder: StepperBuilder<C>) -> StepperBuilder<C> {
        let builder = builder.initial_step(self.initial_step);
        match &self.events {
            Some(log) => builder.event_log(Arc::clone(log) as Arc<dyn EventLog>),
            None => builder,
        }
    }
}

/// Lo que el front end necesita de un wizard montado.
pub trait HostWizard: Send + Sync {
    fn name(&self) -> &'static str;
    fn bar(&self) -> &StepBar<FormSection>;
    fn values(&self) -> &FormValues;
    /// Resultado ya confirmado por los hooks, si lo hay.
    fn summary(&self) -> Option<String>;
}
