use std::fmt;
use std::sync::Arc;

use super::hook::StepHook;

/// Configuración estática de un paso del wizard.
///
/// Inmutable una vez entregada al stepper; el host la construye y el stepper
/// pasa a ser su dueño.
pub struct StepDescriptor<C> {
    step_number: u32,
    title: String,
    content: C,
    on_next: Option<Arc<dyn StepHook>>,
    on_prev: Option<Arc<dyn StepHook>>,
}

impl<C> StepDescriptor<C> {
    /// `step_number` es 1-based y debe coincidir con la posición en la lista.
    pub fn new(step_number: u32, title: impl Into<String>, content: C) -> Self {
        Self { step_number,
               title: title.into(),
               content,
               on_next: None,
               on_prev: None }
    }

    /// Hook que se espera antes de avanzar desde este paso.
    pub fn on_next(mut self, hook: impl StepHook + 'static) -> Self {
        self.on_next = Some(Arc::new(hook));
        self
    }

    /// Hook que se espera antes de retroceder desde este paso.
    pub fn on_prev(mut self, hook: impl StepHook + 'static) -> Self {
        self.on_prev = Some(Arc::new(hook));
        self
    }

    pub fn step_number(&self) -> u32 { self.step_number }
    pub fn title(&self) -> &str { &self.title }
    pub fn content(&self) -> &C { &self.content }
    pub fn has_on_next(&self) -> bool { self.on_next.is_some() }
    pub fn has_on_prev(&self) -> bool { self.on_prev.is_some() }

    pub(crate) fn next_hook(&self) -> Option<&Arc<dyn StepHook>> { self.on_next.as_ref() }
    pub(crate) fn prev_hook(&self) -> Option<&Arc<dyn StepHook>> { self.on_prev.as_ref() }
}

impl<C: fmt::Debug> fmt::Debug for StepDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDescriptor")
         .field("step_number", &self.step_number)
         .field("title", &self.title)
         .field("content", &self.content)
         .field("on_next", &self.on_next.is_some())
         .field("on_prev", &self.on_prev.is_some())
         .finish()
    }
}
