//! Core Stepper implementation

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use log::{debug, trace};
use uuid::Uuid;

use crate::engine::guard::TransitionGuard;
use crate::engine::{NavigationOutcome, StepperBuilder, StepperState};
use crate::errors::{HookError, StepperError};
use crate::event::{EventLog, IgnoreReason, StepperEvent, StepperEventKind};
use crate::step::{Direction, HookContext, StepDescriptor};

/// Handle de un wizard montado.
///
/// Mantiene el índice activo y la lista de pasos. Clonar el handle no copia
/// el estado: todos los clones observan y navegan el mismo wizard. El índice
/// sólo cambia a través de `go_to_next`, `go_to_prev` y `go_to_step`.
pub struct Stepper<C> {
    inner: Arc<Inner<C>>,
}

struct Inner<C> {
    wizard_id: Uuid,
    steps: Vec<StepDescriptor<C>>,
    active: AtomicUsize,
    in_flight: AtomicBool,
    events: Option<Arc<dyn EventLog>>,
}

impl<C> Clone for Stepper<C> {
    fn clone(&self) -> Self { Self { inner: Arc::clone(&self.inner) } }
}

impl<C> Stepper<C> {
    /// Crea un nuevo builder para configurar el wizard
    #[inline]
    pub fn builder() -> StepperBuilder<C> { StepperBuilder::new() }

    /// Monta un wizard en el primer paso.
    pub fn new(steps: Vec<StepDescriptor<C>>) -> Result<Self, StepperError> {
        Self::with_initial_step(steps, 0)
    }

    /// Monta un wizard en `initial_step` (0-based).
    pub fn with_initial_step(steps: Vec<StepDescriptor<C>>, initial_step: usize) -> Result<Self, StepperError> {
        steps.into_iter()
             .fold(StepperBuilder::new(), StepperBuilder::step)
             .initial_step(initial_step)
             .build()
    }

    /// Construye el handle con pasos ya validados por el builder.
    pub(crate) fn from_parts(wizard_id: Uuid,
                             steps: Vec<StepDescriptor<C>>,
                             initial_step: usize,
                             events: Option<Arc<dyn EventLog>>)
                             -> Self {
        let stepper = Self { inner: Arc::new(Inner { wizard_id,
                                                     active: AtomicUsize::new(initial_step),
                                                     in_flight: AtomicBool::new(false),
                                                     steps,
                                                     events }) };
        stepper.record(StepperEventKind::Mounted { step_count: stepper.total_steps(),
                                                   initial_index: initial_step });
        debug!("wizard {wizard_id} mounted: {} steps, initial index {initial_step}", stepper.total_steps());
        stepper
    }

    pub fn wizard_id(&self) -> Uuid { self.inner.wizard_id }

    pub fn state(&self) -> StepperState {
        StepperState { active_index: self.active_index(),
                       total: self.total_steps() }
    }

    pub fn active_index(&self) -> usize { self.inner.active.load(Ordering::Acquire) }

    pub fn total_steps(&self) -> usize { self.inner.steps.len() }

    pub fn is_first_step(&self) -> bool { self.state().is_first_step() }

    pub fn is_last_step(&self) -> bool { self.state().is_last_step() }

    /// `true` mientras un hook de navegación está pendiente.
    pub fn is_transitioning(&self) -> bool { self.inner.in_flight.load(Ordering::Acquire) }

    /// Descriptor del paso activo. Mientras un hook está pendiente sigue
    /// siendo el paso previo a la transición.
    pub fn active_step(&self) -> &StepDescriptor<C> { &self.inner.steps[self.active_index()] }

    pub fn steps(&self) -> &[StepDescriptor<C>] { &self.inner.steps }

    /// Eventos registrados para este wizard, si tiene log.
    pub fn events(&self) -> Option<Vec<StepperEvent>> {
        self.inner.events.as_ref().map(|log| log.list(self.inner.wizard_id))
    }

    /// Avanza un paso tras esperar el `on_next` del paso activo.
    ///
    /// En el último paso no hace nada (`Ignored`). Si el hook falla, el error
    /// se devuelve sin cambios y el índice queda igual.
    pub async fn go_to_next(&self) -> Result<NavigationOutcome, HookError> {
        self.step_by(Direction::Forward).await
    }

    /// Retrocede un paso tras esperar el `on_prev` del paso activo.
    pub async fn go_to_prev(&self) -> Result<NavigationOutcome, HookError> {
        self.step_by(Direction::Backward).await
    }

    /// Salto directo a `index` sin hooks. Los índices fuera de rango y el
    /// salto al paso activo se descartan en silencio (`Ignored`).
    pub fn go_to_step(&self, index: usize) -> NavigationOutcome {
        match self.try_go_to_step(index) {
            Ok(outcome) => outcome,
            Err(StepperError::TransitionInFlight) => NavigationOutcome::Busy,
            Err(_) => NavigationOutcome::Ignored,
        }
    }

    /// Variante estricta de `go_to_step`: informa el rango inválido y la
    /// transición en curso como errores. Saltar al paso activo no es un
    /// error, pero tampoco confirma una transición.
    pub fn try_go_to_step(&self, index: usize) -> Result<NavigationOutcome, StepperError> {
        let Some(_guard) = TransitionGuard::acquire(&self.inner.in_flight) else {
            self.ignored(Direction::Jump, Some(index), IgnoreReason::Busy);
            return Err(StepperError::TransitionInFlight);
        };
        let state = self.state();
        if !state.contains(index) {
            self.ignored(Direction::Jump, Some(index), IgnoreReason::OutOfRange);
            return Err(StepperError::StepOutOfRange { index, total: state.total });
        }
        if index == state.active_index {
            self.ignored(Direction::Jump, Some(index), IgnoreReason::AlreadyActive);
            return Ok(NavigationOutcome::Ignored);
        }
        self.commit(Direction::Jump, state.active_index, index);
        Ok(NavigationOutcome::Moved { from: state.active_index, to: index })
    }

    async fn step_by(&self, direction: Direction) -> Result<NavigationOutcome, HookError> {
        let Some(_guard) = TransitionGuard::acquire(&self.inner.in_flight) else {
            self.ignored(direction, None, IgnoreReason::Busy);
            return Ok(NavigationOutcome::Busy);
        };

        let state = self.state();
        let target = match direction {
            Direction::Forward => state.next_index(),
            Direction::Backward => state.prev_index(),
            Direction::Jump => None,
        };
        let (from, Some(to)) = (state.active_index, target) else {
            self.ignored(direction, None, IgnoreReason::Boundary);
            return Ok(NavigationOutcome::Ignored);
        };

        let step = &self.inner.steps[from];
        let hook = match direction {
            Direction::Backward => step.prev_hook(),
            _ => step.next_hook(),
        };
        if let Some(hook) = hook {
            self.record(StepperEventKind::HookStarted { direction, from });
            let ctx = HookContext { step_number: step.step_number(),
                                    index: from,
                                    direction };
            if let Err(e) = hook.call(ctx).await {
                debug!("wizard {}: {direction:?} hook of step {} rejected: {e}", self.inner.wizard_id, step.step_number());
                self.record(StepperEventKind::HookRejected { direction,
                                                             from,
                                                             error: e.to_string() });
                return Err(e);
            }
        }

        self.commit(direction, from, to);
        Ok(NavigationOutcome::Moved { from, to })
    }

    // Único punto de mutación del índice; el llamador tiene el guard.
    fn commit(&self, direction: Direction, from: usize, to: usize) {
        self.inner.active.store(to, Ordering::Release);
        self.record(StepperEventKind::TransitionCommitted { direction, from, to });
        debug!("wizard {}: {direction:?} {from} -> {to}", self.inner.wizard_id);
    }

    fn ignored(&self, direction: Direction, requested: Option<usize>, reason: IgnoreReason) {
        trace!("wizard {}: {direction:?} ignored ({reason:?})", self.inner.wizard_id);
        self.record(StepperEventKind::NavigationIgnored { direction, requested, reason });
    }

    fn record(&self, kind: StepperEventKind) {
        if let Some(log) = &self.inner.events {
            log.append_kind(self.inner.wizard_id, kind);
        }
    }
}

impl<C> fmt::Debug for Stepper<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stepper")
         .field("wizard_id", &self.inner.wizard_id)
         .field("state", &self.state())
         .field("transitioning", &self.is_transitioning())
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::InMemoryEventLog;
    use crate::step::hook_fn;
    use std::sync::atomic::AtomicU32;

    fn plain(n: u32) -> Vec<StepDescriptor<&'static str>> {
        (1..=n).map(|i| StepDescriptor::new(i, format!("Paso {i}"), "contenido")).collect()
    }

    #[tokio::test]
    async fn next_and_prev_without_hooks() {
        let s = Stepper::new(plain(3)).expect("valid");
        assert_eq!(s.go_to_next().await.unwrap(), NavigationOutcome::Moved { from: 0, to: 1 });
        assert_eq!(s.go_to_prev().await.unwrap(), NavigationOutcome::Moved { from: 1, to: 0 });
        assert_eq!(s.go_to_prev().await.unwrap(), NavigationOutcome::Ignored);
        assert_eq!(s.active_index(), 0);
    }

    #[tokio::test]
    async fn prev_hook_runs_only_backwards() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let mut steps = plain(2);
        let second = steps.pop().unwrap().on_prev(hook_fn(move |ctx| {
                                                      let c = Arc::clone(&c);
                                                      async move {
                                                          assert_eq!(ctx.direction, Direction::Backward);
                                                          c.fetch_add(1, Ordering::SeqCst);
                                                          Ok::<(), HookError>(())
                                                      }
                                                  }));
        steps.push(second);
        let s = Stepper::new(steps).unwrap();
        s.go_to_next().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        s.go_to_prev().await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(s.is_first_step());
    }

    #[test]
    fn strict_jump_reports_range() {
        let s = Stepper::new(plain(2)).unwrap();
        assert_eq!(s.try_go_to_step(5), Err(StepperError::StepOutOfRange { index: 5, total: 2 }));
        assert_eq!(s.go_to_step(5), NavigationOutcome::Ignored);
        assert_eq!(s.try_go_to_step(1), Ok(NavigationOutcome::Moved { from: 0, to: 1 }));
    }

    #[test]
    fn jump_to_active_step_commits_nothing() {
        let log = Arc::new(InMemoryEventLog::new());
        let s = Stepper::builder().add("a", ()).add("b", ()).initial_step(1).event_log(log.clone()).build().unwrap();
        assert_eq!(s.try_go_to_step(1), Ok(NavigationOutcome::Ignored));
        assert_eq!(s.go_to_step(1), NavigationOutcome::Ignored);
        assert_eq!(s.active_index(), 1);
        let kinds: Vec<_> = log.list(s.wizard_id()).into_iter().map(|e| e.kind).collect();
        assert!(!kinds.iter().any(|k| matches!(k, StepperEventKind::TransitionCommitted { .. })));
        assert_eq!(kinds.last(),
                   Some(&StepperEventKind::NavigationIgnored { direction: Direction::Jump,
                                                               requested: Some(1),
                                                               reason: IgnoreReason::AlreadyActive }));
    }

    #[tokio::test]
    async fn events_follow_navigation() {
        let log = Arc::new(InMemoryEventLog::new());
        let s = Stepper::builder().add("a", ()).add("b", ()).event_log(log.clone()).build().unwrap();
        s.go_to_next().await.unwrap();
        s.go_to_next().await.unwrap();
        let kinds: Vec<_> = s.events().unwrap().into_iter().map(|e| e.kind).collect();
        assert_eq!(kinds,
                   vec![StepperEventKind::Mounted { step_count: 2, initial_index: 0 },
                        StepperEventKind::TransitionCommitted { direction: Direction::Forward, from: 0, to: 1 },
                        StepperEventKind::NavigationIgnored { direction: Direction::Forward,
                                                              requested: None,
                                                              reason: IgnoreReason::Boundary },]);
        assert_eq!(log.list(s.wizard_id()).len(), 3);
    }
}
