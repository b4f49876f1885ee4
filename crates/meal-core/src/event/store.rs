use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use uuid::Uuid;

use super::{StepperEvent, StepperEventKind};

/// Almacenamiento de eventos append-only, compartible entre hilos.
pub trait EventLog: Send + Sync {
    /// Agrega un evento a partir de su kind y devuelve el evento completo (con seq y ts).
    fn append_kind(&self, wizard_id: Uuid, kind: StepperEventKind) -> StepperEvent;
    /// Lista eventos de un wizard (orden ascendente por seq).
    fn list(&self, wizard_id: Uuid) -> Vec<StepperEvent>;
}

#[derive(Default)]
pub struct InMemoryEventLog { inner: Mutex<HashMap<Uuid, Vec<StepperEvent>>> }

impl InMemoryEventLog {
    pub fn new() -> Self { Self::default() }

    /// Serializa los eventos de un wizard como JSON.
    pub fn to_json(&self, wizard_id: Uuid) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.list(wizard_id))
    }
}

impl EventLog for InMemoryEventLog {
    fn append_kind(&self, wizard_id: Uuid, kind: StepperEventKind) -> StepperEvent {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let vec = guard.entry(wizard_id).or_default();
        let seq = vec.len() as u64;
        let ev = StepperEvent { seq, wizard_id, kind, ts: Utc::now() };
        vec.push(ev.clone());
        ev
    }
    fn list(&self, wizard_id: Uuid) -> Vec<StepperEvent> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).get(&wizard_id).cloned().unwrap_or_default()
    }
}
