//! Tipos de evento del stepper y estructura `StepperEvent`.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::step::Direction;

/// Motivo por el que una navegación se descartó sin error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Avanzar en el último paso o retroceder en el primero.
    Boundary,
    /// Salto directo a un índice fuera de `[0, N-1]`.
    OutOfRange,
    /// Ya hay una transición en curso.
    Busy,
    /// Salto directo al paso que ya está activo.
    AlreadyActive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepperEventKind {
    /// Primer evento de un wizard: cantidad de pasos e índice inicial.
    Mounted { step_count: usize, initial_index: usize },
    /// Se invocó el hook del paso `from`; la transición queda pendiente.
    HookStarted { direction: Direction, from: usize },
    /// El índice activo cambió.
    TransitionCommitted { direction: Direction, from: usize, to: usize },
    /// El hook falló; el índice no cambió.
    HookRejected { direction: Direction, from: usize, error: String },
    /// Navegación descartada.
    NavigationIgnored { direction: Direction, requested: Option<usize>, reason: IgnoreReason },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepperEvent {
    pub seq: u64, // asignado por el log (orden append)
    pub wizard_id: Uuid,
    pub kind: StepperEventKind,
    pub ts: DateTime<Utc>,
}
