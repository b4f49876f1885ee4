/// Instantánea del estado del stepper: índice activo y cantidad de pasos.
///
/// Invariante: `active_index < total` y `total >= 1`. Las consultas derivadas
/// se calculan en cada llamada.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperState {
    pub active_index: usize,
    pub total: usize,
}

impl StepperState {
    pub fn is_first_step(&self) -> bool { self.active_index == 0 }

    pub fn is_last_step(&self) -> bool { self.active_index + 1 == self.total }

    /// Destino de un avance, `None` en el último paso.
    pub fn next_index(&self) -> Option<usize> {
        (!self.is_last_step()).then(|| self.active_index + 1)
    }

    /// Destino de un retroceso, `None` en el primer paso.
    pub fn prev_index(&self) -> Option<usize> { self.active_index.checked_sub(1) }

    pub fn contains(&self, index: usize) -> bool { index < self.total }

    /// Fracción de pasos alcanzados, en `(0, 1]`.
    pub fn progress(&self) -> f32 { (self.active_index + 1) as f32 / self.total as f32 }
}
