/// Estado de un paso visto desde el paso activo.
///
/// Se recalcula en cada lectura a partir de `active_index`; no hay estado
/// almacenado por paso.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Paso anterior al activo.
    Completed,
    /// Paso activo.
    Active,
    /// Paso posterior al activo.
    Upcoming,
}

impl StepStatus {
    pub fn of(index: usize, active_index: usize) -> Self {
        use std::cmp::Ordering::*;
        match index.cmp(&active_index) {
            Less => StepStatus::Completed,
            Equal => StepStatus::Active,
            Greater => StepStatus::Upcoming,
        }
    }
}
