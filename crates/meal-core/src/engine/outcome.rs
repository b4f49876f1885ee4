/// Resultado de una navegación que no falló.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// El índice activo pasó de `from` a `to`.
    Moved { from: usize, to: usize },
    /// Petición descartada en silencio (borde, salto fuera de rango o al
    /// paso activo).
    Ignored,
    /// Había otra transición en curso; no se ejecutó ningún hook.
    Busy,
}

impl NavigationOutcome {
    pub fn is_moved(&self) -> bool { matches!(self, NavigationOutcome::Moved { .. }) }
}
