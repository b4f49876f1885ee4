use std::sync::atomic::{AtomicBool, Ordering};

/// Marca de transición en curso. Se libera al soltarse, también si el future
/// de navegación se cancela mientras espera un hook.
pub(crate) struct TransitionGuard<'a>(&'a AtomicBool);

impl<'a> TransitionGuard<'a> {
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for TransitionGuard<'_> {
    fn drop(&mut self) { self.0.store(false, Ordering::Release); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_until_drop() {
        let flag = AtomicBool::new(false);
        let g = TransitionGuard::acquire(&flag).expect("free");
        assert!(TransitionGuard::acquire(&flag).is_none());
        drop(g);
        assert!(TransitionGuard::acquire(&flag).is_some());
    }
}
