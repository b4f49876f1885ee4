//! Barra de pasos: enlace entre la presentación y el `Stepper`.
//!
//! No guarda estado propio. `view` arma el indicador de progreso y el estado
//! de los controles a partir del handle; `press_next` / `press_back` delegan
//! en la navegación asíncrona.

use std::fmt;

use crate::engine::{NavigationOutcome, Stepper};
use crate::errors::HookError;
use crate::step::StepStatus;

/// Estado de un control de navegación.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState { Hidden, Disabled, Enabled }

impl ControlState {
    pub fn is_enabled(&self) -> bool { *self == ControlState::Enabled }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIndicator {
    pub number: u32,
    pub title: String,
    pub status: StepStatus,
}

/// Lo que la barra muestra en un instante dado.
#[derive(Debug, Clone, PartialEq)]
pub struct StepBarView {
    pub indicators: Vec<StepIndicator>,
    pub active_title: String,
    pub progress: f32,
    pub back: ControlState,
    pub next: ControlState,
}

pub struct StepBar<C> {
    stepper: Stepper<C>,
}

impl<C> StepBar<C> {
    pub fn new(stepper: Stepper<C>) -> Self { Self { stepper } }

    pub fn stepper(&self) -> &Stepper<C> { &self.stepper }

    /// Contenido del paso activo, para que el host lo renderice.
    pub fn active_content(&self) -> &C { self.stepper.active_step().content() }

    pub fn view(&self) -> StepBarView {
        let state = self.stepper.state();
        let busy = self.stepper.is_transitioning();
        let control = |hidden: bool| match (hidden, busy) {
            (true, _) => ControlState::Hidden,
            (false, true) => ControlState::Disabled,
            (false, false) => ControlState::Enabled,
        };
        let indicators = self.stepper
                             .steps()
                             .iter()
                             .enumerate()
                             .map(|(i, d)| StepIndicator { number: d.step_number(),
                                                           title: d.title().to_string(),
                                                           status: StepStatus::of(i, state.active_index) })
                             .collect();
        StepBarView { indicators,
                      active_title: self.stepper.active_step().title().to_string(),
                      progress: state.progress(),
                      back: control(state.is_first_step()),
                      next: control(state.is_last_step()) }
    }

    /// Click en "siguiente".
    pub async fn press_next(&self) -> Result<NavigationOutcome, HookError> {
        self.stepper.go_to_next().await
    }

    /// Click en "atrás".
    pub async fn press_back(&self) -> Result<NavigationOutcome, HookError> {
        self.stepper.go_to_prev().await
    }
}

impl fmt::Display for StepBarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ind) in self.indicators.iter().enumerate() {
            if i > 0 {
                write!(f, " - ")?;
            }
            let mark = match ind.status {
                StepStatus::Completed => "x",
                StepStatus::Active => ">",
                StepStatus::Upcoming => " ",
            };
            write!(f, "[{mark}] {} {}", ind.number, ind.title)?;
        }
        write!(f, "  ({:.0}%)", self.progress * 100.0)?;
        match self.back {
            ControlState::Hidden => {}
            ControlState::Disabled => write!(f, "  (< atrás)")?,
            ControlState::Enabled => write!(f, "  < atrás")?,
        }
        match self.next {
            ControlState::Hidden => Ok(()),
            ControlState::Disabled => write!(f, "  (siguiente >)"),
            ControlState::Enabled => write!(f, "  siguiente >"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(initial: usize) -> StepBar<()> {
        let s = Stepper::builder().add("Uno", ()).add("Dos", ()).add("Tres", ()).initial_step(initial).build().unwrap();
        StepBar::new(s)
    }

    #[test]
    fn back_hidden_on_first_step() {
        let v = bar(0).view();
        assert_eq!(v.back, ControlState::Hidden);
        assert_eq!(v.next, ControlState::Enabled);
        assert_eq!(v.active_title, "Uno");
        assert_eq!(v.indicators[0].status, StepStatus::Active);
        assert_eq!(v.indicators[2].status, StepStatus::Upcoming);
    }

    #[test]
    fn next_hidden_on_last_step() {
        let v = bar(2).view();
        assert_eq!(v.next, ControlState::Hidden);
        assert!(v.back.is_enabled());
        assert_eq!(v.indicators[1].status, StepStatus::Completed);
        assert_eq!(v.progress, 1.0);
    }

    #[test]
    fn text_rendering() {
        let text = bar(1).view().to_string();
        assert_eq!(text, "[x] 1 Uno - [>] 2 Dos - [ ] 3 Tres  (67%)  < atrás  siguiente >");
    }
}
