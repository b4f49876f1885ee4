//! Máquina de estados del wizard.
//!
//! Provee el handle `Stepper`, su builder y los tipos que describen el
//! resultado de cada navegación.

pub mod builder;
pub mod core;
mod guard;
pub mod outcome;
pub mod state;

pub use builder::StepperBuilder;
pub use core::Stepper;
pub use outcome::NavigationOutcome;
pub use state::StepperState;
