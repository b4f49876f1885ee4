use std::sync::Arc;

use meal_core::{EventLog, InMemoryEventLog, NavigationOutcome, StepperEventKind};
use mealflow_rust::workflow::gateway::{InMemoryGateway, MealPlanGateway};
use mealflow_rust::workflow::session::{self, Reply};
use mealflow_rust::workflow::{HostWizard, ProfileWizard, WizardOptions};

const HAPPY_PATH: &str = "
# datos personales
set sex mujer
set age 35
next
set height_cm 165
set weight_kg 62
next
set activity activo
set goal perder
set diet vegetariana
set meals_per_day 5
next
";

#[tokio::test]
async fn profile_is_saved_when_leaving_lifestyle_step() {
    let gateway = Arc::new(InMemoryGateway::new());
    let wizard = ProfileWizard::build(gateway.clone(), WizardOptions::default()).unwrap();

    let replies = session::run_lines(&wizard, HAPPY_PATH.lines()).await.unwrap();
    let moves = replies.iter().filter(|r| matches!(r, Reply::Navigated(o) if o.is_moved())).count();
    assert_eq!(moves, 3);
    assert!(wizard.bar().stepper().is_last_step());

    let saved = wizard.saved().expect("profile saved by the hook");
    let (id, stored) = gateway.latest_characteristics().await.unwrap().unwrap();
    assert_eq!(saved.id, id);
    assert_eq!(stored.meals_per_day(), 5);
    assert!(session::render(&wizard).contains("kcal/día"));
}

#[tokio::test]
async fn invalid_age_blocks_first_step() {
    let wizard = ProfileWizard::build(Arc::new(InMemoryGateway::new()), WizardOptions::default()).unwrap();
    let replies = session::run_lines(&wizard, ["set sex hombre", "set age 9", "next"]).await.unwrap();
    match replies.last() {
        Some(Reply::Rejected(msg)) => assert!(msg.contains("age"), "unexpected message: {msg}"),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(wizard.bar().stepper().active_index(), 0);

    let replies = session::run_lines(&wizard, ["set age 40", "next"]).await.unwrap();
    assert_eq!(replies.last(), Some(&Reply::Navigated(NavigationOutcome::Moved { from: 0, to: 1 })));
}

#[tokio::test]
async fn offline_backend_keeps_wizard_on_lifestyle_step() {
    let events = Arc::new(InMemoryEventLog::new());
    let options = WizardOptions { initial_step: 2, events: Some(events.clone()) };
    let wizard = ProfileWizard::build(Arc::new(InMemoryGateway::offline()), options).unwrap();
    for (k, v) in [("sex", "m"), ("age", "30"), ("height_cm", "180"), ("weight_kg", "80")] {
        wizard.values().set(k, v);
    }
    let replies = session::run_lines(&wizard,
                                     ["set activity moderado", "set goal mantener", "set diet omnivora", "set meals_per_day 3", "next"]).await
                                                                                                                                       .unwrap();
    assert!(matches!(replies.last(), Some(Reply::Rejected(msg)) if msg.contains("no disponible")));
    assert_eq!(wizard.bar().stepper().active_index(), 2);
    assert!(wizard.saved().is_none());

    let kinds: Vec<_> = events.list(wizard.bar().stepper().wizard_id()).into_iter().map(|e| e.kind).collect();
    assert!(kinds.iter().any(|k| matches!(k, StepperEventKind::HookRejected { from: 2, .. })));
}

#[tokio::test]
async fn going_back_and_forward_replaces_the_same_profile() {
    let gateway = Arc::new(InMemoryGateway::new());
    let wizard = ProfileWizard::build(gateway.clone(), WizardOptions::default()).unwrap();
    session::run_lines(&wizard, HAPPY_PATH.lines()).await.unwrap();
    let first = wizard.saved().unwrap().id;

    session::run_lines(&wizard, ["back", "set goal ganar", "next"]).await.unwrap();
    let second = wizard.saved().unwrap();
    assert_eq!(second.id, first);
    assert_eq!(second.profile.goal(), meal_domain::Goal::Gain);
}

#[tokio::test]
async fn field_outside_active_step_is_a_command_error() {
    let wizard = ProfileWizard::build(Arc::new(InMemoryGateway::new()), WizardOptions::default()).unwrap();
    let err = session::run_lines(&wizard, ["set weight_kg 70"]).await.unwrap_err();
    assert!(matches!(err, mealflow_rust::errors::CoreError::Command(_)));
}
