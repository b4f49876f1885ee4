//! Wizard de creación de planes de comidas.
//!
//! Pasos: datos del plan, comidas, revisión. Si no se indican calorías, se
//! toman del último perfil guardado en el backend.
use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;
use meal_core::{hook_fn, HookError, StepBar, Stepper, StepperError};
use meal_domain::{MealPlan, MealPlanDraft, NutritionTargets};

use super::form::{FieldSpec, FormError, FormSection, FormValues};
use super::gateway::MealPlanGateway;
use super::{HostWizard, WizardOptions};

type Slot = Arc<Mutex<Option<MealPlan>>>;

pub struct PlanWizard {
    bar: StepBar<FormSection>,
    values: FormValues,
    created: Slot,
}

fn read_dates(values: &FormValues) -> Result<(NaiveDate, NaiveDate), FormError> {
    let start = values.parse::<NaiveDate>("start_date")?;
    let end = values.parse::<NaiveDate>("end_date")?;
    MealPlanDraft::check_dates(start, end)?;
    Ok((start, end))
}

fn check_plan_data(values: &FormValues) -> Result<(), HookError> {
    values.require("name")?;
    read_dates(values)?;
    Ok(())
}

async fn create_plan(values: FormValues, gateway: Arc<dyn MealPlanGateway>, created: Slot) -> Result<(), HookError> {
    let (start_date, end_date) = read_dates(&values)?;
    let meals_per_day = values.parse("meals_per_day")?;
    let latest = gateway.latest_characteristics().await?;
    let daily_calories = match (values.parse_optional::<f64>("calories")?, &latest) {
        (Some(kcal), _) => kcal,
        (None, Some((_, profile))) => NutritionTargets::for_profile(profile).daily_calories,
        (None, None) => return Err(FormError::Missing("calories").into()),
    };
    let draft = MealPlanDraft { name: values.require("name")?,
                                start_date,
                                end_date,
                                meals_per_day,
                                daily_calories,
                                characteristics_id: latest.map(|(id, _)| id) };
    let plan = gateway.create_meal_plan(draft).await?;
    log::info!("plan {} creado: {} días, {:.0} kcal/día", plan.id(), plan.days(), plan.daily_calories());
    *created.lock().unwrap_or_else(PoisonError::into_inner) = Some(plan);
    Ok(())
}

impl PlanWizard {
    pub fn build(gateway: Arc<dyn MealPlanGateway>, options: WizardOptions) -> Result<Self, StepperError> {
        let values = FormValues::new();
        let created: Slot = Arc::new(Mutex::new(None));

        let plan_data = FormSection::new("Nombre y fechas del plan.",
                                         vec![FieldSpec::new("name", "Nombre", "texto"),
                                              FieldSpec::new("start_date", "Inicio", "AAAA-MM-DD"),
                                              FieldSpec::new("end_date", "Fin", "AAAA-MM-DD, hasta 28 días")]);
        let meals = FormSection::new("Comidas y calorías.",
                                     vec![FieldSpec::new("meals_per_day", "Comidas por día", "1-6"),
                                          FieldSpec::new("calories", "Calorías diarias", "opcional, por defecto las del perfil")]);
        let review = FormSection::new("Plan creado.", vec![]);

        let (v1, v2) = (values.clone(), values.clone());
        let slot = Arc::clone(&created);
        let stepper = options.apply(Stepper::builder())
                             .add_with("Plan", plan_data, move |d| {
                                 d.on_next(hook_fn(move |_| {
                                      let v = v1.clone();
                                      async move { check_plan_data(&v) }
                                  }))
                             })
                             .add_with("Comidas", meals, move |d| {
                                 d.on_next(hook_fn(move |_| create_plan(v2.clone(), Arc::clone(&gateway), Arc::clone(&slot))))
                             })
                             .add("Revisión", review)
                             .build()?;

        Ok(Self { bar: StepBar::new(stepper), values, created })
    }

    pub fn created(&self) -> Option<MealPlan> { self.created.lock().unwrap_or_else(PoisonError::into_inner).clone() }
}

impl HostWizard for PlanWizard {
    fn name(&self) -> &'static str { "plan" }
    fn bar(&self) -> &StepBar<FormSection> { &self.bar }
    fn values(&self) -> &FormValues { &self.values }

    fn summary(&self) -> Option<String> {
        self.created().map(|p| {
                          format!("Plan {} \"{}\": {} a {} ({} días), {} comidas/día, {:.0} kcal/día ({:.0} kcal por comida)",
                                  p.id(),
                                  p.name(),
                                  p.start_date(),
                                  p.end_date(),
                                  p.days(),
                                  p.meals_per_day(),
                                  p.daily_calories(),
                                  p.calories_per_meal())
                      })
    }
}
