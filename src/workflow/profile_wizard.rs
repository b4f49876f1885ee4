//! Wizard de características de comida (perfil nutricional).
//!
//! Pasos: datos personales, medidas, actividad y objetivo, resumen. El
//! `on_next` del tercer paso arma el perfil completo y lo guarda en el
//! backend; volver y avanzar otra vez reemplaza el mismo perfil.
use std::sync::{Arc, Mutex, PoisonError};

use meal_core::{hook_fn, HookError, StepBar, Stepper, StepperError};
use meal_domain::{ActivityLevel, DietType, Goal, MealCharacteristics, NutritionTargets, Sex};
use uuid::Uuid;

use super::form::{FieldSpec, FormSection, FormValues};
use super::gateway::MealPlanGateway;
use super::{HostWizard, WizardOptions};

#[derive(Debug, Clone, PartialEq)]
pub struct SavedProfile {
    pub id: Uuid,
    pub profile: MealCharacteristics,
    pub targets: NutritionTargets,
}

type Slot = Arc<Mutex<Option<SavedProfile>>>;

pub struct ProfileWizard {
    bar: StepBar<FormSection>,
    values: FormValues,
    saved: Slot,
}

fn check_personal(values: &FormValues) -> Result<(), HookError> {
    let _: Sex = values.require("sex")?.parse()?;
    MealCharacteristics::check_age(values.parse("age")?)?;
    Ok(())
}

fn check_measures(values: &FormValues) -> Result<(), HookError> {
    MealCharacteristics::check_measures(values.parse("height_cm")?, values.parse("weight_kg")?)?;
    Ok(())
}

fn read_profile(values: &FormValues) -> Result<MealCharacteristics, HookError> {
    let profile = MealCharacteristics::new(values.require("sex")?.parse()?,
                                           values.parse("age")?,
                                           values.parse("height_cm")?,
                                           values.parse("weight_kg")?,
                                           values.require("activity")?.parse::<ActivityLevel>()?,
                                           values.require("goal")?.parse::<Goal>()?,
                                           values.require("diet")?.parse::<DietType>()?,
                                           values.parse("meals_per_day")?)?;
    Ok(profile)
}

async fn save_profile(values: FormValues, gateway: Arc<dyn MealPlanGateway>, saved: Slot) -> Result<(), HookError> {
    let profile = read_profile(&values)?;
    let previous = saved.lock().unwrap_or_else(PoisonError::into_inner).as_ref().map(|s| s.id);
    let id = gateway.save_characteristics(previous, &profile).await?;
    let targets = NutritionTargets::for_profile(&profile);
    log::info!("perfil {id} guardado en {}: {} kcal/día", gateway.get_name(), targets.daily_calories);
    *saved.lock().unwrap_or_else(PoisonError::into_inner) = Some(SavedProfile { id, profile, targets });
    Ok(())
}

impl ProfileWizard {
    pub fn build(gateway: Arc<dyn MealPlanGateway>, options: WizardOptions) -> Result<Self, StepperError> {
        let values = FormValues::new();
        let saved: Slot = Arc::new(Mutex::new(None));

        let personal = FormSection::new("Contanos sobre vos.",
                                        vec![FieldSpec::new("sex", "Sexo", "hombre | mujer"),
                                             FieldSpec::new("age", "Edad", "años, 14-100")]);
        let measures = FormSection::new("Medidas corporales.",
                                        vec![FieldSpec::new("height_cm", "Altura", "cm, 100-250"),
                                             FieldSpec::new("weight_kg", "Peso", "kg, 30-300")]);
        let lifestyle = FormSection::new("Actividad, objetivo y preferencias.",
                                         vec![FieldSpec::new("activity", "Actividad", "sedentario | ligero | moderado | activo | muy_activo"),
                                              FieldSpec::new("goal", "Objetivo", "perder | mantener | ganar"),
                                              FieldSpec::new("diet", "Dieta", "omnivora | vegetariana | vegana | pescetariana | keto"),
                                              FieldSpec::new("meals_per_day", "Comidas por día", "1-6")]);
        let summary = FormSection::new("Tu perfil quedó guardado.", vec![]);

        let (v1, v2, v3) = (values.clone(), values.clone(), values.clone());
        let slot = Arc::clone(&saved);
        let stepper = options.apply(Stepper::builder())
                             .add_with("Datos personales", personal, move |d| {
                                 d.on_next(hook_fn(move |_| {
                                      let v = v1.clone();
                                      async move { check_personal(&v) }
                                  }))
                             })
                             .add_with("Medidas", measures, move |d| {
                                 d.on_next(hook_fn(move |_| {
                                      let v = v2.clone();
                                      async move { check_measures(&v) }
                                  }))
                             })
                             .add_with("Actividad y objetivo", lifestyle, move |d| {
                                 d.on_next(hook_fn(move |_| save_profile(v3.clone(), Arc::clone(&gateway), Arc::clone(&slot))))
                             })
                             .add("Resumen", summary)
                             .build()?;

        Ok(Self { bar: StepBar::new(stepper), values, saved })
    }

    pub fn saved(&self) -> Option<SavedProfile> { self.saved.lock().unwrap_or_else(PoisonError::into_inner).clone() }
}

impl HostWizard for ProfileWizard {
    fn name(&self) -> &'static str { "profile" }
    fn bar(&self) -> &StepBar<FormSection> { &self.bar }
    fn values(&self) -> &FormValues { &self.values }

    fn summary(&self) -> Option<String> {
        self.saved().map(|s| {
                        let m = s.targets.macros;
                        format!("Perfil {}: {}\nBMR {:.0} kcal, gasto total {:.0} kcal, objetivo {:.0} kcal/día\nMacros: {} g proteína, {} g carbohidratos, {} g grasa",
                                s.id, s.profile, s.targets.bmr, s.targets.tdee, s.targets.daily_calories, m.protein_g, m.carbs_g, m.fat_g)
                    })
    }
}
