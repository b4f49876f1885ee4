//! Aritmética calórica sobre un perfil validado.
//!
//! - BMR por Mifflin–St Jeor.
//! - Gasto total = BMR × factor de actividad.
//! - Objetivo = gasto total + ajuste por meta, con piso de `MIN_DAILY_CALORIES`.
//! - Macros: 30 % proteína, 40 % carbohidratos, 30 % grasa.
use serde::{Deserialize, Serialize};

use crate::profile::{MealCharacteristics, Sex};

/// Piso de calorías diarias recomendado.
pub const MIN_DAILY_CALORIES: f64 = 1200.0;

const PROTEIN_SHARE: f64 = 0.30;
const CARBS_SHARE: f64 = 0.40;
const FAT_SHARE: f64 = 0.30;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub bmr: f64,
    pub tdee: f64,
    pub daily_calories: f64,
    pub macros: MacroTargets,
}

pub fn bmr(profile: &MealCharacteristics) -> f64 {
    let base = 10.0 * profile.weight_kg() + 6.25 * profile.height_cm() - 5.0 * profile.age() as f64;
    match profile.sex() {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

pub fn tdee(profile: &MealCharacteristics) -> f64 { bmr(profile) * profile.activity().factor() }

pub fn daily_calories(profile: &MealCharacteristics) -> f64 {
    (tdee(profile) + profile.goal().calorie_adjustment()).max(MIN_DAILY_CALORIES).round()
}

pub fn macros_for(calories: f64) -> MacroTargets {
    MacroTargets { protein_g: (calories * PROTEIN_SHARE / 4.0).round(),
                   carbs_g: (calories * CARBS_SHARE / 4.0).round(),
                   fat_g: (calories * FAT_SHARE / 9.0).round() }
}

impl NutritionTargets {
    pub fn for_profile(profile: &MealCharacteristics) -> Self {
        let daily = daily_calories(profile);
        Self { bmr: bmr(profile),
               tdee: tdee(profile),
               daily_calories: daily,
               macros: macros_for(daily) }
    }
}
