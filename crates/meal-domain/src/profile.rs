use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex { Male, Female }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel { Sedentary, Light, Moderate, Active, VeryActive }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal { Lose, Maintain, Gain }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietType { Omnivore, Vegetarian, Vegan, Pescatarian, Keto }

impl ActivityLevel {
    /// Factor multiplicador sobre el metabolismo basal.
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl Goal {
    /// Ajuste diario en kcal respecto al gasto total.
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::Lose => -500.0,
            Goal::Maintain => 0.0,
            Goal::Gain => 300.0,
        }
    }
}

// Acepta los valores en español que usa el formulario y sus equivalentes en inglés.
fn parse_choice<T: Copy>(field: &'static str, raw: &str, table: &[(&str, T)]) -> Result<T, DomainError> {
    let key = raw.trim().to_lowercase();
    table.iter()
         .find(|(name, _)| *name == key)
         .map(|(_, v)| *v)
         .ok_or_else(|| DomainError::UnknownValue { field, value: raw.to_string() })
}

impl FromStr for Sex {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Sex::*;
        parse_choice("sex", s, &[("m", Male), ("male", Male), ("hombre", Male), ("f", Female), ("female", Female), ("mujer", Female)])
    }
}

impl FromStr for ActivityLevel {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use ActivityLevel::*;
        parse_choice("activity",
                     s,
                     &[("sedentary", Sedentary), ("sedentario", Sedentary),
                       ("light", Light), ("ligero", Light),
                       ("moderate", Moderate), ("moderado", Moderate),
                       ("active", Active), ("activo", Active),
                       ("very_active", VeryActive), ("muy_activo", VeryActive)])
    }
}

impl FromStr for Goal {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Goal::*;
        parse_choice("goal",
                     s,
                     &[("lose", Lose), ("perder", Lose), ("maintain", Maintain), ("mantener", Maintain), ("gain", Gain), ("ganar", Gain)])
    }
}

impl FromStr for DietType {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use DietType::*;
        parse_choice("diet",
                     s,
                     &[("omnivore", Omnivore), ("omnivora", Omnivore),
                       ("vegetarian", Vegetarian), ("vegetariana", Vegetarian),
                       ("vegan", Vegan), ("vegana", Vegan),
                       ("pescatarian", Pescatarian), ("pescetariana", Pescatarian),
                       ("keto", Keto)])
    }
}

/// Perfil nutricional ("meal characteristics") de un usuario.
///
/// Sólo se construye con `new`, que valida rangos; una instancia existente es
/// siempre utilizable para el cálculo calórico.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealCharacteristics {
    sex: Sex,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity: ActivityLevel,
    goal: Goal,
    diet: DietType,
    meals_per_day: u8,
}

impl MealCharacteristics {
    #[allow(clippy::too_many_arguments)]
    pub fn new(sex: Sex,
               age: u32,
               height_cm: f64,
               weight_kg: f64,
               activity: ActivityLevel,
               goal: Goal,
               diet: DietType,
               meals_per_day: u8)
               -> Result<Self, DomainError> {
        Self::check_age(age)?;
        Self::check_measures(height_cm, weight_kg)?;
        Self::check_meals(meals_per_day)?;
        Ok(Self { sex, age, height_cm, weight_kg, activity, goal, diet, meals_per_day })
    }

    pub fn check_age(age: u32) -> Result<(), DomainError> {
        if !(14..=100).contains(&age) {
            return Err(DomainError::validation(format!("age must be between 14 and 100, got {age}")));
        }
        Ok(())
    }

    pub fn check_measures(height_cm: f64, weight_kg: f64) -> Result<(), DomainError> {
        if !(100.0..=250.0).contains(&height_cm) {
            return Err(DomainError::validation(format!("height must be between 100 and 250 cm, got {height_cm}")));
        }
        if !(30.0..=300.0).contains(&weight_kg) {
            return Err(DomainError::validation(format!("weight must be between 30 and 300 kg, got {weight_kg}")));
        }
        Ok(())
    }

    pub fn check_meals(meals_per_day: u8) -> Result<(), DomainError> {
        if !(1..=6).contains(&meals_per_day) {
            return Err(DomainError::validation(format!("meals per day must be between 1 and 6, got {meals_per_day}")));
        }
        Ok(())
    }

    pub fn sex(&self) -> Sex { self.sex }
    pub fn age(&self) -> u32 { self.age }
    pub fn height_cm(&self) -> f64 { self.height_cm }
    pub fn weight_kg(&self) -> f64 { self.weight_kg }
    pub fn activity(&self) -> ActivityLevel { self.activity }
    pub fn goal(&self) -> Goal { self.goal }
    pub fn diet(&self) -> DietType { self.diet }
    pub fn meals_per_day(&self) -> u8 { self.meals_per_day }
}

impl fmt::Display for MealCharacteristics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{:?}, {} años, {} cm, {} kg, {:?}, {:?}, {:?}, {} comidas/día",
               self.sex, self.age, self.height_cm, self.weight_kg, self.activity, self.goal, self.diet, self.meals_per_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spanish_and_english_choices() {
        assert_eq!("Mujer".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(" moderate ".parse::<ActivityLevel>().unwrap(), ActivityLevel::Moderate);
        assert_eq!("muy_activo".parse::<ActivityLevel>().unwrap(), ActivityLevel::VeryActive);
        assert_eq!("perder".parse::<Goal>().unwrap(), Goal::Lose);
        assert_eq!("keto".parse::<DietType>().unwrap(), DietType::Keto);
    }

    #[test]
    fn unknown_choice_names_the_field() {
        let err = "flying".parse::<Goal>().unwrap_err();
        assert_eq!(err, DomainError::UnknownValue { field: "goal", value: "flying".into() });
    }
}
