use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DomainError;

/// Duración máxima de un plan, en días.
pub const MAX_PLAN_DAYS: i64 = 28;

/// Tope de calorías diarias de un plan. También descarta `inf` y `NaN`.
pub const MAX_DAILY_CALORIES: f64 = 10_000.0;

/// Datos de un plan antes de validarlo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanDraft {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub meals_per_day: u8,
    pub daily_calories: f64,
    pub characteristics_id: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    id: Uuid,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    meals_per_day: u8,
    daily_calories: f64,
    characteristics_id: Option<Uuid>,
}

impl MealPlanDraft {
    /// Valida sólo el rango de fechas (primer paso del wizard de planes).
    pub fn check_dates(start: NaiveDate, end: NaiveDate) -> Result<i64, DomainError> {
        if end < start {
            return Err(DomainError::ValidationError(format!("end date {end} is before start date {start}")));
        }
        let days = (end - start).num_days() + 1;
        if days > MAX_PLAN_DAYS {
            return Err(DomainError::ValidationError(format!("a plan spans at most {MAX_PLAN_DAYS} days, got {days}")));
        }
        Ok(days)
    }

    pub fn validate(self) -> Result<MealPlan, DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError("plan name is empty".into()));
        }
        Self::check_dates(self.start_date, self.end_date)?;
        crate::MealCharacteristics::check_meals(self.meals_per_day)?;
        if !(self.daily_calories > 0.0 && self.daily_calories <= MAX_DAILY_CALORIES) {
            return Err(DomainError::ValidationError(format!("daily calories must be in (0, {MAX_DAILY_CALORIES}], got {}",
                                                            self.daily_calories)));
        }
        Ok(MealPlan { id: Uuid::new_v4(),
                      name: self.name.trim().to_string(),
                      start_date: self.start_date,
                      end_date: self.end_date,
                      meals_per_day: self.meals_per_day,
                      daily_calories: self.daily_calories,
                      characteristics_id: self.characteristics_id })
    }
}

impl MealPlan {
    pub fn id(&self) -> Uuid { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn start_date(&self) -> NaiveDate { self.start_date }
    pub fn end_date(&self) -> NaiveDate { self.end_date }
    pub fn meals_per_day(&self) -> u8 { self.meals_per_day }
    pub fn daily_calories(&self) -> f64 { self.daily_calories }
    pub fn characteristics_id(&self) -> Option<Uuid> { self.characteristics_id }

    pub fn days(&self) -> i64 { (self.end_date - self.start_date).num_days() + 1 }

    /// Calorías por comida, reparto uniforme.
    pub fn calories_per_meal(&self) -> f64 { (self.daily_calories / self.meals_per_day as f64).round() }
}
