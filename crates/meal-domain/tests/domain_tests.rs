use chrono::NaiveDate;
use meal_domain::meal_plan::MAX_DAILY_CALORIES;
use meal_domain::nutrition::{daily_calories, MIN_DAILY_CALORIES};
use meal_domain::{ActivityLevel, DietType, DomainError, Goal, MealCharacteristics, MealPlanDraft, NutritionTargets, Sex};

fn date(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

fn draft() -> MealPlanDraft {
    MealPlanDraft { name: "  Semana ligera ".into(),
                    start_date: date(2026, 3, 2),
                    end_date: date(2026, 3, 8),
                    meals_per_day: 4,
                    daily_calories: 2000.0,
                    characteristics_id: None }
}

#[test]
fn test_profile_rejects_out_of_range_values() {
    let young = MealCharacteristics::new(Sex::Male, 10, 150.0, 45.0, ActivityLevel::Light, Goal::Maintain, DietType::Omnivore, 3);
    assert!(matches!(young, Err(DomainError::ValidationError(_))));
    let tall = MealCharacteristics::new(Sex::Male, 30, 260.0, 80.0, ActivityLevel::Light, Goal::Maintain, DietType::Omnivore, 3);
    assert!(tall.is_err());
    let meals = MealCharacteristics::new(Sex::Female, 30, 165.0, 60.0, ActivityLevel::Light, Goal::Maintain, DietType::Omnivore, 0);
    assert!(meals.is_err());
}

#[test]
fn test_targets_are_consistent() {
    let p = MealCharacteristics::new(Sex::Female, 35, 165.0, 62.0, ActivityLevel::Active, Goal::Lose, DietType::Vegetarian, 5).unwrap();
    let t = NutritionTargets::for_profile(&p);
    assert!(t.tdee > t.bmr);
    assert_eq!(t.daily_calories, daily_calories(&p));
    assert!(t.daily_calories >= MIN_DAILY_CALORIES);
    assert!(t.macros.protein_g > 0.0 && t.macros.fat_g > 0.0);
}

#[test]
fn test_plan_draft_validation() {
    let plan = draft().validate().unwrap();
    assert_eq!(plan.name(), "Semana ligera");
    assert_eq!(plan.days(), 7);
    assert_eq!(plan.calories_per_meal(), 500.0);

    let mut reversed = draft();
    reversed.end_date = date(2026, 3, 1);
    assert!(reversed.validate().is_err());

    let mut long = draft();
    long.end_date = date(2026, 4, 30);
    assert!(long.validate().is_err());

    let mut unnamed = draft();
    unnamed.name = "   ".into();
    assert_eq!(unnamed.validate().unwrap_err(), DomainError::ValidationError("plan name is empty".into()));
}

#[test]
fn test_single_day_plan_is_valid() {
    assert_eq!(MealPlanDraft::check_dates(date(2026, 1, 1), date(2026, 1, 1)).unwrap(), 1);
    assert_eq!(MealPlanDraft::check_dates(date(2026, 1, 1), date(2026, 1, 28)).unwrap(), 28);
    assert!(MealPlanDraft::check_dates(date(2026, 1, 1), date(2026, 1, 29)).is_err());
}

#[test]
fn test_plan_serializes_for_the_backend() {
    let plan = draft().validate().unwrap();
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["start_date"], "2026-03-02");
    assert_eq!(json["meals_per_day"], 4);
    assert!(json["characteristics_id"].is_null());
    let back: meal_domain::MealPlan = serde_json::from_value(json).unwrap();
    assert_eq!(back, plan);
}

#[test]
fn test_plan_calories_must_be_finite_and_bounded() {
    for kcal in [f64::INFINITY, f64::NAN, 0.0, -1800.0, MAX_DAILY_CALORIES + 1.0] {
        let mut d = draft();
        d.daily_calories = kcal;
        assert!(matches!(d.validate(), Err(DomainError::ValidationError(_))), "accepted {kcal}");
    }
    let mut d = draft();
    d.daily_calories = MAX_DAILY_CALORIES;
    assert!(d.validate().is_ok());
}
