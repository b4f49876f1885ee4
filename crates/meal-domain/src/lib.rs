// meal-domain library entry point
pub mod error;
pub mod meal_plan;
pub mod nutrition;
pub mod profile;
pub use error::DomainError;
pub use meal_plan::{MealPlan, MealPlanDraft};
pub use nutrition::{MacroTargets, NutritionTargets};
pub use profile::{ActivityLevel, DietType, Goal, MealCharacteristics, Sex};
