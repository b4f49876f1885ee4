//! Backend opaco con el que los wizards persisten sus resultados.
//!
//! En la aplicación real es la API REST; aquí sólo importa el contrato
//! asíncrono y una implementación en memoria para el binario y los tests.
use async_trait::async_trait;
use indexmap::IndexMap;
use meal_domain::{DomainError, MealCharacteristics, MealPlan, MealPlanDraft};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("recurso no encontrado: {0}")]
    NotFound(Uuid),
    #[error("rechazado por validación: {0}")]
    Rejected(#[from] DomainError),
    #[error("backend no disponible: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait MealPlanGateway: Send + Sync {
    fn get_name(&self) -> &str;

    /// Crea (`id == None`) o reemplaza un perfil. Devuelve su id.
    async fn save_characteristics(&self, id: Option<Uuid>, profile: &MealCharacteristics) -> Result<Uuid, GatewayError>;

    /// Último perfil guardado, si existe.
    async fn latest_characteristics(&self) -> Result<Option<(Uuid, MealCharacteristics)>, GatewayError>;

    async fn create_meal_plan(&self, draft: MealPlanDraft) -> Result<MealPlan, GatewayError>;

    async fn list_meal_plans(&self) -> Result<Vec<MealPlan>, GatewayError>;
}

/// Backend en memoria. Con `offline` todas las operaciones fallan con
/// `Unavailable`, útil para ejercitar hooks rechazados.
#[derive(Default)]
pub struct InMemoryGateway {
    profiles: RwLock<IndexMap<Uuid, MealCharacteristics>>,
    plans: RwLock<Vec<MealPlan>>,
    offline: bool,
}

impl InMemoryGateway {
    pub fn new() -> Self { Self::default() }

    pub fn offline() -> Self { Self { offline: true, ..Self::default() } }

    fn check_online(&self) -> Result<(), GatewayError> {
        if self.offline {
            return Err(GatewayError::Unavailable("in-memory gateway is offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl MealPlanGateway for InMemoryGateway {
    fn get_name(&self) -> &str { "in_memory" }

    async fn save_characteristics(&self, id: Option<Uuid>, profile: &MealCharacteristics) -> Result<Uuid, GatewayError> {
        self.check_online()?;
        let mut profiles = self.profiles.write().await;
        let id = match id {
            Some(id) if !profiles.contains_key(&id) => return Err(GatewayError::NotFound(id)),
            Some(id) => {
                // reemplazo: pasa a ser el más reciente
                profiles.shift_remove(&id);
                id
            }
            None => Uuid::new_v4(),
        };
        profiles.insert(id, profile.clone());
        Ok(id)
    }

    async fn latest_characteristics(&self) -> Result<Option<(Uuid, MealCharacteristics)>, GatewayError> {
        self.check_online()?;
        Ok(self.profiles.read().await.last().map(|(id, p)| (*id, p.clone())))
    }

    async fn create_meal_plan(&self, draft: MealPlanDraft) -> Result<MealPlan, GatewayError> {
        self.check_online()?;
        if let Some(id) = draft.characteristics_id {
            if !self.profiles.read().await.contains_key(&id) {
                return Err(GatewayError::NotFound(id));
            }
        }
        let plan = draft.validate()?;
        self.plans.write().await.push(plan.clone());
        Ok(plan)
    }

    async fn list_meal_plans(&self) -> Result<Vec<MealPlan>, GatewayError> {
        self.check_online()?;
        Ok(self.plans.read().await.clone())
    }
}
