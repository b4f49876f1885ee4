use std::future::Future;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::HookError;

/// Sentido de una transición.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction { Forward, Backward, Jump }

/// Datos que recibe un hook: el paso activo antes de la transición.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookContext {
    /// Número (1-based) del paso que dispara el hook.
    pub step_number: u32,
    /// Índice activo antes de la transición.
    pub index: usize,
    pub direction: Direction,
}

/// Hook de ciclo de vida de un paso. Si devuelve `Err`, la transición no se
/// confirma y el error llega intacto al llamador.
#[async_trait]
pub trait StepHook: Send + Sync {
    async fn call(&self, ctx: HookContext) -> Result<(), HookError>;
}

/// Adaptador para usar un closure asíncrono como `StepHook`.
pub struct FnHook<F>(F);

#[async_trait]
impl<F, Fut> StepHook for FnHook<F>
    where F: Fn(HookContext) -> Fut + Send + Sync + 'static,
          Fut: Future<Output = Result<(), HookError>> + Send + 'static
{
    async fn call(&self, ctx: HookContext) -> Result<(), HookError> {
        (self.0)(ctx).await
    }
}

/// Construye un hook a partir de un closure `|ctx| async move { ... }`.
pub fn hook_fn<F, Fut>(f: F) -> FnHook<F>
    where F: Fn(HookContext) -> Fut + Send + Sync + 'static,
          Fut: Future<Output = Result<(), HookError>> + Send + 'static
{
    FnHook(f)
}
