//! Front end de terminal para los wizards de mealflow.
//!
//! `mealflow profile` o `mealflow plan`; los comandos se leen de stdin o de
//! `--script`. Ver `workflow::session` para la lista de comandos.
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use mealflow_rust::config::AppConfig;
use mealflow_rust::errors::CoreError;
use mealflow_rust::workflow::gateway::{InMemoryGateway, MealPlanGateway};
use mealflow_rust::workflow::session::{self, Reply};
use mealflow_rust::workflow::{HostWizard, PlanWizard, ProfileWizard, WizardOptions};
use meal_core::InMemoryEventLog;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mealflow", version, about = "Wizards de perfil nutricional y planes de comidas")]
struct Cli {
    #[command(subcommand)]
    wizard: WizardKind,
    /// Paso inicial (0-based); por defecto MEALFLOW_INITIAL_STEP o 0.
    #[arg(long, global = true)]
    initial_step: Option<usize>,
    /// Archivo con comandos, uno por línea, en lugar de stdin.
    #[arg(long, global = true)]
    script: Option<PathBuf>,
    /// Volcar el log de eventos como JSON al salir.
    #[arg(long, global = true)]
    events: bool,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum WizardKind {
    /// Características de comida (perfil nutricional).
    Profile,
    /// Creación de un plan de comidas.
    Plan,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[mealflow] {e}");
            return ExitCode::from(2);
        }
    };
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("[mealflow] {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: AppConfig) -> Result<(), CoreError> {
    let events = Arc::new(InMemoryEventLog::new());
    let options = WizardOptions { initial_step: cli.initial_step.unwrap_or(config.wizard.initial_step),
                                  events: Some(Arc::clone(&events)) };
    let gateway: Arc<dyn MealPlanGateway> = Arc::new(InMemoryGateway::new());
    let wizard: Box<dyn HostWizard> = match cli.wizard {
        WizardKind::Profile => Box::new(ProfileWizard::build(gateway, options)?),
        WizardKind::Plan => Box::new(PlanWizard::build(gateway, options)?),
    };
    tracing::info!("wizard '{}' montado", wizard.name());

    print!("{}", session::render(wizard.as_ref()));
    match &cli.script {
        Some(path) => {
            let script = tokio::fs::read_to_string(path).await?;
            session::run_script(wizard.as_ref(), script.lines(), |reply| report(wizard.as_ref(), reply)).await?;
        }
        None => {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                if line.trim().is_empty() {
                    continue;
                }
                match session::run_line(wizard.as_ref(), &line).await {
                    Ok(Reply::Quit) => break,
                    // errores de comando: se informan y la sesión sigue
                    reply @ (Ok(_) | Err(CoreError::Command(_))) => report(wizard.as_ref(), reply),
                    Err(e) => return Err(e),
                }
            }
        }
    }

    if cli.events || config.dump_events {
        let id = wizard.bar().stepper().wizard_id();
        println!("{}", events.to_json(id)?);
    }
    Ok(())
}

fn report(wizard: &dyn HostWizard, reply: Result<Reply, CoreError>) {
    match reply {
        Ok(Reply::Navigated(outcome)) if outcome.is_moved() => print!("{}", session::render(wizard)),
        Ok(Reply::Navigated(outcome)) => println!("sin cambios ({outcome:?})"),
        Ok(Reply::Rejected(msg)) => println!("no se pudo continuar: {msg}"),
        Ok(Reply::Stored { field }) => println!("{field} guardado"),
        Ok(Reply::Shown(text)) => print!("{text}"),
        Ok(Reply::Quit) => {}
        Err(CoreError::Command(msg)) => eprintln!("{msg}"),
        Err(e) => eprintln!("[mealflow] {e}"),
    }
}
