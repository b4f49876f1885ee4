//! Sesión de texto sobre un `HostWizard`: parseo de comandos, ejecución y
//! render. El binario la usa con stdin o con un archivo de script.
use std::fmt::Write as _;
use std::str::FromStr;

use meal_core::NavigationOutcome;

use super::HostWizard;
use crate::errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `set <campo> <valor>`: el valor puede contener espacios.
    Set { field: String, value: String },
    Next,
    Back,
    /// `goto <n>` con `n` el número de paso (1-based).
    Goto(usize),
    Show,
    Quit,
}

impl FromStr for Command {
    type Err = CoreError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        match verb {
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace)
                                         .ok_or_else(|| CoreError::Command(format!("uso: set <campo> <valor> ({line})")))?;
                Ok(Command::Set { field: field.to_string(),
                                  value: value.trim().to_string() })
            }
            "next" | "n" => Ok(Command::Next),
            "back" | "b" => Ok(Command::Back),
            "goto" | "g" => rest.parse()
                                .map(Command::Goto)
                                .map_err(|_| CoreError::Command(format!("uso: goto <número de paso> ({line})"))),
            "show" | "s" => Ok(Command::Show),
            "quit" | "q" => Ok(Command::Quit),
            other => Err(CoreError::Command(format!("comando desconocido: {other}"))),
        }
    }
}

/// Resultado de ejecutar un comando.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Navigated(NavigationOutcome),
    /// Un hook rechazó la transición; el mensaje es para el usuario.
    Rejected(String),
    Stored { field: String },
    Shown(String),
    Quit,
}

/// Ejecuta un comando. Los rechazos de hooks no son errores de la sesión:
/// vuelven como `Reply::Rejected` para que el front end los muestre.
pub async fn execute(wizard: &dyn HostWizard, command: Command) -> Result<Reply, CoreError> {
    let bar = wizard.bar();
    let navigated = |res: Result<NavigationOutcome, meal_core::HookError>| match res {
        Ok(outcome) => Reply::Navigated(outcome),
        Err(e) => Reply::Rejected(e.to_string()),
    };
    match command {
        Command::Set { field, value } => {
            if bar.active_content().field(&field).is_none() {
                return Err(CoreError::Command(format!("el campo '{field}' no pertenece al paso '{}'",
                                                      bar.stepper().active_step().title())));
            }
            wizard.values().set(field.clone(), value);
            Ok(Reply::Stored { field })
        }
        Command::Next => Ok(navigated(bar.press_next().await)),
        Command::Back => Ok(navigated(bar.press_back().await)),
        Command::Goto(number) => {
            let index = number.checked_sub(1).unwrap_or(usize::MAX);
            Ok(Reply::Navigated(bar.stepper().go_to_step(index)))
        }
        Command::Show => Ok(Reply::Shown(render(wizard))),
        Command::Quit => Ok(Reply::Quit),
    }
}

/// Ejecuta líneas de script en orden hasta `quit` o el final. Ignora líneas
/// vacías y comentarios `#`.
pub async fn run_lines<'a>(wizard: &dyn HostWizard, lines: impl IntoIterator<Item = &'a str>) -> Result<Vec<Reply>, CoreError> {
    let mut replies = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let reply = run_line(wizard, line).await?;
        let quit = reply == Reply::Quit;
        replies.push(reply);
        if quit {
            break;
        }
    }
    Ok(replies)
}

/// Ejecuta un script comando por comando, entregando cada resultado a
/// `on_reply` apenas termina, con el wizard ya en el estado que dejó ese
/// comando. Los errores de comando (`CoreError::Command`) se entregan y la
/// ejecución sigue; cualquier otro error la corta. Se detiene en `quit`.
pub async fn run_script<'a>(wizard: &dyn HostWizard,
                            lines: impl IntoIterator<Item = &'a str>,
                            mut on_reply: impl FnMut(Result<Reply, CoreError>))
                            -> Result<(), CoreError> {
    for line in lines {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match run_line(wizard, line).await {
            Ok(Reply::Quit) => break,
            Ok(reply) => on_reply(Ok(reply)),
            Err(CoreError::Command(msg)) => on_reply(Err(CoreError::Command(msg))),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Parsea y ejecuta una línea.
pub async fn run_line(wizard: &dyn HostWizard, line: &str) -> Result<Reply, CoreError> {
    execute(wizard, line.parse()?).await
}

/// Barra de pasos, contenido del paso activo y, en el último paso, el
/// resultado.
pub fn render(wizard: &dyn HostWizard) -> String {
    let bar = wizard.bar();
    let section = bar.active_content();
    let mut out = String::new();
    let _ = writeln!(out, "{}", bar.view());
    let _ = writeln!(out, "== {} ==", bar.stepper().active_step().title());
    if !section.intro.is_empty() {
        let _ = writeln!(out, "{}", section.intro);
    }
    for field in &section.fields {
        let value = wizard.values().get(field.key).unwrap_or_default();
        let _ = writeln!(out, "  {} ({}) [{}]: {}", field.label, field.key, field.hint, value);
    }
    if bar.stepper().is_last_step() {
        match wizard.summary() {
            Some(summary) => {
                let _ = writeln!(out, "{summary}");
            }
            None => {
                let _ = writeln!(out, "(todavía sin resultado)");
            }
        }
    }
    out
}
