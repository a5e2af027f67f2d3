//! Command dispatch: maps parsed arguments onto application services

use std::io;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::services::{
    Calculation, PolyOperation, RingOperation, RingSession, SessionEnd,
};
use crate::cli::args::{
    Cli, Commands, ConfigCommands, DocsCommands, PolyCommands, RingCommands,
};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::TerminalConsole;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let command = cli
        .command
        .as_ref()
        .ok_or_else(|| CliError::Usage("no command given, see --help".to_string()))?;

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        clap_complete::generate(*shell, &mut cmd, "polycalc", &mut io::stdout());
        return Ok(());
    }

    let container = ServiceContainer::new(load_settings(cli)?);
    match command {
        Commands::Poly { command } => cmd_poly(&container, command),
        Commands::Ring { modulus, command } => cmd_ring(&container, modulus, command),
        Commands::Interactive => cmd_interactive(&container),
        Commands::Docs { command } => cmd_docs(&container, command),
        Commands::Config { command } => cmd_config(&container, command),
        Commands::Completion { .. } => Ok(()),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let cwd = std::env::current_dir().map_err(|e| InfraError::io("current directory", e))?;
    let mut settings = Settings::load(Some(&cwd))?;
    if let Some(prime) = cli.prime {
        settings.prime = prime;
        settings.validate()?;
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

fn print_calculations(calculations: &[Calculation]) {
    for c in calculations {
        output::result(&c.expression, &c.result);
    }
}

#[instrument(skip(container))]
fn cmd_poly(container: &ServiceContainer, command: &PolyCommands) -> CliResult<()> {
    let op = match command {
        PolyCommands::Add { a, b } => PolyOperation::Add(a.clone(), b.clone()),
        PolyCommands::Sub { a, b } => PolyOperation::Sub(a.clone(), b.clone()),
        PolyCommands::Mul { a, b } => PolyOperation::Mul(a.clone(), b.clone()),
        PolyCommands::Divmod { a, b } => PolyOperation::DivRem(a.clone(), b.clone()),
        PolyCommands::Pow { a, n } => PolyOperation::Pow(a.clone(), *n),
        PolyCommands::Eval { a, x } => PolyOperation::Eval(a.clone(), *x),
        PolyCommands::Gcd { a, b } => PolyOperation::Gcd(a.clone(), b.clone()),
        PolyCommands::Irreducible { a } => PolyOperation::Irreducible(a.clone()),
    };

    let calculations: CliResult<Vec<Calculation>> =
        crate::with_prime!(container.settings.prime, P => {
            container.calculator::<P>().run_poly(&op).map_err(CliError::from)
        });
    print_calculations(&calculations?);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_ring(container: &ServiceContainer, modulus: &str, command: &RingCommands) -> CliResult<()> {
    let op = match command {
        RingCommands::Add { a, b } => RingOperation::Add(a.clone(), b.clone()),
        RingCommands::Sub { a, b } => RingOperation::Sub(a.clone(), b.clone()),
        RingCommands::Mul { a, b } => RingOperation::Mul(a.clone(), b.clone()),
        RingCommands::Div { a, b } => RingOperation::Div(a.clone(), b.clone()),
        RingCommands::Inv { a } => RingOperation::Inverse(a.clone()),
        RingCommands::Pow { a, n } => RingOperation::Pow(a.clone(), *n),
    };

    let calculations: CliResult<Vec<Calculation>> =
        crate::with_prime!(container.settings.prime, P => {
            container
                .calculator::<P>()
                .run_ring(modulus, &op)
                .map_err(CliError::from)
        });
    print_calculations(&calculations?);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_interactive(container: &ServiceContainer) -> CliResult<()> {
    let mut console = TerminalConsole;
    let end: CliResult<SessionEnd> = crate::with_prime!(container.settings.prime, P => {
        RingSession::new(&mut console, container.calculator::<P>())
            .run()
            .map_err(CliError::from)
    });
    if end? == SessionEnd::EndOfInput {
        println!();
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_docs(container: &ServiceContainer, command: &DocsCommands) -> CliResult<()> {
    let navigation = &container.navigation;
    let configured = container.settings.navtree.as_deref();

    match command {
        DocsCommands::Tree { file } => {
            let tree = navigation.load_or_builtin(file.as_deref().or(configured))?;
            for root in tree.to_termtree() {
                output::info(&root);
            }
            if let Err(e) = tree.validate() {
                output::warning(&e);
            }
        }
        DocsCommands::Check { file } => {
            let tree = navigation.check(file)?;
            output::success(&format!(
                "{}: well-formed, {} entries, depth {}",
                file.display(),
                tree.iter().count(),
                tree.depth()
            ));
        }
        DocsCommands::Export { output: target, force } => {
            let tree = navigation.load_or_builtin(configured)?;
            match target {
                Some(path) => {
                    navigation.export(&tree, path, *force)?;
                    output::action("Exported", &path.display());
                }
                None => {
                    tree.validate().map_err(crate::application::ApplicationError::from)?;
                    print!("{}", tree.to_script());
                }
            }
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Template => {
            output::info(&Settings::template());
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("Global", &path.display()),
                None => output::warning("no config directory on this platform"),
            }
            let cwd =
                std::env::current_dir().map_err(|e| InfraError::io("current directory", e))?;
            output::action("Local", &local_config_path(&cwd).display());
        }
    }
    Ok(())
}
