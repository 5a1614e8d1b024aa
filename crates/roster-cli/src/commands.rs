use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use roster_server::{RosterServer, ServerConfig};
use roster_store::seed_students;
use roster_types::{Grade, Student};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Seed(_) => cmd_seed(&cli.format),
        Command::Config(args) => cmd_config(args, &cli.format),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(ServerConfig::default()),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("invalid bind address {bind:?}"))?;
    }
    if args.no_seed {
        config.seed = false;
    }

    println!(
        "{} Roster server on {} (routes under {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.mount_path.cyan()
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(RosterServer::new(config).serve())?;
    Ok(())
}

fn grade_colored(grade: Grade) -> colored::ColoredString {
    match grade {
        Grade::A | Grade::B => grade.as_str().green(),
        Grade::C => grade.as_str().yellow(),
        Grade::D | Grade::F => grade.as_str().red(),
    }
}

fn student_line(s: &Student) -> String {
    let status = if s.is_active { "active".green() } else { "inactive".dimmed() };
    format!(
        "{:>3}  {:<20} {:<26} {:>3}  {}  {}  [{}]",
        s.id.to_string().yellow(),
        s.full_name(),
        s.email,
        s.age,
        grade_colored(s.grade),
        status,
        s.subjects.join(", ")
    )
}

fn cmd_seed(format: &OutputFormat) -> anyhow::Result<()> {
    let students = seed_students();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&students)?),
        OutputFormat::Text => {
            for s in &students {
                println!("{}", student_line(s));
            }
            println!("{} students", students.len().to_string().bold());
        }
    }
    Ok(())
}

fn cmd_config(args: ConfigArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    config.validate()?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Text => print!("{}", config.to_toml_string()?),
    }
    Ok(())
}
