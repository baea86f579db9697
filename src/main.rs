use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cardio_sentinel::cli::{Cli, Commands, ConfigCommand, ConfigShowArgs, RunArgs};
use cardio_sentinel::config;
use cardio_sentinel::ctx::Ctx;
use cardio_sentinel::io;
use cardio_sentinel::pipeline::Pipeline;
use cardio_sentinel::schema::v1::Mode;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => run(args, Mode::Analyze)?,
        Commands::Longitudinal(args) => run(args, Mode::Longitudinal)?,
        Commands::Config(args) => match args.command {
            ConfigCommand::Show(show) => handle_config_show(show)?,
        },
    }

    Ok(())
}

fn run(args: RunArgs, mode: Mode) -> Result<()> {
    let mut ctx = Ctx::new(
        args.input,
        args.out,
        mode,
        args.config,
        args.json,
        args.tsv,
        env!("CARGO_PKG_VERSION"),
    );
    Pipeline::full().run(&mut ctx)?;
    print_summary(&ctx)
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn handle_config_show(args: ConfigShowArgs) -> Result<()> {
    let cfg = config::load_effective(args.config.as_deref())?;
    let source = match &args.config {
        Some(path) => format!("built-in v1 + {}", path.display()),
        None => "built-in v1".to_string(),
    };
    println!("config ({}):", source);
    for (key, value) in cfg.entries() {
        println!("{}\t{}", key, value);
    }
    Ok(())
}
