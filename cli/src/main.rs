//! CLI entrypoint for hyperconf
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use hyperconf_application::{
    OverrideSource, ResolveManifestInput, ResolveManifestUseCase, ResolveOptions, SnapshotReplay,
    SnapshotStore, StaticOverrides,
};
use hyperconf_domain::UnknownOverridePolicy;
use hyperconf_infrastructure::{
    ConfigLoader, EnvOverrides, FileConfig, FileOverrides, JsonSnapshotStore, ManifestLoader,
    parse_assignments,
};
use hyperconf_presentation::{
    CheckArgs, Cli, Command, ConsoleFormatter, ResolveArgs, formatter_for, set_color_enabled,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Handle --show-config: print config file locations and exit
    if cli.show_config {
        for line in ConfigLoader::describe_sources() {
            println!("{}", line);
        }
        return Ok(());
    }

    // Load configuration from files (unless --no-config)
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    config.validate()?;

    set_color_enabled(!cli.no_color && config.output.color);

    info!("Starting hyperconf");

    let Some(command) = cli.command else {
        anyhow::bail!("No command given. Run `hyperconf --help` for usage.");
    };

    let result = match command {
        Command::Resolve(args) => run_resolve(args, &config),
        Command::Check(args) => run_check(args, &config),
    };

    if let Err(e) = result {
        eprintln!("{}", ConsoleFormatter::format_error(&format!("{:#}", e)));
        drop(guard);
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn run_resolve(args: ResolveArgs, config: &FileConfig) -> Result<()> {
    let manifest = ManifestLoader::load(&args.manifest)?;

    // === Dependency Injection ===
    // Sources are applied in order; later sources win.
    let mut use_case = ResolveManifestUseCase::new();

    if let Some(path) = &args.snapshot {
        let store: Arc<dyn SnapshotStore> = Arc::new(JsonSnapshotStore::new(path));
        let replay = SnapshotReplay::new(store).for_config(manifest.name());
        use_case = use_case.with_source(Arc::new(replay));
    }

    for path in &args.values {
        use_case = use_case.with_source(Arc::new(FileOverrides::new(path)));
    }

    if let Some(prefix) = args.env_prefix.as_ref().or(config.overrides.env_prefix.as_ref()) {
        debug!("Reading overrides from environment prefix {}", prefix);
        use_case = use_case.with_source(Arc::new(EnvOverrides::new(prefix)));
    }

    if !args.set.is_empty() {
        let assignments: Arc<dyn OverrideSource> = Arc::new(StaticOverrides::new(
            "command line",
            parse_assignments(&args.set)?,
        ));
        use_case = use_case.with_source(assignments);
    }

    let snapshot_path = args
        .save_snapshot
        .clone()
        .or_else(|| config.snapshot.path.as_ref().map(Into::into));
    if let Some(path) = snapshot_path {
        use_case = use_case.with_snapshot_sink(Arc::new(JsonSnapshotStore::new(path)));
    }

    let policy = if args.strict {
        UnknownOverridePolicy::Reject
    } else {
        config.resolve.unknown_overrides
    };
    let input = ResolveManifestInput::new(manifest)
        .with_options(ResolveOptions::default().with_unknown_overrides(policy));

    let output = use_case.execute(input)?;

    let format = args
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    println!("{}", formatter_for(format).format_resolved(&output, &args.only));

    Ok(())
}

fn run_check(args: CheckArgs, config: &FileConfig) -> Result<()> {
    let manifest = ManifestLoader::load(&args.manifest)?;
    info!(
        "Manifest '{}' declares {} parameter(s)",
        manifest.name(),
        manifest.len()
    );

    let format = args
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    println!("{}", formatter_for(format).format_manifest(&manifest));

    Ok(())
}
