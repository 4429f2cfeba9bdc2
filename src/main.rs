use anyhow::{Context, Result};
use clap::Parser;
use grabcfg::{simulate, GrabcfgConfig, ProfileKind};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "grabcfg")]
#[command(about = "Apply ordered configuration profiles to frame grabber control ports")]
#[command(version)]
#[command(long_about = "Lists, exports and simulates the configuration profiles applied to a \
frame grabber and its camera. A profile stops acquisition, configures trigger and strobe lines, \
sensor geometry and timing, then restarts acquisition.")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "grabcfg.toml", help = "Path to TOML configuration file")]
    config: String,

    /// Built-in profile to use (overrides the configuration file)
    #[arg(short, long, value_name = "NAME")]
    profile: Option<String>,

    /// Profile TOML file to use (overrides --profile)
    #[arg(long, value_name = "PATH")]
    profile_file: Option<String>,

    /// Enable debug logging (most verbose)
    #[arg(short, long, help = "Enable debug level logging")]
    debug: bool,

    /// Enable verbose logging (info level)
    #[arg(short, long, help = "Enable verbose info level logging")]
    verbose: bool,

    /// Enable quiet mode (errors only)
    #[arg(short, long, help = "Enable quiet mode - only log errors")]
    quiet: bool,

    /// Override log format (json, pretty, compact)
    #[arg(long, value_name = "FORMAT", help = "Log output format: json, pretty, or compact")]
    log_format: Option<String>,

    /// List built-in profiles and exit
    #[arg(long)]
    list_profiles: bool,

    /// Print the selected profile as TOML and exit
    #[arg(long)]
    print_profile: bool,

    /// Print default configuration in TOML format and exit
    #[arg(long)]
    print_config: bool,

    /// Validate configuration and exit
    #[arg(long)]
    validate_config: bool,

    /// Apply the profile to an in-memory grabber and print the call trace
    #[arg(long)]
    simulate: bool,

    /// Pulse the trigger line after applying (with --simulate)
    #[arg(long)]
    pulse: bool,

    /// Emit simulation output as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_config {
        print_default_config()?;
        return Ok(());
    }

    if args.list_profiles {
        for kind in ProfileKind::ALL {
            let profile = kind.profile();
            println!(
                "{:<12} {:>3} ops  {}",
                kind.name(),
                profile.len(),
                profile.description()
            );
        }
        return Ok(());
    }

    init_logging(&args)?;

    let mut config = GrabcfgConfig::load_from_file(&args.config)
        .with_context(|| format!("Failed to load configuration from {}", args.config))?;

    if let Some(name) = &args.profile {
        config.profile.name = name.clone();
        config.profile.file = None;
    }
    if let Some(file) = &args.profile_file {
        config.profile.file = Some(file.clone());
    }

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        eprintln!("✗ Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    if args.validate_config {
        println!("✓ Configuration is valid");
        return Ok(());
    }

    let profile = config
        .resolve_profile()
        .context("Failed to resolve profile")?;
    info!("Selected profile '{}'", profile.name());

    if args.print_profile {
        print!("{}", profile.to_toml_string()?);
        return Ok(());
    }

    if args.simulate {
        let simulation = simulate(&config, &profile, args.pulse)
            .with_context(|| format!("Failed to simulate profile '{}'", profile.name()))?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&simulation)?);
        } else {
            for (index, call) in simulation.calls.iter().enumerate() {
                println!("{:>3}  {}", index, call);
            }
            if let Some(pulse) = &simulation.pulse {
                println!("     pulse width {:?}", pulse.width);
            }
            println!(
                "✓ {} operations applied to grabber {} in {:?}",
                simulation.report.operations_applied, simulation.grabber, simulation.report.elapsed
            );
        }
        return Ok(());
    }

    println!(
        "Profile '{}' ({} operations) is ready; no grabber driver is linked into this build. \
         Use --simulate to trace it against an in-memory grabber.",
        profile.name(),
        profile.len()
    );
    Ok(())
}

fn init_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    // Determine log level based on flags
    let log_level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("grabcfg={}", log_level)));

    let fmt_layer = match args.log_format.as_deref() {
        Some("json") => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .boxed(),
        Some("compact") => fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed(),
        Some("pretty") | None => fmt::layer()
            .pretty()
            .with_target(true)
            .with_file(args.debug)
            .with_line_number(args.debug)
            .with_writer(std::io::stderr)
            .boxed(),
        Some(format) => {
            eprintln!("Warning: Unknown log format '{}', using default", format);
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .boxed()
        }
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Print default configuration in TOML format
fn print_default_config() -> Result<()> {
    println!("# Grabcfg Configuration File");
    println!("# Every key can be overridden with GRABCFG_<TABLE>_<KEY>");
    println!();
    print!("{}", toml::to_string_pretty(&GrabcfgConfig::default())?);
    Ok(())
}
