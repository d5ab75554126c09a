use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::error;
use normal_calc::critical::critical_values_for;
use normal_calc::curve::{self, DensityPlot};
use normal_calc::{logging, report, CalculatorConfig, Interaction, Session};

#[derive(Parser)]
#[command(name = "normal-calc")]
#[command(version)]
#[command(about = "Explore z-scores, raw values and probabilities on a normal distribution", long_about = None)]
struct Cli {
    /// Mean (μ) of the distribution
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, global = true)]
    mean: f64,

    /// Standard deviation (σ), must be positive
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true, global = true)]
    std_dev: f64,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level (error, warn, info, debug, trace); RUST_LOG overrides
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Z-score and probability of a raw value
    Value {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },

    /// Raw value and probability of a z-score
    Z {
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },

    /// Z-score and raw value of a left-tail probability
    Prob {
        #[arg(allow_negative_numbers = true)]
        p: f64,
    },

    /// Common critical values
    Table,

    /// Density curve data as JSON
    Curve(CurveArgs),

    /// Background on z-scores
    About,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct CurveArgs {
    #[arg(long, allow_negative_numbers = true)]
    value: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    z: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    prob: Option<f64>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = logging::init_logging(&cli.log_level) {
        eprintln!("warning: {err}");
    }
    if let Err(err) = run(cli) {
        error!("event=command_failed error={err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::default(),
    };
    let mut session = Session::new(config)?;
    session.apply(Interaction::SetParameters {
        mean: cli.mean,
        std_dev: cli.std_dev,
    })?;
    let ctx = *session.context();

    match cli.command {
        Commands::Value { x } => {
            let state = session.apply(Interaction::Value(x))?;
            let r = state.value.ok_or_else(|| anyhow::anyhow!("no value result"))?;
            if cli.json {
                print_json(&r)?;
            } else {
                print_lines(&report::distribution_banner(&ctx), &report::value_lines(&r));
            }
        }

        Commands::Z { z } => {
            let state = session.apply(Interaction::Z(z))?;
            let r = state.z.ok_or_else(|| anyhow::anyhow!("no z result"))?;
            if cli.json {
                print_json(&r)?;
            } else {
                print_lines(&report::distribution_banner(&ctx), &report::z_lines(&r, &ctx));
            }
        }

        Commands::Prob { p } => {
            let state = session.apply(Interaction::Probability(p))?;
            let r = state
                .probability
                .ok_or_else(|| anyhow::anyhow!("no probability result"))?;
            if cli.json {
                print_json(&r)?;
            } else {
                print_lines(
                    &report::distribution_banner(&ctx),
                    &report::probability_lines(&r, &ctx),
                );
            }
        }

        Commands::Table => {
            let table = critical_values_for(&session.config().critical_probabilities, &ctx)?;
            if cli.json {
                print_json(&table)?;
            } else {
                print_lines("Common Critical Values", &report::critical_lines(&table, &ctx));
            }
        }

        Commands::Curve(args) => {
            let plot = curve_for(&mut session, args)?;
            print_json(&plot)?;
        }

        Commands::About => {
            print_lines("About Normal Distributions and Z-scores", &report::about_lines(&ctx));
        }
    }

    Ok(())
}

fn curve_for(session: &mut Session, args: CurveArgs) -> anyhow::Result<DensityPlot> {
    let ctx = *session.context();
    let config = session.config().clone();
    let plot = if let Some(x) = args.value {
        let state = session.apply(Interaction::Value(x))?;
        let r = state.value.ok_or_else(|| anyhow::anyhow!("no value result"))?;
        curve::value_plot(&r, &ctx, &config)
    } else if let Some(z) = args.z {
        let state = session.apply(Interaction::Z(z))?;
        let r = state.z.ok_or_else(|| anyhow::anyhow!("no z result"))?;
        curve::z_plot(&r, &ctx, &config)
    } else if let Some(p) = args.prob {
        let state = session.apply(Interaction::Probability(p))?;
        let r = state
            .probability
            .ok_or_else(|| anyhow::anyhow!("no probability result"))?;
        curve::probability_plot(&r, &ctx, &config)
    } else {
        anyhow::bail!("one of --value, --z or --prob is required");
    };
    Ok(plot)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_lines(header: &str, lines: &[String]) {
    println!("=== {header} ===");
    for line in lines {
        println!("{line}");
    }
}
