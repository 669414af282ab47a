use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use integrated_farm_calculator::{
    analysis::{evaluate, project_finances, LandPolicy, ProjectionRates},
    config::ScenarioConfig,
    io::{self, ParameterReader},
    models::{out_of_range_fields, DairyAllocation, FarmParameters, GreenhouseProduct},
    visualization::{
        print_field_table, print_full_report, print_product_catalog, print_projection_chart,
        print_projection_table,
    },
};

#[derive(Parser)]
#[command(
    name = "farm-calc",
    about = "Integrated Farm Calculator - dairy, greenhouse and biogas viability analysis",
    version,
    author
)]
struct Cli {
    /// Log evaluation stages (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Scenario source and the most common overrides.
#[derive(Args, Debug, Default)]
struct ScenarioArgs {
    /// Scenario file (TOML, or JSON by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Parameter set (JSON) replacing the scenario's parameters
    #[arg(long)]
    params: Option<PathBuf>,

    /// Number of dairy cows
    #[arg(long)]
    cows: Option<u32>,

    /// Total deeded land in hectares
    #[arg(long)]
    deeded_land: Option<f64>,

    /// Grassland area in hectares
    #[arg(long)]
    grassland: Option<f64>,

    /// Greenhouse area in hectares
    #[arg(long)]
    greenhouse: Option<f64>,

    /// Greenhouse product: tomato, lettuce, strawberry or cucumber
    #[arg(long)]
    product: Option<GreenhouseProduct>,

    /// Share of milk sold raw (%)
    #[arg(long)]
    raw_milk: Option<f64>,

    /// Share of milk processed into cheese (%)
    #[arg(long)]
    cheese: Option<f64>,

    /// Share of milk processed into cream (%)
    #[arg(long)]
    cream: Option<f64>,

    /// Fail instead of warning when the land cannot feed the herd
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a farm scenario and display the full report
    Evaluate {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Print the report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Project revenue, cost and profit over several years
    Project {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Number of years to project
        #[arg(short, long, default_value = "5")]
        years: u32,

        /// Annual revenue growth rate
        #[arg(long, default_value = "0.02")]
        revenue_growth: f64,

        /// Annual cost growth rate
        #[arg(long, default_value = "0.03")]
        cost_growth: f64,

        /// Also write the projection rows to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the greenhouse product catalog
    Products,

    /// Show the input field ranges and current values
    Fields {
        /// Scenario file to compare against the ranges
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the default scenario as a TOML file
    InitConfig {
        /// Output file path
        #[arg(short, long, default_value = "farm.toml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Evaluate a scenario and export the report (JSON, CSV, or Excel)
    Export {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output file path; format chosen by extension
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Start the JSON API server
    #[cfg(feature = "web")]
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "integrated_farm_calculator=debug,warn"
        } else {
            "warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn load_scenario(args: &ScenarioArgs) -> Result<ScenarioConfig> {
    let mut scenario = match &args.config {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => ScenarioConfig::default(),
    };

    if let Some(path) = &args.params {
        let reader: &dyn ParameterReader = &io::JsonFormat::default();
        scenario.parameters = reader
            .read(path)
            .with_context(|| format!("failed to read parameters {}", path.display()))?;
    }

    let p = &mut scenario.parameters;
    if let Some(cows) = args.cows {
        p.herd.cows = cows;
    }
    if let Some(ha) = args.deeded_land {
        p.land.deeded_land_ha = ha;
    }
    if let Some(ha) = args.grassland {
        p.land.grassland_ha = ha;
    }
    if let Some(ha) = args.greenhouse {
        p.land.greenhouse_ha = ha;
    }
    if let Some(product) = args.product {
        p.greenhouse.product = product;
    }
    if args.raw_milk.is_some() || args.cheese.is_some() || args.cream.is_some() {
        let current = p.dairy.allocation;
        p.dairy.allocation = DairyAllocation::new(
            args.raw_milk.unwrap_or(current.raw_milk_percent),
            args.cheese.unwrap_or(current.cheese_percent),
            args.cream.unwrap_or(current.cream_percent),
        );
    }
    if args.strict {
        scenario.land_policy = LandPolicy::Strict;
    }

    Ok(scenario)
}

/// Resolve presets and warn about values outside the usual form ranges.
fn resolve_parameters(scenario: &ScenarioConfig) -> Result<FarmParameters> {
    let params = scenario.resolve()?;
    for issue in out_of_range_fields(&params) {
        warn!("{issue}");
    }
    Ok(params)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Evaluate { scenario, json } => {
            let scenario = load_scenario(&scenario)?;
            let params = resolve_parameters(&scenario)?;
            let report = evaluate(&params, scenario.land_policy)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "\n{}",
                    format!("Integrated Farm Analysis: {}", scenario.name)
                        .bold()
                        .cyan()
                );
                print_full_report(&params, &report);
            }
        }

        Commands::Project {
            scenario,
            years,
            revenue_growth,
            cost_growth,
            output,
        } => {
            if years == 0 {
                anyhow::bail!("Projection needs at least one year");
            }
            let scenario = load_scenario(&scenario)?;
            let params = resolve_parameters(&scenario)?;
            let report = evaluate(&params, scenario.land_policy)?;

            let rates = ProjectionRates {
                revenue_growth,
                cost_growth,
            };
            let projections =
                project_finances(report.total_revenue, report.total_operating_cost, years, &rates);

            println!(
                "\n{}",
                format!(
                    "Financial Projection: {years} years (revenue +{:.1}%/yr, costs +{:.1}%/yr)",
                    revenue_growth * 100.0,
                    cost_growth * 100.0
                )
                .bold()
                .cyan()
            );
            print_projection_table(&projections, &report.currency);
            print_projection_chart(&projections);

            if let Some(path) = output {
                io::write_projection_csv(&projections, &path)?;
                println!(
                    "{} Wrote projection to {}",
                    "Success:".green().bold(),
                    path.display()
                );
            }
        }

        Commands::Products => {
            print_product_catalog();
        }

        Commands::Fields { config } => {
            let scenario = load_scenario(&ScenarioArgs {
                config,
                ..ScenarioArgs::default()
            })?;
            let params = scenario.resolve()?;
            print_field_table(&params);
        }

        Commands::InitConfig { output, force } => {
            if output.exists() && !force {
                anyhow::bail!(
                    "{} already exists. Use --force to overwrite",
                    output.display()
                );
            }
            std::fs::write(&output, ScenarioConfig::default().to_toml_string()?)?;
            println!(
                "{} Wrote default scenario to {}",
                "Success:".green().bold(),
                output.display()
            );
        }

        Commands::Export { scenario, output } => {
            let writer = io::writer_for_path(&output)?;
            let scenario = load_scenario(&scenario)?;
            let params = resolve_parameters(&scenario)?;
            let report = evaluate(&params, scenario.land_policy)?;

            writer.write(&report, &output)?;
            println!(
                "{} Exported report to {}",
                "Success:".green().bold(),
                output.display()
            );
        }

        #[cfg(feature = "web")]
        Commands::Serve { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(integrated_farm_calculator::web::start_server(&host, port))?;
        }
    }

    Ok(())
}
