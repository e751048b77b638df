// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use aptbot_core::classify::{interesting_runway_count, is_interesting};
use aptbot_core::loader::{self, AirportMap};
use aptbot_core::message::compose_message;
use aptbot_core::publish::{self, DryRunPoster, JobFileRenderer, MapRenderer, MapStyle, RenderJob};
use aptbot_core::{BotConfig, CandidatePool, DatasetStats};
use clap::{ArgAction, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON config file
    #[arg(short, long, env = "APTBOT_CONFIG")]
    config: Option<PathBuf>,

    /// Folder holding countries.csv, airports.csv and runways.csv
    #[arg(short, long, env = "APTBOT_DATA")]
    data: Option<PathBuf>,

    /// Folder for render jobs and saved posts
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a random interesting airport, render it and post about it
    Post {
        /// Fixed RNG seed (defaults to the config seed, then the current time)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Render and print the post for one airport by ICAO code
    Show { icao: String },
    /// List all interesting airports
    List,
    /// Print dataset counts
    Stats,
    /// Write the effective config (defaults plus flags) to the config file
    InitConfig {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    if let Err(e) = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

fn load_airports(config: &BotConfig) -> Result<AirportMap> {
    loader::load_dir(&config.data_dir, &config.thresholds)
        .with_context(|| format!("Failed to load dataset from {:?}", config.data_dir))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.unwrap_or_else(BotConfig::default_path);
    let mut config = BotConfig::load(&config_path)
        .with_context(|| format!("Failed to read config {:?}", config_path))?;
    if let Some(data) = cli.data {
        config.data_dir = data;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }

    let min_km = config.thresholds.min_runway_km;

    match &cli.command {
        Commands::Post { seed } => {
            let airports = load_airports(&config)?;
            let seed = seed
                .or(config.seed)
                .unwrap_or_else(|| chrono::Utc::now().timestamp() as u64);
            log::info!("Selecting with seed {}", seed);

            let pool = CandidatePool::build(airports.values(), min_km);
            let mut rng = StdRng::seed_from_u64(seed);
            let airport = pool.pick(&mut rng)?;

            let mut renderer = JobFileRenderer::new(&config.output_dir);
            let mut poster = DryRunPoster::new(&config.output_dir);
            let post = publish::publish(airport, &config, &mut renderer, &mut poster)
                .with_context(|| format!("Failed to publish airport '{}'", airport.name))?;

            println!("{}", post.status);
        }
        Commands::Show { icao } => {
            let airports = load_airports(&config)?;
            let airport = airports
                .get(&icao.to_uppercase())
                .ok_or_else(|| anyhow::anyhow!("Cannot find airport by ICAO '{}'", icao))?;

            println!("{}", compose_message(airport, &config.hashtags));
            println!();

            let bb = airport.bounding_box(config.margin_deg);
            println!("Bounding box: {} - {}", bb.min, bb.max);
            println!(
                "Interesting: {} ({} qualifying runways, {} excessive)",
                is_interesting(airport, min_km),
                interesting_runway_count(airport, min_km),
                airport.excessive_runways.len()
            );

            let mut renderer = JobFileRenderer::new(&config.output_dir);
            for style in MapStyle::ALL {
                let job = RenderJob::new(airport, style, config.margin_deg, config.image_size_px);
                let path = renderer
                    .render(&job)
                    .with_context(|| format!("Cannot draw airport '{}'", airport.name))?;
                println!("Rendered: {}", path.display());
            }
        }
        Commands::List => {
            let airports = load_airports(&config)?;
            let pool = CandidatePool::build(airports.values(), min_km);
            for airport in pool.airports() {
                println!(
                    "{:<6} {:<15} {:>2}  {}",
                    airport.icao,
                    airport.airport_type.as_str(),
                    interesting_runway_count(airport, min_km),
                    airport.name
                );
            }
            println!("interesting airports: {}", pool.airports().count());
        }
        Commands::Stats => {
            let airports = load_airports(&config)?;
            let stats = DatasetStats::collect(&airports, &config.thresholds);
            println!("countries:          {}", stats.countries);
            println!("airports:           {}", stats.airports);
            println!("runways:            {}", stats.runways);
            println!("excessive runways:  {}", stats.excessive_runways);
            println!("interesting large:  {}", stats.interesting_large);
            println!("interesting medium: {}", stats.interesting_medium);
            println!("pool size:          {}", stats.pool_size);
        }
        Commands::InitConfig { force } => {
            if config_path.exists() && !force {
                anyhow::bail!("{:?} already exists (use --force to replace it)", config_path);
            }
            config
                .save(&config_path)
                .with_context(|| format!("Failed to write config {:?}", config_path))?;
            println!("Wrote {}", config_path.display());
        }
    }

    Ok(())
}
