use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use torus_snake::game::{GameConfig, SpawnRegion};
use torus_snake::logging;
use torus_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Seconds between game ticks
    #[arg(long)]
    tick_interval: Option<f64>,

    /// Cells fruit may spawn on
    #[arg(long, value_enum)]
    fruit_region: Option<FruitRegion>,

    /// Fixed RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum FruitRegion {
    /// Anywhere on the grid
    Full,
    /// Never on row 0 or column 0
    ExcludeOrigin,
}

impl From<FruitRegion> for SpawnRegion {
    fn from(region: FruitRegion) -> Self {
        match region {
            FruitRegion::Full => SpawnRegion::Full,
            FruitRegion::ExcludeOrigin => SpawnRegion::ExcludeOrigin,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(secs) = self.tick_interval {
            config.tick_interval_secs = secs;
        }
        if let Some(region) = self.fruit_region {
            config.fruit_region = region.into();
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref(), &cli.log_level)?;

    let config = cli.game_config()?;
    tracing::info!(?config, "starting");

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}
