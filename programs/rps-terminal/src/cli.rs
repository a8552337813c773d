use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rps_logic::{GameConfig, Move};

#[derive(Debug, Parser)]
#[command(name = "rps", version, about = "Rock Paper Scissors against the computer")]
pub struct Args {
    /// Player name; prompted for when missing
    #[arg(long)]
    pub name: Option<String>,

    /// Number of rounds; prompted for when missing
    #[arg(long)]
    pub rounds: Option<String>,

    /// Seed for the computer opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON game config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Play these moves without prompting, e.g. rock,paper,scissors
    #[arg(long, value_delimiter = ',')]
    pub moves: Vec<Move>,

    /// Skip the introduction
    #[arg(long)]
    pub no_intro: bool,
}

impl Args {
    pub fn load_config(&self) -> anyhow::Result<GameConfig> {
        match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                let config = GameConfig::from_json(&json)
                    .with_context(|| format!("loading config {}", path.display()))?;
                log::info!("loaded config from {}", path.display());
                Ok(config)
            }
            None => Ok(GameConfig::default()),
        }
    }

    pub fn scripted(&self) -> bool {
        !self.moves.is_empty()
    }
}
