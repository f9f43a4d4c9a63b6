// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::board::{Category, Preset};

/// A clicked pixel, written `x,y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Click {
    pub x: f32,
    pub y: f32,
}

impl std::str::FromStr for Click {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f32>()
                .map_err(|e| format!("bad coordinate {v:?}: {e}"))
        };
        Ok(Click {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "chroma-board")]
#[command(about = "Headless driver for the color placement board", long_about = None)]
pub struct Cli {
    /// JSON configuration file; built-in reference values are used when absent
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Starting layout, overriding the configuration
    #[arg(long)]
    pub preset: Option<Preset>,

    /// Category placed by the clicks
    #[arg(long)]
    pub category: Option<Category>,

    /// Pixel to click, as x,y (repeatable)
    #[arg(long = "click", value_name = "X,Y")]
    pub clicks: Vec<Click>,

    /// Print the available presets and exit
    #[arg(long = "list-presets", default_value = "false")]
    pub list_presets: bool,

    /// Do not print the board after the clicks
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}
