#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ratatui::symbols::Marker;
use serde::{Deserialize, Serialize};

use crate::domain::weather::{DayPhase, WeatherCondition};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerArg {
    #[default]
    Braille,
    HalfBlock,
    Block,
    Dot,
}

impl MarkerArg {
    const ORDER: [Self; 4] = [Self::Braille, Self::HalfBlock, Self::Block, Self::Dot];

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ORDER
            .iter()
            .position(|marker| *marker == self)
            .unwrap_or_default();
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub const fn marker(self) -> Marker {
        match self {
            Self::Braille => Marker::Braille,
            Self::HalfBlock => Marker::HalfBlock,
            Self::Block => Marker::Block,
            Self::Dot => Marker::Dot,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Braille => "braille",
            Self::HalfBlock => "half-block",
            Self::Block => "block",
            Self::Dot => "dot",
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "weatherfx",
    version,
    about = "Procedural weather effects in the terminal"
)]
pub struct Cli {
    /// Condition to open on, e.g. heavy-rain (default: random)
    #[arg(long)]
    pub condition: Option<WeatherCondition>,

    /// Start in the night phase
    #[arg(long)]
    pub night: bool,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Freeze the effect clock
    #[arg(long)]
    pub no_animation: bool,

    /// Half-speed effects and at most 20 FPS
    #[arg(long)]
    pub reduced_motion: bool,

    /// Draw lightning at a steady low opacity instead of flashing
    #[arg(long)]
    pub no_flash: bool,

    /// Canvas marker override
    #[arg(long, value_enum)]
    pub marker: Option<MarkerArg>,

    /// Seed for reproducible effects
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write diagnostics to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn phase(&self) -> DayPhase {
        if self.night {
            DayPhase::Night
        } else {
            DayPhase::Day
        }
    }
}
