use crate::{
    cli::Cli,
    domain::weather::WeatherCondition,
};

/// A fixed, seeded CLI that never touches the disk-backed settings.
pub(crate) fn test_cli() -> Cli {
    Cli {
        condition: Some(WeatherCondition::Clear),
        night: false,
        fps: 30,
        no_animation: false,
        reduced_motion: false,
        no_flash: false,
        marker: None,
        seed: Some(7),
        log_file: None,
    }
}

pub(crate) fn condition_cli(condition: WeatherCondition) -> Cli {
    Cli {
        condition: Some(condition),
        ..test_cli()
    }
}
