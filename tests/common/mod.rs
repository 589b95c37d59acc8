#![allow(dead_code)]

use ratatui::{Terminal, backend::TestBackend};
use weatherfx::{
    app::{settings::RuntimeSettings, state::AppState},
    cli::Cli,
    domain::weather::WeatherCondition,
    ui,
};

pub fn cli(condition: WeatherCondition) -> Cli {
    Cli {
        condition: Some(condition),
        night: false,
        fps: 30,
        no_animation: true,
        reduced_motion: false,
        no_flash: false,
        marker: None,
        seed: Some(42),
        log_file: None,
    }
}

pub fn night_cli(condition: WeatherCondition) -> Cli {
    Cli {
        night: true,
        ..cli(condition)
    }
}

/// State sized for a `width` x `height` terminal, with settings taken from the CLI only.
pub fn ready_state(cli: &Cli, width: u16, height: u16) -> AppState {
    let mut state = AppState::with_settings(cli, RuntimeSettings::from_cli_defaults(cli), None);
    state.resize_viewport(width, height);
    state
}

pub fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|frame| ui::render(frame, state))
        .expect("draw");

    let buffer = terminal.backend().buffer().clone();
    let mut lines = Vec::new();
    for y in 0..height {
        let mut line = String::new();
        for x in 0..width {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}
