mod common;

use common::{cli, night_cli, ready_state, render_to_string};
use weatherfx::{cli::MarkerArg, domain::weather::WeatherCondition, ui::status_text};

fn scene_has_ink(rendered: &str) -> bool {
    rendered
        .lines()
        .skip(3)
        .take(20)
        .any(|line| line.chars().any(|ch| ('\u{2801}'..='\u{28FF}').contains(&ch)))
}

#[test]
fn clear_day_renders_strip_scene_and_status() {
    let state = ready_state(&cli(WeatherCondition::Clear), 80, 24);
    let rendered = render_to_string(&state, 80, 24);
    let lines = rendered.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 24);
    assert!(lines[0].contains("Clear · day"), "{rendered}");
    assert!(lines[1].contains('☀'));
    assert!(lines[23].starts_with("sun rays=12 · 13 nodes · braille"));
    assert!(scene_has_ink(&rendered), "{rendered}");
}

#[test]
fn clear_night_uses_night_label_and_moon_icon() {
    let state = ready_state(&night_cli(WeatherCondition::Clear), 80, 24);
    let rendered = render_to_string(&state, 80, 24);
    let lines = rendered.lines().collect::<Vec<_>>();

    assert!(lines[0].contains("Clear night · night"));
    assert!(lines[1].contains('☾'));
    assert!(lines[23].starts_with("moon stars=20 · 21 nodes"));
}

#[test]
fn narrow_terminal_strip_shows_only_the_selection() {
    let state = ready_state(&cli(WeatherCondition::Rain), 50, 20);
    let rendered = render_to_string(&state, 50, 20);
    assert!(rendered.lines().nth(1).is_some_and(|line| line.contains("◀ ☂ Rain ▶")));
}

#[test]
fn tiny_terminal_shows_resize_hint() {
    let state = ready_state(&cli(WeatherCondition::Snow), 20, 6);
    let rendered = render_to_string(&state, 20, 6);
    assert!(rendered.contains("Terminal"), "{rendered}");
    assert!(state.surface.bounds().width == 0.0);
}

#[test]
fn block_marker_still_draws_the_scene() {
    let mut cli = cli(WeatherCondition::Overcast);
    cli.marker = Some(MarkerArg::Block);
    let state = ready_state(&cli, 80, 24);
    let rendered = render_to_string(&state, 80, 24);
    assert!(
        rendered
            .lines()
            .skip(3)
            .take(20)
            .any(|line| line.contains('█')),
        "{rendered}"
    );
}

#[test]
fn status_line_notice_is_visible() {
    let mut state = ready_state(&cli(WeatherCondition::Fog), 120, 24);
    state.notice = Some("settings not saved".to_string());
    let rendered = render_to_string(&state, 120, 24);
    assert!(rendered.lines().last().is_some_and(|line| line.contains("⚠ settings not saved")));
}

#[test]
fn status_text_snapshots() {
    let heavy = ready_state(&cli(WeatherCondition::HeavyRain), 80, 24);
    insta::assert_snapshot!(status_text(&heavy), @"rain 450 · 450 nodes · braille · motion off");

    let mut storm = ready_state(&cli(WeatherCondition::StormAndRain), 80, 24);
    storm.paused = true;
    insta::assert_snapshot!(
        status_text(&storm),
        @"storm bolts=3 + rain 50 · 53 nodes · braille · motion off · paused"
    );
}
