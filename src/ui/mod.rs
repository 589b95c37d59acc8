pub mod layout;
pub mod scene;
pub mod strip;
pub mod theme;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::{settings::MotionSetting, state::AppState},
    ui::{
        layout::{MIN_HEIGHT, MIN_WIDTH, is_too_small, screen_layout},
        theme::{Palette, detect_color_capability},
    },
};

const KEY_HINTS: &str = "←/→ select · space day/night · r random · p pause · m marker · q quit";

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    if is_too_small(area) {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .block(Block::default().borders(Borders::ALL).title("weatherfx"));
        frame.render_widget(warning, area);
        return;
    }

    let layout = screen_layout(area);
    let palette = Palette::new(state.condition, state.phase, detect_color_capability());

    strip::render(frame, layout.strip, state.condition, state.phase);
    scene::render(
        frame,
        layout.scene,
        &state.surface,
        palette,
        state.settings.marker.marker(),
        state.steady_bolts(),
    );
    render_status(frame, layout.status, state);
}

/// Left side describes what is running; the key hints fill whatever room is left.
#[must_use]
pub fn status_text(state: &AppState) -> String {
    let recipe = state
        .surface
        .active_recipe()
        .map(|recipe| recipe.describe())
        .unwrap_or_default();
    let mut parts = vec![
        recipe,
        format!("{} nodes", state.surface.stage().nodes().len()),
        state.settings.marker.label().to_string(),
    ];
    match state.settings.motion {
        MotionSetting::Full => {}
        motion => parts.push(format!("motion {}", motion.label())),
    }
    if state.paused {
        parts.push("paused".to_string());
    }
    parts.join(" · ")
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        status_text(state),
        Style::default().fg(Color::White),
    )];
    if let Some(notice) = &state.notice {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("⚠ {notice}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::raw("  "));
    spans.push(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
