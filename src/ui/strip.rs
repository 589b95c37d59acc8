use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
};

use crate::{
    domain::weather::{DayPhase, WeatherCondition},
    ui::layout::{StripDensity, strip_density},
};

/// Titles for the selection strip and the index of the highlighted one.
#[must_use]
pub fn strip_titles(
    selected: WeatherCondition,
    phase: DayPhase,
    density: StripDensity,
) -> (Vec<String>, usize) {
    match density {
        StripDensity::Labels => (
            WeatherCondition::ALL
                .iter()
                .map(|condition| {
                    format!(
                        "{} {}",
                        condition.icon(phase),
                        condition.label_for_phase(phase)
                    )
                })
                .collect(),
            selected.index(),
        ),
        StripDensity::Icons => (
            WeatherCondition::ALL
                .iter()
                .map(|condition| condition.icon(phase).to_string())
                .collect(),
            selected.index(),
        ),
        StripDensity::Selected => (
            vec![format!(
                "◀ {} {} ▶",
                selected.icon(phase),
                selected.label_for_phase(phase)
            )],
            0,
        ),
    }
}

pub fn render(frame: &mut Frame, area: Rect, selected: WeatherCondition, phase: DayPhase) {
    let (titles, index) = strip_titles(selected, phase, strip_density(area.width));
    let title = format!(
        " {} · {} ",
        selected.label_for_phase(phase),
        phase
    );
    let tabs = Tabs::new(titles.into_iter().map(Line::from))
        .select(index)
        .divider("│")
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(tabs, area);
}
