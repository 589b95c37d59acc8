use ratatui::layout::{Constraint, Layout, Rect};

use crate::fx::Bounds;

/// Horizontal surface points covered by one terminal column.
pub const POINTS_PER_COLUMN: f32 = 4.0;
/// Vertical surface points covered by one terminal row. Cells are about twice as tall as wide.
pub const POINTS_PER_ROW: f32 = 8.0;

pub const STRIP_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;

pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub strip: Rect,
    pub scene: Rect,
    pub status: Rect,
}

#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [strip, scene, status] = Layout::vertical([
        Constraint::Length(STRIP_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);
    ScreenLayout {
        strip,
        scene,
        status,
    }
}

#[must_use]
pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_WIDTH || area.height < MIN_HEIGHT
}

/// Surface size for a scene rectangle.
#[must_use]
pub fn scene_bounds(scene: Rect) -> Bounds {
    Bounds::new(
        f32::from(scene.width) * POINTS_PER_COLUMN,
        f32::from(scene.height) * POINTS_PER_ROW,
    )
}

/// Surface size for a whole terminal of `width` x `height` cells.
#[must_use]
pub fn surface_bounds(width: u16, height: u16) -> Bounds {
    let area = Rect::new(0, 0, width, height);
    if is_too_small(area) {
        return Bounds::default();
    }
    scene_bounds(screen_layout(area).scene)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripDensity {
    Labels,
    Icons,
    Selected,
}

#[must_use]
pub fn strip_density(width: u16) -> StripDensity {
    match width {
        180..=u16::MAX => StripDensity::Labels,
        64..=179 => StripDensity::Icons,
        _ => StripDensity::Selected,
    }
}
