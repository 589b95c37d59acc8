use std::f32::consts::PI;

use ratatui::{
    Frame,
    layout::Rect,
    symbols::Marker,
    widgets::canvas::{Canvas, Line as CanvasLine, Points},
};

use crate::{
    fx::{
        Bounds, EffectSurface, Layer, Node, Point, Role, Shape, Tint, animation::Pose,
        node::Lobe,
    },
    ui::{
        layout::{POINTS_PER_COLUMN, POINTS_PER_ROW},
        theme::Palette,
    },
};

/// Nodes fainter than this are not drawn at all.
pub const MIN_VISIBLE_OPACITY: f32 = 0.05;
/// Lightning opacity when flashing is disabled.
pub const STEADY_BOLT_OPACITY: f32 = 0.35;

/// Dot pitch and visible area used when shapes are filled with points.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Raster {
    step: Point,
    clip: Bounds,
}

impl Raster {
    fn new(marker: Marker, clip: Bounds) -> Self {
        Self {
            step: fill_step(marker),
            clip,
        }
    }

    fn contains(self, point: Point) -> bool {
        (0.0..=self.clip.width).contains(&point.x) && (0.0..=self.clip.height).contains(&point.y)
    }
}

/// Surface points covered by one canvas dot. Filling finer than that only repaints the same cell.
fn fill_step(marker: Marker) -> Point {
    let (dots_x, dots_y) = match marker {
        Marker::Braille => (2.0, 4.0),
        Marker::HalfBlock => (1.0, 2.0),
        _ => (1.0, 1.0),
    };
    Point::new(POINTS_PER_COLUMN / dots_x, POINTS_PER_ROW / dots_y)
}

#[derive(Debug, Clone, PartialEq)]
pub enum StrokeKind {
    Line { from: Point, to: Point },
    Dots(Vec<Point>),
}

/// One drawable piece of a posed node, still in surface coordinates (y down).
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub layer: Layer,
    pub tint: Tint,
    pub opacity: f32,
    pub kind: StrokeKind,
}

/// Poses every live node at the surface clock and flattens it into strokes, back to front.
/// Filled shapes are clipped to the surface and sampled at `marker`'s dot pitch.
#[must_use]
pub fn scene_strokes(surface: &EffectSurface, no_flash: bool, marker: Marker) -> Vec<Stroke> {
    let stage = surface.stage();
    let raster = Raster::new(marker, surface.bounds());
    let now = stage.clock();
    let mut strokes = Vec::new();
    for node in stage.paint_order() {
        let pose = node.pose(now);
        let opacity = if no_flash && node.role == Role::Bolt {
            STEADY_BOLT_OPACITY
        } else {
            pose.opacity
        };
        if opacity < MIN_VISIBLE_OPACITY {
            continue;
        }
        for kind in node_strokes(node, &pose, raster) {
            strokes.push(Stroke {
                layer: node.layer(),
                tint: node.tint,
                opacity,
                kind,
            });
        }
    }
    strokes
}

fn node_strokes(node: &Node, pose: &Pose, raster: Raster) -> Vec<StrokeKind> {
    let place = |local: Point| pose.place(node.origin, local);
    match &node.shape {
        Shape::Disc { radius } => vec![StrokeKind::Dots(fill_disc(
            place(Point::ZERO),
            radius * pose.scale,
            raster,
        ))],
        Shape::Segment { from, to } => vec![StrokeKind::Line {
            from: place(*from),
            to: place(*to),
        }],
        Shape::Polyline(points) => points
            .windows(2)
            .map(|pair| StrokeKind::Line {
                from: place(pair[0]),
                to: place(pair[1]),
            })
            .collect(),
        Shape::Band { width, height } => vec![StrokeKind::Dots(fill_band(
            place(Point::ZERO),
            width * pose.scale,
            height * pose.scale,
            raster,
        ))],
        Shape::Blob(lobes) => vec![StrokeKind::Dots(
            lobes
                .iter()
                .flat_map(|Lobe { center, radius }| {
                    fill_disc(place(*center), radius * pose.scale, raster)
                })
                .collect(),
        )],
        Shape::Asterisk { radius, spokes } => {
            let spokes = (*spokes).max(1);
            (0..spokes)
                .map(|idx| {
                    let arm = Point::polar(*radius, idx as f32 * PI / spokes as f32);
                    StrokeKind::Line {
                        from: place(Point::ZERO - arm),
                        to: place(arm),
                    }
                })
                .collect()
        }
    }
}

fn fill_disc(center: Point, radius: f32, raster: Raster) -> Vec<Point> {
    let step = raster.step;
    if radius <= step.x.min(step.y) {
        return if raster.contains(center) {
            vec![center]
        } else {
            Vec::new()
        };
    }
    let mut dots = Vec::new();
    let top = (-radius).max(-center.y);
    let bottom = radius.min(raster.clip.height - center.y);
    let mut dy = top;
    while dy <= bottom {
        let half = (radius * radius - dy * dy).max(0.0).sqrt();
        let mut dx = (-half).max(-center.x);
        let right = half.min(raster.clip.width - center.x);
        while dx <= right {
            dots.push(center + Point::new(dx, dy));
            dx += step.x;
        }
        dy += step.y;
    }
    dots
}

/// Only the part of the band over the surface is filled; drifting banks are much wider.
fn fill_band(top_left: Point, width: f32, height: f32, raster: Raster) -> Vec<Point> {
    let left = top_left.x.max(0.0);
    let right = (top_left.x + width).min(raster.clip.width);
    let top = top_left.y.max(0.0);
    let bottom = (top_left.y + height).min(raster.clip.height);

    let mut dots = Vec::new();
    let mut y = top;
    while y <= bottom {
        let mut x = left;
        while x <= right {
            dots.push(Point::new(x, y));
            x += raster.step.x;
        }
        y += raster.step.y;
    }
    dots
}

/// Surface y grows downward, canvas y grows upward.
fn to_canvas(point: Point, height: f32) -> (f64, f64) {
    (f64::from(point.x), f64::from(height - point.y))
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    surface: &EffectSurface,
    palette: Palette,
    marker: Marker,
    no_flash: bool,
) {
    let bounds = surface.bounds();
    let strokes = scene_strokes(surface, no_flash, marker);
    let height = bounds.height;

    let canvas = Canvas::default()
        .marker(marker)
        .background_color(palette.sky_color())
        .x_bounds([0.0, f64::from(bounds.width)])
        .y_bounds([0.0, f64::from(height)])
        .paint(|ctx| {
            let mut current = None;
            for stroke in &strokes {
                if current.is_some_and(|layer| layer != stroke.layer) {
                    ctx.layer();
                }
                current = Some(stroke.layer);

                let color = palette.tint_color(stroke.tint, stroke.opacity);
                match &stroke.kind {
                    StrokeKind::Line { from, to } => {
                        let (x1, y1) = to_canvas(*from, height);
                        let (x2, y2) = to_canvas(*to, height);
                        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
                    }
                    StrokeKind::Dots(dots) => {
                        let coords = dots
                            .iter()
                            .map(|dot| to_canvas(*dot, height))
                            .collect::<Vec<_>>();
                        ctx.draw(&Points {
                            coords: &coords,
                            color,
                        });
                    }
                }
            }
        });
    frame.render_widget(canvas, area);
}
