use std::f32::consts::TAU;

use crate::fx::{
    animation::{Animation, Timing, Track},
    geometry::{Bounds, Point},
    node::{Node, Role, Shape, Tint},
    random::RandomSource,
    recipe::{MoonConfig, SunConfig},
    surface::Stage,
};

/// Surfaces narrower than this shrink the sun and moon proportionally.
const REFERENCE_SIDE: f32 = 300.0;

fn celestial_anchor(bounds: Bounds) -> Point {
    Point::new(bounds.width / 2.0, bounds.height / 3.0)
}

fn celestial_scale(bounds: Bounds) -> f32 {
    (bounds.min_side() / REFERENCE_SIDE).clamp(0.0, 1.0)
}

pub(super) fn sun(stage: &mut Stage, _random: &mut dyn RandomSource, config: &SunConfig) {
    let bounds = stage.bounds();
    let centre = celestial_anchor(bounds);
    let scale = celestial_scale(bounds);
    let radius = config.radius * scale;

    stage.attach(
        Node::new(Role::SunDisc, Shape::Disc { radius }, centre, Tint::Sun)
            .sized(radius * 2.0)
            .animated(Animation::new(
                Track::Scale {
                    from: 1.0,
                    to: config.pulse_scale,
                },
                Timing::looping(config.pulse_period / 2.0)
                    .autoreversing()
                    .eased(),
            )),
    );

    // Every ray shares one rotation timing, so the group turns as a whole.
    let rotation = Animation::new(Track::Rotate(1.0), Timing::looping(config.rotation_period));
    let inner = config.ray_offset * scale;
    let outer = (config.ray_offset + config.ray_length) * scale;
    for idx in 0..config.rays {
        let angle = idx as f32 * TAU / config.rays as f32;
        stage.attach(
            Node::new(
                Role::Ray,
                Shape::Segment {
                    from: Point::polar(inner, angle),
                    to: Point::polar(outer, angle),
                },
                centre,
                Tint::SunRay,
            )
            .sized(outer - inner)
            .animated(rotation.clone()),
        );
    }
}

pub(super) fn moon(stage: &mut Stage, random: &mut dyn RandomSource, config: &MoonConfig) {
    let bounds = stage.bounds();
    let centre = celestial_anchor(bounds);
    let radius = config.radius * celestial_scale(bounds);

    stage.attach(
        Node::new(Role::MoonDisc, Shape::Disc { radius }, centre, Tint::Moon).sized(radius * 2.0),
    );

    for _ in 0..config.stars {
        let star_radius = config.star_radius.draw(random);
        let position = Point::new(
            random.below(bounds.width),
            random.below(bounds.height / 2.0),
        );
        let blink = config.blink.draw(random);
        stage.attach(
            Node::new(
                Role::Star,
                Shape::Disc {
                    radius: star_radius,
                },
                position,
                Tint::Star,
            )
            .sized(star_radius * 2.0)
            .animated(Animation::new(
                Track::Opacity { from: 1.0, to: 0.0 },
                Timing::looping(blink)
                    .autoreversing()
                    .phased(random.unit()),
            )),
        );
    }
}
