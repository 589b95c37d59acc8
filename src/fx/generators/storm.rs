use crate::fx::{
    animation::{Animation, Timing, Track},
    geometry::Point,
    node::{Node, Role, Shape, Tint},
    random::RandomSource,
    recipe::StormConfig,
    surface::Stage,
};

/// Zigzag bolts hanging from the top edge. Invisible at rest; each flickers on its own offset
/// so they never flash in unison.
pub(super) fn bolts(stage: &mut Stage, random: &mut dyn RandomSource, config: &StormConfig) {
    let bounds = stage.bounds();
    for _ in 0..config.bolts {
        let start = Point::new(random.below(bounds.width), 0.0);
        let path = zigzag(random, config);
        let offset = config.offset.draw(random);

        stage.attach(
            Node::new(Role::Bolt, Shape::Polyline(path), start, Tint::Bolt)
                .with_opacity(0.0)
                .animated(Animation::new(
                    Track::Opacity { from: 1.0, to: 0.0 },
                    Timing::looping(config.flash)
                        .autoreversing()
                        .delayed(offset),
                )),
        );
    }
}

fn zigzag(random: &mut dyn RandomSource, config: &StormConfig) -> Vec<Point> {
    let mut cursor = Point::ZERO;
    let mut points = Vec::with_capacity(config.segments as usize + 1);
    points.push(cursor);
    for _ in 0..config.segments {
        cursor = cursor
            + Point::new(
                random.uniform(-config.jitter, config.jitter),
                config.step.draw(random),
            );
        points.push(cursor);
    }
    points
}
