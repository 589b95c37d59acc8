use crate::fx::{
    animation::{Animation, Timing, Track},
    geometry::Point,
    node::{Node, Role, Shape},
    random::RandomSource,
    recipe::PrecipitationConfig,
    surface::Stage,
};

pub(super) fn rain(stage: &mut Stage, random: &mut dyn RandomSource, config: &PrecipitationConfig) {
    fall(stage, random, config, Role::Raindrop, |size| Shape::Segment {
        from: Point::ZERO,
        to: Point::new(0.0, size),
    });
}

pub(super) fn snow(stage: &mut Stage, random: &mut dyn RandomSource, config: &PrecipitationConfig) {
    fall(stage, random, config, Role::Snowflake, |size| Shape::Asterisk {
        radius: size / 2.0,
        spokes: 3,
    });
}

pub(super) fn hail(stage: &mut Stage, random: &mut dyn RandomSource, config: &PrecipitationConfig) {
    fall(stage, random, config, Role::Hailstone, |size| Shape::Disc {
        radius: size / 2.0,
    });
}

/// Each instance starts just above the top edge and loops top to bottom forever, so the
/// live particle count stays at whatever was drawn here.
fn fall(
    stage: &mut Stage,
    random: &mut dyn RandomSource,
    config: &PrecipitationConfig,
    role: Role,
    shape: impl Fn(f32) -> Shape,
) {
    let bounds = stage.bounds();
    let count = config.count.draw(random);
    for _ in 0..count {
        let size = config.size.draw(random);
        let origin = Point::new(random.below(bounds.width), -size);
        let fall = config.fall.draw(random);
        let delay = config.delay.draw(random);

        let mut node = Node::new(role, shape(size), origin, config.tint)
            .sized(size)
            .animated(Animation::new(
                Track::Translate(Point::new(0.0, bounds.height + size)),
                Timing::looping(fall).delayed(delay),
            ));
        if let Some(sway) = config.sway {
            let amplitude = sway.amplitude.draw(random);
            let period = sway.period.draw(random);
            node = node.animated(Animation::new(
                Track::Sway(amplitude),
                Timing::looping(period / 2.0)
                    .autoreversing()
                    .eased()
                    .phased(random.unit()),
            ));
        }
        stage.attach(node);
    }
}
