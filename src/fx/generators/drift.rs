use crate::fx::{
    animation::{Animation, Timing, Track},
    geometry::Point,
    node::{Lobe, Node, Role, Shape, Tint},
    random::RandomSource,
    recipe::{CloudConfig, CloudPalette, FogConfig},
    surface::Stage,
};

/// Translucent bands crossing left to right. A random phase spreads them over the surface at
/// presentation instead of queueing them all at the left edge.
pub(super) fn fog(stage: &mut Stage, random: &mut dyn RandomSource, config: &FogConfig) {
    let bounds = stage.bounds();
    let layers = config.layers.draw(random);
    for _ in 0..layers {
        let thickness = config.thickness.draw(random) * bounds.height;
        let width = bounds.width * random.uniform(0.6, 1.0);
        let top = random.below(bounds.height - thickness);
        let drift = config.drift.draw(random);
        let opacity = config.opacity.draw(random);

        let node = Node::new(
            Role::FogBank,
            Shape::Band {
                width,
                height: thickness,
            },
            Point::new(-width, top),
            Tint::Fog,
        )
        .sized(thickness)
        .with_opacity(opacity)
        .animated(Animation::new(
            Track::Translate(Point::new(bounds.width + width, 0.0)),
            Timing::looping(drift).phased(random.unit()),
        ));
        stage.attach(node);
    }
}

pub(super) fn clouds(stage: &mut Stage, random: &mut dyn RandomSource, config: &CloudConfig) {
    let bounds = stage.bounds();
    let count = config.count.draw(random);
    for _ in 0..count {
        let tint = random
            .pick(config.palette.tints())
            .copied()
            .unwrap_or(Tint::CloudWhite);
        let width = config.width.draw(random) * bounds.width;
        let centre_y = config.band.draw(random) * bounds.height;
        let drift = config.drift.draw(random);
        let opacity = match config.palette {
            CloudPalette::Dark => 0.95,
            CloudPalette::White | CloudPalette::WhiteGray => random.uniform(0.8, 0.95),
        };

        let node = Node::new(
            Role::Cloud,
            Shape::Blob(cloud_lobes(random, width)),
            Point::new(-width, centre_y),
            tint,
        )
        .sized(width)
        .with_opacity(opacity)
        .animated(Animation::new(
            Track::Translate(Point::new(bounds.width + width, 0.0)),
            Timing::looping(drift).phased(random.unit()),
        ));
        stage.attach(node);
    }
}

// Overlapping discs spread along [0, width], tallest in the middle.
fn cloud_lobes(random: &mut dyn RandomSource, width: f32) -> Vec<Lobe> {
    let lobes = random.uniform_int(3, 5) as usize;
    let pitch = width / lobes as f32;
    (0..lobes)
        .map(|idx| {
            let centre_x = pitch * (idx as f32 + 0.5);
            let middle = 1.0 - ((idx as f32 + 0.5) / lobes as f32 - 0.5).abs();
            let radius = pitch * random.uniform(0.6, 0.8) * (0.7 + middle * 0.6);
            Lobe {
                center: Point::new(centre_x, -radius * 0.3 * middle),
                radius,
            }
        })
        .collect()
}
