use std::f32::consts::{PI, TAU};

use crate::fx::{
    animation::{Animation, Timing, Track},
    geometry::{Bounds, Point},
    node::{Node, Role, Shape, Tint},
    random::RandomSource,
    recipe::WindConfig,
    surface::{SpawnJob, Stage},
};

const SPIRAL_SAMPLES_PER_TURN: u32 = 16;

/// Leaves launch one after another rather than all at once.
pub(super) fn schedule(stage: &mut Stage, config: &WindConfig) {
    for idx in 0..config.leaves {
        stage.defer(idx as f32 * config.stagger, SpawnJob::WindLeaf(*config));
    }
}

/// Runs from a deferred spawn: attaches one leaf that rides its gust path `cycles` times and
/// then expires, and re-arms a replacement for when it is gone.
pub(super) fn launch_leaf(stage: &mut Stage, random: &mut dyn RandomSource, config: &WindConfig) {
    let bounds = stage.bounds();
    let size = config.size.draw(random);
    let traverse = config.traverse.draw(random);
    let lane = random.uniform(0.2, 0.8) * bounds.height;
    let margin = size * 2.0;

    let leaf = Node::new(
        Role::Leaf,
        Shape::Segment {
            from: Point::new(-size / 2.0, 0.0),
            to: Point::new(size / 2.0, 0.0),
        },
        Point::new(-margin, lane),
        Tint::Leaf,
    )
    .sized(size)
    .animated(Animation::new(
        Track::Path(gust_path(random, bounds, margin, config.turns)),
        Timing::looping(traverse).times(config.cycles),
    ))
    .animated(Animation::new(
        Track::Rotate(config.turns * 2.0),
        Timing::looping(traverse).times(config.cycles),
    ))
    .until_finished();
    stage.attach(leaf);

    let lifetime = traverse * config.cycles as f32;
    stage.defer(
        lifetime + random.uniform(0.0, config.stagger),
        SpawnJob::WindLeaf(*config),
    );
}

/// Straight run to a third of the width, a shrinking spiral, then out past the right edge.
/// Offsets are relative to the leaf's starting point.
fn gust_path(random: &mut dyn RandomSource, bounds: Bounds, margin: f32, turns: f32) -> Vec<Point> {
    let radius = bounds.height * random.uniform(0.06, 0.1);
    let entry = Point::new(bounds.width / 3.0 + margin, 0.0);
    let centre = entry + Point::new(radius, 0.0);

    let mut points = vec![Point::ZERO, entry];
    let samples = (turns * SPIRAL_SAMPLES_PER_TURN as f32).ceil().max(1.0) as u32;
    for step in 1..=samples {
        let t = step as f32 / samples as f32;
        let angle = PI + t * turns * TAU;
        let shrink = 1.0 - 0.7 * t;
        points.push(centre + Point::polar(radius * shrink, angle));
    }

    let rise = bounds.height * random.uniform(-0.15, 0.15);
    points.push(Point::new(bounds.width + margin * 2.0, rise));
    points
}
