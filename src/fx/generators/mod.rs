//! One module per effect family. Every generator reads the stage bounds, draws its per-instance
//! parameters from the random source, and attaches nodes; none of them can fail.

mod celestial;
mod drift;
mod precipitation;
mod storm;
mod wind;

use super::{
    random::RandomSource,
    recipe::GeneratorSpec,
    surface::{SpawnJob, Stage},
};

pub fn spawn(stage: &mut Stage, random: &mut dyn RandomSource, spec: &GeneratorSpec) {
    match spec {
        GeneratorSpec::Sun(config) => celestial::sun(stage, random, config),
        GeneratorSpec::Moon(config) => celestial::moon(stage, random, config),
        GeneratorSpec::Cloud(config) => drift::clouds(stage, random, config),
        GeneratorSpec::Fog(config) => drift::fog(stage, random, config),
        GeneratorSpec::Rain(config) => precipitation::rain(stage, random, config),
        GeneratorSpec::Snow(config) => precipitation::snow(stage, random, config),
        GeneratorSpec::Hail(config) => precipitation::hail(stage, random, config),
        GeneratorSpec::Wind(config) => wind::schedule(stage, config),
        GeneratorSpec::Storm(config) => storm::bolts(stage, random, config),
    }
}

pub fn run_deferred(stage: &mut Stage, random: &mut dyn RandomSource, job: SpawnJob) {
    match job {
        SpawnJob::WindLeaf(config) => wind::launch_leaf(stage, random, &config),
    }
}
