use std::time::Duration;

use tracing::{debug, trace};

use super::{
    generators,
    geometry::Bounds,
    node::{Node, NodeId, Role},
    random::{RandomSource, StdRandom},
    recipe::{self, EffectRecipe, WindConfig},
};
use crate::domain::weather::{DayPhase, WeatherCondition};

/// Bumped on every teardown; deferred spawns from an older generation are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnJob {
    WindLeaf(WindConfig),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DeferredSpawn {
    generation: Generation,
    due: f64,
    job: SpawnJob,
}

/// Node store and clock behind an [`EffectSurface`]. Generators only ever see this half.
#[derive(Debug, Clone)]
pub struct Stage {
    bounds: Bounds,
    clock: f64,
    generation: Generation,
    nodes: Vec<Node>,
    deferred: Vec<DeferredSpawn>,
    next_id: u64,
}

impl Stage {
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            clock: 0.0,
            generation: Generation::default(),
            nodes: Vec::new(),
            deferred: Vec::new(),
            next_id: 1,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn count_role(&self, role: Role) -> usize {
        self.nodes.iter().filter(|node| node.role == role).count()
    }

    /// Back-to-front: layer first, then attach order within a layer.
    #[must_use]
    pub fn paint_order(&self) -> Vec<&Node> {
        let mut ordered = self.nodes.iter().collect::<Vec<_>>();
        ordered.sort_by_key(|node| (node.layer(), node.id));
        ordered
    }

    /// Deferred spawns still bound to the live generation.
    #[must_use]
    pub fn pending_spawns(&self) -> usize {
        self.deferred
            .iter()
            .filter(|spawn| spawn.generation == self.generation)
            .count()
    }

    pub fn attach(&mut self, mut node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        node.id = id;
        node.born = self.clock;
        self.nodes.push(node);
        id
    }

    pub fn defer(&mut self, delay: f32, job: SpawnJob) {
        debug_assert!(delay >= 0.0, "negative spawn delay {delay}");
        self.deferred.push(DeferredSpawn {
            generation: self.generation,
            due: self.clock + f64::from(delay.max(0.0)),
            job,
        });
    }

    /// Drops every node in one pass and invalidates outstanding deferred spawns.
    pub fn clear(&mut self) -> usize {
        let removed = self.nodes.len();
        self.nodes.clear();
        self.generation = self.generation.next();
        removed
    }

    fn resize(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn advance(&mut self, seconds: f64) {
        self.clock += seconds.max(0.0);
    }

    fn take_due(&mut self) -> Vec<SpawnJob> {
        let clock = self.clock;
        let generation = self.generation;
        let mut due = Vec::new();
        self.deferred.retain(|spawn| {
            if spawn.generation != generation {
                if spawn.due <= clock {
                    trace!(
                        stale = spawn.generation.0,
                        live = generation.0,
                        "dropping deferred spawn from torn-down surface"
                    );
                    return false;
                }
                return true;
            }
            if spawn.due <= clock {
                due.push(*spawn);
                return false;
            }
            true
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due));
        due.into_iter().map(|spawn| spawn.job).collect()
    }

    fn reap(&mut self) -> usize {
        let clock = self.clock;
        let before = self.nodes.len();
        self.nodes.retain(|node| !node.is_expired(clock));
        before - self.nodes.len()
    }
}

/// Bounded drawing area hosting the live nodes of at most one recipe.
#[derive(Debug)]
pub struct EffectSurface {
    stage: Stage,
    random: Box<dyn RandomSource>,
    active: Option<EffectRecipe>,
}

impl EffectSurface {
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self::with_random(bounds, Box::new(StdRandom::entropy()))
    }

    #[must_use]
    pub fn with_random(bounds: Bounds, random: Box<dyn RandomSource>) -> Self {
        Self {
            stage: Stage::new(bounds),
            random,
            active: None,
        }
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.stage.bounds
    }

    #[must_use]
    pub fn active_recipe(&self) -> Option<&EffectRecipe> {
        self.active.as_ref()
    }

    pub fn present(&mut self, condition: WeatherCondition, phase: DayPhase) {
        self.present_recipe(recipe::compose(condition, phase));
    }

    /// Tears down whatever is live, then runs each generator of `recipe` against the empty surface.
    pub fn present_recipe(&mut self, recipe: EffectRecipe) {
        let removed = self.stage.clear();
        for step in recipe.steps() {
            generators::spawn(&mut self.stage, self.random.as_mut(), step);
        }
        debug!(
            condition = ?recipe.condition,
            phase = %recipe.phase,
            removed,
            attached = self.stage.nodes.len(),
            deferred = self.stage.pending_spawns(),
            "presented effect recipe"
        );
        self.active = Some(recipe);
    }

    pub fn clear(&mut self) {
        let removed = self.stage.clear();
        self.active = None;
        debug!(removed, "cleared effect surface");
    }

    /// New bounds invalidate every placed node, so the active recipe is rebuilt. Returns whether
    /// anything was re-presented.
    pub fn resize(&mut self, bounds: Bounds) -> bool {
        if bounds == self.stage.bounds {
            return false;
        }
        self.stage.resize(bounds);
        match self.active.take() {
            Some(recipe) => {
                self.present_recipe(recipe);
                true
            }
            None => false,
        }
    }

    /// Plays the live recipe forward by `span` in `step`-sized ticks, so delayed particles are
    /// already in the sky and deferred spawns have fired.
    pub fn settle(&mut self, span: Duration, step: Duration) {
        if step.is_zero() {
            return;
        }
        let mut remaining = span;
        while !remaining.is_zero() {
            let dt = remaining.min(step);
            self.tick(dt);
            remaining -= dt;
        }
        debug!(
            span = span.as_secs_f32(),
            nodes = self.stage.nodes.len(),
            "settled effect surface"
        );
    }

    /// Advances the clock, fires due deferred spawns, and removes nodes whose run has ended.
    pub fn tick(&mut self, dt: Duration) {
        self.stage.advance(dt.as_secs_f64());
        for job in self.stage.take_due() {
            generators::run_deferred(&mut self.stage, self.random.as_mut(), job);
        }
        let reaped = self.stage.reap();
        if reaped > 0 {
            trace!(reaped, "removed finished nodes");
        }
    }
}

#[cfg(test)]
mod tests;
