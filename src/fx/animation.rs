use std::f32::consts::TAU;

use super::geometry::{Point, point_along};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Forever,
    Times(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    Linear,
    EaseInOut,
}

impl Curve {
    fn apply(self, t: f32) -> f32 {
        match self {
            Curve::Linear => t,
            Curve::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Where an animation is at a given moment of its node's life.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    Pending,
    Running(f32),
    Finished,
}

/// Seconds throughout. `phase` pre-advances the first cycle by a fraction of its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub delay: f32,
    pub duration: f32,
    pub phase: f32,
    pub repeat: Repeat,
    pub autoreverse: bool,
    pub curve: Curve,
}

impl Timing {
    #[must_use]
    pub fn looping(duration: f32) -> Self {
        Self {
            delay: 0.0,
            duration,
            phase: 0.0,
            repeat: Repeat::Forever,
            autoreverse: false,
            curve: Curve::Linear,
        }
    }

    #[must_use]
    pub fn times(self, count: u32) -> Self {
        Self {
            repeat: Repeat::Times(count),
            ..self
        }
    }

    #[must_use]
    pub fn delayed(self, delay: f32) -> Self {
        Self { delay, ..self }
    }

    #[must_use]
    pub fn phased(self, phase: f32) -> Self {
        Self {
            phase: phase.clamp(0.0, 1.0),
            ..self
        }
    }

    #[must_use]
    pub fn autoreversing(self) -> Self {
        Self {
            autoreverse: true,
            ..self
        }
    }

    #[must_use]
    pub fn eased(self) -> Self {
        Self {
            curve: Curve::EaseInOut,
            ..self
        }
    }

    #[must_use]
    pub fn cycle_length(&self) -> f32 {
        if self.autoreverse {
            self.duration * 2.0
        } else {
            self.duration
        }
    }

    /// Seconds from attach until the last cycle ends; `None` for infinite animations.
    #[must_use]
    pub fn active_span(&self) -> Option<f32> {
        match self.repeat {
            Repeat::Forever => None,
            Repeat::Times(count) => {
                let cycles = count as f32 - self.phase;
                Some(self.delay + (cycles * self.cycle_length()).max(0.0))
            }
        }
    }

    #[must_use]
    pub fn sample(&self, elapsed: f32) -> Sample {
        let local = elapsed - self.delay;
        if local < 0.0 {
            return Sample::Pending;
        }
        if let Some(span) = self.active_span()
            && elapsed >= span
        {
            return Sample::Finished;
        }

        let cycle = self.cycle_length();
        if cycle <= 0.0 {
            return Sample::Running(self.curve.apply(1.0));
        }
        let shifted = local + self.phase * cycle;
        let raw = shifted.rem_euclid(cycle) / self.duration;
        let forward = if raw > 1.0 { 2.0 - raw } else { raw };
        Sample::Running(self.curve.apply(forward.clamp(0.0, 1.0)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Track {
    Translate(Point),
    /// Offsets relative to the node origin, walked by arc length.
    Path(Vec<Point>),
    /// Horizontal oscillation between `-amplitude` and `+amplitude`.
    Sway(f32),
    /// Full turns around the node origin.
    Rotate(f32),
    Scale { from: f32, to: f32 },
    Opacity { from: f32, to: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub track: Track,
    pub timing: Timing,
}

impl Animation {
    #[must_use]
    pub fn new(track: Track, timing: Timing) -> Self {
        Self { track, timing }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self.timing.repeat, Repeat::Times(_))
    }

    fn apply(&self, t: f32, pose: &mut Pose) {
        match &self.track {
            Track::Translate(by) => pose.offset = pose.offset + *by * t,
            Track::Path(points) => pose.offset = pose.offset + point_along(points, t),
            Track::Sway(amplitude) => pose.offset.x += amplitude * (2.0 * t - 1.0),
            Track::Rotate(turns) => pose.rotation += TAU * turns * t,
            Track::Scale { from, to } => pose.scale *= from + (to - from) * t,
            Track::Opacity { from, to } => pose.opacity = from + (to - from) * t,
        }
    }
}

/// Presentation state of a node: its model values with every running animation applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub offset: Point,
    pub rotation: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Pose {
    #[must_use]
    pub fn at_rest(opacity: f32) -> Self {
        Self {
            offset: Point::ZERO,
            rotation: 0.0,
            scale: 1.0,
            opacity,
        }
    }

    #[must_use]
    pub fn sampled(base_opacity: f32, animations: &[Animation], elapsed: f32) -> Self {
        let mut pose = Self::at_rest(base_opacity);
        for animation in animations {
            if let Sample::Running(t) = animation.timing.sample(elapsed) {
                animation.apply(t, &mut pose);
            }
        }
        pose.opacity = pose.opacity.clamp(0.0, 1.0);
        pose
    }

    /// Maps a shape-local point onto the surface.
    #[must_use]
    pub fn place(&self, origin: Point, local: Point) -> Point {
        origin + self.offset + (local * self.scale).rotated(self.rotation)
    }
}

#[cfg(test)]
mod tests;
