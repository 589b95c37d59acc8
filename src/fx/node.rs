use serde::{Deserialize, Serialize};

use super::{
    animation::{Animation, Pose, Sample},
    geometry::Point,
};

/// Paint depth, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Sky,
    Celestial,
    Cloud,
    Fog,
    Precipitation,
    Debris,
    Lightning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    SunDisc,
    Ray,
    MoonDisc,
    Star,
    Cloud,
    FogBank,
    Raindrop,
    Snowflake,
    Hailstone,
    Leaf,
    Bolt,
}

impl Role {
    #[must_use]
    pub fn layer(self) -> Layer {
        match self {
            Role::Star => Layer::Sky,
            Role::SunDisc | Role::Ray | Role::MoonDisc => Layer::Celestial,
            Role::Cloud => Layer::Cloud,
            Role::FogBank => Layer::Fog,
            Role::Raindrop | Role::Snowflake | Role::Hailstone => Layer::Precipitation,
            Role::Leaf => Layer::Debris,
            Role::Bolt => Layer::Lightning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tint {
    Sun,
    SunRay,
    Moon,
    Star,
    Rain,
    Snow,
    Hail,
    Fog,
    CloudWhite,
    CloudGray,
    CloudDark,
    Leaf,
    Bolt,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lobe {
    pub center: Point,
    pub radius: f32,
}

/// Geometry in node-local coordinates; the node origin maps to local `(0, 0)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Disc { radius: f32 },
    Segment { from: Point, to: Point },
    /// Stroked, never filled.
    Polyline(Vec<Point>),
    /// Axis-aligned filled band anchored at its top-left corner.
    Band { width: f32, height: f32 },
    Blob(Vec<Lobe>),
    /// `spokes` strokes crossing at the origin.
    Asterisk { radius: f32, spokes: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Lives until the surface is torn down.
    Persistent,
    /// Removed by the surface once every finite animation has completed.
    UntilFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub role: Role,
    pub shape: Shape,
    pub origin: Point,
    pub size: f32,
    pub tint: Tint,
    pub opacity: f32,
    pub animations: Vec<Animation>,
    pub lifetime: Lifetime,
    /// Surface clock reading at attach time.
    pub born: f64,
}

impl Node {
    #[must_use]
    pub fn new(role: Role, shape: Shape, origin: Point, tint: Tint) -> Self {
        Self {
            id: NodeId(0),
            role,
            shape,
            origin,
            size: 0.0,
            tint,
            opacity: 1.0,
            animations: Vec::new(),
            lifetime: Lifetime::Persistent,
            born: 0.0,
        }
    }

    #[must_use]
    pub fn sized(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn animated(mut self, animation: Animation) -> Self {
        self.animations.push(animation);
        self
    }

    #[must_use]
    pub fn until_finished(mut self) -> Self {
        self.lifetime = Lifetime::UntilFinished;
        self
    }

    #[must_use]
    pub fn layer(&self) -> Layer {
        self.role.layer()
    }

    #[must_use]
    pub fn pose(&self, now: f64) -> Pose {
        Pose::sampled(self.opacity, &self.animations, self.age(now))
    }

    /// Seconds since attach. Only this difference is narrowed, so a long-lived clock keeps
    /// frame-sized precision.
    #[must_use]
    pub fn age(&self, now: f64) -> f32 {
        (now - self.born) as f32
    }

    /// Start delay of the first animation; zero for still nodes.
    #[must_use]
    pub fn start_delay(&self) -> f32 {
        self.animations
            .first()
            .map_or(0.0, |animation| animation.timing.delay)
    }

    #[must_use]
    pub fn is_expired(&self, now: f64) -> bool {
        if self.lifetime == Lifetime::Persistent {
            return false;
        }
        let elapsed = self.age(now);
        self.animations
            .iter()
            .filter(|animation| animation.is_finite())
            .all(|animation| animation.timing.sample(elapsed) == Sample::Finished)
    }
}
