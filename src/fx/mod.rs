//! Procedural weather effects: a condition is composed into a recipe of generators, and each
//! generator attaches self-animating nodes to an [`EffectSurface`]. Once attached, nodes are
//! driven purely by the surface clock.

pub mod animation;
pub mod generators;
pub mod geometry;
pub mod node;
pub mod random;
pub mod recipe;
pub mod surface;

pub use geometry::{Bounds, Point};
pub use node::{Layer, Node, Role, Shape, Tint};
pub use random::{RandomSource, StdRandom};
pub use recipe::{EffectRecipe, GeneratorKind, GeneratorSpec, compose, resolve};
pub use surface::EffectSurface;
