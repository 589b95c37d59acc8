use std::fmt;

use super::{node::Tint, random::RandomSource};
use crate::domain::weather::{DayPhase, WeatherCondition};

/// Inclusive float range drawn per instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn draw(self, random: &mut dyn RandomSource) -> f32 {
        random.uniform(self.min, self.max)
    }
}

/// Inclusive instance count, resolved once per spawn call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count {
    pub min: u32,
    pub max: u32,
}

impl Count {
    #[must_use]
    pub const fn exactly(count: u32) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    #[must_use]
    pub const fn between(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn draw(self, random: &mut dyn RandomSource) -> u32 {
        random.count(self.min, self.max)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunConfig {
    pub radius: f32,
    pub rays: u32,
    pub ray_offset: f32,
    pub ray_length: f32,
    /// Seconds per full turn of the ray group.
    pub rotation_period: f32,
    pub pulse_scale: f32,
    pub pulse_period: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonConfig {
    pub radius: f32,
    pub stars: u32,
    pub star_radius: Span,
    pub blink: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwayConfig {
    pub amplitude: Span,
    pub period: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecipitationConfig {
    pub count: Count,
    pub size: Span,
    pub fall: Span,
    pub delay: Span,
    pub sway: Option<SwayConfig>,
    pub tint: Tint,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FogConfig {
    pub layers: Count,
    /// Bank height as a fraction of surface height.
    pub thickness: Span,
    pub drift: Span,
    pub opacity: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudPalette {
    WhiteGray,
    White,
    Dark,
}

impl CloudPalette {
    #[must_use]
    pub fn tints(self) -> &'static [Tint] {
        match self {
            CloudPalette::WhiteGray => &[Tint::CloudWhite, Tint::CloudGray],
            CloudPalette::White => &[Tint::CloudWhite],
            CloudPalette::Dark => &[Tint::CloudDark],
        }
    }

    fn label(self) -> &'static str {
        match self {
            CloudPalette::WhiteGray => "white+gray",
            CloudPalette::White => "white",
            CloudPalette::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudConfig {
    pub count: Count,
    pub palette: CloudPalette,
    /// Cloud width as a fraction of surface width.
    pub width: Span,
    pub drift: Span,
    /// Vertical band for cloud centres, as fractions of surface height.
    pub band: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindConfig {
    pub leaves: u32,
    /// Seconds between consecutive leaf launches.
    pub stagger: f32,
    pub traverse: Span,
    pub cycles: u32,
    pub turns: f32,
    pub size: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StormConfig {
    pub bolts: u32,
    pub segments: u32,
    pub jitter: f32,
    pub step: Span,
    pub flash: f32,
    pub offset: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    Sun,
    Moon,
    Cloud,
    Fog,
    Rain,
    Snow,
    Hail,
    Wind,
    Storm,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GeneratorKind::Sun => "sun",
            GeneratorKind::Moon => "moon",
            GeneratorKind::Cloud => "cloud",
            GeneratorKind::Fog => "fog",
            GeneratorKind::Rain => "rain",
            GeneratorKind::Snow => "snow",
            GeneratorKind::Hail => "hail",
            GeneratorKind::Wind => "wind",
            GeneratorKind::Storm => "storm",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorSpec {
    Sun(SunConfig),
    Moon(MoonConfig),
    Cloud(CloudConfig),
    Fog(FogConfig),
    Rain(PrecipitationConfig),
    Snow(PrecipitationConfig),
    Hail(PrecipitationConfig),
    Wind(WindConfig),
    Storm(StormConfig),
}

impl GeneratorSpec {
    #[must_use]
    pub fn kind(&self) -> GeneratorKind {
        match self {
            GeneratorSpec::Sun(_) => GeneratorKind::Sun,
            GeneratorSpec::Moon(_) => GeneratorKind::Moon,
            GeneratorSpec::Cloud(_) => GeneratorKind::Cloud,
            GeneratorSpec::Fog(_) => GeneratorKind::Fog,
            GeneratorSpec::Rain(_) => GeneratorKind::Rain,
            GeneratorSpec::Snow(_) => GeneratorKind::Snow,
            GeneratorSpec::Hail(_) => GeneratorKind::Hail,
            GeneratorSpec::Wind(_) => GeneratorKind::Wind,
            GeneratorSpec::Storm(_) => GeneratorKind::Storm,
        }
    }

    /// Primary element count: particles, layers, bolts, leaves, or rays/stars for celestials.
    #[must_use]
    pub fn count(&self) -> Count {
        match self {
            GeneratorSpec::Sun(sun) => Count::exactly(sun.rays),
            GeneratorSpec::Moon(moon) => Count::exactly(moon.stars),
            GeneratorSpec::Cloud(cloud) => cloud.count,
            GeneratorSpec::Fog(fog) => fog.layers,
            GeneratorSpec::Rain(p) | GeneratorSpec::Snow(p) | GeneratorSpec::Hail(p) => p.count,
            GeneratorSpec::Wind(wind) => Count::exactly(wind.leaves),
            GeneratorSpec::Storm(storm) => Count::exactly(storm.bolts),
        }
    }
}

impl fmt::Display for GeneratorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorSpec::Sun(sun) => write!(f, "sun rays={}", sun.rays),
            GeneratorSpec::Moon(moon) => write!(f, "moon stars={}", moon.stars),
            GeneratorSpec::Cloud(cloud) => {
                write!(f, "cloud {} {}", cloud.count, cloud.palette.label())
            }
            GeneratorSpec::Storm(storm) => write!(f, "storm bolts={}", storm.bolts),
            GeneratorSpec::Wind(wind) => write!(f, "wind leaves={}", wind.leaves),
            other => write!(f, "{} {}", other.kind(), other.count()),
        }
    }
}

pub const SUN: SunConfig = SunConfig {
    radius: 50.0,
    rays: 12,
    ray_offset: 58.0,
    ray_length: 30.0,
    rotation_period: 5.0,
    pulse_scale: 1.1,
    pulse_period: 2.0,
};

pub const MOON: MoonConfig = MoonConfig {
    radius: 40.0,
    stars: 20,
    star_radius: Span::new(1.0, 2.5),
    blink: Span::new(0.6, 2.0),
};

pub const RAIN: PrecipitationConfig = PrecipitationConfig {
    count: Count::exactly(50),
    size: Span::new(5.0, 10.0),
    fall: Span::new(0.8, 1.4),
    delay: Span::new(0.0, 1.0),
    sway: None,
    tint: Tint::Rain,
};

pub const SNOW: PrecipitationConfig = PrecipitationConfig {
    count: Count::exactly(50),
    size: Span::new(15.0, 25.0),
    fall: Span::new(4.0, 8.0),
    delay: Span::new(0.0, 4.0),
    sway: Some(SwayConfig {
        amplitude: Span::new(8.0, 16.0),
        period: Span::new(1.5, 3.0),
    }),
    tint: Tint::Snow,
};

pub const HAIL: PrecipitationConfig = PrecipitationConfig {
    count: Count::between(20, 50),
    size: Span::new(5.0, 10.0),
    fall: Span::new(0.6, 1.2),
    delay: Span::new(0.0, 1.5),
    sway: Some(SwayConfig {
        amplitude: Span::new(2.0, 4.0),
        period: Span::new(0.3, 0.6),
    }),
    tint: Tint::Hail,
};

pub const FOG: FogConfig = FogConfig {
    layers: Count::between(7, 9),
    thickness: Span::new(0.15, 0.35),
    drift: Span::new(14.0, 28.0),
    opacity: Span::new(0.18, 0.4),
};

pub const CLOUD: CloudConfig = CloudConfig {
    count: Count::between(7, 10),
    palette: CloudPalette::WhiteGray,
    width: Span::new(0.25, 0.45),
    drift: Span::new(25.0, 50.0),
    band: Span::new(0.0, 0.35),
};

pub const WIND: WindConfig = WindConfig {
    leaves: 6,
    stagger: 0.35,
    traverse: Span::new(2.5, 4.5),
    cycles: 1,
    turns: 2.0,
    size: Span::new(3.0, 6.0),
};

pub const STORM: StormConfig = StormConfig {
    bolts: 3,
    segments: 5,
    jitter: 20.0,
    step: Span::new(20.0, 80.0),
    flash: 0.2,
    offset: Span::new(0.0, 3.0),
};

/// Ordered generator invocations for one `(condition, phase)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectRecipe {
    pub condition: Option<WeatherCondition>,
    pub phase: DayPhase,
    steps: Vec<GeneratorSpec>,
}

impl EffectRecipe {
    fn empty(condition: Option<WeatherCondition>, phase: DayPhase) -> Self {
        Self {
            condition,
            phase,
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub fn steps(&self) -> &[GeneratorSpec] {
        &self.steps
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<GeneratorKind> {
        self.steps.iter().map(GeneratorSpec::kind).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn describe(&self) -> String {
        self.steps
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" + ")
    }

    fn push(&mut self, spec: GeneratorSpec) -> &mut Self {
        self.steps.push(spec);
        self
    }

    fn celestial(&mut self) -> &mut Self {
        match self.phase {
            DayPhase::Day => self.push(GeneratorSpec::Sun(SUN)),
            DayPhase::Night => self.push(GeneratorSpec::Moon(MOON)),
        }
    }

    fn rain(&mut self, count: u32) -> &mut Self {
        self.push(GeneratorSpec::Rain(PrecipitationConfig {
            count: Count::exactly(count),
            ..RAIN
        }))
    }

    fn clouds(&mut self, count: Count, palette: CloudPalette) -> &mut Self {
        self.push(GeneratorSpec::Cloud(CloudConfig {
            count,
            palette,
            ..CLOUD
        }))
    }
}

type RecipeBuilder = fn(&mut EffectRecipe);

const RECIPE_TABLE: &[(WeatherCondition, RecipeBuilder)] = &[
    (WeatherCondition::Clear, |r| {
        r.celestial();
    }),
    (WeatherCondition::Rain, |r| {
        r.rain(50);
    }),
    (WeatherCondition::Storm, |r| {
        r.push(GeneratorSpec::Storm(STORM));
    }),
    (WeatherCondition::StormAndRain, |r| {
        r.push(GeneratorSpec::Storm(STORM)).rain(50);
    }),
    (WeatherCondition::Fog, |r| {
        r.push(GeneratorSpec::Fog(FOG));
    }),
    (WeatherCondition::Cloudy, |r| {
        r.clouds(Count::between(7, 10), CloudPalette::WhiteGray);
    }),
    (WeatherCondition::Snow, |r| {
        r.push(GeneratorSpec::Snow(SNOW));
    }),
    (WeatherCondition::Wind, |r| {
        r.push(GeneratorSpec::Wind(WIND));
    }),
    (WeatherCondition::Overcast, |r| {
        r.celestial()
            .clouds(Count::exactly(7), CloudPalette::WhiteGray);
    }),
    (WeatherCondition::Blizzard, |r| {
        r.push(GeneratorSpec::Snow(BLIZZARD_SNOW))
            .push(GeneratorSpec::Wind(WIND));
    }),
    (WeatherCondition::RainAndSnow, |r| {
        r.rain(50).push(GeneratorSpec::Snow(SNOW));
    }),
    (WeatherCondition::PartlyCloudy, partly_cloudy),
    (WeatherCondition::LightRain, |r| {
        partly_cloudy(r);
        r.rain(20);
    }),
    (WeatherCondition::HeavyRain, |r| {
        r.push(GeneratorSpec::Rain(HEAVY_RAIN));
    }),
    (WeatherCondition::Hail, |r| {
        r.clouds(Count::exactly(3), CloudPalette::Dark)
            .push(GeneratorSpec::Hail(HAIL));
    }),
];

const BLIZZARD_SNOW: PrecipitationConfig = PrecipitationConfig {
    count: Count::exactly(150),
    fall: Span::new(1.5, 3.0),
    delay: Span::new(0.0, 2.0),
    sway: Some(SwayConfig {
        amplitude: Span::new(12.0, 24.0),
        period: Span::new(0.8, 1.6),
    }),
    ..SNOW
};

const HEAVY_RAIN: PrecipitationConfig = PrecipitationConfig {
    count: Count::exactly(450),
    fall: Span::new(0.5, 0.9),
    ..RAIN
};

fn partly_cloudy(recipe: &mut EffectRecipe) {
    recipe
        .celestial()
        .clouds(Count::exactly(5), CloudPalette::White);
}

/// Recipe for a condition. Pure: equal inputs give structurally equal recipes.
#[must_use]
pub fn compose(condition: WeatherCondition, phase: DayPhase) -> EffectRecipe {
    resolve(Some(condition), phase)
}

/// Like [`compose`], but an absent or unmapped condition falls back to the sun or moon.
#[must_use]
pub fn resolve(condition: Option<WeatherCondition>, phase: DayPhase) -> EffectRecipe {
    let mut recipe = EffectRecipe::empty(condition, phase);
    let builder = condition.and_then(|wanted| {
        RECIPE_TABLE
            .iter()
            .find_map(|(candidate, builder)| (*candidate == wanted).then_some(*builder))
    });
    match builder {
        Some(build) => build(&mut recipe),
        None => {
            recipe.celestial();
        }
    }
    recipe
}

#[must_use]
pub fn resolve_named(name: &str, phase: DayPhase) -> EffectRecipe {
    resolve(name.parse().ok(), phase)
}
