use ratatui::style::Color;

use crate::{
    domain::weather::{DayPhase, WeatherCondition},
    fx::Tint,
};

pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

pub fn detect_color_capability() -> ColorCapability {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Basic16;
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        ColorCapability::Xterm256
    } else {
        ColorCapability::Basic16
    }
}

const TINT_COLORS: &[(Tint, Rgb)] = &[
    (Tint::Sun, (255, 165, 0)),
    (Tint::SunRay, (255, 230, 60)),
    (Tint::Moon, (236, 236, 214)),
    (Tint::Star, (255, 255, 240)),
    (Tint::Rain, (70, 120, 255)),
    (Tint::Snow, (245, 248, 255)),
    (Tint::Hail, (200, 222, 240)),
    (Tint::Fog, (235, 235, 235)),
    (Tint::CloudWhite, (250, 250, 252)),
    (Tint::CloudGray, (168, 172, 180)),
    (Tint::CloudDark, (88, 92, 104)),
    (Tint::Leaf, (118, 168, 64)),
    (Tint::Bolt, (255, 255, 255)),
];

#[must_use]
pub fn tint_rgb(tint: Tint) -> Rgb {
    TINT_COLORS
        .iter()
        .find_map(|(candidate, rgb)| (*candidate == tint).then_some(*rgb))
        .unwrap_or((255, 255, 255))
}

const DAY_SKIES: &[(WeatherCondition, Rgb)] = &[
    (WeatherCondition::Clear, (78, 150, 220)),
    (WeatherCondition::PartlyCloudy, (96, 156, 214)),
    (WeatherCondition::Cloudy, (120, 140, 166)),
    (WeatherCondition::Overcast, (112, 118, 128)),
    (WeatherCondition::Fog, (150, 156, 162)),
    (WeatherCondition::Wind, (110, 160, 200)),
    (WeatherCondition::LightRain, (98, 128, 160)),
    (WeatherCondition::Rain, (76, 98, 124)),
    (WeatherCondition::HeavyRain, (56, 70, 90)),
    (WeatherCondition::RainAndSnow, (104, 120, 140)),
    (WeatherCondition::Snow, (150, 170, 190)),
    (WeatherCondition::Blizzard, (170, 182, 196)),
    (WeatherCondition::Hail, (84, 96, 110)),
    (WeatherCondition::Storm, (44, 48, 64)),
    (WeatherCondition::StormAndRain, (36, 40, 56)),
];

const NIGHT_SKY: Rgb = (8, 12, 32);

/// Backdrop behind the effect surface. Night skies keep a trace of the daytime hue.
#[must_use]
pub fn sky_rgb(condition: WeatherCondition, phase: DayPhase) -> Rgb {
    let day = DAY_SKIES
        .iter()
        .find_map(|(candidate, rgb)| (*candidate == condition).then_some(*rgb))
        .unwrap_or((78, 150, 220));
    match phase {
        DayPhase::Day => day,
        DayPhase::Night => mix_rgb(day, NIGHT_SKY, 0.82),
    }
}

/// Composites `fg` at `opacity` over `bg`.
#[must_use]
pub fn blend(fg: Rgb, bg: Rgb, opacity: f32) -> Rgb {
    mix_rgb(bg, fg, opacity)
}

fn mix_rgb(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let lerp = |x: u8, y: u8| -> u8 {
        (f32::from(x) + (f32::from(y) - f32::from(x)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    (lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Resolves tints against one sky for one terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub sky: Rgb,
    pub capability: ColorCapability,
}

impl Palette {
    #[must_use]
    pub fn new(condition: WeatherCondition, phase: DayPhase, capability: ColorCapability) -> Self {
        Self {
            sky: sky_rgb(condition, phase),
            capability,
        }
    }

    #[must_use]
    pub fn sky_color(&self) -> Color {
        quantize(rgb(self.sky), self.capability)
    }

    #[must_use]
    pub fn tint_color(&self, tint: Tint, opacity: f32) -> Color {
        quantize(rgb(blend(tint_rgb(tint), self.sky, opacity)), self.capability)
    }
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::TrueColor, c) => c,
        (ColorCapability::Xterm256, Color::Rgb(r, g, b)) => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            Color::Indexed(16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b))
        }
        (ColorCapability::Basic16, Color::Rgb(r, g, b)) => basic16_from_rgb(r, g, b),
        (_, c) => c,
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let rf = f32::from(r) / 255.0;
    let gf = f32::from(g) / 255.0;
    let bf = f32::from(b) / 255.0;

    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let delta = max - min;
    let light = (max + min) / 2.0;

    if delta < 0.08 {
        return match light {
            l if l < 0.20 => Color::Black,
            l if l < 0.40 => Color::DarkGray,
            l if l < 0.72 => Color::Gray,
            _ => Color::White,
        };
    }

    let hue = if (max - rf).abs() < f32::EPSILON {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };

    let bright = light >= 0.55;
    let (dim, lit) = match hue {
        h if !(30.0..330.0).contains(&h) => (Color::Red, Color::LightRed),
        h if h < 90.0 => (Color::Yellow, Color::LightYellow),
        h if h < 150.0 => (Color::Green, Color::LightGreen),
        h if h < 210.0 => (Color::Cyan, Color::LightCyan),
        h if h < 270.0 => (Color::Blue, Color::LightBlue),
        _ => (Color::Magenta, Color::LightMagenta),
    };
    if bright { lit } else { dim }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tint_has_a_color() {
        for (tint, rgb) in TINT_COLORS {
            assert_eq!(tint_rgb(*tint), *rgb);
        }
        assert_eq!(TINT_COLORS.len(), 13);
    }

    #[test]
    fn every_condition_has_a_distinct_night_sky() {
        for condition in WeatherCondition::ALL {
            let day = sky_rgb(condition, DayPhase::Day);
            let night = sky_rgb(condition, DayPhase::Night);
            assert_ne!(day, night, "{condition}");
            let luma = |(r, g, b): Rgb| u32::from(r) + u32::from(g) + u32::from(b);
            assert!(luma(night) < luma(day));
        }
    }

    #[test]
    fn blend_endpoints() {
        let fg = (200, 100, 50);
        let bg = (0, 0, 0);
        assert_eq!(blend(fg, bg, 1.0), fg);
        assert_eq!(blend(fg, bg, 0.0), bg);
        assert_eq!(blend(fg, bg, 0.5), (100, 50, 25));
        assert_eq!(blend(fg, bg, 7.0), fg);
    }

    #[test]
    fn faint_tints_fade_into_the_sky() {
        let palette = Palette::new(
            WeatherCondition::Clear,
            DayPhase::Night,
            ColorCapability::TrueColor,
        );
        assert_eq!(palette.tint_color(Tint::Star, 0.0), palette.sky_color());
        assert_eq!(palette.tint_color(Tint::Bolt, 1.0), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn quantize_maps_to_terminal_capability() {
        assert_eq!(
            quantize(Color::Rgb(255, 0, 0), ColorCapability::Xterm256),
            Color::Indexed(196)
        );
        assert_eq!(
            quantize(Color::Rgb(255, 255, 255), ColorCapability::Basic16),
            Color::White
        );
        assert_eq!(
            quantize(Color::Rgb(70, 120, 255), ColorCapability::Basic16),
            Color::LightBlue
        );
        assert_eq!(
            quantize(Color::Yellow, ColorCapability::Basic16),
            Color::Yellow
        );
    }
}
