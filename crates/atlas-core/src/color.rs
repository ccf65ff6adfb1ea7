// File: crates/atlas-core/src/color.rs
// Summary: CSS-style color parsing, RGB interpolation, sequential and pastel palettes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skia_safe as skia;

use crate::error::{AtlasError, Result};

const NAMED: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("brown", (165, 42, 42)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("lightgray", (211, 211, 211)),
    ("lightgrey", (211, 211, 211)),
    ("darkgray", (169, 169, 169)),
    ("darkgrey", (169, 169, 169)),
    ("darkcyan", (0, 139, 139)),
    ("cyan", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("navy", (0, 0, 128)),
    ("teal", (0, 128, 128)),
    ("maroon", (128, 0, 0)),
    ("olive", (128, 128, 0)),
    ("steelblue", (70, 130, 180)),
    ("darkgreen", (0, 100, 0)),
    ("darkred", (139, 0, 0)),
    ("crimson", (220, 20, 60)),
    ("gold", (255, 215, 0)),
    ("pink", (255, 192, 203)),
];

/// Parse a CSS color: a name, `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
pub fn parse_color(s: &str) -> Result<skia::Color> {
    let raw = s.trim();
    let lower = raw.to_ascii_lowercase();
    let unknown = || AtlasError::UnknownColor(raw.to_string());

    if lower == "transparent" {
        return Ok(skia::Color::TRANSPARENT);
    }
    if let Some(&(_, (r, g, b))) = NAMED.iter().find(|(name, _)| *name == lower) {
        return Ok(skia::Color::from_rgb(r, g, b));
    }
    if let Some(hex) = lower.strip_prefix('#') {
        let digits = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => hex.to_string(),
            _ => return Err(unknown()),
        };
        let v = u32::from_str_radix(&digits, 16).map_err(|_| unknown())?;
        return Ok(skia::Color::from_rgb((v >> 16) as u8, (v >> 8) as u8, v as u8));
    }
    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(unknown)?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(unknown());
    }
    let channel = |p: &str| -> Result<u8> {
        p.parse::<f64>().map(|v| v.round().clamp(0.0, 255.0) as u8).map_err(|_| unknown())
    };
    let (r, g, b) = (channel(parts[0])?, channel(parts[1])?, channel(parts[2])?);
    let a = match parts.get(3) {
        Some(p) => {
            let alpha = p.parse::<f64>().map_err(|_| unknown())?;
            (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        None => 255,
    };
    Ok(skia::Color::from_argb(a, r, g, b))
}

/// Channel-wise linear blend; `t` is clamped to `[0, 1]`.
pub fn interpolate_rgb(from: skia::Color, to: skia::Color, t: f64) -> skia::Color {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let mix = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * t).round() as u8 };
    skia::Color::from_argb(
        mix(from.a(), to.a()),
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
    )
}

/// Fill of map regions with no data (CSS `lightgrey`).
pub const NO_DATA: skia::Color = skia::Color::new(0xFFD3D3D3);

/// Sequential white-to-`base` ramp used to shade choropleth regions.
#[derive(Clone, Copy, Debug)]
pub struct SequentialScale {
    pub domain: (f64, f64),
    pub from: skia::Color,
    pub to: skia::Color,
}

impl SequentialScale {
    /// Ramp over `[0.95 * min, 0.95 * max]` of the observed values.
    pub fn for_extent(min: f64, max: f64, base: skia::Color) -> Self {
        Self { domain: (0.95 * min, 0.95 * max), from: skia::Color::WHITE, to: base }
    }

    pub fn color(&self, v: f64) -> skia::Color {
        let span = self.domain.1 - self.domain.0;
        let t = if span.abs() < 1e-12 { 1.0 } else { (v - self.domain.0) / span };
        interpolate_rgb(self.from, self.to, t)
    }
}

/// Random light colors, one per bar.
pub struct PastelPalette {
    rng: StdRng,
}

impl PastelPalette {
    /// Reproducible sequence for a fixed `seed`, entropy-seeded otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn next_color(&mut self) -> skia::Color {
        let mut channel = || self.rng.gen_range(127..=253u8);
        let (r, g, b) = (channel(), channel(), channel());
        skia::Color::from_rgb(r, g, b)
    }
}
