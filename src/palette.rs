//! Color assignment for highlight groups
//!
//! A 21-entry categorical base palette (soft but visually distinct) covers
//! common catalogs; larger catalogs extend it by darkening the previous
//! generation and appending, so any group count gets exactly one color.
//!
//! Ordering is deterministic by default. The production behavior this
//! replaces reshuffled the palette on every load, which broke learned
//! color associations across reloads; [`assign_seeded`] keeps the variety
//! while deriving the shuffle from the catalog itself, so the same catalog
//! always gets the same colors.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::catalog::HighlightCatalog;

/// Amount subtracted from each channel per extension generation.
const DARKEN_STEP: u8 = 40;

/// An RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parse a `#rrggbb` hex color.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color { r, g, b })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn darken(self, amount: u8) -> Self {
        Color {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }

    pub fn lighten(self, amount: u8) -> Self {
        Color {
            r: self.r.saturating_add(amount),
            g: self.g.saturating_add(amount),
            b: self.b.saturating_add(amount),
        }
    }
}

/// The categorical base palette, in canonical order.
pub const BASE_PALETTE: [Color; 21] = [
    Color::new(0xe5, 0x73, 0x73),
    Color::new(0x64, 0xb5, 0xf6),
    Color::new(0x81, 0xc7, 0x84),
    Color::new(0xff, 0xd5, 0x4f),
    Color::new(0xba, 0x68, 0xc8),
    Color::new(0xff, 0xb7, 0x4d),
    Color::new(0x4d, 0xd0, 0xe1),
    Color::new(0xa1, 0x88, 0x7f),
    Color::new(0x90, 0xa4, 0xae),
    Color::new(0xf0, 0x62, 0x92),
    Color::new(0xae, 0xd5, 0x81),
    Color::new(0x4f, 0xc3, 0xf7),
    Color::new(0xff, 0x8a, 0x65),
    Color::new(0x95, 0x75, 0xcd),
    Color::new(0xdc, 0xe7, 0x75),
    Color::new(0xff, 0xd7, 0x40),
    Color::new(0xb2, 0xdf, 0xdb),
    Color::new(0xce, 0x93, 0xd8),
    Color::new(0xff, 0xf1, 0x76),
    Color::new(0xb0, 0xbe, 0xc5),
    Color::new(0xff, 0xb3, 0x00),
];

/// Assign exactly `group_count` colors in canonical palette order.
///
/// Never indexes out of bounds for any count; zero yields an empty vec.
pub fn assign(group_count: usize) -> Vec<Color> {
    extend_to(BASE_PALETTE.to_vec(), group_count)
}

/// Assign exactly `group_count` colors with the base palette reordered by a
/// deterministic seed. The same seed always yields the same ordering.
pub fn assign_seeded(group_count: usize, seed: u64) -> Vec<Color> {
    let mut base = BASE_PALETTE.to_vec();
    shuffle(&mut base, seed);
    extend_to(base, group_count)
}

/// Derive a palette seed from the catalog's group labels, so a reloaded
/// catalog keeps its color associations.
pub fn seed_from_catalog(catalog: &HighlightCatalog) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for (position, group) in catalog.groups().iter().enumerate() {
        group.label(position).hash(&mut hasher);
    }
    hasher.finish()
}

fn extend_to(base: Vec<Color>, group_count: usize) -> Vec<Color> {
    let mut colors = base;
    let mut generation = colors.clone();
    while colors.len() < group_count {
        generation = generation
            .iter()
            .map(|c| c.darken(DARKEN_STEP))
            .collect();
        colors.extend(generation.iter().copied());
    }
    colors.truncate(group_count);
    colors
}

// Fisher-Yates with a splitmix64 stream; enough randomness for reordering
// 21 colors without pulling in a rand dependency.
fn shuffle(colors: &mut [Color], seed: u64) {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    };
    for i in (1..colors.len()).rev() {
        let j = (next() % (i as u64 + 1)) as usize;
        colors.swap(i, j);
    }
}
