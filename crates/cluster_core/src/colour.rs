use std::collections::HashMap;
use std::fmt;

use cluster_logging::cluster_trace;

pub const SATURATION: u8 = 70;
pub const LIGHTNESS: u8 = 45;
pub const ALPHA: u8 = 20;

/// Positional checksum of a label, mapped into a hue in `[1, 360]`.
///
/// Each UTF-16 code unit is weighted by its zero-based index, so the first
/// unit never contributes. Collisions between labels are expected.
pub fn label_hash(label: &str) -> u16 {
    // Reduced as it goes so arbitrarily long labels cannot overflow.
    let sum = label
        .encode_utf16()
        .enumerate()
        .fold(0u32, |acc, (index, unit)| {
            (acc + u32::from(unit) % 360 * (index % 360) as u32) % 360
        });
    sum as u16 + 1
}

/// Hue/saturation/lightness/alpha colour, formatted as a CSS `hsla()` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsla {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
    pub alpha: u8,
}

impl Hsla {
    pub fn for_label(label: &str) -> Self {
        Self {
            hue: label_hash(label),
            saturation: SATURATION,
            lightness: LIGHTNESS,
            alpha: ALPHA,
        }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {}%)",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Memoized label-to-colour mapping. Entries are never evicted.
#[derive(Debug, Clone, Default)]
pub struct ColourAssigner {
    memo: HashMap<String, String>,
}

impl ColourAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the colour string for `label`, computing it on first use.
    pub fn create(&mut self, label: &str) -> String {
        self.colour_for(label)
    }

    /// Number of memoized labels.
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    fn colour_for(&mut self, label: &str) -> String {
        if let Some(colour) = self.memo.get(label) {
            return colour.clone();
        }

        let colour = Hsla::for_label(label).to_string();
        cluster_trace!("memoized colour {} for label {:?}", colour, label);
        self.memo.insert(label.to_string(), colour.clone());
        colour
    }
}
