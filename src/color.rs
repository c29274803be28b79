use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Lighten, Srgb};

// ---------------------------------------------------------------------------
// Discrete colour sequences
// ---------------------------------------------------------------------------

/// Diverging red → blue sequence, used for pie slices.
pub const RD_BU: [Color32; 11] = [
    Color32::from_rgb(103, 0, 31),
    Color32::from_rgb(178, 24, 43),
    Color32::from_rgb(214, 96, 77),
    Color32::from_rgb(244, 165, 130),
    Color32::from_rgb(253, 219, 199),
    Color32::from_rgb(247, 247, 247),
    Color32::from_rgb(209, 229, 240),
    Color32::from_rgb(146, 197, 222),
    Color32::from_rgb(67, 147, 195),
    Color32::from_rgb(33, 102, 172),
    Color32::from_rgb(5, 48, 97),
];

/// Qualitative pastel sequence, used for scatter series.
pub const SET2: [Color32; 8] = [
    Color32::from_rgb(102, 194, 165),
    Color32::from_rgb(252, 141, 98),
    Color32::from_rgb(141, 160, 203),
    Color32::from_rgb(231, 138, 195),
    Color32::from_rgb(166, 216, 84),
    Color32::from_rgb(255, 217, 47),
    Color32::from_rgb(229, 196, 148),
    Color32::from_rgb(179, 179, 179),
];

/// Pick the `i`-th colour of a sequence, wrapping around when it runs out.
pub fn cycle(sequence: &[Color32], i: usize) -> Color32 {
    if sequence.is_empty() {
        return Color32::GRAY;
    }
    sequence[i % sequence.len()]
}

/// A lighter variant of `color` for hover highlighting.
pub fn highlight(color: Color32) -> Color32 {
    let rgb = Srgb::new(color.r(), color.g(), color.b()).into_format::<f32>();
    let hsl: Hsl = rgb.into_color();
    let lighter: Srgb = hsl.lighten(0.15).into_color();
    let lighter = lighter.into_format::<u8>();
    Color32::from_rgba_unmultiplied(lighter.red, lighter.green, lighter.blue, color.a())
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Assigns colours from a sequence to category labels in order of first
/// appearance.
#[derive(Debug, Clone)]
pub struct ColorMap {
    sequence: &'static [Color32],
    labels: Vec<String>,
}

impl ColorMap {
    pub fn new(sequence: &'static [Color32]) -> Self {
        ColorMap {
            sequence,
            labels: Vec::new(),
        }
    }

    /// Colour for `label`, registering it if it is new.
    pub fn color_for(&mut self, label: &str) -> Color32 {
        let idx = match self.labels.iter().position(|l| l == label) {
            Some(idx) => idx,
            None => {
                self.labels.push(label.to_string());
                self.labels.len() - 1
            }
        };
        cycle(self.sequence, idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_cycle_past_sequence_end() {
        assert_eq!(cycle(&SET2, 0), cycle(&SET2, SET2.len()));
        assert_eq!(cycle(&[], 3), Color32::GRAY);
    }

    #[test]
    fn map_is_stable_per_label() {
        let mut map = ColorMap::new(&SET2);
        let a = map.color_for("F9 FT");
        let b = map.color_for("F9 v1.1");
        assert_eq!(map.color_for("F9 FT"), a);
        assert_ne!(a, b);
    }

    #[test]
    fn highlight_is_lighter() {
        let base = RD_BU[1];
        let lit = highlight(base);
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(sum(lit) > sum(base));
    }
}
