use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Blue, orange, green.
pub const BASE_SCHEME: [Color32; 3] = [
    Color32::from_rgb(0x1f, 0x77, 0xb4),
    Color32::from_rgb(0xff, 0x7f, 0x0e),
    Color32::from_rgb(0x2c, 0xa0, 0x2c),
];

// ---------------------------------------------------------------------------
// Ordinal colour mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Assigns each category of an ordered domain its own colour.
///
/// The first categories take [`BASE_SCHEME`]; any beyond it get hues from
/// [`generate_palette`] so no two categories share a colour.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    mapping: Vec<(String, Color32)>,
    default_color: Color32,
}

impl CategoryColors {
    pub fn new(domain: &[String]) -> Self {
        let extra = generate_palette(domain.len().saturating_sub(BASE_SCHEME.len()));
        let mapping = domain
            .iter()
            .cloned()
            .zip(BASE_SCHEME.into_iter().chain(extra))
            .collect();

        CategoryColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, color)| *color)
            .unwrap_or(self.default_color)
    }

    /// Legend entries (label → colour) in domain order.
    pub fn legend_entries(&self) -> &[(String, Color32)] {
        &self.mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generate_palette_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(4).len(), 4);
    }

    #[test]
    fn test_base_scheme_first() {
        let colors = CategoryColors::new(&domain(&["Image", "Video", "Link"]));
        assert_eq!(colors.color_for("Image"), BASE_SCHEME[0]);
        assert_eq!(colors.color_for("Video"), BASE_SCHEME[1]);
        assert_eq!(colors.color_for("Link"), BASE_SCHEME[2]);
        assert_eq!(colors.color_for("Story"), Color32::GRAY);
    }

    #[test]
    fn test_large_domain_colors_distinct() {
        let colors = CategoryColors::new(&domain(&["a", "b", "c", "d", "e", "f"]));
        let entries = colors.legend_entries();
        assert_eq!(entries.len(), 6);
        for (i, (_, a)) in entries.iter().enumerate() {
            for (_, b) in &entries[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
