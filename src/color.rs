use eframe::egui::Color32;
use palette::{Mix, Srgb};

// ---------------------------------------------------------------------------
// Row colour gradient
// ---------------------------------------------------------------------------

/// Gradient end-points: blue for the first rows, orange-red for the last.
const GRADIENT_START: (u8, u8, u8) = (0, 100, 255);
const GRADIENT_END: (u8, u8, u8) = (255, 100, 0);

/// Colour for row `index` out of `n` rows.
///
/// Position `(index + 1) / n` along the gradient, so the last row always sits
/// on the end colour.
pub fn gradient_color(index: usize, n: usize) -> Color32 {
    if n == 0 {
        return Color32::GRAY;
    }
    let t = ((index + 1) as f32 / n as f32).clamp(0.0, 1.0);
    let start: Srgb = Srgb::<u8>::from(GRADIENT_START).into_format();
    let end: Srgb = Srgb::<u8>::from(GRADIENT_END).into_format();
    let rgb: Srgb<u8> = start.mix(end, t).into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

/// Colours for `n` consecutive rows.
pub fn generate_gradient(n: usize) -> Vec<Color32> {
    (0..n).map(|i| gradient_color(i, n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_row_is_end_colour() {
        assert_eq!(gradient_color(2, 3), Color32::from_rgb(255, 100, 0));
        assert_eq!(gradient_color(0, 1), Color32::from_rgb(255, 100, 0));
    }

    #[test]
    fn gradient_moves_from_blue_to_red() {
        let colors = generate_gradient(4);
        assert_eq!(colors.len(), 4);
        assert!(colors.windows(2).all(|w| w[0].r() < w[1].r()));
        assert!(colors.windows(2).all(|w| w[0].b() > w[1].b()));
        assert!(colors.iter().all(|c| c.g() == 100));
    }

    #[test]
    fn empty_gradient() {
        assert!(generate_gradient(0).is_empty());
    }
}
