use eframe::egui::{self, Color32, FontDefinitions, FontFamily};
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Base colours
// ---------------------------------------------------------------------------

pub const PRIMARY: Color32 = Color32::from_rgb(0xad, 0xb9, 0xbf);
pub const BACKGROUND: Color32 = Color32::from_rgb(0x9d, 0xc5, 0xc0);
pub const SECONDARY_BACKGROUND: Color32 = Color32::from_rgb(0xd2, 0xb9, 0xb9);
pub const TEXT: Color32 = Color32::from_rgb(0x1e, 0x02, 0x02);

/// Heading accent ("Conclusion/Solution", section titles).
pub const ACCENT: Color32 = Color32::from_rgb(0x1f, 0x4e, 0x9c);
pub const ERROR: Color32 = Color32::from_rgb(0xa3, 0x15, 0x15);

// ---------------------------------------------------------------------------
// Shade generation
// ---------------------------------------------------------------------------

/// Shift a colour's HSL lightness by `delta` (clamped to `[0, 1]`).
pub fn shade(color: Color32, delta: f32) -> Color32 {
    let rgb = Srgb::new(
        f32::from(color.r()) / 255.0,
        f32::from(color.g()) / 255.0,
        f32::from(color.b()) / 255.0,
    );
    let hsl: Hsl = rgb.into_color();
    let shifted = Hsl::new(
        hsl.hue,
        hsl.saturation,
        (hsl.lightness + delta).clamp(0.0, 1.0),
    );
    let out: Srgb = shifted.into_color();
    Color32::from_rgb(to_u8(out.red), to_u8(out.green), to_u8(out.blue))
}

fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

// ---------------------------------------------------------------------------
// Install
// ---------------------------------------------------------------------------

/// Light visuals built from the base colours.
pub fn visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    v.override_text_color = Some(TEXT);
    v.panel_fill = BACKGROUND;
    v.window_fill = BACKGROUND;
    v.faint_bg_color = shade(BACKGROUND, 0.05);
    v.extreme_bg_color = shade(SECONDARY_BACKGROUND, 0.1);
    v.hyperlink_color = ACCENT;
    v.selection.bg_fill = PRIMARY;

    v.widgets.noninteractive.bg_fill = SECONDARY_BACKGROUND;
    v.widgets.inactive.weak_bg_fill = PRIMARY;
    v.widgets.inactive.bg_fill = PRIMARY;
    v.widgets.hovered.weak_bg_fill = shade(PRIMARY, 0.08);
    v.widgets.hovered.bg_fill = shade(PRIMARY, 0.08);
    v.widgets.active.weak_bg_fill = shade(PRIMARY, -0.12);
    v.widgets.active.bg_fill = shade(PRIMARY, -0.12);
    v
}

/// Apply colours and render proportional text with the monospace font.
pub fn install(ctx: &egui::Context) {
    ctx.set_visuals(visuals());

    let mut fonts = FontDefinitions::default();
    if let Some(mono) = fonts.families.get(&FontFamily::Monospace).cloned() {
        fonts.families.insert(FontFamily::Proportional, mono);
    }
    ctx.set_fonts(fonts);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightness(c: Color32) -> f32 {
        let hsl: Hsl = Srgb::new(
            f32::from(c.r()) / 255.0,
            f32::from(c.g()) / 255.0,
            f32::from(c.b()) / 255.0,
        )
        .into_color();
        hsl.lightness
    }

    #[test]
    fn zero_shift_keeps_colour() {
        for c in [PRIMARY, BACKGROUND, SECONDARY_BACKGROUND, TEXT] {
            let s = shade(c, 0.0);
            assert!(c.r().abs_diff(s.r()) <= 1);
            assert!(c.g().abs_diff(s.g()) <= 1);
            assert!(c.b().abs_diff(s.b()) <= 1);
        }
    }

    #[test]
    fn shifts_move_lightness() {
        assert!(lightness(shade(PRIMARY, 0.1)) > lightness(PRIMARY));
        assert!(lightness(shade(PRIMARY, -0.1)) < lightness(PRIMARY));
    }

    #[test]
    fn extremes_clamp() {
        assert_eq!(shade(PRIMARY, 2.0), Color32::WHITE);
        assert_eq!(shade(PRIMARY, -2.0), Color32::BLACK);
    }

    #[test]
    fn visuals_use_base_colours() {
        let v = visuals();
        assert_eq!(v.panel_fill, BACKGROUND);
        assert_eq!(v.override_text_color, Some(TEXT));
    }
}
