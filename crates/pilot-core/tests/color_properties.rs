use palette::{Hsl as RefHsl, IntoColor, Srgb};
use pilot_core::{
    Color, Rgb, adjust_hsl, adjust_temperature, generate_shades, hsl_to_rgb, is_light, parse_hex,
    rgb_to_hsl,
};
use proptest::prelude::*;

fn hex_strategy() -> impl Strategy<Value = String> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| format!("#{r:02x}{g:02x}{b:02x}"))
}

fn channels(hex: &str) -> [f64; 3] {
    let rgb = parse_hex(hex).expect("engine output should always parse");
    [rgb.r, rgb.g, rgb.b]
}

proptest! {
    #[test]
    fn rgb_hsl_round_trip_within_one(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let rgb = Rgb::new(r.into(), g.into(), b.into());
        let back = hsl_to_rgb(rgb_to_hsl(rgb));
        prop_assert!((back.r - rgb.r).abs() <= 1.0);
        prop_assert!((back.g - rgb.g).abs() <= 1.0);
        prop_assert!((back.b - rgb.b).abs() <= 1.0);
    }

    #[test]
    fn hsl_matches_reference_crate(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let ours = rgb_to_hsl(Rgb::new(r.into(), g.into(), b.into()));
        let reference: RefHsl = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0).into_color();

        prop_assert!((ours.l / 100.0 - reference.lightness as f64).abs() < 1e-3);
        prop_assert!((ours.s / 100.0 - reference.saturation as f64).abs() < 1e-3);

        // Hue is meaningless for near-gray colors.
        if ours.s > 1.0 {
            let dh = (ours.h - reference.hue.into_positive_degrees() as f64).abs();
            prop_assert!(dh.min(360.0 - dh) < 0.05, "hue {} vs {}", ours.h, reference.hue.into_positive_degrees());
        }
    }

    #[test]
    fn hue_delta_wraps_modulo_360(hex in hex_strategy(), delta in -720i32..720) {
        let delta = f64::from(delta);
        let wrapped = channels(&adjust_hsl(&hex, delta + 360.0, 0.0, 0.0));
        let direct = channels(&adjust_hsl(&hex, delta, 0.0, 0.0));
        for c in 0..3 {
            prop_assert!((wrapped[c] - direct[c]).abs() <= 1.0);
        }
    }

    #[test]
    fn saturation_and_lightness_never_overflow(hex in hex_strategy(), ds in -1e4f64..1e4, dl in -1e4f64..1e4) {
        let out = adjust_hsl(&hex, 0.0, ds, dl);
        prop_assert_eq!(out.len(), 7);
        prop_assert!(parse_hex(&out).is_ok());
    }

    #[test]
    fn zero_adjustment_is_idempotent(hex in hex_strategy()) {
        let before = channels(&hex);
        let after = channels(&adjust_hsl(&hex, 0.0, 0.0, 0.0));
        for c in 0..3 {
            prop_assert!((before[c] - after[c]).abs() <= 1.0);
        }
    }

    #[test]
    fn temperature_leaves_green_alone(hex in hex_strategy(), delta in -50.0f64..=50.0) {
        let before = channels(&hex);
        let after = channels(&adjust_temperature(&hex, delta));
        prop_assert_eq!(before[1], after[1]);
        if delta > 0.0 {
            prop_assert!(after[0] >= before[0] && after[2] <= before[2]);
        } else {
            prop_assert!(after[0] <= before[0] && after[2] >= before[2]);
        }
    }

    #[test]
    fn shades_are_odd_and_centered(hex in hex_strategy(), count in 0usize..40) {
        let base = Color::new(hex, "Base");
        let shades = generate_shades(&base, count);
        prop_assert_eq!(shades.len(), 2 * (count / 2) + 1);
        prop_assert_eq!(&shades[shades.len() / 2], &base);
    }

    #[test]
    fn is_light_agrees_between_shorthand_and_full(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
        let short = format!("#{r:x}{g:x}{b:x}");
        let full = format!("#{r:x}{r:x}{g:x}{g:x}{b:x}{b:x}");
        prop_assert_eq!(is_light(&short), is_light(&full));
    }
}

#[test]
fn spec_examples_hold() {
    assert_eq!(adjust_hsl("#ff0000", 370.0, 0.0, 0.0), adjust_hsl("#ff0000", 10.0, 0.0, 0.0));
    assert_eq!(adjust_hsl("not-a-color", 10.0, 10.0, 10.0), "not-a-color");
    assert!(is_light("#808080"));
    assert!(!is_light("#000000"));
    assert!(is_light("#ffffff"));
    assert!(is_light("#zz0000"));

    let base = Color::new("#4a7c59", "Fern");
    assert_eq!(generate_shades(&base, 9).len(), 9);
    assert_eq!(generate_shades(&base, 8).len(), 9);

    let bad = Color::new("bad", "x");
    assert_eq!(generate_shades(&bad, 9), vec![bad]);
}
