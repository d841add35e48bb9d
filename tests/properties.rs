use color_utils::{
    ColorError, ColorSink, Hsv, Rgb, RgbSink, format_hex, parse_hex, pleasing_hsv,
    pleasing_with, shades_for,
};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bytes_of(hex: &str) -> [u8; 3] {
    let mut out = [0u8; 3];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).unwrap();
    }
    out
}

#[test]
fn hex_roundtrip_is_within_one_step_for_every_byte() {
    for v in 0..=255u8 {
        for hex in [
            format!("{v:02x}0000"),
            format!("00{v:02X}00"),
            format!("#0000{v:02x}"),
        ] {
            let out = format_hex(parse_hex(&hex).unwrap());
            let expected = bytes_of(hex.trim_start_matches('#'));
            let actual = bytes_of(&out);
            for (a, e) in actual.iter().zip(expected) {
                assert!(a.abs_diff(e) <= 1, "{hex} → {out}");
            }
            assert_eq!(out, out.to_uppercase());
        }
    }
}

#[test]
fn spec_rejections() {
    for bad in ["GGGGGG", "12345", "1234567", ""] {
        assert!(matches!(parse_hex(bad), Err(ColorError::InvalidFormat(_))), "{bad:?}");
    }
}

#[test]
fn rgb_hex_rgb_quantizes_to_a_byte() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let hsv = pleasing_hsv(&mut rng);
        let rgb = hsv.to_rgb();
        let back = parse_hex(&rgb.to_hex()).unwrap();
        for (a, b) in [(rgb.r(), back.r()), (rgb.g(), back.g()), (rgb.b(), back.b())] {
            assert!((a - b).abs() <= 1.0 / 255.0 + 1e-12, "{rgb:?} vs {back:?}");
        }
    }
}

#[test]
fn hsl_of_pure_hues() {
    for h in [0.0, 1.0 / 6.0, 1.0 / 3.0, 0.5, 2.0 / 3.0, 5.0 / 6.0] {
        let hsl = Hsv::new(h, 1.0, 1.0).to_hsl();
        assert_eq!((hsl.h(), hsl.s(), hsl.l()), (h, 1.0, 0.5));
    }
}

#[test]
fn ramp_lengths_for_even_strides() {
    let base = Rgb::new(0.3, 0.6, 0.9);
    for n in [1, 2, 4, 5, 8, 10] {
        let ramp = shades_for(base, n);
        assert_eq!(ramp.len(), 2 * n, "n = {n}");
        assert_eq!(ramp[0].to_hex(), "FFFFFF");
        assert_eq!(ramp[ramp.len() - 1], Rgb::BLACK);
    }
}

#[test]
fn pleasing_through_custom_sink() {
    struct Hex;
    impl ColorSink for Hex {
        type Color = (String, f64);
        fn from_rgb(&self, rgb: Rgb, alpha: f64) -> Self::Color {
            (rgb.to_hex(), alpha)
        }
        fn from_hsv(&self, hsv: Hsv, alpha: f64) -> Self::Color {
            self.from_rgb(RgbSink.from_hsv(hsv, alpha), alpha)
        }
    }

    let (hex, alpha) = pleasing_with(&Hex, &mut StdRng::seed_from_u64(5));
    assert_eq!(alpha, 1.0);
    assert!(parse_hex(&hex).unwrap().luma() > 0.2);
}
