use approx::assert_abs_diff_eq;

use super::*;

const EPS: f32 = 1e-4;

fn assert_rgb(actual: Rgb, expected: Rgb) {
    for i in 0..3 {
        assert_abs_diff_eq!(actual[i], expected[i], epsilon = EPS);
    }
}

#[test]
fn darker_and_lighter_pick_whole_pixels_by_luma() {
    let red = [1.0, 0.0, 0.0];
    let blue = [0.0, 0.0, 1.0];
    assert_eq!(darker_color(red, blue), blue);
    assert_eq!(darker_color(blue, red), blue);
    assert_eq!(lighter_color(red, blue), red);
    assert_eq!(lighter_color(blue, red), red);
}

#[test]
fn color_takes_overlay_chroma_and_base_luma() {
    let out = color([0.5, 0.5, 0.5], [1.0, 0.0, 0.0]);
    assert_abs_diff_eq!(luma(out), 0.5, epsilon = EPS);
    assert_abs_diff_eq!(out[0], 1.0, epsilon = EPS);
    assert_abs_diff_eq!(out[1], out[2], epsilon = EPS);
    assert!(out[1] < out[0]);
}

#[test]
fn luminosity_shifts_base_to_overlay_luma() {
    let out = luminosity([0.2, 0.4, 0.6], [0.5, 0.5, 0.5]);
    assert_rgb(out, [0.338, 0.538, 0.738]);
    assert_abs_diff_eq!(luma(out), 0.5, epsilon = EPS);
}

#[test]
fn grey_overlay_desaturates_under_saturation_mode() {
    let b = [0.2, 0.4, 0.6];
    let out = saturation(b, [0.5, 0.5, 0.5]);
    let l = luma(b);
    assert_rgb(out, [l, l, l]);
}

#[test]
fn hue_onto_grey_base_stays_grey() {
    let out = hue([0.4, 0.4, 0.4], [0.9, 0.1, 0.3]);
    assert_rgb(out, [0.4, 0.4, 0.4]);
}

#[test]
fn self_blend_is_identity_for_component_modes() {
    let c = [0.3, 0.6, 0.1];
    assert_rgb(hue(c, c), c);
    assert_rgb(saturation(c, c), c);
    assert_rgb(color(c, c), c);
    assert_rgb(luminosity(c, c), c);
}

#[test]
fn clipping_keeps_channels_in_range() {
    let extremes = [
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.9, 0.9, 0.0],
    ];
    for &b in &extremes {
        for &o in &extremes {
            for out in [hue(b, o), saturation(b, o), color(b, o), luminosity(b, o)] {
                for v in out {
                    assert!(v.is_finite() && (0.0..=1.0).contains(&v), "{out:?}");
                }
            }
        }
    }
}
