use super::*;

#[test]
fn gradient_runs_black_to_white() {
    let g = gradient(200, 3).unwrap();
    assert_eq!(g.pixel(0, 0), Some([0, 0, 0, 255]));
    assert_eq!(g.pixel(199, 2), Some([255, 255, 255, 255]));
    let mid = g.pixel(100, 1).unwrap();
    assert!(mid[0] > 120 && mid[0] < 135);
}

#[test]
fn single_column_gradient_is_black() {
    let g = gradient(1, 1).unwrap();
    assert_eq!(g.pixel(0, 0), Some([0, 0, 0, 255]));
}

#[test]
fn letter_covers_strokes_and_leaves_corners_clear() {
    let a = letter_a(200, 200, [255, 0, 0, 255]).unwrap();
    assert_eq!(a.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(a.pixel(199, 199), Some([0, 0, 0, 0]));
    // apex and the middle of the crossbar are fully inked
    assert_eq!(a.pixel(100, 42), Some([255, 0, 0, 255]));
    assert_eq!(a.pixel(100, 118), Some([255, 0, 0, 255]));
    // the counter below the apex, above the bar, is empty
    assert_eq!(a.pixel(100, 100).map(|p| p[3]), Some(0));
}

#[test]
fn demo_pair_is_square() {
    let (base, overlay) = pair().unwrap();
    assert_eq!(base.canvas(), overlay.canvas());
    assert_eq!(base.width(), DEMO_SIZE);
}
