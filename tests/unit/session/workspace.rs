use super::*;
use crate::foundation::core::Canvas;
use crate::render::gallery::render_all;

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> PixelBuffer {
    PixelBuffer::filled(w, h, rgba).unwrap()
}

#[test]
fn new_renders_full_gallery() {
    let s = Session::new(
        solid(3, 2, [200, 10, 10, 255]),
        solid(2, 4, [10, 10, 200, 255]),
        RenderOpts::default(),
    )
    .unwrap();
    assert_eq!(s.gallery().len(), 25);
    assert_eq!(s.gallery().canvas(), Canvas::new(3, 4));
    assert!(s.focused().is_none());
}

#[test]
fn swap_matches_rendering_reversed_pair() {
    let a = solid(2, 2, [200, 60, 10, 255]);
    let b = solid(2, 2, [30, 90, 240, 255]);
    let mut s = Session::new(a.clone(), b.clone(), RenderOpts::default()).unwrap();
    s.swap().unwrap();

    assert_eq!(s.base(), &b);
    assert_eq!(s.overlay(), &a);
    assert_eq!(s.gallery(), &render_all(&b, &a).unwrap());
}

#[test]
fn focus_follows_swap() {
    let a = solid(1, 1, [51, 51, 51, 255]);
    let b = solid(1, 1, [204, 204, 204, 255]);
    let mut s = Session::new(a, b, RenderOpts::default()).unwrap();

    let before = s.focus(BlendMode::Overlay).unwrap().buffer.clone();
    s.swap().unwrap();
    let after = s.focused().unwrap();

    assert_eq!(after.mode, BlendMode::Overlay);
    assert_ne!(after.buffer, before);
    assert_eq!(Some(&after.buffer), s.gallery().get(BlendMode::Overlay));

    s.clear_focus();
    assert!(s.focused().is_none());
}

#[test]
fn failed_update_keeps_previous_state() {
    let a = solid(2, 2, [1, 2, 3, 255]);
    let b = solid(2, 2, [4, 5, 6, 255]);
    let mut s = Session::new(a.clone(), b, RenderOpts::default()).unwrap();
    let gallery = s.gallery().clone();

    let empty = PixelBuffer::new(0, 0, Vec::new()).unwrap();
    assert!(matches!(
        s.set_overlay(empty),
        Err(BlendlabError::Dimension(_))
    ));
    assert_eq!(s.gallery(), &gallery);
    assert_eq!(s.base(), &a);
}

#[test]
fn set_base_rerenders() {
    let mut s = Session::new(
        solid(1, 1, [0, 0, 0, 255]),
        solid(1, 1, [128, 128, 128, 255]),
        RenderOpts::default(),
    )
    .unwrap();
    s.focus(BlendMode::Screen).unwrap();
    s.set_base(solid(1, 1, [255, 255, 255, 255])).unwrap();
    let out = s.focused().unwrap().buffer.pixel(0, 0).unwrap();
    assert_eq!(out, [255, 255, 255, 255]);
}
