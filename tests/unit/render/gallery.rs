use super::*;

fn checker(w: u32, h: u32) -> PixelBuffer {
    PixelBuffer::from_fn(w, h, |x, y| {
        if (x + y) % 2 == 0 {
            [230, 40, 90, 255]
        } else {
            [20, 180, 250, 200]
        }
    })
    .unwrap()
}

#[test]
fn gallery_covers_every_mode_on_normalized_canvas() {
    let base = checker(5, 3);
    let overlay = PixelBuffer::filled(2, 6, [128, 128, 128, 255]).unwrap();
    let gallery = render_all(&base, &overlay).unwrap();

    assert_eq!(gallery.len(), 25);
    assert_eq!(gallery.canvas(), Canvas::new(5, 6));
    for mode in BlendMode::ALL {
        assert_eq!(gallery.get(mode).unwrap().canvas(), Canvas::new(5, 6));
    }
}

#[test]
fn iteration_follows_gallery_order() {
    let base = checker(2, 2);
    let gallery = render_all(&base, &base).unwrap();
    let modes: Vec<_> = gallery.iter().map(|(m, _)| m).collect();
    assert_eq!(modes, BlendMode::ALL.to_vec());
}

#[test]
fn parallel_gallery_matches_sequential() {
    let base = checker(9, 4);
    let overlay = checker(4, 9);
    let seq = render_all(&base, &overlay).unwrap();
    let par = render_all_with(
        &base,
        &overlay,
        &RenderOpts {
            parallel: true,
            threads: Some(2),
        },
    )
    .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn zero_threads_is_rejected() {
    let base = checker(2, 2);
    let err = render_all_with(
        &base,
        &base,
        &RenderOpts {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, BlendlabError::Validation(_)));
}

#[test]
fn zero_threads_is_rejected_without_parallel() {
    let base = checker(2, 2);
    let opts = RenderOpts {
        parallel: false,
        threads: Some(0),
    };
    let err = render_all_with(&base, &base, &opts).unwrap_err();
    assert!(matches!(err, BlendlabError::Validation(_)));
    let err = render_one(&base, &base, BlendMode::Multiply, &opts).unwrap_err();
    assert!(matches!(err, BlendlabError::Validation(_)));
}

#[test]
fn zero_threads_is_reported_before_dimension_errors() {
    let empty = PixelBuffer::transparent(0, 0).unwrap();
    let opts = RenderOpts {
        parallel: false,
        threads: Some(0),
    };
    let err = render_all_with(&empty, &empty, &opts).unwrap_err();
    assert!(matches!(err, BlendlabError::Validation(_)));
}

#[test]
fn render_opts_validate_accepts_defaults_and_positive_threads() {
    assert!(RenderOpts::default().validate().is_ok());
    let opts = RenderOpts {
        parallel: false,
        threads: Some(3),
    };
    assert!(opts.validate().is_ok());
}

#[test]
fn empty_input_fails_before_rendering() {
    let empty = PixelBuffer::new(3, 0, Vec::new()).unwrap();
    let ok = checker(2, 2);
    assert!(matches!(
        render_all(&ok, &empty),
        Err(BlendlabError::Dimension(_))
    ));
}

#[test]
fn render_one_matches_gallery_entry() {
    let base = checker(3, 5);
    let overlay = checker(6, 2);
    let gallery = render_all(&base, &overlay).unwrap();
    for opts in [
        RenderOpts::default(),
        RenderOpts {
            parallel: true,
            threads: Some(3),
        },
    ] {
        let one = render_one(&base, &overlay, BlendMode::SoftLight, &opts).unwrap();
        assert_eq!(Some(&one), gallery.get(BlendMode::SoftLight));
    }
}
