use super::*;
use crate::foundation::error::BlendlabError;

#[test]
fn registry_is_total_and_kinds_match_catalog() {
    assert_eq!(entries().len(), 25);
    for (mode, f) in entries() {
        let non_sep = matches!(f, BlendFn::NonSeparable(_));
        assert_eq!(non_sep, mode.is_non_separable(), "{mode}");
    }
}

#[test]
fn lookup_by_id() {
    let (mode, f) = lookup("multiply").unwrap();
    assert_eq!(mode, BlendMode::Multiply);
    assert_eq!(f.apply([0.5, 1.0, 0.0], [0.5, 0.5, 0.5]), [0.25, 0.5, 0.0]);
}

#[test]
fn lookup_rejects_unknown_ids() {
    let err = lookup("source-over").unwrap_err();
    assert!(matches!(err, BlendlabError::UnknownMode(ref id) if id == "source-over"));
}

#[test]
fn separable_apply_is_per_channel() {
    let f = formula(BlendMode::Difference);
    assert_eq!(f.apply([1.0, 0.25, 0.5], [0.0, 0.75, 0.5]), [1.0, 0.5, 0.0]);
}
