use super::*;
use crate::assets::io::load_image;
use crate::pixels::buffer::PixelBuffer;
use crate::render::gallery::render_all;

#[test]
fn export_writes_every_mode_and_a_manifest() {
    let base = PixelBuffer::filled(3, 2, [200, 100, 50, 255]).unwrap();
    let overlay = PixelBuffer::filled(2, 3, [20, 140, 240, 180]).unwrap();
    let gallery = render_all(&base, &overlay).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let manifest = write_gallery(&gallery, dir.path()).unwrap();

    assert_eq!(manifest.canvas, Canvas::new(3, 3));
    assert_eq!(manifest.modes.len(), 25);
    assert_eq!(manifest.modes[2].file, "color-burn.png");
    assert_eq!(manifest.modes[2].group, ModeGroup::Darken);

    for entry in &manifest.modes {
        let png = load_image(&dir.path().join(&entry.file)).unwrap();
        assert_eq!(Some(&png), gallery.get(entry.id));
    }
    assert_eq!(read_manifest(dir.path()).unwrap(), manifest);
}

#[test]
fn manifest_json_uses_mode_ids() {
    let entry = ManifestEntry {
        id: BlendMode::HardMix,
        label: BlendMode::HardMix.label().to_string(),
        label_zh: BlendMode::HardMix.label_zh().to_string(),
        group: ModeGroup::Contrast,
        file: "hard-mix.png".to_string(),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], "hard-mix");
    assert_eq!(json["group"], "contrast");
}
