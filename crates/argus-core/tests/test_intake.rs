use std::io::Cursor;

use argus_core::consts::MAX_UPLOAD_BYTES;
use argus_core::error::ArgusError;
use argus_core::intake::{ImageFile, ImageKind};

/// A real 2x2 PNG, built in memory.
fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

// ---------------------------------------------------------------------------
// Format detection
// ---------------------------------------------------------------------------

#[test]
fn test_kind_from_name_accepts_jpeg_png() {
    assert_eq!(ImageKind::from_name("photo.jpg"), Some(ImageKind::Jpeg));
    assert_eq!(ImageKind::from_name("photo.JPEG"), Some(ImageKind::Jpeg));
    assert_eq!(ImageKind::from_name("shot.png"), Some(ImageKind::Png));
}

#[test]
fn test_kind_from_name_rejects_everything_else() {
    assert_eq!(ImageKind::from_name("archive.zip"), None);
    assert_eq!(ImageKind::from_name("image.gif"), None);
    assert_eq!(ImageKind::from_name("image.bmp"), None);
    assert_eq!(ImageKind::from_name("noextension"), None);
}

#[test]
fn test_kind_from_bytes_sniffs_magic() {
    assert_eq!(ImageKind::from_bytes(&tiny_png()), Some(ImageKind::Png));
    assert_eq!(
        ImageKind::from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]),
        Some(ImageKind::Jpeg)
    );
    assert_eq!(ImageKind::from_bytes(b"GIF89a"), None);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_validate_rejects_unsupported_type() {
    let err = ImageFile::validate("evil.gif", b"GIF89a....".to_vec()).unwrap_err();
    assert!(matches!(err, ArgusError::UnsupportedType(_)), "got: {err}");
    assert!(err.is_validation());
}

#[test]
fn test_validate_rejects_oversized_file() {
    let bytes = vec![0u8; MAX_UPLOAD_BYTES + 1];
    let err = ImageFile::validate("big.png", bytes).unwrap_err();
    match err {
        ArgusError::TooLarge { size, limit } => {
            assert_eq!(size, MAX_UPLOAD_BYTES + 1);
            assert_eq!(limit, MAX_UPLOAD_BYTES);
        }
        other => panic!("expected TooLarge, got: {other}"),
    }
}

#[test]
fn test_validate_accepts_file_at_the_limit() {
    let bytes = vec![0u8; MAX_UPLOAD_BYTES];
    let file = ImageFile::validate("edge.png", bytes).unwrap();
    assert_eq!(file.len(), MAX_UPLOAD_BYTES);
    assert_eq!(file.kind, ImageKind::Png);
}

#[test]
fn test_validate_sniffs_content_when_name_has_no_extension() {
    let file = ImageFile::validate("pasted-image", tiny_png()).unwrap();
    assert_eq!(file.kind, ImageKind::Png);
}

#[test]
fn test_open_reads_and_validates_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.png");
    std::fs::write(&path, tiny_png()).unwrap();

    let file = ImageFile::open(&path).unwrap();
    assert_eq!(file.name, "sample.png");
    assert_eq!(file.kind, ImageKind::Png);
    assert!(!file.is_empty());
}

// ---------------------------------------------------------------------------
// Preview decoding
// ---------------------------------------------------------------------------

#[test]
fn test_decode_preview_yields_rgba_pixels() {
    let file = ImageFile::validate("p.png", tiny_png()).unwrap();
    let preview = file.decode_preview().unwrap();
    assert_eq!(preview.width, 2);
    assert_eq!(preview.height, 2);
    assert_eq!(preview.rgba.len(), 2 * 2 * 4);
    assert_eq!(&preview.rgba[..4], &[10, 20, 30, 255]);
}

#[test]
fn test_decode_preview_fails_on_garbage_bytes() {
    let file = ImageFile::validate("fake.png", vec![0u8; 64]).unwrap();
    assert!(file.decode_preview().is_err());
}
