use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use tempfile::tempdir;

use traffic_router::sampling::frame_cursor::FrameCursor;

fn write_frames(dir: &Path, count: usize) {
    for i in 0..count {
        RgbImage::from_pixel(8, 8, Rgb([100, 100, 100]))
            .save(dir.join(format!("frame_{:02}.png", i)))
            .unwrap();
    }
}

#[test]
fn sequence_wraps_back_to_start() {
    let dir = tempdir().unwrap();
    write_frames(dir.path(), 5);

    let mut cursor = FrameCursor::open_sequence(dir.path(), 2);
    assert_eq!(cursor.len(), 5);

    // offsets 0 -> 2 -> 4, then the third advance wraps
    assert!(cursor.advance().is_some());
    assert_eq!(cursor.offset(), 2);
    assert!(cursor.advance().is_some());
    assert_eq!(cursor.offset(), 4);
    assert!(cursor.advance().is_some());
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn step_beyond_sequence_length_wraps_every_advance() {
    let dir = tempdir().unwrap();
    write_frames(dir.path(), 2);

    let mut cursor = FrameCursor::open_sequence(dir.path(), 30);
    for _ in 0..4 {
        assert!(cursor.advance().is_some());
        assert_eq!(cursor.offset(), 0);
    }
}

#[test]
fn unreadable_frame_resets_the_cursor() {
    let dir = tempdir().unwrap();
    write_frames(dir.path(), 1);
    fs::write(dir.path().join("frame_01.png"), b"definitely not a png").unwrap();

    let mut cursor = FrameCursor::open_sequence(dir.path(), 1);
    assert_eq!(cursor.len(), 2);

    assert!(cursor.advance().is_some());
    assert_eq!(cursor.offset(), 1);

    // corrupt frame: no data this cycle, offset self-heals to 0
    assert!(cursor.advance().is_none());
    assert_eq!(cursor.offset(), 0);

    assert!(cursor.advance().is_some());
}

#[test]
fn missing_directory_degrades_to_unavailable() {
    let mut cursor = FrameCursor::open_sequence(Path::new("no/such/directory"), 5);
    assert!(!cursor.is_available());
    assert!(cursor.advance().is_none());
}
