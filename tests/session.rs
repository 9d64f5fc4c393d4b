// SPDX-License-Identifier: GPL-3.0-or-later
// tests/session.rs
//
// End-to-end load / crop / save behaviour of the image session.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use cropframe::{CropRect, ImageSession, LoadStatus, SaveOutcome};
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, (x ^ y) as u8, 255 - (x as u8)])
    })
}

fn write_photo(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("photo.png");
    gradient(width, height).save(&path).unwrap();
    path
}

fn counting_session() -> (ImageSession, Rc<Cell<usize>>) {
    let count = Rc::new(Cell::new(0));
    let mut session = ImageSession::new();
    let sink = Rc::clone(&count);
    session.on_image_loaded(move |_| sink.set(sink.get() + 1));
    (session, count)
}

#[test]
fn photo_scenario_crops_expected_region() {
    let dir = tempfile::tempdir().unwrap();
    let photo = write_photo(dir.path(), 100, 100);
    let out = dir.path().join("out.png");
    let mut session = ImageSession::new();

    session.load(&photo);
    let outcome = session.save_cropped(CropRect::new(10, 10, 50, 50), &out);

    assert_eq!(outcome, SaveOutcome::Saved { width: 50, height: 50 });
    let written = image::open(&out).unwrap().to_rgba8();
    let source = gradient(100, 100);
    assert_eq!(written.dimensions(), (50, 50));
    for (x, y, pixel) in written.enumerate_pixels() {
        assert_eq!(pixel, source.get_pixel(x + 10, y + 10));
    }
}

#[test]
fn save_before_load_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.png");

    let outcome = ImageSession::new().save_cropped(CropRect::new(10, 10, 50, 50), &out);

    assert_eq!(outcome, SaveOutcome::NoImage);
    assert!(!out.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn load_of_decodable_file_updates_current_and_notifies_once() {
    let dir = tempfile::tempdir().unwrap();
    let photo = write_photo(dir.path(), 30, 20);
    let (mut session, count) = counting_session();

    assert_eq!(
        session.load(&photo),
        Some(LoadStatus::Decoded { width: 30, height: 20 })
    );

    assert_eq!(count.get(), 1);
    let current = session.current().unwrap();
    assert_eq!(current.to_rgba8(), gradient(30, 20));
}

#[test]
fn load_of_missing_file_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (mut session, count) = counting_session();

    assert_eq!(session.load(dir.path().join("nope.png")), None);
    assert!(session.current().is_none());
    assert_eq!(count.get(), 0);

    session.load(write_photo(dir.path(), 5, 5));
    let before = session.current().cloned();
    assert_eq!(session.load(dir.path().join("still-nope.png")), None);
    assert_eq!(session.current().cloned(), before);
    assert_eq!(count.get(), 1);
}

#[test]
fn partially_outside_rect_is_clipped_to_intersection() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = ImageSession::new();
    session.load(write_photo(dir.path(), 40, 30));
    let out = dir.path().join("edge.png");

    let outcome = session.save_cropped(CropRect::new(-10, 20, 25, 100), &out);

    assert_eq!(outcome, SaveOutcome::Saved { width: 15, height: 10 });
    let written = image::open(&out).unwrap();
    assert_eq!(written.dimensions(), (15, 10));
    assert_eq!(written.get_pixel(0, 0), gradient(40, 30).get_pixel(0, 20).to_owned());
}

#[test]
fn fully_outside_rect_raises_nothing_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = ImageSession::new();
    session.load(write_photo(dir.path(), 40, 30));
    let out = dir.path().join("empty.png");

    let outcome = session.save_cropped(CropRect::new(50, 50, 10, 10), &out);

    assert!(matches!(outcome, SaveOutcome::Failed(_)));
    assert!(!out.exists());
    assert_eq!(session.dimensions(), Some((40, 30)));
}

#[test]
fn saved_crop_round_trips_pixel_for_pixel() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = ImageSession::new();
    session.load(write_photo(dir.path(), 64, 48));
    let rect = CropRect::new(7, 3, 33, 21);
    let out = dir.path().join("round.png");

    let expected: DynamicImage = session.crop(rect).unwrap();
    assert!(session.save_cropped(rect, &out).is_saved());

    let mut reloaded = ImageSession::new();
    reloaded.load(&out);
    assert_eq!(reloaded.current(), Some(&expected));
}

#[test]
fn unwritable_destination_is_reported_not_raised() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = ImageSession::new();
    session.load(write_photo(dir.path(), 10, 10));
    let out = dir.path().join("no/such/dir/out.png");

    let outcome = session.save_cropped(CropRect::new(0, 0, 5, 5), &out);

    assert!(matches!(outcome, SaveOutcome::Failed(_)));
    assert!(!out.exists());
}

#[test]
fn jpeg_output_accepts_images_with_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = ImageSession::new();
    session.load(write_photo(dir.path(), 16, 16));
    let out = dir.path().join("out.jpg");

    let outcome = session.save_cropped(CropRect::new(0, 0, 8, 8), &out);

    assert_eq!(outcome, SaveOutcome::Saved { width: 8, height: 8 });
    assert_eq!(image::open(&out).unwrap().dimensions(), (8, 8));
}

#[test]
fn rejected_encode_keeps_existing_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let big = dir.path().join("big.png");
    gradient(400, 400).save(&big).unwrap();
    let mut session = ImageSession::new();
    session.load(&big);
    let out = dir.path().join("out.ico");
    std::fs::write(&out, b"previous contents").unwrap();

    // ICO caps both sides at 256 pixels.
    let outcome = session.save_cropped(CropRect::new(0, 0, 300, 300), &out);

    assert!(matches!(outcome, SaveOutcome::Failed(_)));
    assert_eq!(std::fs::read(&out).unwrap(), b"previous contents");
}

#[test]
fn rejected_encode_creates_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let big = dir.path().join("big.png");
    RgbaImage::from_pixel(400, 300, Rgba([9, 8, 7, 255])).save(&big).unwrap();
    let mut session = ImageSession::new();
    session.load(&big);
    let out = dir.path().join("out.ico");

    let outcome = session.save_cropped(CropRect::new(0, 0, 400, 300), &out);

    assert!(matches!(outcome, SaveOutcome::Failed(_)));
    assert!(!out.exists());
}
