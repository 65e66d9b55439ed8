use colour_isolator::{convert_image_format, ConversionArguments, Error};
use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::path::Path;

fn conversion(input_file: &Path, format: &str) -> ConversionArguments {
    let mut arguments = ConversionArguments::new(input_file);
    arguments.format = format.to_owned();
    arguments
}

fn sample_image() -> RgbImage {
    RgbImage::from_fn(3, 2, |x, y| Rgb([(x * 80) as u8, (y * 120) as u8, 30]))
}

#[test]
fn convert_bmp_to_png_replaces_original() {
    let directory = tempfile::tempdir().unwrap();
    let input_file = directory.path().join("picture.bmp");
    sample_image().save(&input_file).unwrap();

    let output_file = convert_image_format(&ConversionArguments::new(&input_file)).unwrap();

    assert_eq!(output_file, directory.path().join("picture.png"));
    assert!(!input_file.exists(), "Original file was not deleted");
    assert_eq!(
        ImageFormat::from_path(&output_file).unwrap(),
        ImageFormat::Png
    );
    assert_eq!(image::open(&output_file).unwrap().to_rgb8(), sample_image());
}

#[test]
fn convert_png_to_bmp_drops_alpha() {
    let directory = tempfile::tempdir().unwrap();
    let input_file = directory.path().join("overlay.png");
    RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 100]))
        .save(&input_file)
        .unwrap();

    let output_file = convert_image_format(&conversion(&input_file, "bmp")).unwrap();

    assert_eq!(output_file, directory.path().join("overlay.bmp"));
    assert!(!input_file.exists());
    let converted = image::open(&output_file).unwrap();
    assert_eq!(converted.color(), image::ColorType::Rgb8);
    assert!(converted
        .to_rgb8()
        .pixels()
        .all(|pixel| pixel.0 == [1, 2, 3]));
}

#[test]
fn matching_extension_is_left_alone() {
    let directory = tempfile::tempdir().unwrap();
    let input_file = directory.path().join("already.png");
    sample_image().save(&input_file).unwrap();
    let before = fs::read(&input_file).unwrap();

    let output_file = convert_image_format(&conversion(&input_file, "png")).unwrap();

    assert_eq!(output_file, input_file);
    assert_eq!(fs::read(&input_file).unwrap(), before);
}

#[test]
fn matching_extension_skips_format_check() {
    let directory = tempfile::tempdir().unwrap();
    // the codec cannot write this format, and the content is not even an image
    let input_file = directory.path().join("notes.doc");
    fs::write(&input_file, b"plain text").unwrap();

    let output_file = convert_image_format(&conversion(&input_file, "doc")).unwrap();

    assert_eq!(output_file, input_file);
    assert!(input_file.exists());
}

#[test]
fn target_format_is_case_insensitive() {
    let directory = tempfile::tempdir().unwrap();
    let input_file = directory.path().join("upper.bmp");
    sample_image().save(&input_file).unwrap();

    let output_file = convert_image_format(&conversion(&input_file, "PNG")).unwrap();

    assert_eq!(output_file, directory.path().join("upper.png"));
    assert!(output_file.exists());
}

#[test]
fn missing_file_is_reported_before_format() {
    let directory = tempfile::tempdir().unwrap();
    let input_file = directory.path().join("ghost.bmp");

    let result = convert_image_format(&conversion(&input_file, "unknown"));

    assert!(matches!(result, Err(Error::FileNotFound(_))));
}

#[test]
fn unsupported_target_keeps_original() {
    let directory = tempfile::tempdir().unwrap();
    let input_file = directory.path().join("keep.png");
    sample_image().save(&input_file).unwrap();

    let result = convert_image_format(&conversion(&input_file, "docx"));

    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    assert!(input_file.exists());
    assert!(!directory.path().join("keep.docx").exists());
}

#[test]
fn undecodable_source_is_not_deleted() {
    let directory = tempfile::tempdir().unwrap();
    let input_file = directory.path().join("broken.bmp");
    fs::write(&input_file, b"not a bitmap").unwrap();

    let result = convert_image_format(&ConversionArguments::new(&input_file));

    assert!(matches!(result, Err(Error::UnableToDecodeImage(..))));
    assert!(input_file.exists());
    assert!(!directory.path().join("broken.png").exists());
}
