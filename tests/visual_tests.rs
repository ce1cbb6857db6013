#![cfg(feature = "demo")]

use std::path::PathBuf;
use yuyv_parity::Window;
use yuyv_parity::demo::{DemoConfig, run, synthetic_bgr};

fn small_config(name: &str) -> DemoConfig {
    DemoConfig {
        input: PathBuf::from("tests/this_image_does_not_exist.jpg"),
        output_dir: PathBuf::from("tests/output").join(name),
        synthetic_size: 300,
        seed: 42,
        min_side: 400,
        resize_to: 420,
        even_window: Window {
            x: 200,
            y: 200,
            width: 100,
            height: 100,
        },
        odd_window: Window {
            x: 201,
            y: 201,
            width: 101,
            height: 101,
        },
    }
}

#[test]
fn demo_writes_all_images() {
    let config = small_config("demo");

    let report = run(&config).unwrap();

    assert_eq!(report.packed_width, 420);
    assert_eq!(report.packed_height, 420);

    let names: Vec<_> = report
        .written
        .iter()
        .map(|path| path.file_name().unwrap().to_str().unwrap().to_owned())
        .collect();

    assert_eq!(
        names,
        [
            "result_even_crop.jpg",
            "result_even_crop_color.jpg",
            "result_odd_crop.jpg",
            "result_odd_crop_wrong_color.jpg",
            "result_wrong_format_garbage.jpg",
        ]
    );

    for path in &report.written {
        assert!(path.exists(), "{} missing", path.display());
    }

    let odd_crop = image::open(config.output_dir.join("result_odd_crop.jpg")).unwrap();
    assert_eq!((odd_crop.width(), odd_crop.height()), (101, 101));

    // Color decode of the odd width crop fell back to its even part
    let odd_color = image::open(config.output_dir.join("result_odd_crop_wrong_color.jpg")).unwrap();
    assert_eq!((odd_color.width(), odd_color.height()), (100, 100));
    assert_eq!(report.failures.len(), 1);

    assert_eq!(report.misread_offset, 201 * 420 + 201);
    assert_eq!(report.intended_offset, 201 * 840 + 402);
}

#[test]
fn demo_keeps_going_when_a_window_does_not_fit() {
    let mut config = small_config("out_of_bounds");
    config.odd_window.x = 400;

    let report = run(&config).unwrap();

    let names: Vec<_> = report
        .written
        .iter()
        .map(|path| path.file_name().unwrap().to_str().unwrap().to_owned())
        .collect();

    assert_eq!(
        names,
        ["result_even_crop.jpg", "result_even_crop_color.jpg"]
    );

    // The YUYV odd crop and the single channel crop
    assert_eq!(report.failures.len(), 2);
    assert!(report.failures.iter().all(|f| f.contains("out of the parent")));
}

#[test]
fn default_windows_fit_resized_input() {
    let defaults = DemoConfig::default();

    // Input too small, resized to the default target
    let config = DemoConfig {
        input: PathBuf::from("tests/this_image_does_not_exist.jpg"),
        output_dir: PathBuf::from("tests/output/defaults"),
        synthetic_size: 64,
        ..defaults.clone()
    };

    let report = run(&config).unwrap();

    assert_eq!(report.packed_width, defaults.resize_to);
    assert_eq!(report.packed_height, defaults.resize_to);
    assert_eq!(report.written.len(), 5);

    // Only the odd width color decode falls back to its even part
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].starts_with("odd crop in color"));

    assert_eq!(report.misread_offset, 1001 * 2500 + 1001);
    assert_eq!(report.intended_offset, 1001 * 5000 + 2002);
}

#[test]
fn default_windows_fit_min_side() {
    let config = DemoConfig::default();

    for window in [config.even_window, config.odd_window] {
        assert!(window.x + window.width <= config.min_side);
        assert!(window.y + window.height <= config.min_side);
    }

    assert!(config.min_side <= config.resize_to);
    assert!(config.min_side <= config.synthetic_size);
}

#[test]
fn synthetic_image_is_reproducible() {
    let a = synthetic_bgr(128, 3);
    let b = synthetic_bgr(128, 3);

    assert_eq!(a.buffer(), b.buffer());
}
