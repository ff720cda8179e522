//! Integration tests for the full comparison

use std::fs;
use std::path::PathBuf;

use image::{GrayImage, Luma};

use rasterdiff::api::ChangeDetector;
use rasterdiff::config::ComparisonConfig;
use rasterdiff::diff::ChangeDirection;
use rasterdiff::raster::RasterError;
use rasterdiff::utils::logger::Logger;
use rasterdiff::writer::{read_change_file, ChangeWriter, WriteMode};
use rasterdiff::coordinate::{Coordinate, CoordinateSet};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("rasterdiff_it_{}_{}", std::process::id(), name))
}

fn label_tiff(name: &str, pixels: &[(u32, u32)]) -> PathBuf {
    let mut image = GrayImage::from_pixel(3, 3, Luma([0]));
    for &(row, col) in pixels {
        image.put_pixel(col, row, Luma([104]));
    }
    let path = scratch_path(name);
    image.save(&path).unwrap();
    path
}

#[test]
fn test_complete_comparison_workflow() {
    let first = label_tiff("2016.tiff", &[(0, 0), (1, 1)]);
    let second = label_tiff("2021.tiff", &[(1, 1), (2, 2)]);
    let output = scratch_path("output.csv");
    let logger = Logger::new(scratch_path("integration_test.log")).unwrap();

    let config = ComparisonConfig::new(&first, &second, 104).with_output_file(&output);
    let summary = ChangeDetector::new(config, &logger).run().unwrap();
    assert_eq!(summary.disappeared, 1);
    assert_eq!(summary.appeared, 1);

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["lat,lon,value", "0,0,-1", "2,2,+1"]);

    let records = read_change_file(&output).unwrap();
    assert_eq!(records[0].coordinate, Coordinate::new(0, 0));
    assert_eq!(records[0].tag, ChangeDirection::Disappeared);
    assert_eq!(records[1].coordinate, Coordinate::new(2, 2));
    assert_eq!(records[1].tag, ChangeDirection::Appeared);

    for path in [first, second, output] {
        let _ = fs::remove_file(path);
    }
}

#[test]
fn test_identical_images_produce_header_only() {
    let first = label_tiff("same_a.tiff", &[(0, 2), (2, 0)]);
    let second = label_tiff("same_b.tiff", &[(0, 2), (2, 0)]);
    let output = scratch_path("same.csv");
    let logger = Logger::disabled();

    let config = ComparisonConfig::new(&first, &second, 104).with_output_file(&output);
    let summary = ChangeDetector::new(config, &logger).run().unwrap();

    assert_eq!((summary.disappeared, summary.appeared), (0, 0));
    assert_eq!(fs::read_to_string(&output).unwrap(), "lat,lon,value\n");
    assert!(read_change_file(&output).unwrap().is_empty());

    for path in [first, second, output] {
        let _ = fs::remove_file(path);
    }
}

#[test]
fn test_missing_image_fails_before_writing() {
    let second = label_tiff("only_second.tiff", &[(1, 1)]);
    let output = scratch_path("missing.csv");
    let logger = Logger::disabled();

    let config = ComparisonConfig::new(scratch_path("no_such.tiff"), &second, 104)
        .with_output_file(&output);
    let result = ChangeDetector::new(config, &logger).run();

    assert!(matches!(result, Err(RasterError::Decode { .. })));
    assert!(!output.exists());

    let _ = fs::remove_file(second);
}

#[test]
fn test_append_before_create_fails() {
    let output = scratch_path("append_first.csv");
    let coords: CoordinateSet = [Coordinate::new(0, 0)].into_iter().collect();

    let result = ChangeWriter::new(&output, 2).write(&coords, "+1", WriteMode::Append);
    match result {
        Err(e @ RasterError::AppendTargetMissing(_)) => {
            assert!(e.to_string().contains("No file found to append to"));
        },
        other => panic!("expected missing append target, got {:?}", other),
    }
    assert!(!output.exists());
}
