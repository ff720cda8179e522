//! Tests for the grid scan

use crate::coordinate::{Coordinate, CoordinateSet};
use crate::raster::errors::RasterError;
use crate::raster::grid::{GridSamples, GridShape, RasterGrid};
use crate::utils::progress::ProgressTracker;

fn grid_u8(height: u32, width: u32, samples: Vec<u8>) -> RasterGrid {
    RasterGrid::new(GridShape::new(height, width, 1), GridSamples::U8(samples)).unwrap()
}

#[test]
fn test_find_value_single_channel() {
    let grid = grid_u8(3, 3, vec![
        104, 0, 0,
        0, 104, 0,
        0, 0, 7,
    ]);

    let found = grid.find_value(104, &ProgressTracker::hidden()).unwrap();
    let expected: CoordinateSet = [Coordinate::new(0, 0), Coordinate::new(1, 1)].into_iter().collect();
    assert_eq!(found, expected);
}

#[test]
fn test_find_value_without_matches_is_empty() {
    let grid = grid_u8(2, 2, vec![1, 2, 3, 4]);
    let found = grid.find_value(104, &ProgressTracker::hidden()).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_find_value_multi_channel_reports_channel_axis() {
    // 1 row, 2 columns, 3 channels
    let grid = RasterGrid::new(
        GridShape::new(1, 2, 3),
        GridSamples::U8(vec![5, 0, 5, 0, 5, 0]),
    ).unwrap();

    let found = grid.find_value(5, &ProgressTracker::hidden()).unwrap();
    let expected: CoordinateSet = [
        Coordinate::with_channel(0, 0, 0),
        Coordinate::with_channel(0, 0, 2),
        Coordinate::with_channel(0, 1, 1),
    ].into_iter().collect();
    assert_eq!(found, expected);
}

#[test]
fn test_find_value_advances_progress_per_row() {
    let grid = grid_u8(4, 2, vec![0; 8]);
    let progress = ProgressTracker::hidden();
    grid.find_value(0, &progress).unwrap();
    assert_eq!(progress.position(), 4);
}

#[test]
fn test_out_of_range_target_is_type_mismatch() {
    let grid = grid_u8(1, 1, vec![0]);

    match grid.find_value(300, &ProgressTracker::hidden()) {
        Err(RasterError::TypeMismatch { target, element_type }) => {
            assert_eq!(target, 300);
            assert_eq!(element_type, "u8");
        },
        other => panic!("expected type mismatch, got {:?}", other),
    }
    assert!(matches!(
        grid.find_value(-1, &ProgressTracker::hidden()),
        Err(RasterError::TypeMismatch { .. })
    ));
}

#[test]
fn test_u16_and_f32_grids() {
    let wide = RasterGrid::new(GridShape::new(1, 2, 1), GridSamples::U16(vec![1000, 3])).unwrap();
    let found = wide.find_value(1000, &ProgressTracker::hidden()).unwrap();
    assert!(found.contains(&Coordinate::new(0, 0)));

    let float = RasterGrid::new(GridShape::new(1, 2, 1), GridSamples::F32(vec![0.5, -2.0])).unwrap();
    let found = float.find_value(-2, &ProgressTracker::hidden()).unwrap();
    assert_eq!(found.len(), 1);
    assert!(found.contains(&Coordinate::new(0, 1)));

    assert!(matches!(
        float.find_value(1 << 30, &ProgressTracker::hidden()),
        Err(RasterError::TypeMismatch { element_type: "f32", .. })
    ));
}

#[test]
fn test_extreme_targets_on_float_grid_are_type_mismatch() {
    let float = RasterGrid::new(GridShape::new(1, 1, 1), GridSamples::F32(vec![0.0])).unwrap();

    for target in [i64::MIN, i64::MAX, (1 << 24) + 1, -(1 << 24) - 1] {
        assert!(matches!(
            float.find_value(target, &ProgressTracker::hidden()),
            Err(RasterError::TypeMismatch { element_type: "f32", .. })
        ));
    }
    assert!(float.find_value(-(1 << 24), &ProgressTracker::hidden()).unwrap().is_empty());
}

#[test]
fn test_sample_count_must_match_shape() {
    let result = RasterGrid::new(GridShape::new(2, 2, 1), GridSamples::U8(vec![0; 3]));
    assert!(result.is_err());
}

#[test]
fn test_shape_axis_count_and_display() {
    assert_eq!(GridShape::new(10, 20, 1).axis_count(), 2);
    assert_eq!(GridShape::new(10, 20, 3).axis_count(), 3);
    assert_eq!(GridShape::new(10, 20, 1).to_string(), "10x20");
    assert_eq!(GridShape::new(10, 20, 4).to_string(), "10x20x4");
}
