//! Reading change files back

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::coordinate::Coordinate;
use crate::diff::ChangeDirection;
use crate::raster::errors::{RasterError, RasterResult};

use super::csv_writer::{CHANNEL_LABEL, LATITUDE_LABEL, LONGITUDE_LABEL, VALUE_LABEL};

/// One data row of a change file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Position of the changed sample
    pub coordinate: Coordinate,
    /// Direction parsed from the value column
    pub tag: ChangeDirection,
}

/// Read all data rows of a change file, in file order
///
/// # Arguments
/// * `path` - CSV file written by `ChangeWriter`
///
/// # Returns
/// The records, or an error if the header or a row is malformed
pub fn read_change_file<P: AsRef<Path>>(path: P) -> RasterResult<Vec<ChangeRecord>> {
    let path = path.as_ref();
    let mut lines = BufReader::new(File::open(path)?).lines();

    let header = lines.next().transpose()?.ok_or_else(|| {
        RasterError::GenericError(format!("{} is empty, expected a header", path.display()))
    })?;
    let has_channel = match header.trim_end().split(',').collect::<Vec<_>>().as_slice() {
        [lat, lon, value] if *lat == LATITUDE_LABEL && *lon == LONGITUDE_LABEL && *value == VALUE_LABEL => false,
        [lat, lon, channel, value] if *lat == LATITUDE_LABEL && *lon == LONGITUDE_LABEL
            && *channel == CHANNEL_LABEL && *value == VALUE_LABEL => true,
        _ => return Err(RasterError::GenericError(format!("Unexpected header in {}: {}", path.display(), header))),
    };

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // Header is line 1
        records.push(parse_row(&line, has_channel, index + 2)?);
    }

    Ok(records)
}

fn parse_row(line: &str, has_channel: bool, line_number: usize) -> RasterResult<ChangeRecord> {
    let fields: Vec<&str> = line.trim_end().split(',').collect();
    let expected = if has_channel { 4 } else { 3 };
    if fields.len() != expected {
        return Err(RasterError::GenericError(format!(
            "Line {}: expected {} fields, found {}", line_number, expected, fields.len()
        )));
    }

    let parse = |field: &str| field.parse::<u32>().map_err(|_| {
        RasterError::GenericError(format!("Line {}: invalid coordinate '{}'", line_number, field))
    });

    let coordinate = if has_channel {
        Coordinate::with_channel(parse(fields[0])?, parse(fields[1])?, parse(fields[2])?)
    } else {
        Coordinate::new(parse(fields[0])?, parse(fields[1])?)
    };

    let tag_field = fields[expected - 1];
    let tag = ChangeDirection::from_tag(tag_field).ok_or_else(|| {
        RasterError::GenericError(format!("Line {}: unknown change tag '{}'", line_number, tag_field))
    })?;

    Ok(ChangeRecord { coordinate, tag })
}
