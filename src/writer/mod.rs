//! Change file output
//!
//! Writes changed coordinates as CSV rows and reads them back.

mod csv_writer;
mod records;

pub use csv_writer::{ChangeWriter, WriteMode, CHANNEL_LABEL, LATITUDE_LABEL, LONGITUDE_LABEL, VALUE_LABEL};
pub use records::{read_change_file, ChangeRecord};
