//! Command line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

use crate::config::{DEFAULT_FIRST_IMAGE, DEFAULT_OUTPUT_FILE, DEFAULT_SECOND_IMAGE};

/// Build the clap command for the binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("rasterdiff")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Report pixels that gained or lost a label value between two rasters")
        .arg(
            Arg::new("first")
                .short('a')
                .long("first")
                .help(format!("Raster of the earlier snapshot [default: {}]", DEFAULT_FIRST_IMAGE))
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("second")
                .short('b')
                .long("second")
                .help(format!("Raster of the later snapshot [default: {}]", DEFAULT_SECOND_IMAGE))
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("value")
                .short('t')
                .long("value")
                .help("Pixel value to track [default: 104]")
                .value_name("VALUE")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help(format!("CSV file receiving the changes [default: {}]", DEFAULT_OUTPUT_FILE))
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML file with comparison settings")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("shape-policy")
                .long("shape-policy")
                .help("Handling of rasters with different shapes (reject, best-effort)")
                .value_name("POLICY")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Echo log records and progress to stderr")
                .action(ArgAction::SetTrue),
        )
}
