//! Raster comparison command
//!
//! This module implements the command comparing two snapshots and writing
//! the changed coordinates to CSV.

use clap::ArgMatches;
use log::{debug, info};

use crate::api::ChangeDetector;
use crate::commands::command_traits::Command;
use crate::config::{ComparisonConfig, ShapePolicy};
use crate::raster::errors::RasterResult;
use crate::utils::logger::Logger;

/// Command for comparing two raster snapshots
pub struct CompareCommand<'a> {
    /// Resolved comparison inputs
    config: ComparisonConfig,
    /// Draw progress bars while scanning
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CompareCommand<'a> {
    /// Create a new compare command
    ///
    /// Values come from the defaults, then the `--config` file, then the
    /// individual flags, later sources winning.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new CompareCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RasterResult<Self> {
        let mut config = match args.get_one::<String>("config") {
            Some(path) => ComparisonConfig::from_toml_file(path)?,
            None => ComparisonConfig::default(),
        };

        if let Some(first) = args.get_one::<String>("first") {
            config.first_image = first.into();
        }
        if let Some(second) = args.get_one::<String>("second") {
            config.second_image = second.into();
        }
        if let Some(value) = args.get_one::<String>("value") {
            config.target_value = ComparisonConfig::parse_target_value(value)?;
        }
        if let Some(output) = args.get_one::<String>("output") {
            config.output_file = output.into();
        }
        if let Some(policy) = args.get_one::<String>("shape-policy") {
            config.shape_policy = policy.parse::<ShapePolicy>()?;
        }
        debug!("Resolved configuration: {:?}", config);

        Ok(CompareCommand {
            config,
            verbose: args.get_flag("verbose"),
            logger,
        })
    }

    /// Configuration the command will run with
    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }
}

impl<'a> Command for CompareCommand<'a> {
    fn execute(&self) -> RasterResult<String> {
        info!("Executing compare command");

        let detector = ChangeDetector::new(self.config().clone(), self.logger)
            .with_progress(self.verbose);
        let summary = detector.run()?;

        info!("Comparison finished: {} disappeared, {} appeared", summary.disappeared, summary.appeared);
        Ok(format!("Success! Output file written to {}", summary.output_file.display()))
    }
}
