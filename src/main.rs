use rasterdiff::commands::{build_cli, report, CompareCommand};
use rasterdiff::config::DEFAULT_LOG_FILE;
use rasterdiff::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();
    let verbose = matches.get_flag("verbose");

    if let Err(e) = Logger::init_global_logger(DEFAULT_LOG_FILE, verbose) {
        eprintln!("Warning: global logger unavailable: {}", e);
    }

    // Step notes share the global log file
    let logger = match Logger::append_to(DEFAULT_LOG_FILE) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Warning: step log unavailable: {}", e);
            Logger::disabled()
        }
    };

    // Failures are reported on stdout and the process still exits normally
    println!("{}", report(CompareCommand::new(&matches, &logger)));
}
