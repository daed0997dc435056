use colored::Colorize;
use env_logger::Builder;
use log::Level;
use std::io::Write;

/// Crate at `Info` (or `Debug` when verbose), dependencies at `Warn`; `RUST_LOG` is parsed last, so a
/// bare level replaces the dependency default and `bytefreq=..` replaces the crate's. Safe to call more than once.
pub fn setup_logging(verbose: bool) {
    use log::LevelFilter;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let _ = Builder::new()
        .filter_level(LevelFilter::Warn) // Default: only warnings from dependencies
        .filter_module(env!("CARGO_CRATE_NAME"), level)
        .parse_default_env()
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let line = match record.level() {
                Level::Error | Level::Warn => {
                    let level_str = match record.level() {
                        Level::Warn => "WARN".yellow(),
                        Level::Error => "ERROR".red(),
                        _ => unreachable!(),
                    };
                    let path = record.target().to_string().white();
                    format!("[{} {} {}] {}", name.cyan(), level_str, path, record.args())
                }
                Level::Debug | Level::Trace => {
                    format!("[{} {}] {}", name.cyan(), "DEBUG".dimmed(), record.args())
                }
                _ => format!("[{}] {}", name.cyan(), record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .try_init();
}
