//! Coloris - expand inline `#NAME#` color markers.
//!
//! This binary provides the CLI interface to the coloris library,
//! reading marker-laden text from files or stdin and writing the
//! expanded text to stdout.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use coloris::{ColorMode, Coloris, ColorisError, PaletteConfig, Result};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Coloris v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    if cli.init {
        let path = PaletteConfig::ensure_palette_file()?;
        println!("{}", path.display());
        return Ok(());
    }

    // Load the palette, with CLI override if provided
    let config = PaletteConfig::load_with_override(cli.palette.as_deref())?;
    debug!("Loaded palette with {} entries", config.colors.len());

    if cli.print_palette {
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| ColorisError::Config(format!("Serialize error: {}", e)))?;
        print!("{}", toml_str);
        return Ok(());
    }

    // Resolve the color mode; in auto mode a non-tty stdout also
    // disables color, on top of the library's NO_COLOR handling.
    let mode = cli.color_mode().map_err(ColorisError::Config)?;
    let mut enabled = mode.resolve();
    if enabled && mode == ColorMode::Auto && !atty::is(atty::Stream::Stdout) {
        debug!("stdout is not a tty, disabling color");
        enabled = false;
    }
    debug!("Color mode {} resolved to enabled={}", mode, enabled);

    let ctx = Coloris::with_enabled(config.into_palette(), enabled);

    if cli.should_read_stdin() {
        run_stdin(&ctx)
    } else {
        run_files(cli, &ctx)
    }
}

/// Process input from stdin, line by line for streaming use.
fn run_stdin(ctx: &Coloris) -> Result<()> {
    info!("Reading from stdin");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut written = 0;

    for line in stdin.lock().lines() {
        let mut line = line?;
        line.push('\n');
        written += ctx.write_to(&mut stdout, &line)?;
    }

    debug!("Wrote {} bytes", written);
    Ok(())
}

/// Process input files.
fn run_files(cli: &Cli, ctx: &Coloris) -> Result<()> {
    let mut stdout = io::stdout();

    for path in &cli.files {
        info!("Processing file: {}", path.display());

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut output = Vec::new();
        for line in reader.lines() {
            let line = line?;
            ctx.write_to(&mut output, &line)?;
            output.push(b'\n');
        }

        // Write the whole file's output at once
        stdout.write_all(&output)?;
    }

    stdout.flush()?;
    Ok(())
}
