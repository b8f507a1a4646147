//! Command-line converter: one image in, `a.xlsx` out.
//!
//! ```sh
//! pixelsheet photo.png
//! pixelsheet --blend-white logo.png
//! ```

use clap::Parser;
use pixelsheet::mapper::StdoutProgress;
use pixelsheet::{AlphaMode, Config, convert};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Paint every pixel of a JPEG or PNG image into a cell of an Excel sheet
#[derive(Parser, Debug)]
#[command(name = "pixelsheet", version)]
struct Args {
    /// Image to convert (.jpg, .jpeg or .png)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Composite translucent pixels over white instead of truncating them to black
    #[arg(long)]
    blend_white: bool,

    /// Anything after the image path is ignored
    #[arg(hide = true, trailing_var_arg = true)]
    _rest: Vec<OsString>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version land here too and are not failures
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        },
    };
    let Some(path) = args.path else {
        println!("Usage: pixelsheet <path-to-image>");
        return ExitCode::FAILURE;
    };

    let alpha_mode = if args.blend_white {
        AlphaMode::BlendWhite
    } else {
        AlphaMode::Truncate
    };
    let config = Config::default().with_alpha_mode(alpha_mode);

    match convert(&path, &config, &mut StdoutProgress) {
        Ok(_) => {
            println!("Done.");
            ExitCode::SUCCESS
        },
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        },
    }
}
