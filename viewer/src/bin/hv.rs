// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `hv`: render an HTTP exchange (JSON) into a preview document.
//!
//! ```text
//! hv exchange.json                        # document to stdout
//! hv exchange.json -o preview.html        # document to a file
//! hv - --preview headers < exchange.json  # stdin, headers only
//! ```

use std::{fs, io::Read as _, path::PathBuf};

use clap::Parser;
use httpview::{AssetPaths, CommonResult, Exchange, ExchangePreview, PreviewMode, Settings};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "hv",
    version,
    about = "Render an HTTP exchange into a line-numbered, foldable, \
             syntax-highlighted preview document"
)]
struct CliArgs {
    /// Exchange JSON file; `-` reads from stdin.
    exchange: PathBuf,

    /// Settings JSON file (host-editor settings schema).
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Override the preview mode: exchange, headers, body, or full.
    #[arg(short, long)]
    preview: Option<PreviewMode>,

    /// Write the document here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stylesheet path referenced by the document.
    #[arg(long, default_value = "assets/preview.css")]
    stylesheet: String,

    /// Fold script path referenced by the document.
    #[arg(long, default_value = "assets/fold.js")]
    script: String,
}

fn main() -> CommonResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let exchange_json = if args.exchange.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .into_diagnostic()?;
        buf
    } else {
        fs::read_to_string(&args.exchange).into_diagnostic()?
    };
    let exchange = Exchange::from_json(&exchange_json).into_diagnostic()?;

    let mut settings = match &args.settings {
        Some(path) => {
            let settings_json = fs::read_to_string(path).into_diagnostic()?;
            Settings::from_json(&settings_json).into_diagnostic()?
        }
        None => Settings::default(),
    };
    if let Some(preview_mode) = args.preview {
        settings.preview_option = preview_mode;
    }

    let assets = AssetPaths {
        stylesheet: args.stylesheet,
        script: args.script,
    };
    let document = ExchangePreview::new(settings, assets).render(Some(&exchange));

    match &args.output {
        Some(path) => fs::write(path, document).into_diagnostic()?,
        None => println!("{document}"),
    }

    Ok(())
}
