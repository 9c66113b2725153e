use anyhow::{Context, Result};
use clap::ArgAction;
use std::{
    fs,
    io::{self, Read, Write},
};
use text_cleaner::{cleaners::names, CleanerConfig, Pipeline};
use tracing_subscriber::EnvFilter;

// cargo run --bin clean_text_cli -- --steps html,all_whitespace --input opinion.html

pub fn main() -> Result<()> {
    let matches = clap::Command::new("Text Cleaner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Applies cleaning steps to a document and prints the result")
        .arg(
            clap::Arg::new("steps")
                .help("Comma separated cleaning steps, applied in order")
                .long("steps")
                .value_delimiter(',')
                .conflicts_with("config"),
        )
        .arg(
            clap::Arg::new("config")
                .help("TOML file with a `steps` list")
                .long("config"),
        )
        .arg(
            clap::Arg::new("input")
                .help("Document to clean; reads stdin when omitted")
                .long("input"),
        )
        .arg(
            clap::Arg::new("list")
                .help("Print the built-in step names and exit")
                .long("list")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .help("Log each step at debug level")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let env_filter = if matches.get_flag("verbose") {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    if matches.get_flag("list") {
        for name in names() {
            println!("{name}");
        }
        return Ok(());
    }

    let pipeline = if let Some(path) = matches.get_one::<String>("config") {
        Pipeline::from_config(&CleanerConfig::load(path)?)
    } else {
        let steps = matches
            .get_many::<String>("steps")
            .map(|steps| steps.cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        Pipeline::from_names(steps)
    };
    pipeline.validate()?;

    let text = match matches.get_one::<String>("input") {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };

    write_cleaned(io::stdout().lock(), &pipeline.run(&text)?)
        .context("Failed to write cleaned text")?;
    Ok(())
}

/// Writes exactly the cleaned text, with no trailing newline.
fn write_cleaned<W: Write>(mut out: W, cleaned: &str) -> io::Result<()> {
    out.write_all(cleaned.as_bytes())?;
    out.flush()
}
