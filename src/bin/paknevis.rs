//! Fix Persian text files from the command line.
//!
//! Usage:
//!   paknevis input.txt --output fixed.txt
//!   cat input.txt | paknevis --dict DocumentList.json --enable fix_dict
//!   paknevis input.txt --config TextFixer.conf --disable fix_quotes --save-config

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use rust_fa_clean::{Pipeline, ReplacementDictionary, Rule, RuleConfig, report};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "paknevis", about = "Normalize Persian text", version)]
struct Args {
    /// Input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Output file; writes stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rule configuration file (`key=0|1` per line)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Replacement dictionary (JSON word list or XML block-list)
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// Enable a rule by key, e.g. `fix_dict`
    #[arg(long, value_name = "RULE")]
    enable: Vec<String>,

    /// Disable a rule by key
    #[arg(long, value_name = "RULE")]
    disable: Vec<String>,

    /// Write the effective configuration back to `--config`
    #[arg(long, requires = "config")]
    save_config: bool,

    /// Also save the report to a timestamped file in this directory
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// Do not print the report
    #[arg(short, long)]
    quiet: bool,
}

fn parse_rule(key: &str) -> Result<Rule> {
    match Rule::from_key(key) {
        Some(rule) => Ok(rule),
        None => {
            let known: Vec<&str> = Rule::ALL.iter().map(|r| r.key()).collect();
            bail!("unknown rule `{}` (known: {})", key, known.join(", "))
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RuleConfig::load_or_default(path),
        None => RuleConfig::default(),
    };
    for key in &args.enable {
        config.set(parse_rule(key)?, true);
    }
    for key in &args.disable {
        config.set(parse_rule(key)?, false);
    }
    if args.save_config {
        if let Some(path) = &args.config {
            config
                .save(path)
                .with_context(|| format!("saving configuration to {}", path.display()))?;
            info!("Saved configuration to {}", path.display());
        }
    }

    let dictionary = match &args.dict {
        Some(path) => ReplacementDictionary::load_or_empty(path),
        None => ReplacementDictionary::empty(),
    };

    let input = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let pipeline = Pipeline::new(config, dictionary);
    let (fixed, counters) = pipeline.apply_text(&input);

    match &args.output {
        Some(path) => {
            fs::write(path, &fixed).with_context(|| format!("writing {}", path.display()))?
        }
        None => io::stdout()
            .write_all(fixed.as_bytes())
            .context("writing stdout")?,
    }

    if !args.quiet {
        eprintln!("{}", report::render(&counters));
    }
    if let Some(dir) = &args.report_dir {
        let path = report::write_timestamped(dir, &counters)
            .with_context(|| format!("writing report to {}", dir.display()))?;
        info!("Report written to {}", path.display());
    }

    Ok(())
}
