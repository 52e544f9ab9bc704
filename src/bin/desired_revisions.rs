//! Resolve desired revisions for a batch request.
//!
//! Reads a JSON request (update config, freight selection, live applications)
//! from a file or stdin and prints one NDJSON line per configured app:
//! `{"app": "...", "revisions": [...]}`. Unresolved sources appear as `""`.

use anyhow::{Context, Result, anyhow, bail};
use revpin::ResolutionRequest;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    let input = args.source.read()?;
    let request = ResolutionRequest::from_slice(&input)?;

    for entry in request.resolve()? {
        println!("{}", serde_json::to_string(&entry)?);
    }
    Ok(())
}

struct CliArgs {
    source: InputSource,
}

enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    fn read(&self) -> Result<Vec<u8>> {
        match self {
            InputSource::File(path) => {
                if !path.is_file() {
                    bail!("input file not found: {}", path.display());
                }
                fs::read(path).with_context(|| format!("reading {}", path.display()))
            }
            InputSource::Stdin => {
                let mut buf = Vec::new();
                io::stdin()
                    .read_to_end(&mut buf)
                    .context("reading stdin")?;
                Ok(buf)
            }
        }
    }
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut source: Option<InputSource> = None;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--input" | "-i" => {
                    let path = next_value(&mut args, "--input")?;
                    if source.is_some() {
                        bail!("input may only be provided once");
                    }
                    source = Some(if path == "-" {
                        InputSource::Stdin
                    } else {
                        InputSource::File(PathBuf::from(path))
                    });
                }
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}\n{}", usage()),
            }
        }

        Ok(CliArgs {
            source: source.unwrap_or(InputSource::Stdin),
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: desired-revisions [--input PATH|-]\n\
Reads a resolution request as JSON (default: stdin) and prints one line per configured app with the revision each declared source should run.\n"
}
