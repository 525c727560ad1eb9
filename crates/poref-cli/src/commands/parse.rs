//! Parse command - extract records from a single input.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use poref_core::{response_body, FormatParser};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON body
    #[arg(short, long)]
    pretty: bool,
}

pub async fn run(args: ParseArgs) -> anyhow::Result<()> {
    let text = read_input(args.input.as_deref())?;
    info!("parsing {} bytes of input", text.len());

    let parser = FormatParser::new();
    let body = response_body(&parser.parse(&text));

    // Parse-level failures are still a response body, not a process
    // failure; only I/O faults exit non-zero.
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&body)?
    } else {
        serde_json::to_string(&body)?
    };

    match args.output {
        Some(path) => fs::write(&path, rendered + "\n")?,
        None => println!("{rendered}"),
    }

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            fs::read_to_string(p).map_err(|e| anyhow::anyhow!("cannot read {}: {e}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
