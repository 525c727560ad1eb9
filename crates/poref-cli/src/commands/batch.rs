//! Batch command - parse multiple input files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use tracing::{debug, error};

use poref_core::{response_body, FormatParser};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory (default: print to stdout, one body per line)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Keep going when a file cannot be read
    #[arg(long)]
    continue_on_error: bool,
}

pub async fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    let files: Vec<PathBuf> = glob(&args.input)?.filter_map(|r| r.ok()).collect();
    if files.is_empty() {
        anyhow::bail!("no files match: {}", args.input);
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let parser = FormatParser::new();
    let mut parsed = 0usize;
    let mut failed = 0usize;

    for path in &files {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                error!("cannot read {}: {e}", path.display());
                if args.continue_on_error {
                    failed += 1;
                    continue;
                }
                anyhow::bail!("cannot read {}: {e}", path.display());
            }
        };

        let outcome = parser.parse(&text);
        if outcome.is_err() {
            failed += 1;
        } else {
            parsed += 1;
        }
        debug!("{}: {:?}", path.display(), outcome);

        let rendered = serde_json::to_string(&response_body(&outcome))?;
        match &args.output_dir {
            Some(dir) => {
                let name = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("input");
                fs::write(dir.join(format!("{name}.json")), rendered + "\n")?;
            }
            None => println!("{rendered}"),
        }
    }

    eprintln!(
        "{} {} parsed, {} failed in {:.2}s",
        style("done:").green().bold(),
        parsed,
        failed,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
