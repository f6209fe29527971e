use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use calibra::analysis::pipeline::{self, MeanPolicy, PipelineOptions};
use calibra::data::loader;
use calibra::report;

/// Sample sheets a calibration workbook is expected to carry when no ids
/// are given on the command line.
const DEFAULT_SAMPLES: [&str; 4] = ["Amostra1", "Amostra2", "Amostra3", "Amostra4"];

const USAGE: &str = "\
Usage: calibra [OPTIONS] <WORKBOOK> [SAMPLE_ID...]

  WORKBOOK    a .json workbook, a .csv table, or a directory of .csv tables
  SAMPLE_ID   expected sample sheets (default: Amostra1..Amostra4)

Options:
  --json               emit the result as JSON instead of a text table
  --mean-over-fitted   average R² over fitted samples only, instead of
                       over every expected sample
  -h, --help           show this help";

struct Cli {
    workbook: PathBuf,
    sample_ids: Vec<String>,
    json: bool,
    mean_policy: MeanPolicy,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Option<Cli>> {
    let mut workbook = None;
    let mut sample_ids = Vec::new();
    let mut json = false;
    let mut mean_policy = MeanPolicy::OverExpected;

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--json" => json = true,
            "--mean-over-fitted" => mean_policy = MeanPolicy::OverFitted,
            other if other.starts_with('-') => bail!("unknown option '{other}'\n\n{USAGE}"),
            _ if workbook.is_none() => workbook = Some(PathBuf::from(arg)),
            _ => sample_ids.push(arg),
        }
    }

    let workbook = workbook.with_context(|| format!("missing workbook path\n\n{USAGE}"))?;
    if sample_ids.is_empty() {
        sample_ids = DEFAULT_SAMPLES.iter().map(|s| s.to_string()).collect();
    }

    Ok(Some(Cli {
        workbook,
        sample_ids,
        json,
        mean_policy,
    }))
}

fn main() -> Result<()> {
    env_logger::init();

    let Some(cli) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    let workbook = loader::load_file(&cli.workbook)
        .with_context(|| format!("loading {}", cli.workbook.display()))?;
    log::info!(
        "Loaded {} table(s) from {}",
        workbook.len(),
        cli.workbook.display()
    );

    let options = PipelineOptions {
        mean_policy: cli.mean_policy,
    };
    let result = pipeline::run(&cli.sample_ids, &workbook, &options);

    let mut stdout = std::io::stdout().lock();
    if cli.json {
        report::write_json(&mut stdout, &result)?;
    } else {
        report::write_text(&mut stdout, &result)?;
    }
    Ok(())
}
