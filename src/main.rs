use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;

use passgas::io_utils::{io_cli_error, passgas_cli_error, simple_cli_error};
use passgas::{
    filter_candidates, generate_candidates, input, writer, FileConfig, GenParams, Policy,
    RunStats,
};

const BANNER: &str = r#"
                                  _ __   __ _ ___ ___ __ _  __ _ ___
                                 | '_ \ / _` / __/ __/ _` |/ _` / __|
                                 | |_) | (_| \__ \__ \ (_| | (_| \__ \
                                 | .__/ \__,_|___/___/\__, |\__,_|___/
                                 |_|                  |___/
                  wordlists from what people actually pick passwords from
"#;

/// Generate candidate password wordlists from per-subject biographical data.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input CSV file with one subject per row
    #[arg(short, long, conflicts_with = "interactive")]
    csv_file: Option<PathBuf>,

    /// Prompt for a single subject on stdin instead of reading a CSV
    #[arg(short, long)]
    interactive: bool,

    /// Directory for the per-subject and master wordlists
    #[arg(short, long, default_value = "custom_passwords")]
    output_dir: PathBuf,

    /// Maximum repetitions of special characters per padding sequence
    #[arg(short = 'r', long)]
    max_special_repeats: Option<usize>,

    /// Hard cap on candidates generated per subject
    #[arg(long)]
    cap: Option<usize>,

    /// Optional JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drop candidates shorter than this many characters
    #[arg(long)]
    min_length: Option<usize>,

    /// Drop candidates without an uppercase letter
    #[arg(long)]
    require_uppercase: bool,

    /// Drop candidates without a decimal digit
    #[arg(long)]
    require_numeric: bool,

    /// Drop candidates without a special character
    #[arg(long)]
    require_special: bool,

    /// Suppress the banner, progress bar and summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if !args.quiet {
        eprintln!("{BANNER}");
    }

    let mut params = GenParams::default();
    let mut policy = Policy::default();
    if let Some(path) = &args.config {
        let cfg = FileConfig::load(path)
            .map_err(|e| passgas_cli_error("loading configuration", e))?;
        cfg.apply(&mut params)
            .map_err(|e| passgas_cli_error("applying configuration", e))?;
        if let Some(p) = cfg.policy {
            policy = p;
        }
    }
    if let Some(r) = args.max_special_repeats {
        params.max_special_repeats = r;
    }
    if let Some(cap) = args.cap {
        params.candidate_cap = Some(cap);
    }
    if let Some(len) = args.min_length {
        policy.min_length = len;
    }
    policy.require_uppercase |= args.require_uppercase;
    policy.require_numeric |= args.require_numeric;
    policy.require_special |= args.require_special;

    let records = if args.interactive {
        let stdin = io::stdin();
        let mut lines = stdin.lock();
        let record = input::prompt_record(&mut lines, &mut io::stderr())
            .map_err(|e| passgas_cli_error("reading prompts", e))?;
        vec![record]
    } else {
        let path = args
            .csv_file
            .as_ref()
            .ok_or_else(|| simple_cli_error("Provide a CSV file with -c or use -i for prompts."))?;
        input::read_csv(path).map_err(|e| match e {
            passgas::PassgasError::Io(io) => {
                Box::new(io_cli_error("reading input file", path, io)) as Box<dyn std::error::Error>
            }
            other => Box::new(passgas_cli_error("reading subjects", other)),
        })?
    };

    let master_path = writer::prepare_output_dir(&args.output_dir)
        .map_err(|e| passgas_cli_error("creating output directory", e))?;

    let bar = if args.quiet || records.len() < 2 {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(records.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} subjects {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    };

    let mut stats = RunStats::new();
    let mut master = std::collections::HashSet::new();
    for (index, record) in records.iter().enumerate() {
        stats.tick_subject(record.is_blank());
        let raw = generate_candidates(record, &params);
        let kept = filter_candidates(&raw, &policy, &params.special_chars);
        stats.log_generation(raw.len(), kept.len());

        let path = args.output_dir.join(writer::subject_filename(record, index));
        writer::write_wordlist(&path, &kept)
            .map_err(|e| passgas_cli_error("writing wordlist", e))?;
        stats.tick_file();

        master.extend(kept);
        bar.inc(1);
    }
    bar.finish_and_clear();

    writer::write_wordlist(&master_path, &master)
        .map_err(|e| passgas_cli_error("writing master list", e))?;
    stats.tick_file();

    if !args.quiet {
        stats.report(master.len());
        eprintln!("Wordlists saved to {}", args.output_dir.display());
    }
    Ok(())
}
