use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use strokeprep::{
    DirSink, Entry, FailurePolicy, PipelineOpts, Progress, RemoteConfig, Source, StrokeError,
};

const BAR_WIDTH: usize = 20;

#[derive(Parser, Debug)]
#[command(name = "strokeprep", version, about = "Flip hanzi stroke data into a top-down frame")]
struct Cli {
    /// `https://github.com/<owner>/<repo>[/<folder>]` or a local directory.
    source: String,

    /// Output directory (created if missing).
    destination: PathBuf,

    /// Branch of a GitHub source. Defaults to the repository's default branch.
    #[arg(long)]
    branch: Option<String>,

    /// Worker threads. Omit to process entries one at a time.
    #[arg(long)]
    threads: Option<usize>,

    /// Height of the target frame; y becomes `height - y`.
    #[arg(long, default_value_t = strokeprep::FRAME_HEIGHT)]
    frame_height: f64,

    /// Stop at the first failing entry instead of reporting all of them.
    #[arg(long, default_value_t = false)]
    fail_fast: bool,

    /// Hide the progress bar and informational logs.
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let source = Source::parse(&cli.source)?.with_branch(cli.branch.clone());
    let sink = DirSink::create(&cli.destination)
        .with_context(|| format!("create output dir '{}'", cli.destination.display()))?;

    let opts = PipelineOpts {
        threads: cli.threads,
        failure_policy: if cli.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::CollectAll
        },
        frame_height: cli.frame_height,
    };
    let bar = ProgressBar { quiet: cli.quiet };

    match strokeprep::run_source(&source, &RemoteConfig::from_env(), &sink, &opts, &bar) {
        Ok(_) => {
            println!("All done!");
            Ok(())
        }
        Err(err @ StrokeError::SourceNotFound { .. }) => {
            eprintln!("{err}");
            Ok(())
        }
        Err(err) => Err(err).context("normalizing stroke data"),
    }
}

fn init_tracing(quiet: bool) {
    let level = if quiet {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

struct ProgressBar {
    quiet: bool,
}

impl Progress for ProgressBar {
    fn entry_done(&self, entry: &Entry, done: usize, total: usize) {
        if self.quiet || total == 0 {
            return;
        }
        let filled = done * BAR_WIDTH / total;
        let arrow = format!("{}>", "-".repeat(filled.saturating_sub(1)));
        eprint!(
            "\rParsing file '{}': [{arrow:<width$}] {:>3}%",
            entry.name,
            done * 100 / total,
            width = BAR_WIDTH
        );
        if done == total {
            eprintln!();
        }
    }
}
