use clap::Parser;
use new_commit_finder::publish::write_report;
use new_commit_finder::{find_new_commits, FinderError, GitHistory, EXIT_CODE};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// List the commits of BASE that are not in OLD, ignoring commits that were cherry-picked to OLD
/// with the same author and subject.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Branch whose own commits are audited
    base: String,

    /// Branch that may already contain (cherry-picks of) those commits
    old: String,

    /// Path inside the git repository to inspect
    #[arg(short = 'C', long, env = "NEW_COMMIT_FINDER_REPO", default_value = ".")]
    repo: PathBuf,

    /// Also accept remote-tracking branches, e.g. origin/release-1.0
    #[arg(short, long)]
    remotes: bool,

    /// More logging on stderr. Repeat for more detail. RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                e.exit()
            }
            _ => {
                println!("{}", e);
                std::process::exit(EXIT_CODE);
            }
        },
    };
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        println!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), FinderError> {
    let history = GitHistory::discover(&args.repo)?.with_remotes(args.remotes);
    let new_commits = find_new_commits(&history, &args.base, &args.old)?;
    write_report(&history, &new_commits, std::io::stdout().lock())
}

/// Diagnostics go to stderr, stdout is reserved for the report.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}
