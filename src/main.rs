use std::time::Instant;

use clap::Parser;

use pr_pulse::cli::RunPlan;
use pr_pulse::github::{GitHubClient, Repo};
use pr_pulse::{report, Error};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FETCH: i32 = 1;
const EXIT_CONFIG: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "pr-pulse")]
#[command(about = "GitHub pull request visualizer", long_about = None)]
#[command(version)]
struct Cli {
    /// GitHub repository in the format 'owner/repo'
    repository: String,

    /// GitHub Personal Access Token
    token: String,

    /// Show the number of PRs opened/closed in the last week
    #[arg(long)]
    week_stats: bool,

    /// Show PRs stuck in review for more than the given number of days
    /// (defaults to 7 when the value is omitted)
    #[arg(long, value_name = "DAYS", num_args = 0..=1, default_missing_value = "7", allow_negative_numbers = true)]
    stuck_prs: Option<i64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let start_time = Instant::now();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {e}");
        let code = if e.is_configuration() {
            EXIT_CONFIG
        } else {
            EXIT_FETCH
        };
        std::process::exit(code);
    }

    if cli.verbose {
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}

async fn run(cli: &Cli) -> Result<(), Error> {
    let plan = RunPlan::new(cli.week_stats, cli.stuck_prs)?;
    let repo: Repo = cli.repository.parse()?;
    let client = GitHubClient::new(&cli.token)?;

    if cli.verbose {
        eprintln!("Repository: {repo}");
    }

    if plan.week_stats {
        report::week::run(&client, &repo).await?;
    }

    if let Some(threshold_days) = plan.stuck_threshold {
        report::stuck::run(&client, &repo, threshold_days).await?;
    }

    Ok(())
}
