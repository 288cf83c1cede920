//! Evalboard CLI - Terminal dashboard for model evaluation results
//! Browse, compare, inspect logs and the leaderboard; offline index and conversion tools

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use evalboard_core::application::{
    convert_shared_chat, filter_lines, page_count, paginate, CatalogService, ComparisonSide,
    DateFilter, LeaderboardRow, LeaderboardSplit, LogSummary, ModelCatalog, QuestionSelector,
    ScoreBoard, Verdict, DEFAULT_FEATURED_KEYWORD, DEFAULT_PAGE_SIZE,
};
use evalboard_core::domain::{LogFileEntry, ModelRun, RunTimestamp};
use evalboard_infra_fs::{write_index, write_result, FsResultStore};
use evalboard_sdk::{
    load_runs, select_source, DashboardClient, DataSource, LeaderboardClient, LoadMode,
    MirrorClient,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

const DEFAULT_SERVER_URL: &str = "http://localhost:5005";
const DEFAULT_RESULTS_DIR: &str = "./prompt-results";

#[derive(Parser)]
#[command(name = "evalboard")]
#[command(about = "Evalboard - model evaluation dashboard CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Evalboard server URL
    #[arg(long, global = true, env = "EVALBOARD_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,

    /// Static mirror URL, tried before the server
    #[arg(long, global = true, env = "EVALBOARD_MIRROR_URL")]
    mirror_url: Option<String>,

    /// Log location on the mirror (default: <mirror-url>/logs)
    #[arg(long, global = true, env = "EVALBOARD_LOGS_URL")]
    logs_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List models, featured family first
    Models {
        /// Only names containing this text (case-insensitive)
        filter: Option<String>,
    },

    /// List result files of a model
    Files {
        model: String,
    },

    /// Show one model's transcript
    Show {
        model: String,

        /// Result file (default: newest)
        #[arg(long)]
        result: Option<String>,

        /// Only runs created on this day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// "All" or a question number
        #[arg(short, long, default_value = "All")]
        question: String,
    },

    /// Compare two models side by side
    Compare {
        first: String,
        second: String,

        #[arg(long)]
        first_result: Option<String>,

        #[arg(long)]
        second_result: Option<String>,

        /// YYYY-MM-DD
        #[arg(long)]
        first_date: Option<String>,

        /// YYYY-MM-DD
        #[arg(long)]
        second_date: Option<String>,

        /// "All" or a question number, applied to both sides
        #[arg(short, long, default_value = "All")]
        question: String,
    },

    /// List model-server log files
    Logs,

    /// Show a log file
    Log {
        file: String,

        /// Number of lines to tail
        #[arg(short = 'n', long)]
        tail: Option<usize>,

        /// Only lines containing this text
        #[arg(short, long)]
        search: Option<String>,

        /// Print extracted figures instead of the text
        #[arg(long)]
        summary: bool,
    },

    /// BigCodeBench leaderboard
    Leaderboard {
        /// Use the hard subset
        #[arg(long)]
        hard: bool,

        /// Show complete and instruct scores
        #[arg(long)]
        details: bool,

        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Regenerate <results-dir>/index.json
    Index {
        results_dir: PathBuf,
    },

    /// Convert a shared-chat markdown export into a result file
    Convert {
        markdown: PathBuf,

        /// Model name (folder and file prefix)
        #[arg(short, long)]
        model: String,

        /// Response times, one per exchange (comma separated)
        #[arg(long, value_delimiter = ',')]
        timings: Vec<f64>,

        #[arg(long, default_value = DEFAULT_RESULTS_DIR)]
        results_dir: PathBuf,

        /// Run time as YYYYMMDDTHHMMSS (default: now)
        #[arg(long)]
        timestamp: Option<String>,
    },
}

#[derive(Tabled)]
struct FileRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Label")]
    label: String,
}

#[derive(Tabled)]
struct LogRow {
    #[tabled(rename = "Log File Name")]
    name: String,
    #[tabled(rename = "Date")]
    date: String,
}

#[derive(Tabled)]
struct LeaderRow {
    #[tabled(rename = "Rank")]
    rank: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Pass@1 Score")]
    average: String,
}

#[derive(Tabled)]
struct DetailedLeaderRow {
    #[tabled(rename = "Rank")]
    rank: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Pass@1 Score")]
    average: String,
    #[tabled(rename = "Complete")]
    complete: String,
    #[tabled(rename = "Instruct")]
    instruct: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so tables stay pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Models { filter } => models(&cli, filter.as_deref()).await,
        Commands::Files { model } => files(&cli, model).await,
        Commands::Show {
            model,
            result,
            date,
            question,
        } => show(&cli, model, result.as_deref(), date.as_deref(), question).await,
        Commands::Compare {
            first,
            second,
            first_result,
            second_result,
            first_date,
            second_date,
            question,
        } => {
            compare(
                &cli,
                (first.as_str(), first_result.as_deref(), first_date.as_deref()),
                (second.as_str(), second_result.as_deref(), second_date.as_deref()),
                question,
            )
            .await
        }
        Commands::Logs => logs(&cli).await,
        Commands::Log {
            file,
            tail,
            search,
            summary,
        } => log(&cli, file, *tail, search.as_deref(), *summary).await,
        Commands::Leaderboard {
            hard,
            details,
            page,
        } => leaderboard(*hard, *details, *page).await,
        Commands::Index { results_dir } => index(results_dir).await,
        Commands::Convert {
            markdown,
            model,
            timings,
            results_dir,
            timestamp,
        } => convert(markdown, model, timings, results_dir, timestamp.as_deref()).await,
    }
}

fn mirror_client(cli: &Cli) -> Result<Option<MirrorClient>> {
    cli.mirror_url
        .as_deref()
        .map(|url| MirrorClient::new(url, cli.logs_url.as_deref()))
        .transpose()
        .context("Invalid mirror URL")
}

/// Mirror first, then the local server
async fn source(cli: &Cli) -> Result<Arc<dyn DataSource>> {
    let local: Arc<dyn DataSource> = Arc::new(
        DashboardClient::connect(&cli.server_url).context("Invalid server URL")?,
    );
    let mirror = mirror_client(cli)?.map(|m| Arc::new(m) as Arc<dyn DataSource>);

    select_source(mirror, local)
        .await
        .context("Failed to reach any data source")
}

async fn models(cli: &Cli, filter: Option<&str>) -> Result<()> {
    let source = source(cli).await?;
    let names = source.list_models().await.context("Failed to list models")?;
    let runs = load_runs(source.as_ref(), &names, LoadMode::Latest).await;

    let catalog = ModelCatalog::from_runs(runs.iter().map(|r| &r.run), DEFAULT_FEATURED_KEYWORD);

    println!("{} {}", "Source:".bold(), source.kind());
    println!();

    let names = match filter {
        Some(input) => catalog.filter(input),
        None => catalog.all(),
    };
    for name in &names {
        if catalog.featured.contains(name) {
            println!("  {}", name.green().bold());
        } else {
            println!("  {}", name);
        }
    }
    if names.is_empty() {
        println!("{}", "No models with valid result files".yellow());
    }
    Ok(())
}

async fn files(cli: &Cli, model: &str) -> Result<()> {
    let source = source(cli).await?;
    let files = source
        .list_result_files(model)
        .await
        .with_context(|| format!("Failed to list files for '{}'", model))?;

    let side = ComparisonSide::resolve(
        model,
        &files,
        None,
        DateFilter::none(),
        QuestionSelector::All,
    );
    let rows: Vec<FileRow> = side
        .candidates
        .iter()
        .zip(side.candidate_labels())
        .map(|(c, label)| FileRow {
            file: c.file_name.clone(),
            label,
        })
        .collect();

    if rows.is_empty() {
        println!("{}", format!("No result files for '{}'", model).yellow());
    } else {
        println!("{}", Table::new(rows));
    }
    Ok(())
}

/// Resolve one side and fetch the run it shows
async fn load_side(
    source: &dyn DataSource,
    model: &str,
    result: Option<&str>,
    date: Option<&str>,
    question: QuestionSelector,
) -> Result<(ComparisonSide, Option<ModelRun>)> {
    let date: DateFilter = date
        .unwrap_or_default()
        .parse()
        .context("Invalid --date, expected YYYY-MM-DD")?;
    let files = source
        .list_result_files(model)
        .await
        .with_context(|| format!("Failed to list files for '{}'", model))?;
    let side = ComparisonSide::resolve(model, &files, result, date, question);

    let run = match &side.selected {
        Some(file) => {
            let doc = source
                .fetch_document(model, file)
                .await
                .with_context(|| format!("Failed to load '{}'", file))?;
            doc.into_runs().into_iter().next()
        }
        None => load_runs(source, &[model.to_string()], LoadMode::Latest)
            .await
            .into_iter()
            .next()
            .map(|loaded| loaded.run),
    };

    Ok((side, run))
}

fn print_side(
    side: &ComparisonSide,
    run: Option<&ModelRun>,
    score: Option<(&ScoreBoard, Verdict)>,
) {
    let mut header = side.model.cyan().bold().to_string();
    if let Some((board, verdict)) = score {
        header = format!(
            "{}  Pass@1: {} {}",
            header,
            board.display(&side.model),
            render::verdict_tag(verdict)
        );
    }
    println!("{}", header);
    println!("{} {}", "Date:".bold(), side.date.tag());

    let Some(run) = run else {
        println!("{}", render::NO_RESULTS.yellow());
        return;
    };

    let label = run
        .created_at()
        .map(|ts| format!("{}-{}", side.model, ts.display_label()))
        .unwrap_or_else(|| run.file_name.clone());
    println!("{} {}", "Result:".bold(), label);
    println!(
        "{} {}",
        "Questions:".bold(),
        QuestionSelector::options(run.prompt.len()).join(" | ")
    );
    println!(
        "{} {}",
        "Total time:".bold(),
        render::format_ms(run.total_response_ms())
    );
    println!();

    let first_number = match side.question {
        QuestionSelector::Number(n) => n,
        QuestionSelector::All => 1,
    };
    render::print_exchanges(side.visible(run), first_number);
}

async fn show(
    cli: &Cli,
    model: &str,
    result: Option<&str>,
    date: Option<&str>,
    question: &str,
) -> Result<()> {
    let question: QuestionSelector = question.parse().context("Invalid --question")?;
    let source = source(cli).await?;
    let (side, run) = load_side(source.as_ref(), model, result, date, question).await?;
    print_side(&side, run.as_ref(), None);
    Ok(())
}

async fn compare(
    cli: &Cli,
    first: (&str, Option<&str>, Option<&str>),
    second: (&str, Option<&str>, Option<&str>),
    question: &str,
) -> Result<()> {
    let question: QuestionSelector = question.parse().context("Invalid --question")?;
    let source = source(cli).await?;

    let (left, left_run) = load_side(source.as_ref(), first.0, first.1, first.2, question).await?;
    let (right, right_run) =
        load_side(source.as_ref(), second.0, second.1, second.2, question).await?;

    // Scores live on the mirror only
    let board = match mirror_client(cli)? {
        Some(mirror) => mirror.scores().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load Pass@1 scores");
            ScoreBoard::default()
        }),
        None => ScoreBoard::default(),
    };
    let (left_verdict, right_verdict) = Verdict::between(&board, &left.model, &right.model);

    print_side(&left, left_run.as_ref(), Some((&board, left_verdict)));
    println!("{}", "─".repeat(60).dimmed());
    print_side(&right, right_run.as_ref(), Some((&board, right_verdict)));
    Ok(())
}

async fn logs(cli: &Cli) -> Result<()> {
    let names = match mirror_client(cli)? {
        Some(mirror) => match mirror.list_logs().await {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(error = %e, "Mirror logs unavailable, using local server");
                local_logs(cli).await?
            }
        },
        None => local_logs(cli).await?,
    };

    let rows: Vec<LogRow> = names
        .into_iter()
        .map(LogFileEntry::from_name)
        .map(|e| LogRow {
            name: e.name,
            date: e.date,
        })
        .collect();

    println!("{}", "Models Server Log Table".cyan().bold());
    println!("{}", Table::new(rows));
    Ok(())
}

async fn local_logs(cli: &Cli) -> Result<Vec<String>> {
    DashboardClient::connect(&cli.server_url)
        .context("Invalid server URL")?
        .list_logs()
        .await
        .context("Failed to list log files")
}

async fn log(
    cli: &Cli,
    file: &str,
    tail_lines: Option<usize>,
    term: Option<&str>,
    summary: bool,
) -> Result<()> {
    let text = match mirror_client(cli)? {
        Some(mirror) => match mirror.fetch_log(file).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Mirror log unavailable, using local server");
                local_log(cli, file).await?
            }
        },
        None => local_log(cli, file).await?,
    };

    if summary {
        let rows = render::summary_rows(&LogSummary::parse(&text));
        println!("{}", file.cyan().bold());
        println!("{}", Table::new(rows));
        return Ok(());
    }

    println!("{}", file.cyan().bold());
    for line in filter_lines(&text, term, tail_lines) {
        println!("{}", line);
    }
    Ok(())
}

async fn local_log(cli: &Cli, file: &str) -> Result<String> {
    DashboardClient::connect(&cli.server_url)
        .context("Invalid server URL")?
        .read_log(file, None, None)
        .await
        .with_context(|| format!("Failed to read log '{}'", file))
}

async fn leaderboard(hard: bool, details: bool, page: usize) -> Result<()> {
    let split = if hard {
        LeaderboardSplit::Hard
    } else {
        LeaderboardSplit::Full
    };
    let rows = LeaderboardClient::new()?
        .fetch(split)
        .await
        .context("Failed to fetch leaderboard")?;

    let pages = page_count(rows.len(), DEFAULT_PAGE_SIZE);
    let visible = paginate(&rows, page, DEFAULT_PAGE_SIZE);

    println!(
        "{}",
        format!("BigCodeBench {} Result", split.title()).cyan().bold()
    );

    let rank = |r: &LeaderboardRow| {
        if r.is_podium() {
            format!("{} *", r.rank)
        } else {
            r.rank.to_string()
        }
    };

    if details {
        let table: Vec<DetailedLeaderRow> = visible
            .iter()
            .map(|r| DetailedLeaderRow {
                rank: rank(r),
                model: r.model.clone(),
                average: format!("{:.1}", r.average),
                complete: format!("{:.1}", r.complete),
                instruct: format!("{:.1}", r.instruct),
            })
            .collect();
        println!("{}", Table::new(table));
    } else {
        let table: Vec<LeaderRow> = visible
            .iter()
            .map(|r| LeaderRow {
                rank: rank(r),
                model: r.model.clone(),
                average: format!("{:.1}", r.average),
            })
            .collect();
        println!("{}", Table::new(table));
    }

    println!("Page {} of {}", page, pages);
    Ok(())
}

async fn index(results_dir: &Path) -> Result<()> {
    let catalog = CatalogService::new(Arc::new(FsResultStore::new(results_dir)));
    let index = catalog
        .build_index()
        .await
        .with_context(|| format!("Failed to scan {}", results_dir.display()))?;

    let path = write_index(results_dir, &index)
        .await
        .context("Failed to write index")?;

    println!(
        "{}",
        format!("✓ Index written to {} ({} models)", path.display(), index.len())
            .green()
            .bold()
    );
    Ok(())
}

async fn convert(
    markdown: &Path,
    model: &str,
    timings: &[f64],
    results_dir: &Path,
    timestamp: Option<&str>,
) -> Result<()> {
    let text = tokio::fs::read_to_string(markdown)
        .await
        .with_context(|| format!("Failed to read {}", markdown.display()))?;

    let timestamp = match timestamp {
        Some(ts) => {
            RunTimestamp::parse(ts).context("Invalid --timestamp, expected YYYYMMDDTHHMMSS")?
        }
        None => RunTimestamp::new(chrono::Local::now().naive_local()),
    };

    let document = convert_shared_chat(&text, model, timestamp, timings);
    let exchanges = document.runs().map(|r| r.prompt.len()).sum::<usize>();
    let path = write_result(results_dir, &document, model, timestamp)
        .await
        .context("Failed to write result file")?;

    println!(
        "{}",
        format!("✓ {} exchanges written to {}", exchanges, path.display())
            .green()
            .bold()
    );
    Ok(())
}
