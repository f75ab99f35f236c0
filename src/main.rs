//! Fake News Detector
//!
//! Searches news for a keyword, lets the user pick a headline, and runs
//! it through a star-rating sentiment model to flag likely fakes.

use clap::{Parser, Subcommand};
use news_verdict::client::{HeadlineSource, NewsClient, SentimentClient, SentimentModel};
use news_verdict::config::Config;
use news_verdict::error::AppError;
use news_verdict::shell::{self, Choice, Session};
use news_verdict::verdict::{FakeNewsDetector, Verdict};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "news-verdict")]
#[command(about = "Screen news headlines for likely fakes with a sentiment model")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path (default locations are searched when omitted)
    #[arg(short, long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch headlines for a keyword and print them numbered
    Fetch {
        /// Search keyword
        keyword: String,
    },
    /// Classify a single piece of text
    Check {
        /// Headline text to classify
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so the interactive surface owns stdout
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    let news = NewsClient::new(config.news)?;
    let detector = FakeNewsDetector::new(SentimentClient::new(config.model)?);

    match cli.command {
        Some(Commands::Fetch { keyword }) => fetch_headlines(&news, &keyword).await,
        Some(Commands::Check { text }) => check_text(&detector, &text).await,
        None => run_session(&news, &detector).await,
    }
}

async fn fetch_headlines(news: &impl HeadlineSource, keyword: &str) -> anyhow::Result<()> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        println!("{}", shell::EMPTY_KEYWORD_NOTICE);
        return Ok(());
    }

    let headlines = news.headlines(keyword).await?;
    if headlines.is_empty() {
        println!("{}", shell::NO_RESULTS_NOTICE);
        return Ok(());
    }

    print_headlines(&headlines);
    Ok(())
}

async fn check_text<M: SentimentModel>(
    detector: &FakeNewsDetector<M>,
    text: &str,
) -> anyhow::Result<()> {
    let verdict = detector.check(text).await?;
    print_verdict(text, &verdict);
    Ok(())
}

async fn run_session<M: SentimentModel>(
    news: &impl HeadlineSource,
    detector: &FakeNewsDetector<M>,
) -> anyhow::Result<()> {
    print_banner();
    let mut session = Session::new();

    loop {
        let keyword = match prompt("\nSearch keyword (q to quit): ")? {
            Some(k) => k,
            None => return Ok(()),
        };

        if keyword == "q" || keyword == "quit" {
            return Ok(());
        }
        if keyword.is_empty() {
            println!("{}", shell::EMPTY_KEYWORD_NOTICE);
            continue;
        }

        tracing::info!("searching {} for \"{}\"", news.name(), keyword);
        let headlines = match news.headlines(&keyword).await {
            Ok(h) => h,
            Err(e) => {
                print_error(&e);
                continue;
            }
        };

        session.replace(headlines);
        if session.is_empty() {
            println!("{}", shell::NO_RESULTS_NOTICE);
            continue;
        }

        println!();
        print_headlines(session.headlines());

        // One selection loop per result list
        loop {
            let entry = match prompt("\nHeadline number to check (s new search, q quit): ")? {
                Some(e) => e,
                None => return Ok(()),
            };

            match session.parse_choice(&entry) {
                Choice::Quit => return Ok(()),
                Choice::NewSearch => break,
                Choice::Invalid => println!("{}", shell::BAD_SELECTION_NOTICE),
                Choice::Headline(index) => {
                    if let Some(headline) = session.select(index) {
                        match detector.check(headline).await {
                            Ok(verdict) => print_verdict(headline, &verdict),
                            Err(e) => print_error(&e),
                        }
                    }
                }
            }
        }
    }
}

/// Read one trimmed line from stdin, None on EOF
fn prompt(label: &str) -> anyhow::Result<Option<String>> {
    print!("{}", label);
    std::io::stdout().flush()?;

    let mut line = String::new();
    if std::io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_banner() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║           📰 Fake News Detector              ║");
    println!("╚══════════════════════════════════════════════╝");
    println!(
        "Session started {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );
}

fn print_headlines(headlines: &[String]) {
    for (i, title) in headlines.iter().enumerate() {
        println!("{:>3}. {}", i + 1, title);
    }
}

fn print_verdict(headline: &str, verdict: &Verdict) {
    println!();
    println!("╔══════════════════════════════════════════════╗");
    println!("║                 🔎 Verdict                   ║");
    println!("╚══════════════════════════════════════════════╝");
    println!("Headline: {}", headline);
    println!("Result:   {}", verdict);
}

fn print_error(error: &AppError) {
    println!();
    println!("❌ {}", error);
}
