use clap::Parser;
use kalike::core::config::{self, CliOverrides, Theme};
use kalike::quiz::vocab::VocabularySet;
use kalike::{Activity, Subject};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "kalike", about = "Kannada, Hindi and geography quizzes for the terminal")]
struct Args {
    /// Subject to open the settings screen with
    #[arg(short, long, value_enum)]
    subject: Option<Subject>,

    /// Activity to open the settings screen with
    #[arg(short, long, value_enum)]
    activity: Option<Activity>,

    /// Questions per session
    #[arg(short = 'n', long = "count")]
    count: Option<usize>,

    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Seed for repeatable question order
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to kalike.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("kalike.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config error, using defaults: {}", e);
        Default::default()
    });
    let cli = CliOverrides {
        subject: args.subject,
        activity: args.activity,
        question_count: args.count,
        theme: args.theme,
        seed: args.seed,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Kalike starting up: subject={:?} activity={:?} count={} theme={:?}",
        resolved.subject,
        resolved.activity,
        resolved.question_count,
        resolved.theme
    );

    let vocab = VocabularySet::load(&resolved.data).map_err(|e| {
        log::error!("Failed to load vocabulary: {}", e);
        eprintln!("kalike: {e}");
        std::io::Error::other(e.to_string())
    })?;

    kalike::tui::run(resolved, vocab)
}
