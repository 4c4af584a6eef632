use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use sd_academy::{Academy, Config, View, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the quiz questions from instead of the built-in set
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// How long answer feedback stays on screen, in milliseconds
    #[arg(long, default_value_t = 1000)]
    feedback_delay_ms: u64,

    /// Delay before the assistant replies, in milliseconds
    #[arg(long, default_value_t = 500)]
    reply_delay_ms: u64,

    /// Input poll interval, in milliseconds
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// Page to open on start (home, learn, patterns, refactoring, quiz, chat)
    #[arg(long, default_value = "home")]
    view: View,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            questions_path: args.questions,
            feedback_delay: Duration::from_millis(args.feedback_delay_ms),
            reply_delay: Duration::from_millis(args.reply_delay_ms),
            tick: Duration::from_millis(args.tick_ms.max(1)),
            start_view: args.view,
            log_file: args.log_file,
        }
    }
}

fn main() {
    let config = Config::from(Args::parse());

    if let Err(e) = logging::init(config.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = Academy::new(config).and_then(Academy::run);
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
