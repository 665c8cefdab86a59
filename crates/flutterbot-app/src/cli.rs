use std::path::PathBuf;

use clap::Parser;

/// FlutterBot — a terminal chat assistant for Flutter questions.
#[derive(Parser, Debug)]
#[command(name = "flutterbot", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Model name override.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Number of prior messages sent as context.
    #[arg(long)]
    pub history_window: Option<u32>,

    /// Send a single message, print the reply, and exit.
    #[arg(long, value_name = "MESSAGE")]
    pub once: Option<String>,

    /// Print the effective config (file plus overrides) as JSON and exit.
    #[arg(long)]
    pub dump_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "flutterbot",
            "--model",
            "llama3-8b-8192",
            "--history-window",
            "2",
            "--once",
            "What is a StatelessWidget?",
        ])
        .unwrap();
        assert_eq!(args.model.as_deref(), Some("llama3-8b-8192"));
        assert_eq!(args.history_window, Some(2));
        assert_eq!(args.once.as_deref(), Some("What is a StatelessWidget?"));
        assert!(args.config.is_none());
    }

    #[test]
    fn no_arguments_is_interactive() {
        let args = Args::try_parse_from(["flutterbot"]).unwrap();
        assert!(args.once.is_none());
        assert!(args.log_level.is_none());
        assert!(!args.dump_config);
    }

    #[test]
    fn parses_dump_config() {
        let args = Args::try_parse_from(["flutterbot", "--dump-config", "-m", "x"]).unwrap();
        assert!(args.dump_config);
    }

    #[test]
    fn rejects_negative_window() {
        assert!(Args::try_parse_from(["flutterbot", "--history-window", "-1"]).is_err());
    }
}
