//! Programming Club TUI - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Programming Club TUI - browse the club FAQ, apply for membership,
/// and read announcements
#[derive(Parser, Debug)]
#[command(name = "clubtui")]
#[command(version)]
#[command(about = "Terminal browser for the Programming Club FAQ deck")]
pub struct Args {
    /// Path to the deck JSON file
    pub deck: PathBuf,

    /// Start with a search term active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start with a category filter active
    #[arg(long)]
    pub category: Option<String>,

    /// Slideshow auto-advance interval in seconds
    #[arg(long)]
    pub slide_interval: Option<u64>,

    /// Directory to write the FAQ export to
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = clubtui::config::load_config_with_precedence(args.config.clone())?;
        let merged = clubtui::config::merge_config(config_file);
        let with_env = clubtui::config::apply_env_overrides(merged);
        clubtui::config::apply_cli_overrides(
            with_env,
            args.slide_interval,
            args.no_color,
            args.export_dir.clone(),
        )
    };

    clubtui::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let deck = clubtui::data::load_deck(&args.deck).map_err(clubtui::model::AppError::from)?;

    let cli_args = clubtui::view::CliArgs::from_config(&config, args.search, args.category);
    clubtui::view::run_with_deck(deck, cli_args)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn help_does_not_error() {
        let err = Args::try_parse_from(["clubtui", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn version_does_not_error() {
        let err = Args::try_parse_from(["clubtui", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn deck_path_is_required() {
        let result = Args::try_parse_from(["clubtui"]);
        assert!(result.is_err());
    }

    #[test]
    fn deck_path_populates_field() {
        let args = Args::parse_from(["clubtui", "deck.json"]);
        assert_eq!(args.deck, PathBuf::from("deck.json"));
        assert_eq!(args.search, None);
        assert_eq!(args.category, None);
        assert!(!args.no_color);
    }

    #[test]
    fn search_flag_short_and_long() {
        let args = Args::parse_from(["clubtui", "deck.json", "-s", "meetings"]);
        assert_eq!(args.search, Some("meetings".to_string()));
        let args = Args::parse_from(["clubtui", "deck.json", "--search", "dues"]);
        assert_eq!(args.search, Some("dues".to_string()));
    }

    #[test]
    fn category_flag() {
        let args = Args::parse_from(["clubtui", "deck.json", "--category", "events"]);
        assert_eq!(args.category, Some("events".to_string()));
    }

    #[test]
    fn slide_interval_flag() {
        let args = Args::parse_from(["clubtui", "deck.json", "--slide-interval", "10"]);
        assert_eq!(args.slide_interval, Some(10));
    }

    #[test]
    fn config_path_flag() {
        let args = Args::parse_from(["clubtui", "deck.json", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn combined_flags() {
        let args = Args::parse_from([
            "clubtui",
            "deck.json",
            "-s",
            "meetings",
            "--category",
            "general",
            "--no-color",
            "--slide-interval",
            "3",
        ]);
        assert_eq!(args.deck, PathBuf::from("deck.json"));
        assert_eq!(args.search, Some("meetings".to_string()));
        assert_eq!(args.category, Some("general".to_string()));
        assert!(args.no_color);
        assert_eq!(args.slide_interval, Some(3));
    }

    #[test]
    fn cli_overrides_flow_through_precedence_chain() {
        use clubtui::config::{apply_cli_overrides, merge_config, ConfigFile};

        let config_file = ConfigFile {
            slide_interval_secs: Some(8),
            ..ConfigFile::default()
        };
        let merged = merge_config(Some(config_file));
        assert_eq!(merged.slide_interval_secs, 8);

        let with_cli = apply_cli_overrides(merged, Some(2), false, None);
        assert_eq!(
            with_cli.slide_interval_secs, 2,
            "CLI interval should override the config file"
        );
    }
}
