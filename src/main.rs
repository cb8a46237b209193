//! Issue Card Viewer - Entry Point

use clap::Parser;
use icv::state::AppState;
use icv::view::{CardStyles, ColorConfig};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Issue Card Viewer - TUI for browsing issue-tracker cards
#[derive(Parser, Debug)]
#[command(name = "icv")]
#[command(version)]
#[command(about = "TUI application for browsing issue-tracker cards with lazy loading")]
pub struct Args {
    /// Path to a local JSON issue fixture (fetches from the API if not provided)
    pub file: Option<PathBuf>,

    /// Issues endpoint URL
    #[arg(short, long)]
    pub url: Option<String>,

    /// API token for the Authorization header
    #[arg(short, long)]
    pub token: Option<String>,

    /// Load off-viewport cards this many milliseconds after startup
    #[arg(long, value_name = "MS")]
    pub load_after: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Resolve configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = icv::config::load_config_with_precedence(args.config.clone())?;
        let merged = icv::config::merge_config(config_file);
        let with_env = icv::config::apply_env_overrides(merged);
        icv::config::apply_cli_overrides(with_env, args.url.clone(), args.token.clone(), args.load_after)
    };

    icv::logging::init(&config).map_err(icv::model::AppError::from)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let source = icv::fetch::detect_source(
        args.file.clone(),
        config.api_url.clone(),
        config.token.clone(),
    );
    info!(source = %source.describe(), "Fetching issues");

    let body = source.fetch().map_err(icv::model::AppError::from)?;
    let (issues, parse_errors) =
        icv::parser::parse_issues(&body).map_err(icv::model::AppError::from)?;
    for error in &parse_errors {
        warn!("{error}");
    }
    info!(
        issues = issues.len(),
        skipped = parse_errors.len(),
        "Issue payload parsed"
    );

    let state = AppState::with_issues(
        issues,
        &config.lazy_options(),
        &config.lazy_tuning(),
        Instant::now(),
    );
    let styles = CardStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));

    icv::view::TuiApp::new(state, styles)?.run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn help_does_not_error() {
        let result = Args::try_parse_from(["icv", "--help"]);
        // Help returns Err with DisplayHelp, which is success.
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn version_does_not_error() {
        let result = Args::try_parse_from(["icv", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn no_args_defaults() {
        let args = Args::parse_from(["icv"]);
        assert_eq!(args.file, None);
        assert_eq!(args.url, None);
        assert_eq!(args.token, None);
        assert_eq!(args.load_after, None);
        assert!(!args.no_color);
        assert_eq!(args.config, None);
    }

    #[test]
    fn fixture_path_populates_file_field() {
        let args = Args::parse_from(["icv", "issues.json"]);
        assert_eq!(args.file, Some(PathBuf::from("issues.json")));
    }

    #[test]
    fn url_and_token_flags() {
        let args = Args::parse_from(["icv", "-u", "https://x.example/issues", "-t", "tok"]);
        assert_eq!(args.url.as_deref(), Some("https://x.example/issues"));
        assert_eq!(args.token.as_deref(), Some("tok"));
    }

    #[test]
    fn load_after_takes_milliseconds() {
        let args = Args::parse_from(["icv", "--load-after", "1500"]);
        assert_eq!(args.load_after, Some(1500));
    }
}
