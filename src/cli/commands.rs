//! CLI argument definitions

use clap::Parser;

/// Stream upcoming movies from the listing API
#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
pub struct Cli {
    /// API key (falls back to the MARQUEE_API_KEY environment variable)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Results per page
    #[arg(long)]
    pub page_limit: Option<u32>,

    /// Starting page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Country code filter (e.g. "us")
    #[arg(long)]
    pub country: Option<String>,

    /// Milliseconds between page fetches
    #[arg(long, default_value_t = 1000)]
    pub cadence_ms: u64,

    /// Stop after this many pages (0 = follow the chain to the end)
    #[arg(long, default_value_t = 0)]
    pub max_pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["marquee"]);
        assert!(cli.api_key.is_none());
        assert!(cli.page_limit.is_none());
        assert!(cli.country.is_none());
        assert_eq!(cli.cadence_ms, 1000);
        assert_eq!(cli.max_pages, 0);
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "marquee",
            "--api-key",
            "k",
            "--page-limit",
            "10",
            "--page",
            "2",
            "--country",
            "us",
            "--cadence-ms",
            "250",
            "--max-pages",
            "3",
        ]);
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert_eq!(cli.page_limit, Some(10));
        assert_eq!(cli.page, Some(2));
        assert_eq!(cli.country.as_deref(), Some("us"));
        assert_eq!(cli.cadence_ms, 250);
        assert_eq!(cli.max_pages, 3);
    }
}
