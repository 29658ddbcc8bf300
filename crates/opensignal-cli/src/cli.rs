use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "opensignal",
    about = "OpenSignal — transparent risk enrichment for signal events",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Pipeline configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the demo pipeline over a small cyclic feed
    Demo(DemoArgs),
    /// Generate a large seeded feed and measure throughput
    Load(LoadArgs),
    /// Render a brief from an existing NDJSON file
    Brief(BriefArgs),
}

#[derive(Args)]
pub struct DemoArgs {
    /// Number of events to generate
    #[arg(short = 'n', long = "n", default_value = "3")]
    pub count: usize,
    /// NDJSON output path
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Skip daily brief generation (recommended for large N)
    #[arg(long)]
    pub no_brief: bool,
}

#[derive(Args)]
pub struct LoadArgs {
    /// Number of events to generate
    #[arg(short = 'n', long = "n", default_value = "10000")]
    pub count: usize,
    /// NDJSON output path
    #[arg(long, default_value = "out/events_load.ndjson")]
    pub out: PathBuf,
    /// Random seed for repeatable payloads
    #[arg(long, default_value = "42")]
    pub seed: u64,
    /// Skip daily brief generation (recommended for large N)
    #[arg(long)]
    pub no_brief: bool,
    /// Brief output path
    #[arg(long, default_value = "out/daily-brief-load.adoc")]
    pub brief_out: PathBuf,
}

#[derive(Args)]
pub struct BriefArgs {
    /// NDJSON file of enriched events
    pub input: PathBuf,
    /// Brief output path
    #[arg(long, default_value = "out/daily-brief.adoc")]
    pub out: PathBuf,
    /// Document title
    #[arg(long)]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn parse_demo_defaults() {
        let Command::Demo(args) = parse(&["opensignal", "demo"]).command else {
            panic!("wrong command");
        };
        assert_eq!(args.count, 3);
        assert!(!args.no_brief);
        assert!(args.out.is_none());
    }

    #[test]
    fn parse_demo_no_brief() {
        let cli = parse(&["opensignal", "demo", "--n", "50000", "--no-brief"]);
        let Command::Demo(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.count, 50000);
        assert!(args.no_brief);
    }

    #[test]
    fn parse_load_defaults() {
        let Command::Load(args) = parse(&["opensignal", "load"]).command else {
            panic!("wrong command");
        };
        assert_eq!(args.count, 10000);
        assert_eq!(args.seed, 42);
        assert_eq!(args.out, PathBuf::from("out/events_load.ndjson"));
        assert_eq!(args.brief_out, PathBuf::from("out/daily-brief-load.adoc"));
    }

    #[test]
    fn parse_load_full() {
        let cli = parse(&[
            "opensignal",
            "load",
            "-n",
            "100000",
            "--out",
            "out/events_100k.ndjson",
            "--seed",
            "7",
            "--no-brief",
        ]);
        let Command::Load(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.count, 100000);
        assert_eq!(args.seed, 7);
        assert!(args.no_brief);
    }

    #[test]
    fn parse_brief() {
        let cli = parse(&["opensignal", "brief", "events.ndjson", "--title", "Weekly"]);
        let Command::Brief(args) = cli.command else {
            panic!("wrong command");
        };
        assert_eq!(args.input, PathBuf::from("events.ndjson"));
        assert_eq!(args.title, Some("Weekly".into()));
    }

    #[test]
    fn parse_global_flags() {
        let cli = parse(&["opensignal", "demo", "--verbose", "--config", "os.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("os.toml")));
    }

    #[test]
    fn rejects_negative_count() {
        assert!(Cli::try_parse_from(["opensignal", "demo", "--n", "-1"]).is_err());
    }
}
