use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use opensignal_brief::BriefGenerator;
use opensignal_pipeline::{DemoSource, LoadSource, Pipeline, PipelineConfig, PipelineReport};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Demo(args) => cmd_demo(config, args),
        Command::Load(args) => cmd_load(config, args),
        Command::Brief(args) => cmd_brief(config, args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(PipelineConfig::default()),
    }
}

fn cmd_demo(mut config: PipelineConfig, args: DemoArgs) -> anyhow::Result<()> {
    if let Some(out) = args.out {
        config.output = out;
    }
    config.write_brief &= !args.no_brief;

    let pipeline = Pipeline::new(config).context("building pipeline")?;
    pipeline
        .ingest_all(DemoSource::new(args.count))
        .context("publishing demo events")?;
    let report = pipeline.finish().context("finishing pipeline")?;

    print_report("OpenSignal demo complete.", &report);
    Ok(())
}

fn cmd_load(mut config: PipelineConfig, args: LoadArgs) -> anyhow::Result<()> {
    config.output = args.out;
    config.brief_path = args.brief_out;
    config.write_brief &= !args.no_brief;

    let pipeline = Pipeline::new(config).context("building pipeline")?;
    pipeline
        .ingest_all(LoadSource::new(args.count, args.seed))
        .context("publishing load events")?;
    let report = pipeline.finish().context("finishing pipeline")?;

    print_report("OpenSignal load run complete.", &report);
    Ok(())
}

fn cmd_brief(config: PipelineConfig, args: BriefArgs) -> anyhow::Result<()> {
    let events = opensignal_sink::read_ndjson(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let title = args.title.unwrap_or(config.brief_title);
    let text = BriefGenerator::new(title).generate(&events);

    write_file(&args.out, &text)?;
    println!(
        "{} Rendered {} events",
        "✓".green().bold(),
        events.len().to_string().bold()
    );
    println!("  Brief: {}", args.out.display().to_string().blue());
    Ok(())
}

fn write_file(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

fn print_report(headline: &str, report: &PipelineReport) {
    println!(
        "{} {} Processed {} events in {:.2}s ({:.0} events/sec).",
        "✓".green().bold(),
        headline,
        report.processed.to_string().bold(),
        report.elapsed.as_secs_f64(),
        report.events_per_sec()
    );
    println!("  NDJSON: {}", report.output.display().to_string().blue());
    if let Some(brief) = &report.brief {
        println!("  Brief: {}", brief.display().to_string().blue());
    }
}
