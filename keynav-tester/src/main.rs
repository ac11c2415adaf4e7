mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserDriver, BrowserKind, new_session};
use common::reports::{
    ScenarioResult, generate_console_report, generate_json_report, generate_markdown_report,
};
use common::scenario::{Scenario, catalog, get_scenario, list_scenarios, run_scenario};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::LogicDriver;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Navigator over a simulated page (fast, no browser)
    Logic,
    /// Browser automation against a running app
    Browser,
    /// Run both logic and browser scenarios
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "keynav-tester", version)]
#[command(about = "Scenario runner for keyboard navigation - simulated pages and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser, or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Print each step as it runs
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// URL serving the keynav web app
    #[arg(long, default_value = "http://localhost:8080/")]
    base_url: String,

    /// Artifacts directory for screenshots and page dumps
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = resolve_scenarios(&args.scenarios);

    let mut results = run_logic_scenarios(&args, &scenarios).await;
    results.extend(run_browser_scenarios(&args, &scenarios).await);

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "⌨️  Keynav Scenario Tester".bright_cyan().bold());
    println!("{}", "==========================".cyan());
}

fn resolve_scenarios(scenarios_arg: &str) -> Vec<Scenario> {
    let names = split_csv(scenarios_arg);
    if names.iter().any(|name| name == "all") {
        return catalog();
    }
    names
        .iter()
        .filter_map(|name| {
            let scenario = get_scenario(name);
            if scenario.is_none() {
                eprintln!("⚠️  Unknown scenario: {}", name.yellow());
            }
            scenario
        })
        .collect()
}

async fn run_logic_scenarios(args: &Args, scenarios: &[Scenario]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Scenarios".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    for scenario in scenarios {
        let mut driver = LogicDriver::new();
        let started = Instant::now();
        let outcome = run_scenario(&mut driver, scenario, args.verbose).await;
        let result =
            ScenarioResult::from_outcome(scenario.name, "logic", &outcome, started.elapsed());
        print_outcome("logic", scenario.name, &result);
        results.push(result);
    }
    results
}

async fn run_browser_scenarios(args: &Args, scenarios: &[Scenario]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return results;
    }

    println!("{}", "🌐 Running Browser Scenarios".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let cfg = BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    };

    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                continue;
            }
        };

        for scenario in scenarios {
            let mut page = BrowserDriver::new(&driver, args.base_url.clone());
            let started = Instant::now();
            let outcome = run_scenario(&mut page, scenario, args.verbose).await;
            if let Err(err) = &outcome {
                let dir = artifacts_dir(&args.artifacts_dir, kind.label(), scenario.name);
                if let Err(capture_err) = capture_artifacts(&driver, &dir, err).await {
                    log::warn!("failed to capture artifacts in {dir}: {capture_err:#}");
                }
            }
            let result =
                ScenarioResult::from_outcome(scenario.name, kind.label(), &outcome, started.elapsed());
            print_outcome(kind.label(), scenario.name, &result);
            results.push(result);
        }

        let _ = driver.quit().await;
    }
    results
}

fn print_outcome(target: &str, scenario: &str, result: &ScenarioResult) {
    if result.passed {
        println!(
            "✅ [{}] {} - {:?}",
            target.green(),
            scenario,
            result.duration
        );
    } else {
        eprintln!(
            "❌ [{}] {} - {:?}: {}",
            target.red(),
            scenario,
            result.duration,
            result.failure.as_deref().unwrap_or_default()
        );
    }
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => generate_json_report(&mut output_target, results)?,
        ReportFormat::Markdown => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Keynav Scenario Results\n\n_No scenarios executed._"
                )?;
            } else {
                generate_markdown_report(&mut output_target, results)?;
            }
        }
        ReportFormat::Console => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                generate_console_report(&mut output_target, results, start_time.elapsed())?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_expands_to_the_whole_catalog() {
        let resolved = resolve_scenarios("tab-boundary,all");
        assert_eq!(resolved.len(), catalog().len());
    }

    #[test]
    fn unknown_names_are_dropped() {
        let resolved = resolve_scenarios("escape-dismiss, bogus");
        let names: Vec<_> = resolved.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["escape-dismiss"]);
    }

    #[test]
    fn args_parse_browser_options() {
        let args = Args::parse_from([
            "keynav-tester",
            "--mode",
            "both",
            "--report",
            "markdown",
            "--headless",
            "windowed",
            "--hub",
            "http://grid:4444",
        ]);
        assert!(matches!(args.mode, TestMode::Both));
        assert!(matches!(args.report, ReportFormat::Markdown));
        assert!(!args.headless.is_headless());
        assert_eq!(args.hub.as_deref(), Some("http://grid:4444"));
    }
}
