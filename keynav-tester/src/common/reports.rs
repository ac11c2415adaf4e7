use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    /// `logic` or the browser the scenario ran in.
    pub target: String,
    pub passed: bool,
    pub failure: Option<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl ScenarioResult {
    pub fn from_outcome(
        scenario_name: &str,
        target: &str,
        outcome: &Result<()>,
        duration: Duration,
    ) -> Self {
        Self {
            scenario_name: scenario_name.to_string(),
            target: target.to_string(),
            passed: outcome.is_ok(),
            failure: outcome.as_ref().err().map(|err| format!("{err:#}")),
            duration,
        }
    }
}

fn success_rate(results: &[ScenarioResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let passed = results.iter().filter(|r| r.passed).count();
    #[allow(clippy::cast_precision_loss)]
    let rate = (passed as f64 / results.len() as f64) * 100.0;
    rate
}

pub fn generate_console_report<W: Write>(
    writer: &mut W,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "📊 Scenario Results Summary".bright_cyan().bold())?;
    writeln!(writer, "{}", "===========================".cyan())?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();

    writeln!(writer, "Total runs: {total}")?;
    writeln!(writer, "Passed: {}", passed.to_string().green())?;
    writeln!(writer, "Failed: {}", (total - passed).to_string().red())?;
    writeln!(writer, "Success rate: {:.1}%", success_rate(results))?;
    writeln!(writer, "Total time: {total_duration:?}")?;
    writeln!(writer)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            writer,
            "{} {} [{}] ({:?})",
            status,
            result.scenario_name.bold(),
            result.target,
            result.duration
        )?;
        if let Some(failure) = &result.failure {
            writeln!(writer, "     • {}", failure.red())?;
        }
    }
    Ok(())
}

pub fn generate_json_report<W: Write>(writer: &mut W, results: &[ScenarioResult]) -> Result<()> {
    let json_output = serde_json::to_string_pretty(results)?;
    writeln!(writer, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write>(writer: &mut W, results: &[ScenarioResult]) -> Result<()> {
    writeln!(writer, "# Keynav Scenario Results\n")?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();

    writeln!(writer, "## Summary\n")?;
    writeln!(writer, "- **Total runs**: {total}")?;
    writeln!(writer, "- **Passed**: {passed}")?;
    writeln!(writer, "- **Failed**: {}", total - passed)?;
    writeln!(writer, "- **Success rate**: {:.1}%\n", success_rate(results))?;

    writeln!(writer, "## Detailed Results\n")?;
    writeln!(writer, "| Scenario | Target | Result | Time |")?;
    writeln!(writer, "| --- | --- | --- | --- |")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(
            writer,
            "| {} | {} | {} | {:?} |",
            result.scenario_name, result.target, status, result.duration
        )?;
    }

    let failures: Vec<_> = results.iter().filter(|r| !r.passed).collect();
    if !failures.is_empty() {
        writeln!(writer, "\n## Failures\n")?;
        for result in failures {
            writeln!(
                writer,
                "- **{}** [{}]: {}",
                result.scenario_name,
                result.target,
                result.failure.as_deref().unwrap_or("unknown failure")
            )?;
        }
    }
    Ok(())
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ScenarioResult> {
        vec![
            ScenarioResult::from_outcome(
                "directional-wrap",
                "logic",
                &Ok(()),
                Duration::from_millis(3),
            ),
            ScenarioResult::from_outcome(
                "escape-dismiss",
                "chrome",
                &Err(anyhow::anyhow!("expected clicks").context("step 2 (press Escape)")),
                Duration::from_millis(40),
            ),
        ]
    }

    #[test]
    fn failure_keeps_the_error_chain() {
        let results = sample();
        assert!(results[0].failure.is_none());
        assert_eq!(
            results[1].failure.as_deref(),
            Some("step 2 (press Escape): expected clicks")
        );
    }

    #[test]
    fn json_report_uses_millis() {
        let mut out = Vec::new();
        generate_json_report(&mut out, &sample()).expect("json");
        let parsed: Vec<ScenarioResult> = serde_json::from_slice(&out).expect("parse");
        assert_eq!(parsed[1].duration, Duration::from_millis(40));
        assert!(String::from_utf8_lossy(&out).contains("\"duration\": 40"));
    }

    #[test]
    fn markdown_report_lists_failures() {
        let mut out = Vec::new();
        generate_markdown_report(&mut out, &sample()).expect("markdown");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("- **Success rate**: 50.0%"));
        assert!(text.contains("| escape-dismiss | chrome | ❌ |"));
        assert!(text.contains("## Failures"));
    }

    #[test]
    fn console_report_counts_runs() {
        let mut out = Vec::new();
        generate_console_report(&mut out, &sample(), Duration::from_millis(50)).expect("console");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Total runs: 2"));
        assert!(text.contains("directional-wrap"));
    }
}
