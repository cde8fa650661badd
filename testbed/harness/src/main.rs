use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::process::{exit, Command, Stdio};

// --- Data Structures for scenario.yaml ---

#[derive(Debug, Deserialize, Default)]
struct Scenario {
    description: String,
    command: Vec<String>,
    // Written to the child's stdin, which is closed afterwards.
    #[serde(default)]
    stdin: Option<String>,
    #[serde(default)]
    assertions: Assertions,
}

#[derive(Debug, Deserialize, Default)]
struct Assertions {
    exit_code: Option<i32>,
    #[serde(default)]
    stdout_contains: Vec<String>,
    #[serde(default)]
    stdout_not_contains: Vec<String>,
    stderr_contains: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Harness Error:\n{:#}", e);
        exit(1);
    }
}

fn run() -> Result<()> {
    let scenario_path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("Path to scenario.yaml not provided."))?;

    println!("--- Running Test Scenario: {} ---", scenario_path);

    let scenario_content = fs::read_to_string(&scenario_path)
        .with_context(|| format!("Failed to read scenario file at '{}'", scenario_path))?;
    let scenario: Scenario = serde_yaml::from_str(&scenario_content)
        .with_context(|| "Failed to parse YAML from scenario file")?;

    println!("Description: {}", scenario.description);

    let mut cmd_parts = scenario.command.iter();
    let executable = cmd_parts
        .next()
        .ok_or_else(|| anyhow!("Command in scenario file cannot be empty"))?;

    let mut child = Command::new(executable)
        .args(cmd_parts)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn command: {:?}", scenario.command))?;

    {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("Child process has no stdin"))?;
        if let Some(input) = &scenario.stdin {
            stdin
                .write_all(input.as_bytes())
                .context("Failed to write scenario stdin")?;
        }
    }

    let output = child
        .wait_with_output()
        .context("Failed to wait for child process")?;

    verify_assertions(&output.stdout, &output.stderr, output.status, &scenario.assertions)?;

    println!("--- Scenario Passed ---");
    Ok(())
}

fn verify_assertions(
    stdout: &[u8],
    stderr: &[u8],
    status: std::process::ExitStatus,
    assertions: &Assertions,
) -> Result<()> {
    let stdout_str = String::from_utf8_lossy(stdout);
    let stderr_str = String::from_utf8_lossy(stderr);

    // 1. Verify Exit Code (if specified)
    if let Some(expected_code) = assertions.exit_code {
        if status.code() != Some(expected_code) {
            return Err(anyhow!(
                "Assertion failed: Exit code mismatch.\nExpected: {}\nActual: {:?}\n---\nSTDOUT:\n{}\n---\nSTDERR:\n{}",
                expected_code,
                status.code(),
                stdout_str,
                stderr_str
            ));
        }
    }

    // 2. Verify STDOUT, in order
    let mut search_from = 0;
    for expected in &assertions.stdout_contains {
        match stdout_str[search_from..].find(expected.as_str()) {
            Some(offset) => search_from += offset + expected.len(),
            None => {
                return Err(anyhow!(
                    "Assertion failed: STDOUT did not contain expected text (after byte {}).\nExpected: '{}'\n---\nActual STDOUT:\n{}",
                    search_from,
                    expected,
                    stdout_str
                ));
            }
        }
    }

    for unexpected in &assertions.stdout_not_contains {
        if stdout_str.contains(unexpected.as_str()) {
            return Err(anyhow!(
                "Assertion failed: STDOUT contained unexpected text.\nUnexpected: '{}'\n---\nActual STDOUT:\n{}",
                unexpected,
                stdout_str
            ));
        }
    }

    // 3. Verify STDERR
    if let Some(expected) = &assertions.stderr_contains {
        if !stderr_str.contains(expected.as_str()) {
            return Err(anyhow!(
                "Assertion failed: STDERR did not contain expected text.\nExpected: '{}'\n---\nActual STDERR:\n{}",
                expected,
                stderr_str
            ));
        }
    }

    Ok(())
}
