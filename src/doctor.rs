// Doctor module for health checking a configuration root

#![allow(clippy::print_stdout, clippy::print_stderr)]

use crate::config;
use crate::constants;
use crate::formats::REGISTRY;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    message: String,
}

#[derive(Debug, Serialize)]
struct DoctorOutput {
    /// Schema version for the JSON output format.
    /// Increment only on breaking changes to ensure future integrations can safely evolve.
    /// See constants::SCHEMA_VERSION for the current version.
    schema_version: u32,
    status: String,
    summary: Summary,
    checks: Vec<CheckResult>,
}

#[derive(Debug, Serialize)]
struct Summary {
    ok: usize,
    warnings: usize,
    errors: usize,
}

pub fn check_health(json: bool) -> anyhow::Result<i32> {
    let root = config::config_root();
    let mut results = Vec::new();
    let mut has_errors = false;
    let mut has_warnings = false;

    if !json {
        println!("Checking config root {}...\n", root.display());
    }

    if !root.is_dir() {
        if !json {
            println!("  ❌ {}: Config root not found", root.display());
        }
        results.push(CheckResult {
            name: root.display().to_string(),
            status: CheckStatus::Error,
            message: "Config root not found".to_string(),
        });
        has_errors = true;
    } else {
        let mut files = Vec::new();
        collect_files(&root, &mut files)?;
        // Stable report order regardless of directory iteration order
        files.sort();

        if !json {
            println!("Config Files:");
            if files.is_empty() {
                println!("  ✅ No config files found");
            }
        }

        for file in &files {
            let rel = file.strip_prefix(&root).unwrap_or(file);
            let display = rel.display().to_string();

            let extension = file.extension().and_then(|e| e.to_str());
            let format = extension.and_then(|e| REGISTRY.get(e));

            match (extension, format) {
                (Some(extension), Some(format)) => {
                    let outcome = fs::read_to_string(file)
                        .map_err(anyhow::Error::from)
                        .and_then(|text| format.parse(&text));
                    match outcome {
                        Ok(_) => {
                            if !json {
                                println!("  ✅ {}: Parses as {}", display, extension);
                            }
                            results.push(CheckResult {
                                name: display,
                                status: CheckStatus::Ok,
                                message: format!("Parses as {}", extension),
                            });
                        }
                        Err(e) => {
                            if !json {
                                println!("  ❌ {}: {}", display, e);
                            }
                            results.push(CheckResult {
                                name: display,
                                status: CheckStatus::Error,
                                message: e.to_string(),
                            });
                            has_errors = true;
                        }
                    }
                }
                (Some(extension), None) => {
                    if !json {
                        println!("  ⚠️  {}: No format registered for '{}'", display, extension);
                    }
                    results.push(CheckResult {
                        name: display,
                        status: CheckStatus::Warning,
                        message: format!("No format registered for extension '{}'", extension),
                    });
                    has_warnings = true;
                }
                (None, _) => {
                    if !json {
                        println!("  ⚠️  {}: File has no extension", display);
                    }
                    results.push(CheckResult {
                        name: display,
                        status: CheckStatus::Warning,
                        message: "File has no extension".to_string(),
                    });
                    has_warnings = true;
                }
            }
        }
    }

    // Summary
    let ok_count = results
        .iter()
        .filter(|r| matches!(r.status, CheckStatus::Ok))
        .count();
    let warning_count = results
        .iter()
        .filter(|r| matches!(r.status, CheckStatus::Warning))
        .count();
    let error_count = results
        .iter()
        .filter(|r| matches!(r.status, CheckStatus::Error))
        .count();

    if json {
        let status = if has_errors {
            "failure"
        } else if has_warnings {
            "drift"
        } else {
            "healthy"
        };

        let output = DoctorOutput {
            schema_version: constants::SCHEMA_VERSION,
            status: status.to_string(),
            summary: Summary {
                ok: ok_count,
                warnings: warning_count,
                errors: error_count,
            },
            checks: results,
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("\nSummary:");
        println!("  ✅ {} check(s) passed", ok_count);
        if warning_count > 0 {
            println!("  ⚠️  {} warning(s)", warning_count);
        }
        if error_count > 0 {
            println!("  ❌ {} error(s)", error_count);
        }
    }

    // Deterministic exit codes:
    // 0 = healthy (no errors, no warnings)
    // 1 = drift (warnings present)
    // 2 = failure (errors present)
    if has_errors {
        Ok(2)
    } else if has_warnings {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, files)?;
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}
