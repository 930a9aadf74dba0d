//! `check` command: resolve the inventory and report what was found.

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use serde::Serialize;

use fleetcfg_core::{Resolution, ResolveWarning};

use crate::cli::{CheckArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util::Session;

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    devices: usize,
    groups: usize,
    tagged_addresses: usize,
    warnings: &'a [ResolveWarning],
}

impl<'a> From<&'a Resolution> for CheckReport<'a> {
    fn from(resolution: &'a Resolution) -> Self {
        Self {
            devices: resolution.device_count,
            groups: resolution.groups.len(),
            tagged_addresses: resolution.tags.len(),
            warnings: &resolution.warnings,
        }
    }
}

fn summary(report: &CheckReport<'_>, color: bool) -> String {
    let mut out = String::new();
    for warning in report.warnings {
        let label = if color {
            "warning:".yellow().bold().to_string()
        } else {
            "warning:".to_owned()
        };
        let _ = writeln!(out, "{label} {warning}");
    }

    let line = format!(
        "{} devices in {} groups, {} tagged addresses, {} warnings",
        report.devices,
        report.groups,
        report.tagged_addresses,
        report.warnings.len()
    );
    if color && report.warnings.is_empty() {
        out.push_str(&line.green().to_string());
    } else {
        out.push_str(&line);
    }
    out
}

/// One `kind<TAB>message` line per warning.
fn plain(report: &CheckReport<'_>) -> String {
    report
        .warnings
        .iter()
        .map(|w| format!("{}\t{w}", w.kind()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn handle(session: &Session, args: &CheckArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let resolution = session.store.snapshot()?;
    let report = CheckReport::from(resolution.as_ref());

    let out = output::render_single(
        session.output,
        &report,
        |r| summary(r, session.color),
        plain,
    )?;
    output::print_output(&out, global.quiet);

    let strict = args.strict || session.settings.resolve.strict;
    if strict && !report.warnings.is_empty() {
        return Err(CliError::WarningsFound {
            count: report.warnings.len(),
        });
    }
    Ok(())
}
