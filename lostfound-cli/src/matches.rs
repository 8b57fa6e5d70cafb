//! `match` command implementation for the lost-and-found CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use log::info;
use lostfound_core::{FoundItemFilter, ItemSnapshot, MatchCandidate, Matcher};
use lostfound_matcher::{HeuristicMatcher, MatchWeights, compute_matches_with};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::io::{create_utf8_file, file_is_file, open_utf8_file};
use crate::{
    ARG_FOUND_SCOPE, ARG_LIMIT, ARG_MIN_SCORE, ARG_OUTPUT, ARG_SNAPSHOT, CliError, ENV_SNAPSHOT,
};

/// Which found items the command ranks against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum FoundScope {
    /// Only items an admin has verified.
    #[default]
    Verified,
    /// Every item that has not been claimed.
    Unclaimed,
}

impl From<FoundScope> for FoundItemFilter {
    fn from(scope: FoundScope) -> Self {
        match scope {
            FoundScope::Verified => Self::Verified,
            FoundScope::Unclaimed => Self::Unclaimed,
        }
    }
}

/// CLI arguments for the `match` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "match",
    long_about = "Rank every lost-item report against the eligible found-item \
                 reports of a JSON snapshot and print the candidates that \
                 clear the admission threshold, best first.",
    about = "Propose matches between lost and found items"
)]
#[ortho_config(prefix = "LOSTFOUND")]
pub(crate) struct MatchArgs {
    /// Path to a JSON snapshot holding `lostItems` and `foundItems`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot: Option<Utf8PathBuf>,
    /// Minimum score a pair needs to be proposed (default 3).
    #[arg(long = ARG_MIN_SCORE, value_name = "points")]
    #[serde(default)]
    pub(crate) min_score: Option<u32>,
    /// Keep only the best `count` candidates.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Which found items are eligible (default `verified`).
    #[arg(long = ARG_FOUND_SCOPE, value_enum, value_name = "scope")]
    #[serde(default)]
    pub(crate) found_scope: Option<FoundScope>,
    /// Write the report to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl MatchArgs {
    pub(crate) fn into_config(self) -> Result<MatchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MatchConfig::try_from(merged)
    }
}

/// Resolved `match` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatchConfig {
    /// Path to the JSON snapshot.
    pub(crate) snapshot: Utf8PathBuf,
    /// Weights handed to the matcher.
    pub(crate) weights: MatchWeights,
    /// Maximum number of candidates to report.
    pub(crate) limit: Option<usize>,
    /// Found items taking part in matching.
    pub(crate) filter: FoundItemFilter,
    /// Report destination; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl MatchConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match file_is_file(&self.snapshot) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_SNAPSHOT,
                path: self.snapshot.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_SNAPSHOT,
                    path: self.snapshot.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_SNAPSHOT,
                path: self.snapshot.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<MatchArgs> for MatchConfig {
    type Error = CliError;

    fn try_from(args: MatchArgs) -> Result<Self, Self::Error> {
        let snapshot = args.snapshot.ok_or(CliError::MissingArgument {
            field: ARG_SNAPSHOT,
            env: ENV_SNAPSHOT,
        })?;
        if args.limit == Some(0) {
            return Err(CliError::ZeroLimit { field: ARG_LIMIT });
        }
        let defaults = MatchWeights::default();
        let weights = defaults
            .with_admission_threshold(args.min_score.unwrap_or(defaults.admission_threshold));
        Ok(Self {
            snapshot,
            weights,
            limit: args.limit,
            filter: args.found_scope.unwrap_or_default().into(),
            output: args.output,
        })
    }
}

/// JSON document written by the `match` command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MatchReport<'a> {
    /// Lost items considered.
    pub(crate) lost_items: usize,
    /// Found items considered after eligibility filtering.
    pub(crate) found_items: usize,
    /// Threshold candidates had to reach.
    pub(crate) admission_threshold: u32,
    /// Ranked candidates, best first.
    pub(crate) candidates: Vec<MatchCandidate<'a>>,
}

pub(super) fn run_match(args: MatchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_match_with(args, &mut stdout)
}

pub(super) fn run_match_with(args: MatchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_match_config(args)?;
    let snapshot = prepare_snapshot(&config)?;
    let matcher = HeuristicMatcher::new(config.weights)?;

    let mut candidates =
        compute_matches_with(&matcher, &snapshot.lost_items, &snapshot.found_items);
    if let Some(limit) = config.limit {
        candidates.truncate(limit);
    }
    info!(
        "proposing {} candidate(s) for {} lost and {} found item(s)",
        candidates.len(),
        snapshot.lost_items.len(),
        snapshot.found_items.len()
    );

    let report = MatchReport {
        lost_items: snapshot.lost_items.len(),
        found_items: snapshot.found_items.len(),
        admission_threshold: matcher.admission_threshold(),
        candidates,
    };
    match config.output.as_deref() {
        Some(path) => write_report_file(path, &report),
        None => write_report(writer, &report),
    }
}

fn resolve_match_config(args: MatchArgs) -> Result<MatchConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Load, validate and filter the snapshot named by `config`.
pub(super) fn prepare_snapshot(config: &MatchConfig) -> Result<ItemSnapshot, CliError> {
    let mut snapshot = load_snapshot(&config.snapshot)?;
    snapshot
        .validate()
        .map_err(|source| CliError::InvalidSnapshot {
            path: config.snapshot.clone(),
            source,
        })?;
    let before = snapshot.found_items.len();
    snapshot.retain_eligible_found(config.filter);
    info!(
        "{} of {before} found item(s) eligible under {:?}",
        snapshot.found_items.len(),
        config.filter
    );
    Ok(snapshot)
}

/// Loads a JSON-encoded [`ItemSnapshot`] from disk.
pub(super) fn load_snapshot(path: &Utf8Path) -> Result<ItemSnapshot, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenSnapshot {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseSnapshot {
        path: path.to_path_buf(),
        source,
    })
}

fn write_report_file(path: &Utf8Path, report: &MatchReport<'_>) -> Result<(), CliError> {
    let mut file = create_utf8_file(path).map_err(|source| CliError::CreateReport {
        path: path.to_path_buf(),
        source,
    })?;
    write_report(&mut file, report)?;
    info!("wrote match report to {path}");
    Ok(())
}

fn write_report(writer: &mut dyn Write, report: &MatchReport<'_>) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<MatchConfig, CliError> {
    let merged = MatchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    MatchConfig::try_from(merged)
}
