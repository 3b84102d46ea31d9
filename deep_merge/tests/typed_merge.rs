//! Behavioural tests for typed merges through the dynamic representation.
//!
//! Round-trips structs through mappings, checks recursive merging of
//! map-shaped fields, and exercises the conversion failure paths.

use std::collections::BTreeMap;

use anyhow::{Context, Result, ensure};
use deep_merge::{MergeError, MergeRole, ValueKind, from_mapping, merge_structs, to_mapping};
use rstest::{fixture, rstest};
use serde::{Deserialize, Serialize};
use serde_json::Map;

#[derive(Debug, Deserialize, PartialEq, Serialize)]
struct Settings {
    host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    labels: BTreeMap<String, String>,
}

fn labels(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect()
}

#[fixture]
fn defaults() -> Settings {
    Settings {
        host: "localhost".into(),
        port: Some(80),
        tags: vec!["default".into()],
        labels: labels(&[("env", "prod"), ("team", "infra")]),
    }
}

#[rstest]
fn overlay_fields_replace_base_fields(defaults: Settings) -> Result<()> {
    let cli = Settings {
        host: "example.net".into(),
        port: None,
        tags: Vec::new(),
        labels: BTreeMap::new(),
    };

    let merged = merge_structs(&defaults, &cli).context("both structs serialise to mappings")?;
    ensure!(merged.host == "example.net", "host kept the base value");
    ensure!(
        merged.port == Some(80),
        "an unset option must leave the base value intact, got {:?}",
        merged.port,
    );
    Ok(())
}

#[rstest]
fn map_shaped_fields_merge_recursively(defaults: Settings) -> Result<()> {
    let cli = Settings {
        host: "localhost".into(),
        port: None,
        tags: Vec::new(),
        labels: labels(&[("team", "platform")]),
    };

    let merged = merge_structs(&defaults, &cli).context("both structs serialise to mappings")?;
    ensure!(
        merged.labels == labels(&[("env", "prod"), ("team", "platform")]),
        "labels did not merge key by key: {:?}",
        merged.labels,
    );
    Ok(())
}

#[rstest]
fn sequence_fields_replace_wholesale(defaults: Settings) -> Result<()> {
    let cli = Settings {
        host: "localhost".into(),
        port: None,
        tags: vec!["cli".into()],
        labels: BTreeMap::new(),
    };

    let merged = merge_structs(&defaults, &cli).context("both structs serialise to mappings")?;
    ensure!(
        merged.tags == vec![String::from("cli")],
        "sequence field was merged instead of replaced: {:?}",
        merged.tags,
    );
    Ok(())
}

#[rstest]
fn structs_round_trip_through_mappings(defaults: Settings) -> Result<()> {
    let as_mapping = to_mapping(&defaults).context("settings serialise to a mapping")?;
    let restored: Settings =
        from_mapping(as_mapping).context("the mapping satisfies the settings shape")?;
    ensure!(restored == defaults, "round trip changed the value");
    Ok(())
}

#[rstest]
fn scalar_values_do_not_serialise_to_mappings() -> Result<()> {
    let err = match to_mapping(&"just a string") {
        Ok(entries) => anyhow::bail!("expected a rejection, got {entries:?}"),
        Err(err) => err,
    };
    match err {
        MergeError::NotAMapping { role, kind } => {
            ensure!(role == MergeRole::Struct, "unexpected role: {role:?}");
            ensure!(kind == ValueKind::String, "unexpected kind: {kind:?}");
        }
        other => anyhow::bail!("expected NotAMapping, got {other:?}"),
    }
    Ok(())
}

#[rstest]
fn incomplete_mappings_fail_to_deserialise() {
    let outcome: Result<Settings, MergeError> = from_mapping(Map::new());
    assert!(matches!(outcome, Err(MergeError::Deserialize { .. })));
}
