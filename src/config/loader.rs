use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::config::{ConfigEntry, KEYS};

pub fn load_builtin_v1() -> Result<Vec<ConfigEntry>> {
    let content = include_str!("../../assets/config/cardio_v1.tsv");
    parse_config_tsv(content, "built-in v1")
}

pub fn load_config_tsv(path: &Path) -> Result<Vec<ConfigEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config TSV {}", path.display()))?;
    parse_config_tsv(&content, &path.display().to_string())
}

/// User entries replace built-in entries with the same key, keeping the
/// built-in position. The parser only admits known keys and the built-in
/// table carries every key, so no user entry is left over.
pub fn merge_entries(mut builtin: Vec<ConfigEntry>, user: Vec<ConfigEntry>) -> Vec<ConfigEntry> {
    if user.is_empty() {
        return builtin;
    }
    let mut user_map: HashMap<String, ConfigEntry> = user
        .into_iter()
        .map(|entry| (entry.key.clone(), entry))
        .collect();

    builtin
        .drain(..)
        .map(|entry| user_map.remove(&entry.key).unwrap_or(entry))
        .collect()
}

fn parse_config_tsv(content: &str, source: &str) -> Result<Vec<ConfigEntry>> {
    let mut out: Vec<ConfigEntry> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() != 2 {
            bail!("{}:{} malformed TSV (expected 2 columns)", source, line_no);
        }
        let key = parts[0].trim();
        let value = parts[1].trim();
        if key.is_empty() || value.is_empty() {
            bail!("{}:{} empty field in TSV", source, line_no);
        }
        if !KEYS.contains(&key) {
            bail!("{}:{} unknown config key '{}'", source, line_no, key);
        }
        if out.iter().any(|e| e.key == key) {
            bail!("{}:{} duplicate config key '{}'", source, line_no, key);
        }
        out.push(ConfigEntry {
            key: key.to_string(),
            value: value.to_string(),
            origin: format!("{}:{}", source, line_no),
        });
    }

    Ok(out)
}
