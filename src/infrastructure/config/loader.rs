//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::config::Config;

pub const CONFIG_ENV: &str = "CHATSCENE_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    load_from_paths(config_paths())
}

/// 주어진 경로를 앞에서부터(낮은 우선순위 → 높은 우선순위) 병합한다.
/// 존재하지 않는 파일은 건너뛰고, 파일이 하나도 없으면 기본 설정을 쓴다.
pub(crate) fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        loaded_paths.push(path.to_path_buf());
    }

    if loaded_paths.is_empty() {
        tracing::debug!("no config file found; using built-in defaults");
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/chatscene/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("chatscene").join("config.json"));
    }

    paths.push(PathBuf::from(".chatscene/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{Gender, QualityLevel};

    #[test]
    fn merges_existing_files_in_priority_order() {
        let dir = tempfile::tempdir().unwrap();
        let low = dir.path().join("low.json");
        let high = dir.path().join("high.json");
        let missing = dir.path().join("missing.json");
        fs::write(
            &low,
            r#"{"defaults": {"gender": "male", "quality_level": "draft"}}"#,
        )
        .unwrap();
        fs::write(&high, r#"{"defaults": {"quality_level": "premium"}}"#).unwrap();

        let loaded = load_from_paths(vec![low.clone(), missing, high.clone()]).unwrap();

        assert_eq!(loaded.searched_paths.len(), 3);
        assert_eq!(loaded.loaded_paths, vec![low, high]);
        assert_eq!(loaded.config.default_gender(), Gender::Male);
        assert_eq!(loaded.config.default_quality_level(), QualityLevel::Premium);
    }

    #[test]
    fn no_files_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from_paths(vec![dir.path().join("none.json")]).unwrap();

        assert!(loaded.loaded_paths.is_empty());
        assert!(loaded.config.providers.openai.is_none());
    }

    #[test]
    fn invalid_json_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();

        let err = load_from_paths(vec![broken.clone()]).unwrap_err();
        assert!(format!("{err:#}").contains(&broken.display().to_string()));
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let paths = dedup_paths(vec![
            PathBuf::from("a.json"),
            PathBuf::from("b.json"),
            PathBuf::from("a.json"),
        ]);
        assert_eq!(paths, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
    }
}
