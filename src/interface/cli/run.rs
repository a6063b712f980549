//! CLI 명령 실행(입력 읽기, 변환 호출, 결과 출력 구성).

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::config::Config;
use crate::application::ports::Reporter;
use crate::application::usecases::convert_prompt::CategoryPromptService;
use crate::domain::category::ConversionOptions;
use crate::domain::conversion::{ConversionRequest, PromptResult};
use crate::domain::stats::{HealthState, PerformanceStats, ServiceHealth};

use super::command::MessageFlags;

/// `batch` 명령 출력 본문.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub results: Vec<PromptResult>,
    pub performance: PerformanceStats,
    pub health: ServiceHealth,
}

/// 플래그를 설정 기본값과 합쳐 변환 옵션을 만든다.
pub fn resolve_options(flags: MessageFlags, config: &Config) -> ConversionOptions {
    let mut options = ConversionOptions::new(flags.gender.unwrap_or(config.default_gender()));
    if let Some(quality) = flags.quality {
        options = options.with_quality(quality);
    }
    if let Some(relationship) = flags.relationship {
        options = options.with_relationship(relationship);
    }
    options
}

/// 입력 텍스트를 줄 단위 메시지로 나눈다. 빈 줄은 건너뛴다.
pub fn parse_batch_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub async fn run_convert(
    service: &CategoryPromptService,
    reporter: &dyn Reporter,
    message: &str,
    options: ConversionOptions,
) -> Result<String> {
    reporter.status("extractor", service.extraction_mode());
    let result = service.convert_message(message, options).await;
    reporter.kv("source", result.generation_info.extraction_source.code());
    reporter.kv("score", &result.quality_score.to_string());
    Ok(serde_json::to_string_pretty(&result)?)
}

pub async fn run_batch(
    service: &CategoryPromptService,
    reporter: &dyn Reporter,
    input: &str,
    options: ConversionOptions,
) -> Result<String> {
    let requests: Vec<ConversionRequest> = parse_batch_lines(input)
        .into_iter()
        .map(|message| ConversionRequest::new(message, options))
        .collect();

    reporter.status("extractor", service.extraction_mode());
    reporter.kv("messages", &requests.len().to_string());

    let results = service.convert_messages(&requests).await;
    let report = BatchReport {
        results,
        performance: service.performance_stats(),
        health: service.service_health(),
    };

    reporter.section("Stats");
    reporter.kv("total", &report.performance.total_conversions.to_string());
    reporter.kv("fallback", &report.performance.fallback_conversions.to_string());
    reporter.kv("success_rate", &format!("{:.2}%", report.performance.success_rate));
    reporter.kv(
        "avg_latency",
        &format!("{:.2}ms", report.performance.average_latency_ms),
    );
    reporter.status("health", status_code(&report.health));

    Ok(serde_json::to_string_pretty(&report)?)
}

/// 파일 경로가 없으면 stdin 전체를 읽는다.
pub fn read_batch_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read batch input: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read batch input from stdin")?;
            Ok(buf)
        }
    }
}

fn status_code(health: &ServiceHealth) -> &'static str {
    match health.status {
        HealthState::Healthy => "healthy",
        HealthState::Degraded => "degraded",
        HealthState::Unhealthy => "unhealthy",
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::application::config::DefaultsConfig;
    use crate::application::ports::Clock;
    use crate::application::usecases::convert_prompt::CategoryExtractor;
    use crate::domain::category::{Gender, QualityLevel, Relationship};

    struct EpochClock;

    impl Clock for EpochClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::<Utc>::UNIX_EPOCH
        }
    }

    struct SilentReporter;

    impl Reporter for SilentReporter {
        fn section(&self, _name: &str) {}
        fn kv(&self, _key: &str, _value: &str) {}
        fn status(&self, _scope: &str, _message: &str) {}
    }

    fn keyword_service() -> CategoryPromptService {
        CategoryPromptService::new(CategoryExtractor::Keyword, Box::new(EpochClock))
    }

    #[test]
    fn flags_override_config_defaults() {
        let config = Config {
            defaults: DefaultsConfig {
                gender: Some("male".to_string()),
                ..DefaultsConfig::default()
            },
            ..Config::default()
        };

        let options = resolve_options(MessageFlags::default(), &config);
        assert_eq!(options.gender, Gender::Male);
        assert_eq!(options.quality_level, None);

        let flags = MessageFlags {
            gender: Some(Gender::Female),
            quality: Some(QualityLevel::Draft),
            relationship: Some(Relationship::Lover),
        };
        let options = resolve_options(flags, &config);
        assert_eq!(options.gender, Gender::Female);
        assert_eq!(options.quality_level, Some(QualityLevel::Draft));
        assert_eq!(options.relationship, Some(Relationship::Lover));
    }

    #[test]
    fn batch_lines_skip_blank_entries() {
        let lines = parse_batch_lines("카페에서 커피\n\n   \n  해변 산책  \n");
        assert_eq!(lines, vec!["카페에서 커피", "해변 산책"]);
    }

    #[test]
    fn reads_batch_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "첫 줄").unwrap();
        writeln!(file, "둘째 줄").unwrap();

        let input = read_batch_input(Some(file.path())).unwrap();
        assert_eq!(parse_batch_lines(&input).len(), 2);
        assert!(read_batch_input(Some(Path::new("/no/such/chatscene/input.txt"))).is_err());
    }

    #[tokio::test]
    async fn batch_report_includes_results_stats_and_health() {
        let service = keyword_service();
        let json = run_batch(
            &service,
            &SilentReporter,
            "카페에서 커피 마시는 중\n\n도서관에서 책 읽기\n",
            ConversionOptions::new(Gender::Female),
        )
        .await
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["results"].as_array().unwrap().len(), 2);
        assert_eq!(value["performance"]["total_conversions"], 2);
        assert_eq!(value["health"]["status"], "healthy");
    }

    #[tokio::test]
    async fn convert_prints_single_result() {
        let service = keyword_service();
        let json = run_convert(
            &service,
            &SilentReporter,
            "",
            ConversionOptions::new(Gender::Male),
        )
        .await
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["positive_prompt"].as_str().unwrap().starts_with("1boy"));
        assert_eq!(value["generation_info"]["extraction_source"], "fallback");
    }
}
