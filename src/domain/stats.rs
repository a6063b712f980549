//! 변환 통계/헬스 판정 규칙.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 헬스 판정에 쓰는 최근 변환 건수
pub const HEALTH_WINDOW: usize = 100;
/// 최근 추출 성공률(%)이 이 값 이상이면 Healthy
pub const HEALTHY_EXTRACTION_RATE: f64 = 90.0;
/// 최근 추출 성공률(%)이 이 값 이상이면 Degraded, 미만이면 Unhealthy
pub const DEGRADED_EXTRACTION_RATE: f64 = 50.0;

/// 변환 1건의 결과 분류.
/// 폴백도 호출자 입장에서는 완전한 결과를 받았으므로 성공으로 센다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionOutcome {
    Extracted,
    Fallback,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PerformanceStats {
    pub total_conversions: u64,
    pub successful_conversions: u64,
    pub fallback_conversions: u64,
    pub average_latency_ms: f64,
    /// 0-100
    pub success_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
    pub status: HealthState,
    pub timestamp: DateTime<Utc>,
    /// 최근 창에서 폴백 없이 추출된 비율(0-100)
    pub recent_extraction_rate: f64,
    pub sample_size: usize,
}

/// 프로세스 수명 동안만 유지되는 누적 카운터.
#[derive(Debug, Default)]
pub struct ConversionStats {
    total: u64,
    successful: u64,
    fallback: u64,
    total_latency_ms: u64,
    recent: VecDeque<ConversionOutcome>,
}

impl ConversionStats {
    pub fn record(&mut self, outcome: ConversionOutcome, latency_ms: u64) {
        self.total += 1;
        self.successful += 1;
        if outcome == ConversionOutcome::Fallback {
            self.fallback += 1;
        }
        self.total_latency_ms = self.total_latency_ms.saturating_add(latency_ms);

        if self.recent.len() == HEALTH_WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(outcome);
    }

    pub fn snapshot(&self) -> PerformanceStats {
        let (average_latency_ms, success_rate) = if self.total == 0 {
            (0.0, 100.0)
        } else {
            (
                round2(self.total_latency_ms as f64 / self.total as f64),
                round2(self.successful as f64 * 100.0 / self.total as f64),
            )
        };

        PerformanceStats {
            total_conversions: self.total,
            successful_conversions: self.successful,
            fallback_conversions: self.fallback,
            average_latency_ms,
            success_rate,
        }
    }

    pub fn health(&self, timestamp: DateTime<Utc>) -> ServiceHealth {
        let sample_size = self.recent.len();
        let recent_extraction_rate = if sample_size == 0 {
            100.0
        } else {
            let extracted = self
                .recent
                .iter()
                .filter(|outcome| **outcome == ConversionOutcome::Extracted)
                .count();
            round2(extracted as f64 * 100.0 / sample_size as f64)
        };

        ServiceHealth {
            status: determine_health_state(recent_extraction_rate),
            timestamp,
            recent_extraction_rate,
            sample_size,
        }
    }
}

fn determine_health_state(extraction_rate: f64) -> HealthState {
    if extraction_rate >= HEALTHY_EXTRACTION_RATE {
        HealthState::Healthy
    } else if extraction_rate >= DEGRADED_EXTRACTION_RATE {
        HealthState::Degraded
    } else {
        HealthState::Unhealthy
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
