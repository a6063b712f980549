//! 콘솔 리포터 포트 구현 어댑터.
//! stdout은 JSON 결과 전용이므로 사람이 읽는 진행 출력은 stderr로 보낸다.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터.
pub struct ConsoleReporter {
    colored: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stderr가 TTY일 때만 상태 색상을 쓴다.
    pub fn new() -> Self {
        Self {
            colored: io::stderr().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn section(&self, name: &str) {
        eprintln!();
        eprintln!("==================== {} ====================", name);
    }

    fn kv(&self, key: &str, value: &str) {
        eprintln!("{:<14}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        if self.colored {
            eprintln!("[{:<12}] {}", scope, colorize_status(message));
        } else {
            eprintln!("[{:<12}] {}", scope, message);
        }
    }
}

fn colorize_status(status: &str) -> String {
    match status {
        "healthy" => format!("\x1b[32m{status}\x1b[0m"),
        "degraded" => format!("\x1b[33m{status}\x1b[0m"),
        "unhealthy" => format!("\x1b[31m{status}\x1b[0m"),
        _ => status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_health_states_only() {
        assert_eq!(colorize_status("healthy"), "\x1b[32mhealthy\x1b[0m");
        assert_eq!(colorize_status("unhealthy"), "\x1b[31munhealthy\x1b[0m");
        assert_eq!(colorize_status("model"), "model");
    }
}
