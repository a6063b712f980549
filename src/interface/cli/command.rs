//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::category::{Gender, QualityLevel, Relationship};

#[derive(Debug, Parser)]
#[command(name = "chatscene")]
#[command(about = "Turn chat messages into category-based image generation prompts")]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a single chat message
    Convert {
        /// Chat message text
        message: String,

        #[command(flatten)]
        flags: MessageFlags,
    },
    /// Convert one message per line, then print stats and health
    Batch {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,

        #[command(flatten)]
        flags: MessageFlags,
    },
    /// Show effective merged config and extraction provider
    Config,
}

/// 메시지 단위 변환 옵션. 생략한 값은 설정 기본값을 따른다.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct MessageFlags {
    /// female | male
    #[arg(long, value_parser = parse_gender)]
    pub gender: Option<Gender>,

    /// draft | standard | high | premium
    #[arg(long, value_parser = parse_quality)]
    pub quality: Option<QualityLevel>,

    /// friend | lover | colleague
    #[arg(long, value_parser = parse_relationship)]
    pub relationship: Option<Relationship>,
}

pub enum CliAction {
    Convert {
        message: String,
        flags: MessageFlags,
    },
    Batch {
        file: Option<PathBuf>,
        flags: MessageFlags,
    },
    InspectConfig,
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Self::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        match self.command {
            Commands::Convert { message, flags } => CliAction::Convert { message, flags },
            Commands::Batch { file, flags } => CliAction::Batch { file, flags },
            Commands::Config => CliAction::InspectConfig,
        }
    }
}

fn parse_gender(raw: &str) -> Result<Gender, String> {
    Gender::parse(raw).ok_or_else(|| format!("unsupported gender: {raw}"))
}

fn parse_quality(raw: &str) -> Result<QualityLevel, String> {
    QualityLevel::parse(raw).ok_or_else(|| format!("unsupported quality level: {raw}"))
}

fn parse_relationship(raw: &str) -> Result<Relationship, String> {
    Relationship::parse(raw).ok_or_else(|| format!("unsupported relationship: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(args: &[&str]) -> CliAction {
        Cli::try_parse_from(args).unwrap().into_action()
    }

    #[test]
    fn parses_convert_with_flags() {
        let CliAction::Convert { message, flags } = action(&[
            "chatscene",
            "convert",
            "카페에서 커피 마시는 중",
            "--gender",
            "male",
            "--quality",
            "premium",
        ]) else {
            panic!("expected convert action");
        };

        assert_eq!(message, "카페에서 커피 마시는 중");
        assert_eq!(flags.gender, Some(Gender::Male));
        assert_eq!(flags.quality, Some(QualityLevel::Premium));
        assert_eq!(flags.relationship, None);
    }

    #[test]
    fn batch_file_is_optional() {
        let CliAction::Batch { file, flags } = action(&["chatscene", "batch"]) else {
            panic!("expected batch action");
        };
        assert!(file.is_none());
        assert!(flags.gender.is_none());
    }

    #[test]
    fn rejects_unknown_quality() {
        let err = Cli::try_parse_from(["chatscene", "convert", "hi", "--quality", "ultra"])
            .unwrap_err();
        assert!(err.to_string().contains("unsupported quality level"));
    }

    #[test]
    fn config_subcommand() {
        assert!(matches!(
            action(&["chatscene", "config"]),
            CliAction::InspectConfig
        ));
    }
}
