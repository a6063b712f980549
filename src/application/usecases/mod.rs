//! 유스케이스 모음.

pub mod convert_prompt;
pub mod inspect_config;
