//! 애플리케이션 조립(composition root) 모듈.

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::{ConfigRepository, LanguageModelFactory, Reporter};
use crate::application::usecases::convert_prompt::CategoryPromptService;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, JsonConfigRepository, LanguageModelFactoryAdapter, SystemClock,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    model_factory: LanguageModelFactoryAdapter,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new()
    }
}

impl AppComposition {
    pub fn new() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            model_factory: LanguageModelFactoryAdapter,
            reporter: ConsoleReporter::new(),
        }
    }

    /// 병합된 설정을 로딩한다.
    pub fn config(&self) -> Result<Config> {
        self.config_repo.load()
    }

    /// 설정과 선택된 provider로 변환 서비스를 구성한다.
    pub fn prompt_service(&self, config: &Config) -> CategoryPromptService {
        let model = self.model_factory.build(config);
        CategoryPromptService::from_config(config, model, Box::new(SystemClock))
    }

    pub fn reporter(&self) -> &dyn Reporter {
        &self.reporter
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
            reporter: &self.reporter,
        }
    }
}
