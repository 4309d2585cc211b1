pub mod api;
pub mod log;

use crate::config::api::Api;
use crate::provider::api::google::{GOOGLE_BOOKS_ENDPOINT, DEFAULT_CONNECT_TIMEOUT_MILLIS, DEFAULT_READ_TIMEOUT_MILLIS};
use config;
use serde::Deserialize;
use std::env;
use std::path::Path;

/// 환경 변수로 설정을 덮어쓸 때 사용하는 접두어 (예: `BOOK_DIGGER_API__BASE_URL`)
const ENV_PREFIX: &str = "BOOK_DIGGER";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    api: Api,
    #[serde(default)]
    logger: log::Config,
}

impl AppConfig {
    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn api_mut(&mut self) -> &mut Api {
        &mut self.api
    }

    pub fn logger(&self) -> &log::Config {
        &self.logger
    }
}

/// 실행 환경에 따라 .env 파일을 로드한다.
pub fn load_dotenv() {
    let env_filename = run_mode()
        .map(|env| format!(".env.{}", env))
        .unwrap_or_else(|| ".env".into());

    dotenvy::from_filename(env_filename).ok();
}

/// `config/<RUN_MODE>.json`과 환경 변수로 설정을 읽는다. 설정 파일은 없어도 된다.
pub fn load_config() -> Result<AppConfig, config::ConfigError> {
    let env = run_mode().unwrap_or_else(|| "development".into());
    load_config_from(Path::new("config"), &env)
}

pub fn load_config_from(dir: &Path, env: &str) -> Result<AppConfig, config::ConfigError> {
    let file = dir.join(format!("{}.json", env));

    let config = config::Config::builder()
        .set_default("api.base_url", GOOGLE_BOOKS_ENDPOINT)?
        .set_default("api.connect_timeout_ms", DEFAULT_CONNECT_TIMEOUT_MILLIS as i64)?
        .set_default("api.read_timeout_ms", DEFAULT_READ_TIMEOUT_MILLIS as i64)?
        .add_source(config::File::from(file).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
        )
        .build()?;

    config.try_deserialize()
}

fn run_mode() -> Option<String> {
    env::var("RUN_MODE").ok()
}
