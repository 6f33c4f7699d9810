//! 核心模块 - 配置与运行环境
//!
//! - [`Config`] - 店面配置
//! - [`setup_environment`] - 加载 .env 并校验配置

pub mod config;

pub use config::{Config, ConfigError};

/// 加载 `.env`，读取并校验配置
///
/// `.env` 不存在时静默忽略。
pub fn setup_environment() -> Result<Config, ConfigError> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
