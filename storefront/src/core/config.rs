use crate::checkout::DEFAULT_CONTACT_DIGITS;
use crate::feedback::DEFAULT_FEEDBACK_DELAY_MS;
use std::path::PathBuf;
use std::time::Duration;

/// 联系电话允许的最大位数
pub const MAX_CONTACT_DIGITS: usize = 20;

/// 店面配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量（或 `.env` 文件）覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | STORE_NAME | Uzma Foods | 店铺名称 (标题栏) |
/// | CURRENCY | Rs. | 金额前缀 |
/// | MENU_FILE | (未设置) | 菜单 JSON 文件，未设置时使用内置菜单 |
/// | CONTACT_DIGITS | 10 | 联系电话位数 |
/// | FEEDBACK_DELAY_MS | 2000 | "已加入购物车" 提示的显示时长 |
/// | ONLINE_PAYMENT_ENABLED | false | 是否开放在线支付 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志文件目录，存在时按天滚动写入 |
///
/// # 示例
///
/// ```ignore
/// CONTACT_DIGITS=11 MENU_FILE=./menu.json cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 店铺名称
    pub store_name: String,
    /// 金额前缀
    pub currency: String,
    /// 菜单文件路径
    pub menu_file: Option<PathBuf>,
    /// 联系电话位数
    pub contact_digits: usize,
    /// 提示显示时长 (毫秒)
    pub feedback_delay_ms: u64,
    /// 在线支付开关
    pub online_payment_enabled: bool,
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<PathBuf>,
}

/// 配置校验错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("CONTACT_DIGITS must be between 1 and 20, got {0}")]
    ContactDigits(usize),

    #[error("FEEDBACK_DELAY_MS must be positive")]
    FeedbackDelay,
}

impl From<ConfigError> for shared::AppError {
    fn from(err: ConfigError) -> Self {
        shared::AppError::config(err.to_string())
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            store_name: std::env::var("STORE_NAME").unwrap_or_else(|_| "Uzma Foods".into()),
            currency: std::env::var("CURRENCY").unwrap_or_else(|_| "Rs.".into()),
            menu_file: std::env::var("MENU_FILE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            contact_digits: std::env::var("CONTACT_DIGITS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CONTACT_DIGITS),
            feedback_delay_ms: std::env::var("FEEDBACK_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FEEDBACK_DELAY_MS),
            online_payment_enabled: std::env::var("ONLINE_PAYMENT_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// 校验配置取值范围
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contact_digits == 0 || self.contact_digits > MAX_CONTACT_DIGITS {
            return Err(ConfigError::ContactDigits(self.contact_digits));
        }
        if self.feedback_delay_ms == 0 {
            return Err(ConfigError::FeedbackDelay);
        }
        Ok(())
    }

    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }
}

impl Default for Config {
    /// 内置默认值，不读取环境变量 (测试使用)
    fn default() -> Self {
        Self {
            store_name: "Uzma Foods".into(),
            currency: "Rs.".into(),
            menu_file: None,
            contact_digits: DEFAULT_CONTACT_DIGITS,
            feedback_delay_ms: DEFAULT_FEEDBACK_DELAY_MS,
            online_payment_enabled: false,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}
