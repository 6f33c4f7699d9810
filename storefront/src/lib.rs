//! Storefront - 单店外卖点餐终端
//!
//! # 架构概述
//!
//! 两个组件，数据单向流动：
//!
//! - **菜单 / 购物车** (`catalog`, `cart`): 固定菜单，按名称合并的购物车
//! - **结账** (`checkout`): 顾客信息表单、联系电话校验、支付方式、下单确认
//!
//! 进入结账时购物车被快照为 `CheckoutItemInput` 列表，之后购物车的改动不会
//! 影响已打开的结账。`session` 把两者连起来，`tui` 负责终端展示。
//!
//! # 模块结构
//!
//! ```text
//! storefront/src/
//! ├── core/          # 配置、运行环境
//! ├── catalog/       # 菜单目录 (内置 / JSON)
//! ├── cart/          # 购物车 (纯函数 applier)
//! ├── checkout/      # 表单、校验、状态机
//! ├── feedback.rs    # "Item added to cart!" 定时提示
//! ├── money.rs       # 金额计算 (rust_decimal)
//! ├── session.rs     # 会话: 购物车 → 结账
//! ├── tui/           # 终端界面
//! └── utils/         # 日志
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod feedback;
pub mod money;
pub mod session;
pub mod tui;
pub mod utils;

// Re-export 公共类型
pub use cart::CartManager;
pub use catalog::{Catalog, CatalogError};
pub use checkout::{Checkout, CheckoutError, CheckoutPolicy, CheckoutState, ContactRule};
pub use self::core::{Config, ConfigError, setup_environment};
pub use feedback::{FeedbackExpired, FeedbackNotice};
pub use session::{Storefront, View};

// Re-export unified error types from shared
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
