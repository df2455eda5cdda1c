//! cybercat - 编码面板的无头核心
//!
//! 模块结构：
//! - models: 数据模型（FileTree）
//! - kernel: 状态/动作/副作用（Store, OpenTabs, ChatState）
//! - kernel::services: 端口与适配器（设置、助手、异步运行时）

pub mod kernel;
pub mod models;
