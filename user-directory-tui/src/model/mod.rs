//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! App 是唯一的状态树：
//!
//!     App
//!      ├── route        当前路由（/ 或 /users/{id}）
//!      ├── directory    用户目录页状态（加载状态 + 列表视图状态机 + 光标）
//!      ├── detail       用户详情页状态
//!      ├── modal        弹窗
//!      └── commands     等待主循环派发的请求
//!
//! App 实现 `Navigator`：切换路由即挂载对应视图并登记一次请求。

mod app;
pub mod state;

pub use app::App;

#[cfg(test)]
pub(crate) use app::test_support;
