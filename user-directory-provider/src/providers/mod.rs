//! 用户数据源实现

mod jsonplaceholder;

pub use jsonplaceholder::JsonPlaceholderProvider;
