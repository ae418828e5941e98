//! HTTP 接口的请求/响应模型

pub mod common;
pub mod err;
pub mod projects;
