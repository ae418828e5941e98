//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口
//!
//! ## Repository Trait 设计模式 🎯
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```rust,ignore
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! - `Send` + `Sync`：Repository 实例作为共享服务在多个并发请求之间使用
//! - `'static`：作为应用服务长期运行，不依赖于短期引用
//!
//! 服务层通过泛型持有 Repository（零成本抽象），测试时可以替换为内存实现：
//!
//! ```rust,ignore
//! let service = ProjectService::new(ProjectRepository::new(pool.clone()));
//! let project = service.fetch_project_by_id(1).await?;
//! ```
//!
//! 所有数据库操作方法都是异步的，并统一使用 `DatabaseResult<T>` 返回。

pub mod project;

// 重新导出
pub use project::ProjectRepositoryTrait;
