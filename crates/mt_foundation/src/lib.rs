// maritopo\crates\mt_foundation\src/lib.rs

//! MariTopo Foundation Layer
//!
//! 基础层，提供整个项目的基础抽象，不含任何领域逻辑。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型
//! - [`scalar`]: 高程计算用标量类型
//!
//! # 设计原则
//!
//! 1. **最小依赖**: 仅依赖 thiserror
//! 2. **同步报错**: 所有前置条件违规立即返回错误，不做重试
//!
//! # 示例
//!
//! ```
//! use mt_foundation::{MtError, MtResult};
//!
//! fn need_even(len: usize) -> MtResult<()> {
//!     MtError::check_even("cells", 0, len)
//! }
//!
//! assert!(need_even(4).is_ok());
//! assert!(need_even(3).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod scalar;

pub use error::{MtError, MtResult};
pub use scalar::Scalar;
