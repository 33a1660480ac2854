// maritopo\crates\mt_foundation\src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `MtError` 枚举和 `MtResult` 类型别名，用于整个项目的错误处理。
//!
//! # 设计原则
//!
//! 1. **前置条件优先**: 形状、奇偶、初始化顺序等违规都是调用方编程错误，
//!    在改写任何状态之前同步返回
//! 2. **易用性**: 提供便捷的构造方法和 `check_*` 校验方法
//!
//! # 示例
//!
//! ```
//! use mt_foundation::error::{MtError, MtResult};
//!
//! fn set_field(expected: (usize, usize), actual: (usize, usize)) -> MtResult<()> {
//!     MtError::check_shape("cell data", expected, actual)
//! }
//! ```

use thiserror::Error;

/// 统一结果类型
pub type MtResult<T> = Result<T, MtError>;

/// MariTopo 错误类型
///
/// 所有变体都是同步暴露给调用方的本地前置条件违规，算法内部
/// 没有可恢复的错误路径。
#[derive(Error, Debug)]
pub enum MtError {
    /// 数组形状与目标场不一致
    #[error("数组形状不匹配: {name} 期望{expected:?}, 实际{actual:?}")]
    ShapeMismatch {
        /// 数据名称
        name: &'static str,
        /// 期望形状 (nj, ni)
        expected: (usize, usize),
        /// 实际形状 (nj, ni)
        actual: (usize, usize),
    },

    /// 待归约的轴长度为奇数
    #[error("奇数维度无法二倍归约: {name} 轴{axis} 长度{len}")]
    OddDimension {
        /// 操作名称
        name: &'static str,
        /// 轴序号 (0=j, 1=i)
        axis: usize,
        /// 实际长度
        len: usize,
    },

    /// 有效值尚未初始化就调用了折叠/粗化/导出
    #[error("有效值尚未初始化: {what} (需先调用 init_effective_values)")]
    Uninitialized {
        /// 被拒绝的操作
        what: &'static str,
    },

    /// 无效网格
    #[error("无效的网格: {message}")]
    InvalidMesh {
        /// 具体错误信息
        message: String,
    },

    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl MtError {
    /// 形状不匹配
    pub fn shape_mismatch(
        name: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Self::ShapeMismatch {
            name,
            expected,
            actual,
        }
    }

    /// 奇数维度
    pub fn odd_dimension(name: &'static str, axis: usize, len: usize) -> Self {
        Self::OddDimension { name, axis, len }
    }

    /// 有效值未初始化
    pub fn uninitialized(what: &'static str) -> Self {
        Self::Uninitialized { what }
    }

    /// 无效网格
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }

    /// 无效输入
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

// ========================================================================
// 验证辅助方法
// ========================================================================

impl MtError {
    /// 检查二维形状是否匹配
    #[inline]
    pub fn check_shape(
        name: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> MtResult<()> {
        if expected != actual {
            Err(Self::shape_mismatch(name, expected, actual))
        } else {
            Ok(())
        }
    }

    /// 检查轴长度是否为偶数
    #[inline]
    pub fn check_even(name: &'static str, axis: usize, len: usize) -> MtResult<()> {
        if len % 2 != 0 {
            Err(Self::odd_dimension(name, axis, len))
        } else {
            Ok(())
        }
    }
}

// ========================================================================
// 测试
// ========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = MtError::shape_mismatch("cell data", (4, 4), (4, 5));
        let msg = err.to_string();
        assert!(msg.contains("cell data"));
        assert!(msg.contains("(4, 4)"));
        assert!(msg.contains("(4, 5)"));
    }

    #[test]
    fn test_odd_dimension_display() {
        let err = MtError::odd_dimension("mean4", 1, 5);
        let msg = err.to_string();
        assert!(msg.contains("mean4"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_uninitialized_display() {
        let err = MtError::uninitialized("push_corners");
        assert!(err.to_string().contains("init_effective_values"));
    }

    #[test]
    fn test_check_shape() {
        assert!(MtError::check_shape("t", (2, 3), (2, 3)).is_ok());
        assert!(MtError::check_shape("t", (2, 3), (3, 2)).is_err());
    }

    #[test]
    fn test_check_even() {
        assert!(MtError::check_even("t", 0, 8).is_ok());
        assert!(MtError::check_even("t", 0, 0).is_ok());
        assert!(MtError::check_even("t", 1, 7).is_err());
    }
}
