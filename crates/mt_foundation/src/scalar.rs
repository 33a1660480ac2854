//! 统一标量类型
//!
//! 所有高程值都是一致单位下的不透明实数，统一用 [`Scalar`] 表示。
//!
//! # 用法
//!
//! ```
//! use mt_foundation::scalar::Scalar;
//!
//! let z: Scalar = -1250.0;
//! assert!(z < 0.0);
//! ```

/// 高程计算用标量类型
pub type Scalar = f64;
