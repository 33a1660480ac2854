// maritopo\crates\mt_walls\src/fold/frame.rs

//! 折叠核的取向框架
//!
//! 每个折叠核只针对一个标准取向实现 (西南角核、南向核)。其余取向
//! 先把有效场变换到标准取向，跑核，再逆变换还原。三种操作都是对合，
//! 逆变换就是逆序重放。转置同时交换 u/v 两个边场的角色: 转置后的
//! 网格里，原来的 v 场恰好具有 u 场的形状与含义，反之亦然。

use ndarray::Axis;

use crate::stats::ElevationStats;

/// 作用在有效场三元组上的取向操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameOp {
    /// 沿 j 轴翻转
    FlipJ,
    /// 沿 i 轴翻转
    FlipI,
    /// 转置并交换 u/v 角色
    Transpose,
}

/// 有效场三元组的可变借用
pub(crate) struct EffectiveFrame<'a> {
    pub c: &'a mut ElevationStats,
    pub u: &'a mut ElevationStats,
    pub v: &'a mut ElevationStats,
}

impl<'a> EffectiveFrame<'a> {
    pub fn new(
        c: &'a mut ElevationStats,
        u: &'a mut ElevationStats,
        v: &'a mut ElevationStats,
    ) -> Self {
        Self { c, u, v }
    }

    fn apply(&mut self, op: FrameOp) {
        match op {
            FrameOp::FlipJ => {
                self.c.flip(Axis(0));
                self.u.flip(Axis(0));
                self.v.flip(Axis(0));
            }
            FrameOp::FlipI => {
                self.c.flip(Axis(1));
                self.u.flip(Axis(1));
                self.v.flip(Axis(1));
            }
            FrameOp::Transpose => {
                self.c.transpose();
                self.u.transpose();
                self.v.transpose();
                std::mem::swap(self.u, self.v);
            }
        }
    }

    /// 正向施加取向操作，执行标准取向核，再逆序还原
    pub fn with_orientation(&mut self, ops: &[FrameOp], kernel: impl FnOnce(&mut Self)) {
        for &op in ops {
            self.apply(op);
        }
        kernel(self);
        for &op in ops.iter().rev() {
            self.apply(op);
        }
    }
}
