// maritopo\crates\mt_walls\src/stats.rs

//! 高程统计三元组
//!
//! 每个网格位置同时保存 (最小值, 平均值, 最大值) 三个同形状数组。
//! 粗化时三个数组分别做块归约，极值信息不会被平均抹掉。
//!
//! # 不变式
//!
//! 每次外部赋值后 `low <= mean <= high` 逐元素成立。折叠算法允许
//! 出现短暂的中间态，事后可用 [`ElevationStats::is_ordered`] 诊断。

use mt_foundation::{MtError, MtResult, Scalar};
use ndarray::{s, Array2, ArrayView2, Axis, Zip};

/// 高程统计三元组
#[derive(Debug, Clone)]
pub struct ElevationStats {
    /// 最小值
    pub low: Array2<Scalar>,
    /// 平均值
    pub mean: Array2<Scalar>,
    /// 最大值
    pub high: Array2<Scalar>,
}

impl ElevationStats {
    /// 创建零填充的统计三元组
    pub fn new(shape: (usize, usize)) -> Self {
        Self {
            low: Array2::zeros(shape),
            mean: Array2::zeros(shape),
            high: Array2::zeros(shape),
        }
    }

    /// 当前形状 (nj, ni)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.low.dim()
    }

    /// 三个数组全部置为同一份数据
    pub fn set_equal(&mut self, values: ArrayView2<Scalar>) -> MtResult<()> {
        MtError::check_shape("stats values", self.shape(), values.dim())?;
        self.low.assign(&values);
        self.mean.assign(&values);
        self.high.assign(&values);
        Ok(())
    }

    /// 分别设置三个数组
    pub fn set_all(
        &mut self,
        low: ArrayView2<Scalar>,
        mean: ArrayView2<Scalar>,
        high: ArrayView2<Scalar>,
    ) -> MtResult<()> {
        MtError::check_shape("stats low", self.shape(), low.dim())?;
        MtError::check_shape("stats mean", self.shape(), mean.dim())?;
        MtError::check_shape("stats high", self.shape(), high.dim())?;
        self.low.assign(&low);
        self.mean.assign(&mean);
        self.high.assign(&high);
        Ok(())
    }

    fn require_even(&self, name: &'static str, axis: usize) -> MtResult<()> {
        let len = if axis == 0 {
            self.shape().0
        } else {
            self.shape().1
        };
        MtError::check_even(name, axis, len)
    }

    /// 2x2 块平均，形状两轴减半
    pub fn mean4(&self) -> MtResult<Array2<Scalar>> {
        self.require_even("mean4", 0)?;
        self.require_even("mean4", 1)?;
        let (nj, ni) = self.shape();
        let mut out = Array2::zeros((nj / 2, ni / 2));
        Zip::from(&mut out)
            .and(self.mean.slice(s![0..;2, 0..;2]))
            .and(self.mean.slice(s![1..;2, 1..;2]))
            .and(self.mean.slice(s![0..;2, 1..;2]))
            .and(self.mean.slice(s![1..;2, 0..;2]))
            .par_for_each(|o, &a, &d, &b, &c| *o = 0.25 * ((a + d) + (b + c)));
        Ok(out)
    }

    /// 2x2 块最小值
    pub fn min4(&self) -> MtResult<Array2<Scalar>> {
        self.require_even("min4", 0)?;
        self.require_even("min4", 1)?;
        let (nj, ni) = self.shape();
        let mut out = Array2::zeros((nj / 2, ni / 2));
        Zip::from(&mut out)
            .and(self.low.slice(s![0..;2, 0..;2]))
            .and(self.low.slice(s![1..;2, 1..;2]))
            .and(self.low.slice(s![0..;2, 1..;2]))
            .and(self.low.slice(s![1..;2, 0..;2]))
            .par_for_each(|o, &a, &d, &b, &c| *o = a.min(d).min(b.min(c)));
        Ok(out)
    }

    /// 2x2 块最大值
    pub fn max4(&self) -> MtResult<Array2<Scalar>> {
        self.require_even("max4", 0)?;
        self.require_even("max4", 1)?;
        let (nj, ni) = self.shape();
        let mut out = Array2::zeros((nj / 2, ni / 2));
        Zip::from(&mut out)
            .and(self.high.slice(s![0..;2, 0..;2]))
            .and(self.high.slice(s![1..;2, 1..;2]))
            .and(self.high.slice(s![0..;2, 1..;2]))
            .and(self.high.slice(s![1..;2, 0..;2]))
            .par_for_each(|o, &a, &d, &b, &c| *o = a.max(d).max(b.max(c)));
        Ok(out)
    }

    /// u 边归约: j 方向相邻两行取平均，列按索引隔点抽取
    ///
    /// u 边在粗化列边界上天然对齐，不需要 2x2 成对。
    pub fn mean2u(&self) -> MtResult<Array2<Scalar>> {
        self.require_even("mean2u", 0)?;
        let a = self.mean.slice(s![0..;2, 0..;2]);
        let b = self.mean.slice(s![1..;2, 0..;2]);
        let mut out = Array2::zeros(a.dim());
        Zip::from(&mut out)
            .and(a)
            .and(b)
            .par_for_each(|o, &x, &y| *o = 0.5 * (x + y));
        Ok(out)
    }

    /// u 边归约: j 方向相邻两行取最小值
    pub fn min2u(&self) -> MtResult<Array2<Scalar>> {
        self.require_even("min2u", 0)?;
        let a = self.low.slice(s![0..;2, 0..;2]);
        let b = self.low.slice(s![1..;2, 0..;2]);
        let mut out = Array2::zeros(a.dim());
        Zip::from(&mut out)
            .and(a)
            .and(b)
            .par_for_each(|o, &x, &y| *o = x.min(y));
        Ok(out)
    }

    /// u 边归约: j 方向相邻两行取最大值
    pub fn max2u(&self) -> MtResult<Array2<Scalar>> {
        self.require_even("max2u", 0)?;
        let a = self.high.slice(s![0..;2, 0..;2]);
        let b = self.high.slice(s![1..;2, 0..;2]);
        let mut out = Array2::zeros(a.dim());
        Zip::from(&mut out)
            .and(a)
            .and(b)
            .par_for_each(|o, &x, &y| *o = x.max(y));
        Ok(out)
    }

    /// v 边归约: i 方向相邻两列取平均，行按索引隔点抽取
    pub fn mean2v(&self) -> MtResult<Array2<Scalar>> {
        self.require_even("mean2v", 1)?;
        let a = self.mean.slice(s![0..;2, 0..;2]);
        let b = self.mean.slice(s![0..;2, 1..;2]);
        let mut out = Array2::zeros(a.dim());
        Zip::from(&mut out)
            .and(a)
            .and(b)
            .par_for_each(|o, &x, &y| *o = 0.5 * (x + y));
        Ok(out)
    }

    /// v 边归约: i 方向相邻两列取最小值
    pub fn min2v(&self) -> MtResult<Array2<Scalar>> {
        self.require_even("min2v", 1)?;
        let a = self.low.slice(s![0..;2, 0..;2]);
        let b = self.low.slice(s![0..;2, 1..;2]);
        let mut out = Array2::zeros(a.dim());
        Zip::from(&mut out)
            .and(a)
            .and(b)
            .par_for_each(|o, &x, &y| *o = x.min(y));
        Ok(out)
    }

    /// v 边归约: i 方向相邻两列取最大值
    pub fn max2v(&self) -> MtResult<Array2<Scalar>> {
        self.require_even("max2v", 1)?;
        let a = self.high.slice(s![0..;2, 0..;2]);
        let b = self.high.slice(s![0..;2, 1..;2]);
        let mut out = Array2::zeros(a.dim());
        Zip::from(&mut out)
            .and(a)
            .and(b)
            .par_for_each(|o, &x, &y| *o = x.max(y));
        Ok(out)
    }

    /// 沿给定轴翻转三个数组
    pub fn flip(&mut self, axis: Axis) {
        self.low.invert_axis(axis);
        self.mean.invert_axis(axis);
        self.high.invert_axis(axis);
    }

    /// 交换 i/j 两个轴
    pub fn transpose(&mut self) {
        self.low = std::mem::take(&mut self.low).reversed_axes();
        self.mean = std::mem::take(&mut self.mean).reversed_axes();
        self.high = std::mem::take(&mut self.high).reversed_axes();
    }

    /// 检查 `low <= mean <= high` 是否逐元素成立
    pub fn is_ordered(&self) -> bool {
        self.low
            .iter()
            .zip(self.mean.iter())
            .zip(self.high.iter())
            .all(|((l, m), h)| l <= m && m <= h)
    }
}
