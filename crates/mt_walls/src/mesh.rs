// maritopo\crates\mt_walls\src/mesh.rs

//! 薄壁网格
//!
//! 一个分辨率层级上的地形数据: 每个单元在中心、西边 (u)、南边 (v)
//! 三处各携带一个统计三元组，并区分"简单"(直接聚合) 与"有效"
//! (折叠修正后) 两个变体，共六个三元组。
//!
//! 相邻单元共享的边只存一份 (u 场多一列、v 场多一行)，共享边
//! 取值一致因此是结构性的，不需要校验。

use mt_foundation::{MtError, MtResult, Scalar};
use ndarray::{s, Array2, ArrayView2, Zip};
use serde::{Deserialize, Serialize};

use crate::geometry::MeshGeometry;
use crate::stats::ElevationStats;

/// 场的位置类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// 单元中心，形状 (nj, ni)
    Center,
    /// 单元西/东边，形状 (nj, ni+1)
    EdgeU,
    /// 单元南/北边，形状 (nj+1, ni)
    EdgeV,
}

/// 场的变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldVariant {
    /// 直接聚合的原始统计
    Simple,
    /// 折叠修正后的有效统计
    Effective,
}

/// 统计量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStat {
    /// 最小值
    Low,
    /// 平均值
    Mean,
    /// 最大值
    High,
}

/// 薄壁地形网格
#[derive(Debug, Clone)]
pub struct ThinWallMesh {
    geometry: MeshGeometry,
    nj: usize,
    ni: usize,
    /// 单元中心简单统计
    pub c_simple: ElevationStats,
    /// u 边简单统计
    pub u_simple: ElevationStats,
    /// v 边简单统计
    pub v_simple: ElevationStats,
    /// 单元中心有效统计
    pub c_effective: ElevationStats,
    /// u 边有效统计
    pub u_effective: ElevationStats,
    /// v 边有效统计
    pub v_effective: ElevationStats,
    effective_ready: bool,
}

impl ThinWallMesh {
    /// 按几何范围创建网格，六个三元组零填充
    pub fn new(geometry: MeshGeometry) -> Self {
        let (nj, ni) = geometry.cell_extent();
        Self {
            c_simple: ElevationStats::new((nj, ni)),
            u_simple: ElevationStats::new((nj, ni + 1)),
            v_simple: ElevationStats::new((nj + 1, ni)),
            c_effective: ElevationStats::new((nj, ni)),
            u_effective: ElevationStats::new((nj, ni + 1)),
            v_effective: ElevationStats::new((nj + 1, ni)),
            geometry,
            nj,
            ni,
            effective_ready: false,
        }
    }

    /// 单元数 (nj, ni)
    #[inline]
    pub fn extent(&self) -> (usize, usize) {
        (self.nj, self.ni)
    }

    /// 网格几何
    pub fn geometry(&self) -> &MeshGeometry {
        &self.geometry
    }

    /// 设置单元中心高程，min=mean=max
    pub fn set_cell_mean(&mut self, data: ArrayView2<Scalar>) -> MtResult<()> {
        self.c_simple.set_equal(data)
    }

    /// 直接设置两个边场的高程，min=mean=max
    pub fn set_edge_mean(
        &mut self,
        u_data: ArrayView2<Scalar>,
        v_data: ArrayView2<Scalar>,
    ) -> MtResult<()> {
        self.u_simple.set_equal(u_data)?;
        self.v_simple.set_equal(v_data)
    }

    /// 以阶梯地形近似设置边统计
    ///
    /// 内部边取两侧单元均值的较大者 (墙与较高一侧等高)，
    /// 边界边取唯一相邻单元的均值。
    pub fn set_edge_to_step(&mut self) -> MtResult<()> {
        let (nj, ni) = (self.nj, self.ni);
        let c = &self.c_simple.mean;

        let mut u = Array2::zeros((nj, ni + 1));
        {
            let mut interior = u.slice_mut(s![.., 1..ni]);
            Zip::from(&mut interior)
                .and(c.slice(s![.., ..ni - 1]))
                .and(c.slice(s![.., 1..]))
                .for_each(|t, &w, &e| *t = w.max(e));
        }
        u.column_mut(0).assign(&c.column(0));
        u.column_mut(ni).assign(&c.column(ni - 1));
        self.u_simple.set_equal(u.view())?;

        let mut v = Array2::zeros((nj + 1, ni));
        {
            let mut interior = v.slice_mut(s![1..nj, ..]);
            Zip::from(&mut interior)
                .and(c.slice(s![..nj - 1, ..]))
                .and(c.slice(s![1.., ..]))
                .for_each(|t, &a, &b| *t = a.max(b));
        }
        v.row_mut(0).assign(&c.row(0));
        v.row_mut(nj).assign(&c.row(nj - 1));
        self.v_simple.set_equal(v.view())
    }

    /// 把简单统计复制为有效统计的初值
    ///
    /// 必须在任何折叠/粗化之前调用一次；折叠算法只读写有效统计。
    pub fn init_effective_values(&mut self) {
        self.c_effective = self.c_simple.clone();
        self.u_effective = self.u_simple.clone();
        self.v_effective = self.v_simple.clone();
        self.effective_ready = true;
    }

    /// 有效统计是否已初始化
    #[inline]
    pub fn effective_ready(&self) -> bool {
        self.effective_ready
    }

    pub(crate) fn require_effective(&self, what: &'static str) -> MtResult<()> {
        if self.effective_ready {
            Ok(())
        } else {
            Err(MtError::uninitialized(what))
        }
    }

    pub(crate) fn mark_effective_ready(&mut self) {
        self.effective_ready = true;
    }

    /// 折叠算法使用的有效场三元组 (c, u, v)
    pub(crate) fn effective_frame(
        &mut self,
    ) -> (
        &mut ElevationStats,
        &mut ElevationStats,
        &mut ElevationStats,
    ) {
        (
            &mut self.c_effective,
            &mut self.u_effective,
            &mut self.v_effective,
        )
    }

    /// 按 (位置, 变体, 统计量) 寻址的只读视图，供外部导出层使用
    pub fn field_view(
        &self,
        kind: FieldKind,
        variant: FieldVariant,
        stat: FieldStat,
    ) -> MtResult<ArrayView2<'_, Scalar>> {
        let stats = match variant {
            FieldVariant::Simple => match kind {
                FieldKind::Center => &self.c_simple,
                FieldKind::EdgeU => &self.u_simple,
                FieldKind::EdgeV => &self.v_simple,
            },
            FieldVariant::Effective => {
                self.require_effective("field_view(effective)")?;
                match kind {
                    FieldKind::Center => &self.c_effective,
                    FieldKind::EdgeU => &self.u_effective,
                    FieldKind::EdgeV => &self.v_effective,
                }
            }
        };
        Ok(match stat {
            FieldStat::Low => stats.low.view(),
            FieldStat::Mean => stats.mean.view(),
            FieldStat::High => stats.high.view(),
        })
    }
}
