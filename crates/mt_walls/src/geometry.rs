// maritopo\crates\mt_walls\src/geometry.rs

//! 网格几何视图
//!
//! 薄壁算法只需要顶点坐标和单元数，网格的细化、可视化、投影
//! 都由外部网格层负责。这里保留粗化所需的最小几何。

use mt_foundation::{MtError, MtResult, Scalar};
use ndarray::{s, Array2};

/// 顶点坐标，形状 (nj+1, ni+1)
#[derive(Debug, Clone)]
pub struct MeshGeometry {
    /// 顶点经度
    pub lon: Array2<Scalar>,
    /// 顶点纬度
    pub lat: Array2<Scalar>,
}

impl MeshGeometry {
    /// 由外部网格层提供的顶点坐标构建
    pub fn new(lon: Array2<Scalar>, lat: Array2<Scalar>) -> MtResult<Self> {
        if lon.dim() != lat.dim() {
            return Err(MtError::shape_mismatch("geometry lat", lon.dim(), lat.dim()));
        }
        let (vj, vi) = lon.dim();
        if vj < 2 || vi < 2 {
            return Err(MtError::invalid_mesh(format!(
                "顶点数组至少 2x2, 实际 {}x{}",
                vj, vi
            )));
        }
        Ok(Self { lon, lat })
    }

    /// 无地理参考的均匀网格（索引即坐标），用于测试与独立驱动
    pub fn uniform(nj: usize, ni: usize) -> MtResult<Self> {
        if nj == 0 || ni == 0 {
            return Err(MtError::invalid_mesh("单元数不能为零"));
        }
        let lon = Array2::from_shape_fn((nj + 1, ni + 1), |(_, i)| i as Scalar);
        let lat = Array2::from_shape_fn((nj + 1, ni + 1), |(j, _)| j as Scalar);
        Ok(Self { lon, lat })
    }

    /// 单元数 (nj, ni)
    #[inline]
    pub fn cell_extent(&self) -> (usize, usize) {
        let (vj, vi) = self.lon.dim();
        (vj - 1, vi - 1)
    }

    /// 隔点抽取，得到半分辨率几何
    pub fn decimate(&self) -> MtResult<Self> {
        let (nj, ni) = self.cell_extent();
        MtError::check_even("geometry decimate", 0, nj)?;
        MtError::check_even("geometry decimate", 1, ni)?;
        Ok(Self {
            lon: self.lon.slice(s![0..;2, 0..;2]).to_owned(),
            lat: self.lat.slice(s![0..;2, 0..;2]).to_owned(),
        })
    }
}
