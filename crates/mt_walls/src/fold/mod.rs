// maritopo\crates\mt_walls\src/fold/mod.rs

//! 有效地形的折叠算法
//!
//! 四个算法都只改写有效统计，简单统计原样保留:
//!
//! - [`push_corners`]: 凸角向内折叠，消除穿过粗化块内部的假想捷径
//! - [`lower_tallest_buttress`]: 削低孤立支墩
//! - [`fold_out_central_ridges`]: 把占优的内部脊线搬到外边
//! - [`invert_exterior_corners`]: 最深外角向内传播
//!
//! 一轮的标准顺序见 [`crate::pipeline`]；每轮内部的条件都基于
//! 扫描前的状态求值。

mod frame;

pub mod buttress;
pub mod corners;
pub mod exterior;
pub mod ridges;

pub use buttress::lower_tallest_buttress;
pub use corners::push_corners;
pub use exterior::invert_exterior_corners;
pub use ridges::fold_out_central_ridges;

use mt_foundation::{MtError, MtResult};

use crate::mesh::ThinWallMesh;

/// 折叠按 2x2 粗化块展开，两个方向的单元数都必须是偶数
pub(crate) fn check_even_extent(mesh: &ThinWallMesh, name: &'static str) -> MtResult<()> {
    let (nj, ni) = mesh.extent();
    MtError::check_even(name, 0, nj)?;
    MtError::check_even(name, 1, ni)
}
