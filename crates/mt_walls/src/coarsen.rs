// maritopo\crates\mt_walls\src/coarsen.rs

//! 网格粗化
//!
//! 产生半线性分辨率的新网格: 中心场做 2x2 块归约，u/v 边场各沿
//! 一个轴成对归约，简单与有效两套统计同样处理，几何隔点抽取。
//! 粗化本身不做任何折叠，折叠由调用方在粗网格上另行执行。

use log::debug;
use mt_foundation::MtResult;

use crate::mesh::ThinWallMesh;
use crate::stats::ElevationStats;

/// 粗化出一个独立的新网格，不与细网格共享任何数组
pub fn coarsen(mesh: &ThinWallMesh) -> MtResult<ThinWallMesh> {
    mesh.require_effective("coarsen")?;
    let geometry = mesh.geometry().decimate()?;
    let mut coarse = ThinWallMesh::new(geometry);

    reduce_center(&mesh.c_simple, &mut coarse.c_simple)?;
    reduce_u(&mesh.u_simple, &mut coarse.u_simple)?;
    reduce_v(&mesh.v_simple, &mut coarse.v_simple)?;
    reduce_center(&mesh.c_effective, &mut coarse.c_effective)?;
    reduce_u(&mesh.u_effective, &mut coarse.u_effective)?;
    reduce_v(&mesh.v_effective, &mut coarse.v_effective)?;
    coarse.mark_effective_ready();

    debug!(
        "coarsen: {:?} -> {:?}",
        mesh.extent(),
        coarse.extent()
    );
    Ok(coarse)
}

fn reduce_center(fine: &ElevationStats, coarse: &mut ElevationStats) -> MtResult<()> {
    coarse.mean = fine.mean4()?;
    coarse.low = fine.min4()?;
    coarse.high = fine.max4()?;
    Ok(())
}

fn reduce_u(fine: &ElevationStats, coarse: &mut ElevationStats) -> MtResult<()> {
    coarse.mean = fine.mean2u()?;
    coarse.low = fine.min2u()?;
    coarse.high = fine.max2u()?;
    Ok(())
}

fn reduce_v(fine: &ElevationStats, coarse: &mut ElevationStats) -> MtResult<()> {
    coarse.mean = fine.mean2v()?;
    coarse.low = fine.min2v()?;
    coarse.high = fine.max2v()?;
    Ok(())
}
