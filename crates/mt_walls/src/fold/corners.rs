// maritopo\crates\mt_walls\src/fold/corners.rs

//! 角点折叠
//!
//! 细网格 2x2 块内，若某个角的内部对角连接的鞍点高于对角方向
//! 其余部分的脊线，真实地形里并不存在穿过块内部的这条深通道。
//! 把该角向外折叠: 内部对角墙抬到对面脊高，角单元并入更高的
//! 屏障体系，角外侧的墙不得低于角点自身的统计。

use log::debug;
use mt_foundation::{MtResult, Scalar};

use super::frame::{EffectiveFrame, FrameOp};
use crate::mesh::ThinWallMesh;

/// 一个被选中的西南角折叠与其预扫描量
struct CornerFold {
    j: usize,
    i: usize,
    crnr_min: Scalar,
    crnr_mean: Scalar,
    crnr_max: Scalar,
    opp_ridge: Scalar,
    opp_cmean: Scalar,
}

/// 对四个角依次应用西南角核，顺序 SW, NW, NE, SE
///
/// `update_interior_mean_max` 控制是否同时把角单元的 mean/high
/// 与内部对角墙的 mean/high 抬到外侧水平。
pub fn push_corners(mesh: &mut ThinWallMesh, update_interior_mean_max: bool) -> MtResult<()> {
    mesh.require_effective("push_corners")?;
    super::check_even_extent(mesh, "push_corners")?;

    const ORIENTATIONS: [(&str, &[FrameOp]); 4] = [
        ("SW", &[]),
        ("NW", &[FrameOp::FlipJ]),
        ("NE", &[FrameOp::FlipJ, FrameOp::FlipI]),
        ("SE", &[FrameOp::FlipI]),
    ];

    let (c, u, v) = mesh.effective_frame();
    let mut frame = EffectiveFrame::new(c, u, v);
    for (label, ops) in ORIENTATIONS {
        frame.with_orientation(ops, |f| {
            let folded = push_corners_sw(f, update_interior_mean_max);
            if folded > 0 {
                debug!("push_corners: {} 方向折叠 {} 个角", label, folded);
            }
        });
    }
    Ok(())
}

/// 西南角核，返回折叠的块数
///
/// 条件基于扫描前的状态求值；各块的读写互不越界，检测与应用
/// 分两步只是为了保持与其余核一致的语义。
fn push_corners_sw(f: &mut EffectiveFrame<'_>, update_interior_mean_max: bool) -> usize {
    let (nj, ni) = f.c.shape();
    let (bj, bi) = (nj / 2, ni / 2);

    let mut folds = Vec::new();
    for j in 0..bj {
        for i in 0..bi {
            let (jj, ii) = (2 * j, 2 * i);
            // 西南角的内部鞍点与对角 (东北) 脊线
            let crnr_min = f.u.low[[jj, ii + 1]].min(f.v.low[[jj + 1, ii]]);
            let opp_ridge = f.u.low[[jj + 1, ii + 1]].max(f.v.low[[jj + 1, ii + 1]]);
            if crnr_min > opp_ridge {
                let crnr_mean = 0.5 * (f.u.mean[[jj, ii + 1]] + f.v.mean[[jj + 1, ii]]);
                let crnr_max = f.u.high[[jj, ii + 1]].max(f.v.high[[jj + 1, ii]]);
                // 块内其余三个单元的均值
                let opp_cmean = ((f.c.mean[[jj, ii + 1]] + f.c.mean[[jj + 1, ii]])
                    + f.c.mean[[jj + 1, ii + 1]])
                    / 3.0;
                folds.push(CornerFold {
                    j,
                    i,
                    crnr_min,
                    crnr_mean,
                    crnr_max,
                    opp_ridge,
                    opp_cmean,
                });
            }
        }
    }

    for fold in &folds {
        let (jj, ii) = (2 * fold.j, 2 * fold.i);
        // 内部对角墙抬到对面脊高，消除穿过块内部的深对角连接
        f.u.low[[jj, ii + 1]] = fold.opp_ridge;
        f.v.low[[jj + 1, ii]] = fold.opp_ridge;
        // 角外侧的墙不得低于角点自身的统计
        f.u.low[[jj, ii]] = f.u.low[[jj, ii]].max(fold.crnr_min);
        f.v.low[[jj, ii]] = f.v.low[[jj, ii]].max(fold.crnr_min);
        f.u.mean[[jj, ii]] = f.u.mean[[jj, ii]].max(fold.crnr_mean);
        f.v.mean[[jj, ii]] = f.v.mean[[jj, ii]].max(fold.crnr_mean);
        f.u.high[[jj, ii]] = f.u.high[[jj, ii]].max(fold.crnr_max);
        f.v.high[[jj, ii]] = f.v.high[[jj, ii]].max(fold.crnr_max);
        // 角单元并入外侧屏障
        f.c.low[[jj, ii]] = fold.opp_ridge;
        if update_interior_mean_max {
            f.c.mean[[jj, ii]] = f.c.mean[[jj, ii]].max(fold.opp_cmean);
            f.c.high[[jj, ii]] = f.c.high[[jj, ii]].max(fold.opp_ridge);
            f.u.mean[[jj, ii + 1]] = fold.opp_ridge;
            f.v.mean[[jj + 1, ii]] = fold.opp_ridge;
            f.u.high[[jj, ii + 1]] = fold.opp_ridge;
            f.v.high[[jj + 1, ii]] = fold.opp_ridge;
        }
    }
    folds.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MeshGeometry;
    use ndarray::Array2;

    fn flat_mesh(nj: usize, ni: usize, value: f64) -> ThinWallMesh {
        let mut mesh = ThinWallMesh::new(MeshGeometry::uniform(nj, ni).unwrap());
        let data = Array2::from_elem((nj, ni), value);
        mesh.set_cell_mean(data.view()).unwrap();
        mesh.set_edge_to_step().unwrap();
        mesh.init_effective_values();
        mesh
    }

    #[test]
    fn test_requires_effective_init() {
        let mut mesh = ThinWallMesh::new(MeshGeometry::uniform(2, 2).unwrap());
        assert!(push_corners(&mut mesh, true).is_err());
    }

    #[test]
    fn test_rejects_odd_extent() {
        let mut mesh = ThinWallMesh::new(MeshGeometry::uniform(3, 2).unwrap());
        mesh.init_effective_values();
        assert!(push_corners(&mut mesh, true).is_err());
    }

    #[test]
    fn test_flat_mesh_is_noop() {
        let mut mesh = flat_mesh(4, 4, 7.0);
        push_corners(&mut mesh, true).unwrap();
        assert!(mesh.c_effective.mean.iter().all(|&x| x == 7.0));
        assert!(mesh.u_effective.low.iter().all(|&x| x == 7.0));
        assert!(mesh.v_effective.high.iter().all(|&x| x == 7.0));
    }

    #[test]
    fn test_sw_corner_folds_out() {
        let mut mesh = flat_mesh(2, 2, 0.0);
        // 西南角内部墙高, 东北侧脊线低
        mesh.u_effective.low[[0, 1]] = 5.0;
        mesh.v_effective.low[[1, 0]] = 4.0;
        mesh.u_effective.low[[1, 1]] = 1.0;
        mesh.v_effective.low[[1, 1]] = 2.0;
        let high_before = mesh.u_effective.high.clone();
        push_corners(&mut mesh, false).unwrap();
        // 内部对角墙降/抬到对面脊高 2.0
        assert_eq!(mesh.u_effective.low[[0, 1]], 2.0);
        assert_eq!(mesh.v_effective.low[[1, 0]], 2.0);
        // 角单元 low 抬到对面脊高
        assert_eq!(mesh.c_effective.low[[0, 0]], 2.0);
        // 角外侧墙抬到角点鞍点 4.0
        assert_eq!(mesh.u_effective.low[[0, 0]], 4.0);
        assert_eq!(mesh.v_effective.low[[0, 0]], 4.0);
        // update_interior_mean_max=false 时 mean 不动
        assert_eq!(mesh.c_effective.mean[[0, 0]], 0.0);
        // high 永不降低
        for (after, before) in mesh.u_effective.high.iter().zip(high_before.iter()) {
            assert!(after >= before);
        }
    }

    #[test]
    fn test_sw_corner_updates_interior_mean_max() {
        let mut mesh = flat_mesh(2, 2, 0.0);
        mesh.u_effective.low[[0, 1]] = 5.0;
        mesh.v_effective.low[[1, 0]] = 4.0;
        mesh.u_effective.low[[1, 1]] = 1.0;
        mesh.v_effective.low[[1, 1]] = 2.0;
        mesh.c_effective.mean[[0, 1]] = 3.0;
        mesh.c_effective.mean[[1, 0]] = 3.0;
        mesh.c_effective.mean[[1, 1]] = 3.0;
        push_corners(&mut mesh, true).unwrap();
        // 角单元 mean 抬到其余三个单元的均值, high 抬到对面脊高
        assert_eq!(mesh.c_effective.mean[[0, 0]], 3.0);
        assert_eq!(mesh.c_effective.high[[0, 0]], 2.0);
        // 内部对角墙的 mean/high 也置为对面脊高
        assert_eq!(mesh.u_effective.mean[[0, 1]], 2.0);
        assert_eq!(mesh.v_effective.high[[1, 0]], 2.0);
    }

    #[test]
    fn test_ne_corner_via_orientation() {
        let mut mesh = flat_mesh(2, 2, 0.0);
        // 东北角内部墙高, 西南侧脊线低
        mesh.u_effective.low[[1, 1]] = 5.0;
        mesh.v_effective.low[[1, 1]] = 4.0;
        mesh.u_effective.low[[0, 1]] = 1.0;
        mesh.v_effective.low[[1, 0]] = 2.0;
        push_corners(&mut mesh, false).unwrap();
        assert_eq!(mesh.u_effective.low[[1, 1]], 2.0);
        assert_eq!(mesh.v_effective.low[[1, 1]], 2.0);
        assert_eq!(mesh.c_effective.low[[1, 1]], 2.0);
        // 东北外侧边抬到角点鞍点 4.0
        assert_eq!(mesh.u_effective.low[[1, 2]], 4.0);
        assert_eq!(mesh.v_effective.low[[2, 1]], 4.0);
    }

    #[test]
    fn test_idempotent_once_settled() {
        let mut mesh = flat_mesh(2, 2, 0.0);
        mesh.u_effective.low[[0, 1]] = 5.0;
        mesh.v_effective.low[[1, 0]] = 4.0;
        mesh.u_effective.low[[1, 1]] = 1.0;
        mesh.v_effective.low[[1, 1]] = 2.0;
        push_corners(&mut mesh, true).unwrap();
        let c = mesh.c_effective.clone();
        let u = mesh.u_effective.clone();
        let v = mesh.v_effective.clone();
        push_corners(&mut mesh, true).unwrap();
        assert_eq!(mesh.c_effective.low, c.low);
        assert_eq!(mesh.u_effective.low, u.low);
        assert_eq!(mesh.v_effective.low, v.low);
    }
}
