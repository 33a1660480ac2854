// maritopo\crates\mt_walls\src/fold/buttress.rs

//! 支墩削低
//!
//! 粗化块中心节点周围汇聚四段墙 (南北向墙的上下两半、东西向墙的
//! 左右两半)。若某一段严格高于其余三段的最大值，它就是一个缺乏
//! 支撑的孤立支墩，削低到其余三段的最大值。只作用于 low 与 mean，
//! high 保留真实的最大屏障。

use log::debug;
use mt_foundation::{MtResult, Scalar};
use ndarray::Array2;

use crate::mesh::ThinWallMesh;

/// 削低所有粗化块中心节点处的孤立支墩
pub fn lower_tallest_buttress(mesh: &mut ThinWallMesh) -> MtResult<()> {
    mesh.require_effective("lower_tallest_buttress")?;
    super::check_even_extent(mesh, "lower_tallest_buttress")?;
    let (nj, ni) = mesh.extent();
    let (bj, bi) = (nj / 2, ni / 2);
    let (_c, u, v) = mesh.effective_frame();
    let lowered =
        lower_in(&mut u.low, &mut v.low, bj, bi) + lower_in(&mut u.mean, &mut v.mean, bj, bi);
    if lowered > 0 {
        debug!("lower_tallest_buttress: 削低 {} 段支墩", lowered);
    }
    Ok(())
}

/// 对一个统计数组执行四个方向的削低
///
/// 方向顺序 S, N, W, E，后一方向读取前一方向更新后的值；
/// 全部读写都在各自的块内部，块之间互不影响。
fn lower_in(u: &mut Array2<Scalar>, v: &mut Array2<Scalar>, bj: usize, bi: usize) -> usize {
    let mut count = 0;
    for j in 0..bj {
        for i in 0..bi {
            let (jj, ii) = (2 * j, 2 * i);
            // 南段
            let oppo = u[[jj + 1, ii + 1]].max(v[[jj + 1, ii]].max(v[[jj + 1, ii + 1]]));
            if u[[jj, ii + 1]] > oppo {
                u[[jj, ii + 1]] = oppo;
                count += 1;
            }
            // 北段
            let oppo = u[[jj, ii + 1]].max(v[[jj + 1, ii]].max(v[[jj + 1, ii + 1]]));
            if u[[jj + 1, ii + 1]] > oppo {
                u[[jj + 1, ii + 1]] = oppo;
                count += 1;
            }
            // 西段
            let oppo = v[[jj + 1, ii + 1]].max(u[[jj, ii + 1]].max(u[[jj + 1, ii + 1]]));
            if v[[jj + 1, ii]] > oppo {
                v[[jj + 1, ii]] = oppo;
                count += 1;
            }
            // 东段
            let oppo = v[[jj + 1, ii]].max(u[[jj, ii + 1]].max(u[[jj + 1, ii + 1]]));
            if v[[jj + 1, ii + 1]] > oppo {
                v[[jj + 1, ii + 1]] = oppo;
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MeshGeometry;

    fn flat_mesh(nj: usize, ni: usize, value: f64) -> ThinWallMesh {
        let mut mesh = ThinWallMesh::new(MeshGeometry::uniform(nj, ni).unwrap());
        let data = Array2::from_elem((nj, ni), value);
        mesh.set_cell_mean(data.view()).unwrap();
        mesh.set_edge_to_step().unwrap();
        mesh.init_effective_values();
        mesh
    }

    #[test]
    fn test_dominant_south_segment_lowered() {
        let mut mesh = flat_mesh(2, 2, 0.0);
        mesh.u_effective.low[[0, 1]] = 10.0;
        mesh.u_effective.low[[1, 1]] = 3.0;
        mesh.v_effective.low[[1, 0]] = 4.0;
        mesh.v_effective.low[[1, 1]] = 5.0;
        lower_tallest_buttress(&mut mesh).unwrap();
        // 南段削到其余三段的最大值
        assert_eq!(mesh.u_effective.low[[0, 1]], 5.0);
        // 其余三段不动
        assert_eq!(mesh.u_effective.low[[1, 1]], 3.0);
        assert_eq!(mesh.v_effective.low[[1, 0]], 4.0);
        assert_eq!(mesh.v_effective.low[[1, 1]], 5.0);
    }

    #[test]
    fn test_mean_lowered_independently() {
        let mut mesh = flat_mesh(2, 2, 0.0);
        // low 全平, mean 有支墩
        mesh.u_effective.mean[[0, 1]] = 8.0;
        mesh.u_effective.mean[[1, 1]] = 1.0;
        mesh.v_effective.mean[[1, 0]] = 2.0;
        mesh.v_effective.mean[[1, 1]] = 1.0;
        // high 更高, 不参与也不被修改
        mesh.u_effective.high[[0, 1]] = 9.0;
        lower_tallest_buttress(&mut mesh).unwrap();
        assert_eq!(mesh.u_effective.mean[[0, 1]], 2.0);
        assert_eq!(mesh.u_effective.high[[0, 1]], 9.0);
        assert!(mesh.u_effective.low.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_equal_segments_untouched() {
        let mut mesh = flat_mesh(2, 2, 0.0);
        mesh.u_effective.low[[0, 1]] = 3.0;
        mesh.u_effective.low[[1, 1]] = 3.0;
        mesh.v_effective.low[[1, 0]] = 3.0;
        mesh.v_effective.low[[1, 1]] = 3.0;
        lower_tallest_buttress(&mut mesh).unwrap();
        assert_eq!(mesh.u_effective.low[[0, 1]], 3.0);
        assert_eq!(mesh.u_effective.low[[1, 1]], 3.0);
        assert_eq!(mesh.v_effective.low[[1, 0]], 3.0);
        assert_eq!(mesh.v_effective.low[[1, 1]], 3.0);
    }

    #[test]
    fn test_never_raises() {
        let mut mesh = flat_mesh(4, 4, 0.0);
        mesh.u_effective.low[[0, 1]] = -1.0;
        mesh.v_effective.low[[1, 2]] = 6.0;
        let before_u = mesh.u_effective.low.clone();
        let before_v = mesh.v_effective.low.clone();
        lower_tallest_buttress(&mut mesh).unwrap();
        for (after, before) in mesh.u_effective.low.iter().zip(before_u.iter()) {
            assert!(after <= before);
        }
        for (after, before) in mesh.v_effective.low.iter().zip(before_v.iter()) {
            assert!(after <= before);
        }
    }
}
