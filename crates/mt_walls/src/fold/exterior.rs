// maritopo\crates\mt_walls\src/fold/exterior.rs

//! 外角反转
//!
//! 角点折叠的对偶操作。粗化块外侧的四个"深角" (从块外包住角的两段
//! 墙的较大值) 里，若某角严格深于其余三角、也深于自身的内部鞍点，
//! 则把深角向内传播: 内部墙与四个子单元按逐元素最小值下压到深角
//! 深度，相邻两角的外侧墙按对角脊值逐元素最大值抬升，两角脊线在
//! 共享边相接处取两者较小值作为合成脊。
//!
//! 四个角各自用自己的索引偏移展开，共享同一套比较结构；四个角的
//! 选中条件互斥 (严格最深至多一个)。只触碰 low 场。

use log::debug;
use mt_foundation::{MtResult, Scalar};

use crate::mesh::ThinWallMesh;

#[derive(Debug, Clone, Copy)]
enum Corner {
    Sw,
    Se,
    Nw,
    Ne,
}

/// 一个被选中的外角反转与其预扫描量
struct CornerInversion {
    j: usize,
    i: usize,
    corner: Corner,
    deep: Scalar,
    ridge_a: Scalar,
    ridge_b: Scalar,
    new_ridge: Scalar,
}

#[inline]
fn lower_to(slot: &mut Scalar, value: Scalar) {
    if value < *slot {
        *slot = value;
    }
}

#[inline]
fn raise_to(slot: &mut Scalar, value: Scalar) {
    if value > *slot {
        *slot = value;
    }
}

/// 把每个粗化块的最深外角向内传播
pub fn invert_exterior_corners(mesh: &mut ThinWallMesh) -> MtResult<()> {
    mesh.require_effective("invert_exterior_corners")?;
    super::check_even_extent(mesh, "invert_exterior_corners")?;
    let (nj, ni) = mesh.extent();
    let (bj, bi) = (nj / 2, ni / 2);
    let (c, u, v) = mesh.effective_frame();

    // 检测: 深角、内部鞍点、对角脊全部取自扫描前状态
    let mut inversions = Vec::new();
    for j in 0..bj {
        for i in 0..bi {
            let (jj, ii) = (2 * j, 2 * i);
            let d_sw = u.low[[jj, ii]].max(v.low[[jj, ii]]);
            let d_se = u.low[[jj, ii + 2]].max(v.low[[jj, ii + 1]]);
            let d_nw = u.low[[jj + 1, ii]].max(v.low[[jj + 2, ii]]);
            let d_ne = u.low[[jj + 1, ii + 2]].max(v.low[[jj + 2, ii + 1]]);

            let s_sw = u.low[[jj, ii + 1]].min(v.low[[jj + 1, ii]]);
            let s_se = u.low[[jj, ii + 1]].min(v.low[[jj + 1, ii + 1]]);
            let s_nw = u.low[[jj + 1, ii + 1]].min(v.low[[jj + 1, ii]]);
            let s_ne = u.low[[jj + 1, ii + 1]].min(v.low[[jj + 1, ii + 1]]);

            let r_sw = u.low[[jj, ii + 1]].max(v.low[[jj + 1, ii]]);
            let r_se = u.low[[jj, ii + 1]].max(v.low[[jj + 1, ii + 1]]);
            let r_nw = u.low[[jj + 1, ii + 1]].max(v.low[[jj + 1, ii]]);
            let r_ne = u.low[[jj + 1, ii + 1]].max(v.low[[jj + 1, ii + 1]]);

            let pick = if d_sw < d_ne.min(d_nw.min(d_se)) && d_sw < s_sw {
                Some((Corner::Sw, d_sw, r_se, r_nw))
            } else if d_se < d_nw.min(d_ne.min(d_sw)) && d_se < s_se {
                Some((Corner::Se, d_se, r_sw, r_ne))
            } else if d_ne < d_sw.min(d_se.min(d_nw)) && d_ne < s_ne {
                Some((Corner::Ne, d_ne, r_nw, r_se))
            } else if d_nw < d_se.min(d_sw.min(d_ne)) && d_nw < s_nw {
                Some((Corner::Nw, d_nw, r_ne, r_sw))
            } else {
                None
            };
            if let Some((corner, deep, ridge_a, ridge_b)) = pick {
                inversions.push(CornerInversion {
                    j,
                    i,
                    corner,
                    deep,
                    ridge_a,
                    ridge_b,
                    new_ridge: ridge_a.min(ridge_b),
                });
            }
        }
    }

    // 应用: 下压目标 (内部墙、子单元) 与抬升目标 (外侧墙) 全局不相交,
    // 且全部是 min/max 累积, 应用顺序不影响结果
    for inv in &inversions {
        let (jj, ii) = (2 * inv.j, 2 * inv.i);
        let d = inv.deep;
        lower_to(&mut u.low[[jj, ii + 1]], d);
        lower_to(&mut u.low[[jj + 1, ii + 1]], d);
        lower_to(&mut v.low[[jj + 1, ii]], d);
        lower_to(&mut v.low[[jj + 1, ii + 1]], d);
        lower_to(&mut c.low[[jj, ii]], d);
        lower_to(&mut c.low[[jj, ii + 1]], d);
        lower_to(&mut c.low[[jj + 1, ii]], d);
        lower_to(&mut c.low[[jj + 1, ii + 1]], d);
        match inv.corner {
            Corner::Sw => {
                raise_to(&mut v.low[[jj, ii + 1]], inv.ridge_a);
                raise_to(&mut u.low[[jj, ii + 2]], inv.ridge_a);
                raise_to(&mut u.low[[jj + 1, ii + 2]], inv.new_ridge);
                raise_to(&mut v.low[[jj + 2, ii + 1]], inv.new_ridge);
                raise_to(&mut v.low[[jj + 2, ii]], inv.ridge_b);
                raise_to(&mut u.low[[jj + 1, ii]], inv.ridge_b);
            }
            Corner::Se => {
                raise_to(&mut v.low[[jj, ii]], inv.ridge_a);
                raise_to(&mut u.low[[jj, ii]], inv.ridge_a);
                raise_to(&mut u.low[[jj + 1, ii]], inv.new_ridge);
                raise_to(&mut v.low[[jj + 2, ii]], inv.new_ridge);
                raise_to(&mut v.low[[jj + 2, ii + 1]], inv.ridge_b);
                raise_to(&mut u.low[[jj + 1, ii + 2]], inv.ridge_b);
            }
            Corner::Nw => {
                raise_to(&mut v.low[[jj + 2, ii + 1]], inv.ridge_a);
                raise_to(&mut u.low[[jj + 1, ii + 2]], inv.ridge_a);
                raise_to(&mut u.low[[jj, ii + 2]], inv.new_ridge);
                raise_to(&mut v.low[[jj, ii + 1]], inv.new_ridge);
                raise_to(&mut v.low[[jj, ii]], inv.ridge_b);
                raise_to(&mut u.low[[jj, ii]], inv.ridge_b);
            }
            Corner::Ne => {
                raise_to(&mut v.low[[jj + 2, ii]], inv.ridge_a);
                raise_to(&mut u.low[[jj + 1, ii]], inv.ridge_a);
                raise_to(&mut u.low[[jj, ii]], inv.new_ridge);
                raise_to(&mut v.low[[jj, ii]], inv.new_ridge);
                raise_to(&mut v.low[[jj, ii + 1]], inv.ridge_b);
                raise_to(&mut u.low[[jj, ii + 2]], inv.ridge_b);
            }
        }
    }
    if !inversions.is_empty() {
        debug!("invert_exterior_corners: 反转 {} 个外角", inversions.len());
    }
    Ok(())
}
