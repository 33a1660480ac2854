// maritopo\crates\mt_walls\src/fold/ridges.rs

//! 中央脊线外折
//!
//! 横贯粗化块内部的东西向脊线若是块内最高的脊，且南半块是更重的
//! 一侧，就把脊线搬到南侧外边: 南半块外缘抬到脊高，内部脊位降到
//! 南北向脊的弱侧，南侧两个子单元并为一个有效屏障单元。其余三个
//! 取向经翻转/转置复用南向核。

use log::debug;
use mt_foundation::{MtResult, Scalar};

use super::frame::{EffectiveFrame, FrameOp};
use crate::mesh::ThinWallMesh;

/// 一个被选中的南向外折与其预扫描量
struct RidgeFold {
    j: usize,
    i: usize,
    ew_low: Scalar,
    ns_min: Scalar,
}

/// 对四个取向依次应用南向核，顺序 S, N, W, E
pub fn fold_out_central_ridges(mesh: &mut ThinWallMesh) -> MtResult<()> {
    mesh.require_effective("fold_out_central_ridges")?;
    super::check_even_extent(mesh, "fold_out_central_ridges")?;

    const ORIENTATIONS: [(&str, &[FrameOp]); 4] = [
        ("S", &[]),
        ("N", &[FrameOp::FlipJ]),
        ("W", &[FrameOp::FlipJ, FrameOp::Transpose]),
        ("E", &[FrameOp::FlipJ, FrameOp::Transpose, FrameOp::FlipJ]),
    ];

    let (c, u, v) = mesh.effective_frame();
    let mut frame = EffectiveFrame::new(c, u, v);
    for (label, ops) in ORIENTATIONS {
        frame.with_orientation(ops, |f| {
            let folded = fold_out_central_ridge_s(f);
            if folded > 0 {
                debug!("fold_out_central_ridges: {} 方向外折 {} 条脊", label, folded);
            }
        });
    }
    Ok(())
}

/// 南向核，返回外折的块数
///
/// 条件基于扫描前的状态求值。跨块共享的外缘更新都是 max 累积，
/// 应用顺序不影响结果。
fn fold_out_central_ridge_s(f: &mut EffectiveFrame<'_>) -> usize {
    let (nj, ni) = f.c.shape();
    let (bj, bi) = (nj / 2, ni / 2);

    let mut folds = Vec::new();
    for j in 0..bj {
        for i in 0..bi {
            let (jj, ii) = (2 * j, 2 * i);
            let ew_low = f.v.low[[jj + 1, ii]].min(f.v.low[[jj + 1, ii + 1]]);
            let s_butt = f.u.low[[jj, ii + 1]];
            let n_butt = f.u.low[[jj + 1, ii + 1]];
            let ns_min = s_butt.min(n_butt);
            let ns_max = s_butt.max(n_butt);
            // 东西脊必须高于南北脊的弱侧且不低于强侧
            if !(ew_low > ns_min && ew_low >= ns_max) {
                continue;
            }
            // 南侧更重: 南支墩更高, 或支墩持平且南侧单元/南侧边平均更高
            let south_heavier = s_butt > n_butt
                || (s_butt >= n_butt
                    && (f.c.low[[jj, ii]] + f.c.low[[jj, ii + 1]]
                        > f.c.low[[jj + 1, ii]] + f.c.low[[jj + 1, ii + 1]]
                        || f.v.low[[jj, ii]] + f.v.low[[jj, ii + 1]]
                            > f.v.low[[jj + 2, ii]] + f.v.low[[jj + 2, ii + 1]]));
            if south_heavier {
                folds.push(RidgeFold { j, i, ew_low, ns_min });
            }
        }
    }

    for fold in &folds {
        let (jj, ii) = (2 * fold.j, 2 * fold.i);
        // 南半块外缘抬到脊高
        f.u.low[[jj, ii]] = f.u.low[[jj, ii]].max(fold.ew_low);
        f.v.low[[jj, ii]] = f.v.low[[jj, ii]].max(fold.ew_low);
        f.v.low[[jj, ii + 1]] = f.v.low[[jj, ii + 1]].max(fold.ew_low);
        f.u.low[[jj, ii + 2]] = f.u.low[[jj, ii + 2]].max(fold.ew_low);
        // 内部东西脊降到南北脊的弱侧
        f.v.low[[jj + 1, ii]] = fold.ns_min;
        f.v.low[[jj + 1, ii + 1]] = fold.ns_min;
        // 南侧两个子单元并为一体
        f.c.low[[jj, ii]] = fold.ns_min;
        f.c.low[[jj, ii + 1]] = fold.ns_min;
        f.u.low[[jj, ii + 1]] = fold.ns_min;
    }
    folds.len()
}
