// tests/hierarchy.rs

//! 层级构建测试
//!
//! 覆盖层级形状、几何抽取、一次性整除校验与调用顺序错误。

use mt_walls::{FoldConfig, FoldPipeline, MeshGeometry, MtError, ThinWallMesh};
use ndarray::Array2;

fn ready_mesh(nj: usize, ni: usize) -> ThinWallMesh {
    let mut mesh = ThinWallMesh::new(MeshGeometry::uniform(nj, ni).unwrap());
    let data = Array2::from_shape_fn((nj, ni), |(j, i)| ((j * ni + i) % 5) as f64 - 2.0);
    mesh.set_cell_mean(data.view()).unwrap();
    mesh.set_edge_to_step().unwrap();
    mesh.init_effective_values();
    mesh
}

#[test]
fn hierarchy_halves_every_level() {
    let pipeline = FoldPipeline::new(FoldConfig::default());
    let levels = pipeline.build_hierarchy(ready_mesh(8, 8), 2).unwrap();
    assert_eq!(levels.len(), 3);
    assert_eq!(levels[0].extent(), (8, 8));
    assert_eq!(levels[1].extent(), (4, 4));
    assert_eq!(levels[2].extent(), (2, 2));
    // 几何随层级一起抽取
    assert_eq!(levels[0].geometry().lon.dim(), (9, 9));
    assert_eq!(levels[1].geometry().lon.dim(), (5, 5));
    assert_eq!(levels[2].geometry().lon.dim(), (3, 3));
    // 每层独立持有数组, 且有效统计可导出
    for level in &levels {
        assert!(level.effective_ready());
    }
}

#[test]
fn hierarchy_supports_rectangular_grids() {
    let pipeline = FoldPipeline::new(FoldConfig::default());
    let levels = pipeline.build_hierarchy(ready_mesh(8, 4), 2).unwrap();
    assert_eq!(levels[2].extent(), (2, 1));
    assert_eq!(levels[2].u_simple.shape(), (2, 2));
    assert_eq!(levels[2].v_simple.shape(), (3, 1));
}

#[test]
fn divisibility_checked_once_up_front() {
    let pipeline = FoldPipeline::new(FoldConfig::default());
    // 6 可被 2 整除但不能被 4 整除: 两级粗化必须在入口处被拒绝
    let err = pipeline
        .build_hierarchy(ready_mesh(6, 6), 2)
        .err()
        .expect("6x6 两级粗化应当失败");
    assert!(matches!(err, MtError::InvalidMesh { .. }));
}

#[test]
fn zero_levels_returns_finest_untouched() {
    let pipeline = FoldPipeline::new(FoldConfig::default());
    let mesh = ready_mesh(4, 4);
    let before = mesh.c_effective.low.clone();
    let levels = pipeline.build_hierarchy(mesh, 0).unwrap();
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].c_effective.low, before);
}

#[test]
fn apply_requires_initialized_effective_values() {
    let pipeline = FoldPipeline::new(FoldConfig::default());
    let mut mesh = ThinWallMesh::new(MeshGeometry::uniform(4, 4).unwrap());
    mesh.set_cell_mean(Array2::zeros((4, 4)).view()).unwrap();
    mesh.set_edge_to_step().unwrap();
    assert!(matches!(
        pipeline.apply(&mut mesh),
        Err(MtError::Uninitialized { .. })
    ));
}

#[test]
fn multiple_sweeps_reach_fixed_point_on_flat_field() {
    let pipeline = FoldPipeline::new(FoldConfig {
        update_interior_mean_max: true,
        sweeps_per_level: 3,
    });
    let mut mesh = ThinWallMesh::new(MeshGeometry::uniform(4, 4).unwrap());
    mesh.set_cell_mean(Array2::from_elem((4, 4), 1.0).view())
        .unwrap();
    mesh.set_edge_to_step().unwrap();
    mesh.init_effective_values();
    pipeline.apply(&mut mesh).unwrap();
    assert!(mesh.c_effective.low.iter().all(|&x| x == 1.0));
    assert!(mesh.u_effective.high.iter().all(|&x| x == 1.0));
}
