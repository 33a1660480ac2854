// maritopo\crates\mt_walls\src/lib.rs

//! MariTopo 薄壁地形核心
//!
//! 为粗分辨率模型构建次网格地形屏障的多分辨率表示。每个网格单元
//! 在中心、西边 (u)、南边 (v) 三处各携带一个 (min, mean, max) 高程
//! 统计三元组；逐级粗化时，一组模板算法修正"有效"屏障高度，使粗
//! 单元保留细网格地形的连通/阻隔行为，而不是被朴素平均抹平:
//!
//! - [`fold::push_corners`]: 凸角向内折叠
//! - [`fold::lower_tallest_buttress`]: 削低孤立支墩
//! - [`fold::fold_out_central_ridges`]: 内部脊线外折
//! - [`fold::invert_exterior_corners`]: 最深外角向内传播
//!
//! # 模块概览
//!
//! - [`stats`]: 高程统计三元组与块归约
//! - [`geometry`]: 顶点坐标视图与隔点抽取
//! - [`mesh`]: 薄壁网格 (六个统计三元组) 与场寻址
//! - [`fold`]: 折叠算法
//! - [`coarsen`]: 半分辨率粗化
//! - [`pipeline`]: 折叠顺序配置与层级构建
//!
//! # 典型流程
//!
//! ```
//! use mt_walls::{FoldConfig, FoldPipeline, MeshGeometry, ThinWallMesh};
//! use ndarray::Array2;
//!
//! # fn main() -> mt_walls::MtResult<()> {
//! let geometry = MeshGeometry::uniform(4, 4)?;
//! let mut mesh = ThinWallMesh::new(geometry);
//! mesh.set_cell_mean(Array2::from_elem((4, 4), -100.0).view())?;
//! mesh.set_edge_to_step()?;
//! mesh.init_effective_values();
//!
//! let pipeline = FoldPipeline::new(FoldConfig::default());
//! let levels = pipeline.build_hierarchy(mesh, 2)?;
//! assert_eq!(levels.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod coarsen;
pub mod fold;
pub mod geometry;
pub mod mesh;
pub mod pipeline;
pub mod stats;

pub use coarsen::coarsen;
pub use fold::{
    fold_out_central_ridges, invert_exterior_corners, lower_tallest_buttress, push_corners,
};
pub use geometry::MeshGeometry;
pub use mesh::{FieldKind, FieldStat, FieldVariant, ThinWallMesh};
pub use pipeline::{FoldConfig, FoldPipeline};
pub use stats::ElevationStats;

pub use mt_foundation::{MtError, MtResult, Scalar};
