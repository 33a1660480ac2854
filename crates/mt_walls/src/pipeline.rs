// maritopo\crates\mt_walls\src/pipeline.rs

//! 折叠流水线与层级构建
//!
//! 算法本身只固定一轮内的顺序: push_corners -> lower_tallest_buttress
//! -> fold_out_central_ridges -> invert_exterior_corners。每层执行几轮、
//! 是否更新内部 mean/high，都是配置决定。

use log::info;
use mt_foundation::{MtError, MtResult};
use serde::{Deserialize, Serialize};

use crate::coarsen::coarsen;
use crate::fold::{
    fold_out_central_ridges, invert_exterior_corners, lower_tallest_buttress, push_corners,
};
use crate::mesh::ThinWallMesh;

/// 折叠配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FoldConfig {
    /// push_corners 是否同时更新角单元与内部对角墙的 mean/high
    pub update_interior_mean_max: bool,
    /// 每个层级执行的完整折叠轮数
    pub sweeps_per_level: usize,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            update_interior_mean_max: true,
            sweeps_per_level: 1,
        }
    }
}

/// 按标准顺序执行折叠并逐级粗化
#[derive(Debug, Clone, Default)]
pub struct FoldPipeline {
    config: FoldConfig,
}

impl FoldPipeline {
    /// 按配置创建流水线
    pub fn new(config: FoldConfig) -> Self {
        Self { config }
    }

    /// 当前配置
    pub fn config(&self) -> &FoldConfig {
        &self.config
    }

    /// 在当前层级上执行配置的折叠轮数
    pub fn apply(&self, mesh: &mut ThinWallMesh) -> MtResult<()> {
        for _ in 0..self.config.sweeps_per_level {
            push_corners(mesh, self.config.update_interior_mean_max)?;
            lower_tallest_buttress(mesh)?;
            fold_out_central_ridges(mesh)?;
            invert_exterior_corners(mesh)?;
        }
        Ok(())
    }

    /// 从最细层出发构建层级
    ///
    /// 每层先折叠再粗化，返回含最细层在内的 `levels + 1` 个网格，
    /// 最细层在前；最粗层不再折叠。`(nj, ni)` 必须能被 `2^levels`
    /// 整除，在此一次性校验。
    pub fn build_hierarchy(
        &self,
        finest: ThinWallMesh,
        levels: usize,
    ) -> MtResult<Vec<ThinWallMesh>> {
        let (nj, ni) = finest.extent();
        let factor = 1usize << levels;
        if nj % factor != 0 || ni % factor != 0 {
            return Err(MtError::invalid_mesh(format!(
                "网格 {}x{} 无法粗化 {} 级 (单元数需被 {} 整除)",
                nj, ni, levels, factor
            )));
        }

        let mut meshes = Vec::with_capacity(levels + 1);
        let mut current = finest;
        for level in 0..levels {
            self.apply(&mut current)?;
            let coarse = coarsen(&current)?;
            info!(
                "层级 {}: {:?} -> {:?}",
                level + 1,
                current.extent(),
                coarse.extent()
            );
            meshes.push(current);
            current = coarse;
        }
        meshes.push(current);
        Ok(meshes)
    }
}
