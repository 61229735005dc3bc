//! Precomputed density grids.

use courtside_core::Scene;

use crate::layout::MAX_GRID_CELLS;
use crate::sampler::sample_scene;

/// Scene density sampled once per display cell, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityGrid {
    cols: usize,
    rows: usize,
    cells: Vec<f32>,
}

impl DensityGrid {
    /// Sample `scene` at the normalized center of every cell of a
    /// `cols x rows` grid.
    pub fn precompute(scene: &Scene, cols: usize, rows: usize) -> Self {
        let mut cells = Vec::with_capacity(cols.saturating_mul(rows).min(MAX_GRID_CELLS));
        for row in 0..rows {
            let ny = (row as f64 + 0.5) / rows as f64;
            for col in 0..cols {
                let nx = (col as f64 + 0.5) / cols as f64;
                cells.push(sample_scene(scene, nx, ny) as f32);
            }
        }
        Self { cols, rows, cells }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Density at a cell, or 0 outside the grid.
    pub fn get(&self, col: usize, row: usize) -> f32 {
        if col >= self.cols || row >= self.rows {
            return 0.0;
        }
        self.cells[row * self.cols + col]
    }
}

/// Precompute one grid per scene at the same resolution.
pub fn precompute_all(scenes: &[Scene], cols: usize, rows: usize) -> Vec<DensityGrid> {
    scenes
        .iter()
        .map(|scene| DensityGrid::precompute(scene, cols, rows))
        .collect()
}
