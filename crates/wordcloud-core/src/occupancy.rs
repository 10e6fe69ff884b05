use rand::Rng;

/// Coarse occupancy map of the canvas with a summed-area table for O(1)
/// rectangle queries.
pub(crate) struct OccupancyGrid {
    cell: u32,
    cols: usize,
    rows: usize,
    occupied: Vec<bool>,
    integral: Vec<u32>,
}

impl OccupancyGrid {
    pub(crate) fn new(width: u32, height: u32, cell: u32) -> Self {
        let cell = cell.max(1);
        let cols = width.div_ceil(cell) as usize;
        let rows = height.div_ceil(cell) as usize;
        Self {
            cell,
            cols,
            rows,
            occupied: vec![false; cols * rows],
            integral: vec![0; (cols + 1) * (rows + 1)],
        }
    }

    /// Picks a free top-left position for a `width`×`height` box uniformly
    /// among all free positions, in pixels.
    pub(crate) fn sample_position<R: Rng>(
        &self,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Option<(u32, u32)> {
        let bw = width.div_ceil(self.cell).max(1) as usize;
        let bh = height.div_ceil(self.cell).max(1) as usize;
        if bw > self.cols || bh > self.rows {
            return None;
        }
        let free = self.free_positions(bw, bh).count();
        if free == 0 {
            return None;
        }
        let pick = rng.gen_range(0..free);
        let (col, row) = self.free_positions(bw, bh).nth(pick)?;
        Some((col as u32 * self.cell, row as u32 * self.cell))
    }

    /// Marks the pixel rectangle as taken, clipped to the canvas.
    pub(crate) fn mark(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let col0 = (x / self.cell) as usize;
        let row0 = (y / self.cell) as usize;
        let col1 = ((x + width).div_ceil(self.cell) as usize).min(self.cols);
        let row1 = ((y + height).div_ceil(self.cell) as usize).min(self.rows);
        for row in row0..row1 {
            for col in col0..col1 {
                self.occupied[row * self.cols + col] = true;
            }
        }
        self.rebuild_integral();
    }

    pub(crate) fn is_free(&self, col: usize, row: usize, bw: usize, bh: usize) -> bool {
        let stride = self.cols + 1;
        let at = |r: usize, c: usize| self.integral[r * stride + c];
        let sum = at(row + bh, col + bw) + at(row, col) - at(row, col + bw) - at(row + bh, col);
        sum == 0
    }

    fn free_positions(&self, bw: usize, bh: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..=self.rows - bh).flat_map(move |row| {
            (0..=self.cols - bw)
                .filter(move |&col| self.is_free(col, row, bw, bh))
                .map(move |col| (col, row))
        })
    }

    fn rebuild_integral(&mut self) {
        let stride = self.cols + 1;
        for row in 0..self.rows {
            let mut row_sum = 0u32;
            for col in 0..self.cols {
                row_sum += self.occupied[row * self.cols + col] as u32;
                self.integral[(row + 1) * stride + col + 1] =
                    self.integral[row * stride + col + 1] + row_sum;
            }
        }
    }
}
