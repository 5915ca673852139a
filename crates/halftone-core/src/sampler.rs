use crate::consts::CHANNEL_SCALE_16_TO_8;
use crate::frame::SourceImage;

/// Mean color of one region, at 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegionColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RegionColor {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Lowercase `#rrggbb` form.
impl std::fmt::Display for RegionColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Position of a region in the grid, in boxes (not pixels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub column: u32,
    pub row: u32,
}

/// The whole-box tiling of an image.
///
/// Pixels past the last whole box on the right or bottom edge belong to no
/// region and are never sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionGrid {
    pub box_size: u32,
    pub columns: u32,
    pub rows: u32,
}

impl RegionGrid {
    /// A zero box size, or one larger than a dimension, gives an empty grid.
    pub fn new(width: u32, height: u32, box_size: u32) -> Self {
        let (columns, rows) = match box_size {
            0 => (0, 0),
            b => (width / b, height / b),
        };
        Self {
            box_size,
            columns,
            rows,
        }
    }

    pub fn for_image<I: SourceImage + ?Sized>(image: &I, box_size: u32) -> Self {
        Self::new(image.width(), image.height(), box_size)
    }

    pub fn region_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn is_empty(&self) -> bool {
        self.region_count() == 0
    }

    /// Half the box side, truncated.
    pub fn box_half(&self) -> u32 {
        self.box_size / 2
    }

    /// Pixels left uncovered on the right and bottom edges.
    pub fn remainder(&self, width: u32, height: u32) -> (u32, u32) {
        (
            width - self.columns * self.box_size,
            height - self.rows * self.box_size,
        )
    }

    /// Top-left pixel of a cell.
    pub fn origin(&self, cell: GridCell) -> (u32, u32) {
        (cell.column * self.box_size, cell.row * self.box_size)
    }

    /// Cells of a single grid column, top to bottom.
    pub fn column_cells(&self, column: u32) -> impl Iterator<Item = GridCell> {
        (0..self.rows).map(move |row| GridCell { column, row })
    }

    /// Every cell, column by column.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.columns).flat_map(move |column| self.column_cells(column))
    }
}

/// Average color of the `box_size` x `box_size` region at `cell`.
///
/// Each 16-bit channel is summed, divided by the pixel count and then by
/// 0x101, both with truncating integer division and in that order. Changing
/// the order shifts rounding and breaks parity with existing renders.
pub fn average_color<I: SourceImage + ?Sized>(image: &I, box_size: u32, cell: GridCell) -> RegionColor {
    let x0 = cell.column * box_size;
    let y0 = cell.row * box_size;

    let mut sums = [0u64; 3];
    for i in 0..box_size {
        for j in 0..box_size {
            let px = image.rgb16(x0 + i, y0 + j);
            for (sum, channel) in sums.iter_mut().zip(px) {
                *sum += u64::from(channel);
            }
        }
    }

    let pixel_count = u64::from(box_size) * u64::from(box_size);
    let [r, g, b] = sums.map(|sum| {
        let mean = sum.checked_div(pixel_count).unwrap_or(0);
        (mean / CHANNEL_SCALE_16_TO_8) as u8
    });

    RegionColor::new(r, g, b)
}
