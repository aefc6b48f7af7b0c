//! Pane geometry.
//!
//! Regions are expressed in terminal cell units (`u16`). A layout tiles the
//! screen evenly among the live panes, either side by side (`Vertical`) or
//! stacked (`Horizontal`). The last region absorbs the division remainder so
//! the tiles always cover the full screen.
//!
//! Invariants:
//! * `split(w, h, n, _)` yields exactly `n` regions.
//! * Regions never overlap and their union is `(0, 0, w, h)` when `n > 0`.
//! * Width/height may be 0 (degenerate screens, more panes than cells).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl LayoutRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Panes side by side.
    #[default]
    Vertical,
    /// Panes stacked top to bottom.
    Horizontal,
}

#[derive(Debug, Clone)]
pub struct Layout {
    regions: Vec<LayoutRegion>,
}

impl Layout {
    /// A single full-screen region.
    pub fn single(width: u16, height: u16) -> Self {
        Self {
            regions: vec![LayoutRegion::new(0, 0, width, height)],
        }
    }

    /// Tile `count` regions evenly over a `width` x `height` screen.
    pub fn split(width: u16, height: u16, count: usize, orientation: Orientation) -> Self {
        if count == 0 {
            return Self {
                regions: Vec::new(),
            };
        }
        let total = match orientation {
            Orientation::Vertical => width,
            Orientation::Horizontal => height,
        };
        let n = u16::try_from(count).unwrap_or(u16::MAX);
        let share = total / n;
        let regions = (0..count)
            .map(|i| {
                let offset = share.saturating_mul(i as u16);
                let size = if i + 1 == count {
                    total - offset
                } else {
                    share
                };
                match orientation {
                    Orientation::Vertical => LayoutRegion::new(offset, 0, size, height),
                    Orientation::Horizontal => LayoutRegion::new(0, offset, width, size),
                }
            })
            .collect();
        Self { regions }
    }

    /// First region; panics on an empty layout.
    pub fn primary(&self) -> &LayoutRegion {
        &self.regions[0]
    }

    pub fn regions(&self) -> &[LayoutRegion] {
        &self.regions
    }
}
