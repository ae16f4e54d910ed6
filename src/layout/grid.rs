use super::shadow::ShadowPadding;
use crate::error::{InvalidInput, LayoutError};
use crate::params::{ButtonSpec, CanvasSpec, LayoutParams};
use crate::rect::{CellPlacement, Rect};
use crate::units::*;

/// How the ideal (fractional) column and row counts are rounded to whole numbers
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rounding {
    DownDown,
    DownUp,
    UpDown,
    UpUp,
}

impl Rounding {
    /// Every strategy, in the order ties between them are broken
    pub const ALL: [Rounding; 4] = [
        Rounding::DownDown,
        Rounding::DownUp,
        Rounding::UpDown,
        Rounding::UpUp,
    ];

    /// How many columns and rows to add to the rounded-down estimate
    pub fn offsets(self) -> (usize, usize) {
        match self {
            Rounding::DownDown => (0, 0),
            Rounding::DownUp => (0, 1),
            Rounding::UpDown => (1, 0),
            Rounding::UpUp => (1, 1),
        }
    }
}

/// The chosen grid
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridResult {
    pub cols: usize,
    pub rows: usize,
    /// Width of a button image, in whole pixels
    pub cell_w: Px,
    /// Height of a button image, in whole pixels
    pub cell_h: Px,
    /// `cell_w * cell_h`
    pub area: f64,
    /// Cells left without a button
    pub empty: usize,
    pub rounding: Rounding,
}

/// A grid together with where every button goes on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    pub grid: GridResult,
    /// The aspect ratio every button is fitted to
    pub cell_aspect_ratio: f64,
    /// One placement per button, row-major in input order. Each placement covers the
    /// button image plus its border, label and shadow.
    pub cells: Vec<CellPlacement>,
    pub shadow: ShadowPadding,
    /// Vertical space reserved below each button for its label (zero without labels)
    pub label_block: Px,
}

/// A button image resized to its cell and positioned on the canvas
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonFit {
    pub width: Px,
    pub height: Px,
    /// The button with its border, label and shadow, centered in its cell
    pub footprint: Rect,
    /// Where the resized image itself is drawn
    pub image: Rect,
    /// The outline drawn when the button is highlighted or selected
    pub highlight: Rect,
}

/// The most common aspect ratio among the buttons. When several ratios are equally
/// common, the one that appears first wins.
pub fn cell_aspect_ratio(buttons: &[ButtonSpec]) -> Option<f64> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for button in buttons {
        match counts
            .iter_mut()
            .find(|(ratio, _)| *ratio == button.aspect_ratio)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((button.aspect_ratio, 1)),
        }
    }

    let mut best: Option<(f64, usize)> = None;
    let mut tied = false;
    for &(ratio, count) in counts.iter() {
        match best {
            Some((_, top)) if count > top => {
                best = Some((ratio, count));
                tied = false;
            }
            Some((_, top)) if count == top => tied = true,
            Some(_) => {}
            None => best = Some((ratio, count)),
        }
    }

    if tied {
        tracing::debug!(
            ratio = best.map(|(ratio, _)| ratio),
            "several aspect ratios are equally common, using the first"
        );
    }
    best.map(|(ratio, _)| ratio)
}

/// Lay out `buttons` in a grid on `canvas`, making the buttons as large as possible.
///
/// Every button is fitted to the most common aspect ratio among them. The ideal
/// numbers of columns and rows are estimated from the canvas and cell aspect ratios,
/// then rounded each of the four ways; the rounding giving the largest buttons wins,
/// with ties going to the grid with fewer empty cells.
///
/// `label_height` is the height of the tallest label (zero when there are none);
/// `label_padding` is added to it for every row.
///
/// ```
/// use menu_layout::layout::layout_grid;
/// use menu_layout::{ButtonSpec, CanvasSpec, LayoutParams, Px};
///
/// let buttons = vec![ButtonSpec::new(16.0 / 9.0)?; 4];
/// let canvas = CanvasSpec::new(Px(854.0), Px(480.0))?;
/// let layout = layout_grid(&buttons, &canvas, &LayoutParams::default(), Px(0.0))?;
/// assert_eq!((layout.grid.cols, layout.grid.rows), (2, 2));
/// assert_eq!(layout.cells.len(), 4);
/// # Ok::<(), menu_layout::LayoutError>(())
/// ```
pub fn layout_grid(
    buttons: &[ButtonSpec],
    canvas: &CanvasSpec,
    params: &LayoutParams,
    label_height: Px,
) -> Result<GridLayout, LayoutError> {
    canvas.validate()?;
    params.validate()?;
    if !label_height.is_finite() || label_height < Px::ZERO {
        return Err(InvalidInput::Parameter {
            name: "label_height",
            value: *label_height,
        }
        .into());
    }
    for button in buttons {
        ButtonSpec::new(button.aspect_ratio)?;
    }
    let cell_ar = cell_aspect_ratio(buttons).ok_or(InvalidInput::NoButtons)?;

    let budget = Budget::new(params, label_height);
    let grid = select_grid(buttons.len(), cell_ar, canvas, params, &budget)?;
    let cells = place_cells(&grid, buttons.len(), canvas, &budget);

    Ok(GridLayout {
        grid,
        cell_aspect_ratio: cell_ar,
        cells,
        shadow: budget.shadow,
        label_block: budget.label_block,
    })
}

/// Space each cell needs on top of the button image itself
struct Budget {
    shadow: ShadowPadding,
    border: Px,
    label_block: Px,
}

impl Budget {
    fn new(params: &LayoutParams, label_height: Px) -> Budget {
        let label_block = if label_height > Px::ZERO {
            label_height + params.label_padding
        } else {
            Px::ZERO
        };
        Budget {
            shadow: ShadowPadding::new(
                params.shadow_sigma,
                params.shadow_x_offset,
                params.shadow_y_offset,
            ),
            border: params.border_thickness * 2.0,
            label_block,
        }
    }

    /// Size of a cell holding an image of the given size
    fn footprint(&self, width: Px, height: Px) -> (Px, Px) {
        (
            width + self.border + self.shadow.x(),
            height + self.border + self.label_block + self.shadow.y(),
        )
    }
}

fn select_grid(
    buttons: usize,
    cell_ar: f64,
    canvas: &CanvasSpec,
    params: &LayoutParams,
    budget: &Budget,
) -> Result<GridResult, LayoutError> {
    let usable_w = canvas.width - params.outer_padding * 2.0;
    let usable_h = canvas.height - params.outer_padding * 2.0;
    if usable_w <= Px::ZERO || usable_h <= Px::ZERO {
        return Err(LayoutError::InsufficientSpace { buttons });
    }

    // cols / rows = grid_ratio and cols * rows = buttons; neither estimate can
    // usefully exceed the button count, however lopsided the ratio
    let grid_ratio = (usable_w / usable_h) / cell_ar;
    let n = buttons as f64;
    let rows = (n / grid_ratio).sqrt().floor().min(n) as usize;
    let cols = (n * grid_ratio).sqrt().floor().min(n) as usize;

    let mut best: Option<GridResult> = None;
    for rounding in Rounding::ALL {
        let (extra_cols, extra_rows) = rounding.offsets();
        let (cols, rows) = (cols + extra_cols, rows + extra_rows);
        if cols * rows < buttons {
            continue;
        }

        let (cell_w, cell_h) = cell_size(cols, rows, cell_ar, usable_w, usable_h, params, budget);
        let candidate = GridResult {
            cols,
            rows,
            cell_w,
            cell_h,
            area: *cell_w * *cell_h,
            empty: cols * rows - buttons,
            rounding,
        };
        tracing::trace!(
            ?rounding,
            cols,
            rows,
            area = candidate.area,
            empty = candidate.empty,
            "evaluated grid candidate"
        );
        if candidate.area <= 0.0 {
            continue;
        }

        best = match best {
            Some(current)
                if candidate.area > current.area
                    || (candidate.area == current.area && candidate.empty < current.empty) =>
            {
                Some(candidate)
            }
            None => Some(candidate),
            keep => keep,
        };
    }

    let grid = best.ok_or(LayoutError::InsufficientSpace { buttons })?;
    tracing::debug!(
        cols = grid.cols,
        rows = grid.rows,
        cell_w = *grid.cell_w,
        cell_h = *grid.cell_h,
        empty = grid.empty,
        "selected grid"
    );
    Ok(grid)
}

/// The largest image of aspect ratio `cell_ar` that fits every cell of a
/// `cols` x `rows` grid, rounded down to whole pixels
fn cell_size(
    cols: usize,
    rows: usize,
    cell_ar: f64,
    usable_w: Px,
    usable_h: Px,
    params: &LayoutParams,
    budget: &Budget,
) -> (Px, Px) {
    let (cols, rows) = (cols as f64, rows as f64);
    let padded_w = usable_w
        - params.inner_padding * (cols - 1.0)
        - budget.shadow.x() * cols
        - budget.border * cols;
    let padded_h = usable_h
        - params.inner_padding * (rows - 1.0)
        - budget.label_block * rows
        - budget.shadow.y() * rows
        - budget.border * rows;

    let col_w = if padded_w > Px::ZERO {
        padded_w / cols
    } else {
        Px::ZERO
    };
    let row_h = if padded_h > Px::ZERO {
        padded_h / rows
    } else {
        Px::ZERO
    };

    let mut cell_w = col_w;
    let mut cell_h = cell_w / cell_ar;
    if cell_h > row_h {
        cell_h = row_h;
        cell_w = cell_h * cell_ar;
    }
    (cell_w.floor(), cell_h.floor())
}

/// Spread the cells evenly over the canvas, row by row. Every row (including a
/// short last row) is centered on its own, with equal gaps before, between and
/// after its cells.
fn place_cells(
    grid: &GridResult,
    buttons: usize,
    canvas: &CanvasSpec,
    budget: &Budget,
) -> Vec<CellPlacement> {
    let (cell_w, cell_h) = budget.footprint(grid.cell_w, grid.cell_h);
    let rows = grid.rows as f64;
    let padding_y = ((canvas.height - cell_h * rows) / (rows + 1.0)).floor();

    let mut cells: Vec<CellPlacement> = Vec::with_capacity(buttons);
    for row in 0..grid.rows {
        let in_row = (buttons - cells.len()).min(grid.cols);
        if in_row == 0 {
            break;
        }

        let count = in_row as f64;
        let padding_x = ((canvas.width - cell_w * count) / (count + 1.0)).floor();
        let y0 = padding_y + (cell_h + padding_y) * row as f64;
        for col in 0..in_row {
            let x0 = padding_x + (cell_w + padding_x) * col as f64;
            cells.push(Rect::from_origin(x0, y0, cell_w, cell_h));
        }
    }
    cells
}

impl GridLayout {
    /// Resize a button image to the grid's cells, letterboxing or pillarboxing it
    /// when its aspect ratio differs from the cell's, and center it in the cell at
    /// `index`. Returns `None` when there is no such cell.
    pub fn fit_button(
        &self,
        index: usize,
        button: &ButtonSpec,
        params: &LayoutParams,
    ) -> Option<ButtonFit> {
        let cell = self.cells.get(index)?;
        let GridResult { cell_w, cell_h, .. } = self.grid;

        let (width, height) = if button.aspect_ratio > self.cell_aspect_ratio {
            (cell_w, (cell_w / button.aspect_ratio).floor())
        } else if button.aspect_ratio < self.cell_aspect_ratio {
            ((cell_h * button.aspect_ratio).floor(), cell_h)
        } else {
            (cell_w, cell_h)
        };

        let border = params.border_thickness;
        let own_w = width + border * 2.0 + self.shadow.x();
        let own_h = height + border * 2.0 + self.label_block + self.shadow.y();
        let x = cell.x0 + ((cell.width() - own_w) / 2.0).floor();
        let y = cell.y0 + ((cell.height() - own_h) / 2.0).floor();

        let image = Rect::from_origin(
            x + self.shadow.west + border,
            y + self.shadow.north + border,
            width,
            height,
        );
        Some(ButtonFit {
            width,
            height,
            footprint: Rect::from_origin(x, y, own_w, own_h),
            image,
            highlight: image.outset(params.highlight_thickness),
        })
    }

    /// [fit_button](GridLayout::fit_button) for every button, in order
    pub fn fit_buttons(&self, buttons: &[ButtonSpec], params: &LayoutParams) -> Vec<ButtonFit> {
        buttons
            .iter()
            .enumerate()
            .filter_map(|(index, button)| self.fit_button(index, button, params))
            .collect()
    }
}
