use super::grid::{layout_grid, ButtonFit, GridLayout};
use super::text::{fit_text, line_height, point_size_for_line_height, WrapResult};
use crate::error::{InvalidInput, LayoutError};
use crate::font::Measure;
use crate::params::{ButtonSpec, CanvasSpec, LayoutParams};
use crate::units::*;

/// Label font size used when neither a size nor a line height is configured
pub const DEFAULT_LABEL_POINT_SIZE: Pt = Pt(16.0);

/// A complete menu: the grid, every button fitted into it, and every label fitted
/// below its button
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayout {
    pub grid: GridLayout,
    /// One per button, in input order
    pub buttons: Vec<ButtonFit>,
    /// One per button, in input order. Empty when the menu has no labels.
    pub labels: Vec<WrapResult>,
    /// Height of a single label line
    pub line_height: Px,
    /// The font size labels were fitted from
    pub label_point_size: Pt,
}

impl MenuLayout {
    /// Height of the tallest fitted label
    pub fn label_height(&self) -> Px {
        self.labels
            .iter()
            .map(|label| label.height(self.line_height))
            .fold(Px::ZERO, Px::max)
    }
}

/// Lay out a menu of buttons with optional text labels.
///
/// `labels` is either empty (no labels) or holds one label per button; blank labels
/// are allowed. Labelled menus are laid out twice: first reserving room for
/// `label_max_lines` lines under every button, then again with only as much room as
/// the tallest fitted label needs. The second grid is used unless it would make the
/// buttons smaller.
pub fn layout_menu<S, M>(
    buttons: &[ButtonSpec],
    labels: &[S],
    canvas: &CanvasSpec,
    params: &LayoutParams,
    measure: &M,
) -> Result<MenuLayout, LayoutError>
where
    S: AsRef<str>,
    M: Measure + ?Sized,
{
    params.validate()?;
    let point_size = params.label_point_size.unwrap_or_else(|| {
        if params.label_line_height > Px::ZERO {
            point_size_for_line_height(measure, params.label_line_height)
        } else {
            DEFAULT_LABEL_POINT_SIZE
        }
    });
    let line = if params.label_line_height > Px::ZERO {
        params.label_line_height
    } else {
        line_height(measure, point_size)
    };

    if labels.is_empty() {
        let grid = layout_grid(buttons, canvas, params, Px::ZERO)?;
        return Ok(MenuLayout {
            buttons: grid.fit_buttons(buttons, params),
            grid,
            labels: Vec::new(),
            line_height: line,
            label_point_size: point_size,
        });
    }
    if labels.len() != buttons.len() {
        return Err(InvalidInput::LabelCount {
            buttons: buttons.len(),
            labels: labels.len(),
        }
        .into());
    }

    let budget = line * params.label_max_lines as f64;
    let first = layout_grid(buttons, canvas, params, budget)?;
    let fitted = fit_labels(labels, &first, params, point_size, measure);
    let tallest = fitted
        .iter()
        .map(|label| label.height(line))
        .fold(Px::ZERO, Px::max);
    tracing::debug!(budget = *budget, tallest = *tallest, "fitted menu labels");

    let (grid, labels) = if tallest < budget {
        let second = layout_grid(buttons, canvas, params, tallest)?;
        if second.grid.cell_w >= first.grid.cell_w {
            // wider buttons leave more room, so the labels are refitted
            let refitted = fit_labels(labels, &second, params, point_size, measure);
            (second, refitted)
        } else {
            (first, fitted)
        }
    } else {
        (first, fitted)
    };

    Ok(MenuLayout {
        buttons: grid.fit_buttons(buttons, params),
        grid,
        labels,
        line_height: line,
        label_point_size: point_size,
    })
}

fn fit_labels<S, M>(
    labels: &[S],
    grid: &GridLayout,
    params: &LayoutParams,
    point_size: Pt,
    measure: &M,
) -> Vec<WrapResult>
where
    S: AsRef<str>,
    M: Measure + ?Sized,
{
    labels
        .iter()
        .map(|label| {
            fit_text(
                label.as_ref(),
                grid.grid.cell_w,
                params.label_max_lines,
                point_size,
                measure,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{Extent, WordSpacing};

    struct FixedAdvance;

    impl Measure for FixedAdvance {
        fn measure(&self, text: &str, size: Pt, spacing: WordSpacing) -> Extent {
            let advance = Px(*size * 0.6);
            let width = text
                .chars()
                .map(|ch| match (ch, spacing) {
                    (' ', WordSpacing::Exact(space)) => space,
                    _ => advance,
                })
                .sum();
            Extent {
                width,
                height: Px(*size * 1.25),
            }
        }
    }

    fn wide_buttons(count: usize) -> Vec<ButtonSpec> {
        vec![ButtonSpec::new(16.0 / 9.0).expect("valid ratio"); count]
    }

    fn canvas() -> CanvasSpec {
        CanvasSpec::new(Px(1280.0), Px(720.0)).expect("valid canvas")
    }

    fn params() -> LayoutParams {
        LayoutParams::default()
            .with_outer_padding(Px(80.0))
            .with_inner_padding(Px(40.0))
    }

    #[test]
    fn unlabelled_menu_is_a_plain_grid() {
        let buttons = wide_buttons(4);
        let menu = layout_menu::<&str, _>(&buttons, &[], &canvas(), &params(), &FixedAdvance)
            .expect("menu fits");
        let grid = layout_grid(&buttons, &canvas(), &params(), Px::ZERO).expect("grid fits");

        assert_eq!(menu.grid, grid);
        assert!(menu.labels.is_empty());
        assert_eq!(menu.buttons.len(), 4);
        assert_eq!(menu.label_point_size, DEFAULT_LABEL_POINT_SIZE);
        assert_eq!(menu.label_height(), Px::ZERO);
    }

    #[test]
    fn label_count_must_match() {
        let result = layout_menu(
            &wide_buttons(3),
            &["Play", "Extras"],
            &canvas(),
            &params(),
            &FixedAdvance,
        );
        assert!(matches!(
            result,
            Err(LayoutError::InvalidInput(InvalidInput::LabelCount {
                buttons: 3,
                labels: 2
            }))
        ));
    }

    #[test]
    fn short_labels_give_back_their_unused_lines() {
        let buttons = wide_buttons(4);
        let params = params()
            .with_labels(Px(25.0), 3)
            .with_label_padding(Px(12.0));
        let labels = ["Play", "Scenes", "Extras", "Setup"];
        let menu =
            layout_menu(&buttons, &labels, &canvas(), &params, &FixedAdvance).expect("menu fits");

        assert_eq!(menu.label_point_size, Pt(20.0));
        assert_eq!(menu.line_height, Px(25.0));
        assert_eq!(menu.label_height(), Px(25.0));
        assert_eq!(menu.grid.label_block, Px(37.0));

        let reserved = layout_grid(&buttons, &canvas(), &params, Px(75.0)).expect("grid fits");
        assert!(menu.grid.grid.cell_w >= reserved.grid.cell_w);

        for (label, text) in menu.labels.iter().zip(labels) {
            assert_eq!(label.rendered_lines(), vec![text]);
        }
    }

    #[test]
    fn blank_labels_reserve_no_space() {
        let buttons = wide_buttons(2);
        let menu = layout_menu(&buttons, &["", "  "], &canvas(), &params(), &FixedAdvance)
            .expect("menu fits");
        assert_eq!(menu.grid.label_block, Px::ZERO);
        assert!(menu.labels.iter().all(|label| label.lines.is_empty()));
    }

    #[test]
    fn labels_fit_the_button_width() {
        let buttons = wide_buttons(6);
        let params = params().with_labels(Px(0.0), 2).with_label_point_size(Pt(24.0));
        let labels = [
            "The Fellowship of the Ring",
            "The Two Towers",
            "The Return of the King",
            "Behind the Scenes",
            "Appendices",
            "Trailers and Teasers for Every Film in the Series",
        ];
        let menu =
            layout_menu(&buttons, &labels, &canvas(), &params, &FixedAdvance).expect("menu fits");

        assert_eq!(menu.line_height, Px(30.0));
        for label in &menu.labels {
            assert!(label.lines.len() <= 2);
            for line in label.rendered_lines() {
                let width = FixedAdvance
                    .measure(&line, label.point_size, label.word_spacing)
                    .width;
                assert!(width <= menu.grid.grid.cell_w, "{line} is too wide");
            }
        }
    }
}
