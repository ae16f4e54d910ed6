//! Property-based invariant tests for the grid and label layout.
//!
//! 1. A grid always has room for every button.
//! 2. Cells never overlap and stay on the canvas.
//! 3. Fitted labels never exceed their width or line count.
//! 4. Text that fits on one line comes back unchanged.
//! 5. Allowing fewer lines never shows more of the text.
//! 6. Re-fitting with the chosen size and spacing reproduces the result.

use menu_layout::layout::{fit_text, fit_text_with, layout_grid};
use menu_layout::{ButtonSpec, CanvasSpec, Extent, LayoutError, LayoutParams, Measure, Pt, Px, WordSpacing};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Every glyph is 60% of the font size wide; exact spacing replaces spaces
struct FixedAdvance;

impl Measure for FixedAdvance {
    fn measure(&self, text: &str, size: Pt, spacing: WordSpacing) -> Extent {
        let width = text
            .chars()
            .map(|ch| match (ch, spacing) {
                (' ', WordSpacing::Exact(space)) => space,
                _ => Px(*size * 0.6),
            })
            .sum();
        Extent {
            width,
            height: Px(*size * 1.25),
        }
    }
}

const TITLE: &str = "The Lord of the Rings: The Fellowship of the Ring (2001)";

fn buttons_strategy() -> impl Strategy<Value = Vec<ButtonSpec>> {
    let ratio = prop_oneof![Just(16.0 / 9.0), Just(4.0 / 3.0), Just(1.0), Just(2.35), Just(0.7)];
    prop::collection::vec(ratio.prop_map(|r| ButtonSpec { aspect_ratio: r }), 1..=24)
}

fn canvas_strategy() -> impl Strategy<Value = CanvasSpec> {
    (320u32..=1920, 240u32..=1080).prop_map(|(w, h)| CanvasSpec {
        width: Px(w as f64),
        height: Px(h as f64),
    })
}

/// Whole-pixel paddings keep every coordinate an integer
fn params_strategy() -> impl Strategy<Value = LayoutParams> {
    (1u32..=60, 0u32..=40, 0u32..=8, 0u32..=4, -8i32..=8, -8i32..=8).prop_map(
        |(outer, inner, border, sigma, x, y)| {
            LayoutParams::default()
                .with_outer_padding(Px(outer as f64))
                .with_inner_padding(Px(inner as f64))
                .with_border(Px(border as f64))
                .with_shadow(sigma as f64, Px(x as f64), Px(y as f64))
        },
    )
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z]{1,14}", 1..=12)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. A grid always has room for every button
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn grid_holds_every_button(
        buttons in buttons_strategy(),
        canvas in canvas_strategy(),
        params in params_strategy(),
        label_height in 0u32..=60,
    ) {
        match layout_grid(&buttons, &canvas, &params, Px(label_height as f64)) {
            Ok(layout) => {
                let grid = layout.grid;
                prop_assert!(grid.cols >= 1 && grid.rows >= 1);
                prop_assert!(grid.cols * grid.rows >= buttons.len());
                prop_assert_eq!(grid.empty, grid.cols * grid.rows - buttons.len());
                prop_assert!(grid.cell_w >= Px(1.0) && grid.cell_h >= Px(1.0));
                prop_assert_eq!(layout.cells.len(), buttons.len());
            }
            Err(LayoutError::InsufficientSpace { buttons: n }) => {
                prop_assert_eq!(n, buttons.len());
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Cells never overlap and stay on the canvas
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cells_tile_the_canvas(
        buttons in buttons_strategy(),
        canvas in canvas_strategy(),
        params in params_strategy(),
    ) {
        let Ok(layout) = layout_grid(&buttons, &canvas, &params, Px(0.0)) else {
            return Ok(());
        };
        let bounds = menu_layout::Rect::from_origin(Px(0.0), Px(0.0), canvas.width, canvas.height);

        for (i, a) in layout.cells.iter().enumerate() {
            prop_assert!(bounds.contains(a), "cell {} at {:?} is off the canvas", i, a);
            for b in &layout.cells[i + 1..] {
                prop_assert!(!a.intersects(b), "{:?} overlaps {:?}", a, b);
            }
        }

        for (i, (button, cell)) in layout
            .fit_buttons(&buttons, &params)
            .iter()
            .zip(&layout.cells)
            .enumerate()
        {
            prop_assert!(cell.contains(&button.footprint), "button {} spills out of its cell", i);
            prop_assert!(button.width <= layout.grid.cell_w);
            prop_assert!(button.height <= layout.grid.cell_h);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Fitted labels never exceed their width or line count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn labels_stay_in_their_box(
        words in words_strategy(),
        max_width in 60u32..=400,
        max_lines in 1usize..=4,
    ) {
        let text = words.join(" ");
        let fitted = fit_text(&text, Px(max_width as f64), max_lines, Pt(20.0), &FixedAdvance);

        prop_assert!(!fitted.lines.is_empty());
        prop_assert!(fitted.lines.len() <= max_lines);
        prop_assert!(fitted.point_size <= Pt(20.0));
        for line in fitted.rendered_lines() {
            let width = FixedAdvance.measure(&line, fitted.point_size, fitted.word_spacing).width;
            prop_assert!(width <= Px(max_width as f64), "{:?} is {} wide", line, width);
        }

        // every word is accounted for exactly once, in order
        let mut seen: Vec<String> = fitted
            .lines
            .iter()
            .flat_map(|line| line.words.iter().cloned())
            .collect();
        seen.extend(fitted.unused_words.iter().cloned());
        prop_assert_eq!(seen, words);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Text that fits on one line comes back unchanged
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn single_line_round_trip(words in words_strategy(), max_lines in 1usize..=3) {
        let text = words.join(" ");
        let width = FixedAdvance.measure(&text, Pt(20.0), WordSpacing::Natural).width;
        let fitted = fit_text(&text, width + Px(1.0), max_lines, Pt(20.0), &FixedAdvance);

        prop_assert_eq!(fitted.lines.len(), 1);
        prop_assert_eq!(fitted.lines[0].trim, None);
        prop_assert!(fitted.unused_words.is_empty());
        prop_assert_eq!(fitted.point_size, Pt(20.0));
        prop_assert_eq!(fitted.rendered_lines(), vec![text]);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Allowing fewer lines never shows more of the text
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fewer_lines_never_show_more(words in words_strategy(), max_width in 60u32..=400) {
        let text = words.join(" ");
        let retained: Vec<usize> = (1..=4)
            .rev()
            .map(|lines| {
                fit_text(&text, Px(max_width as f64), lines, Pt(20.0), &FixedAdvance).retained_chars()
            })
            .collect();
        prop_assert!(
            retained.windows(2).all(|pair| pair[0] >= pair[1]),
            "retained characters grew from 4 lines down to 1: {:?}",
            retained
        );
    }
}

#[test]
fn fewer_lines_keep_less_of_the_title() {
    let retained = |width: f64| -> Vec<usize> {
        (1..=3)
            .map(|lines| fit_text(TITLE, Px(width), lines, Pt(20.0), &FixedAdvance).retained_chars())
            .collect()
    };
    assert_eq!(retained(300.0), vec![18, 46, 46]);
    assert_eq!(retained(250.0), vec![13, 27, 46]);
}

#[test]
fn title_on_three_lines_is_complete() {
    let fitted = fit_text(TITLE, Px(300.0), 3, Pt(20.0), &FixedAdvance);
    assert_eq!(
        fitted.rendered_lines(),
        vec!["The Lord of the Rings:", "The Fellowship of", "the Ring (2001)"]
    );
    assert!(fitted.unused_words.is_empty());
    assert_eq!(fitted.point_size, Pt(20.0));
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Re-fitting with the chosen size and spacing reproduces the result
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn refitting_reproduces_the_result(
        words in words_strategy(),
        max_width in 60u32..=400,
        max_lines in 1usize..=4,
    ) {
        let text = words.join(" ");
        let width = Px(max_width as f64);
        let first = fit_text(&text, width, max_lines, Pt(20.0), &FixedAdvance);
        let again = fit_text_with(
            &text,
            width,
            max_lines,
            first.point_size,
            first.word_spacing,
            &FixedAdvance,
        );
        prop_assert_eq!(again, first);
    }
}
