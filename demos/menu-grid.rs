use menu_layout::dvd::{FrameDims, MenuAspect, VideoStandard};
use menu_layout::layout::layout_menu;
use menu_layout::*;

/// Used when no font file is given: every glyph is 60% of the font size wide
struct Mono;

impl Measure for Mono {
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

fn main() {
    let font: Option<FontMetrics> = std::env::args().nth(1).map(|path| {
        let bytes = std::fs::read(&path).expect("can read font");
        FontMetrics::load(bytes)
            .expect("can load font")
            .with_stroke(Px(1.0))
    });
    let measure: &dyn Measure = match &font {
        Some(font) => font,
        None => &Mono,
    };

    let dims = FrameDims::new(VideoStandard::Ntsc, MenuAspect::Widescreen);
    let canvas = dims.canvas();

    // widescreen trailers, a 4:3 extra, and a clip ripped from the DVD itself whose
    // 720x480 frame is stored with non-square pixels
    let mut buttons: Vec<ButtonSpec> = [(1920, 1080), (1920, 1080), (640, 480), (1920, 1080)]
        .into_iter()
        .map(|(w, h)| ButtonSpec::from_dims(w, h).expect("valid button"))
        .collect();
    let ripped = ButtonSpec::from_dims(dims.storage_width, dims.storage_height)
        .and_then(|button| button.corrected(1.0 / dims.pixel_aspect_correction()))
        .expect("valid button");
    buttons.push(ripped);
    let labels: Vec<String> = (0..buttons.len())
        .map(|i| lipsum::lipsum_words(2 + i * 2))
        .collect();

    let params = LayoutParams::default().with_labels(Px(0.0), 2);
    let menu = layout_menu(&buttons, &labels, &canvas, &params, measure).expect("menu fits");

    println!(
        "{}x{} canvas: {} columns x {} rows of {}x{} buttons ({} empty)",
        canvas.width,
        canvas.height,
        menu.grid.grid.cols,
        menu.grid.grid.rows,
        menu.grid.grid.cell_w,
        menu.grid.grid.cell_h,
        menu.grid.grid.empty,
    );
    for (i, (button, label)) in menu.buttons.iter().zip(&menu.labels).enumerate() {
        println!(
            "button {i}: {}x{} at ({}, {}), label at {}",
            button.width, button.height, button.image.x0, button.image.y0, label.point_size
        );
        for line in label.rendered_lines() {
            println!("    {line}");
        }
    }
}
