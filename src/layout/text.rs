use crate::font::{Measure, WordSpacing};
use crate::units::*;

/// Appended to any line that had to be cut short
pub const ELLIPSIS: &str = "...";

/// Characters used to measure the height of a line of text, tall and deep enough to
/// cover ascenders and descenders
pub const REFERENCE_TEXT: &str = "1234567890ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Upper bound for [point_size_for_line_height]
pub const MAX_POINT_SIZE: u32 = 512;

/// How far the font size may shrink (as a fraction of the requested size) to fit more words
const SIZE_SHRINK: f64 = 0.1;
/// How far word spacing may shrink (as a fraction of the natural spacing) to fit more words
const SPACING_SHRINK: f64 = 0.5;
/// Step used when growing word spacing back towards natural, as a fraction of natural
const SPACING_STEP: f64 = 0.05;

/// A single wrapped line of a label
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub words: Vec<String>,
    /// When set, only this many characters of the line are kept and an ellipsis
    /// is drawn after them
    pub trim: Option<usize>,
}

impl TextLine {
    /// The words of the line, joined by single spaces
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// The text as it should be drawn, including any ellipsis
    pub fn render(&self) -> String {
        match self.trim {
            Some(keep) => {
                let mut text: String = self.text().chars().take(keep).collect();
                text.push_str(ELLIPSIS);
                text
            }
            None => self.text(),
        }
    }

    /// How many characters of the original words survive on this line, not
    /// counting the spaces between them
    pub fn retained_chars(&self) -> usize {
        let keep = self.trim.unwrap_or(usize::MAX);
        self.text()
            .chars()
            .take(keep)
            .filter(|ch| !ch.is_whitespace())
            .count()
    }
}

/// The result of fitting a label into its box
#[derive(Debug, Clone, PartialEq)]
pub struct WrapResult {
    pub lines: Vec<TextLine>,
    /// Words that did not fit at all; the last line is ellipsized when there are any
    pub unused_words: Vec<String>,
    pub point_size: Pt,
    pub word_spacing: WordSpacing,
}

impl WrapResult {
    /// Every line as it should be drawn
    pub fn rendered_lines(&self) -> Vec<String> {
        self.lines.iter().map(TextLine::render).collect()
    }

    /// Height of the rendered label when every line is `line_height` tall
    pub fn height(&self, line_height: Px) -> Px {
        line_height * self.lines.len() as f64
    }

    /// Total number of characters of the original text that are drawn
    pub fn retained_chars(&self) -> usize {
        self.lines.iter().map(TextLine::retained_chars).sum()
    }
}

/// Height of one line of text at the given size
pub fn line_height<M: Measure + ?Sized>(measure: &M, size: Pt) -> Px {
    measure
        .measure(REFERENCE_TEXT, size, WordSpacing::Natural)
        .height
}

/// Find the largest whole point size whose lines are no taller than `line_height`.
/// Never returns less than 1pt.
pub fn point_size_for_line_height<M: Measure + ?Sized>(measure: &M, line_height: Px) -> Pt {
    let fits = (1..=MAX_POINT_SIZE)
        .map(|pts| Pt(pts as f64))
        .take_while(|&size| self::line_height(measure, size) <= line_height)
        .last();
    fits.unwrap_or(Pt(1.0))
}

/// Fit `text` into a box `max_width` wide and at most `max_lines` tall, starting
/// from `point_size`.
///
/// The text is wrapped greedily, then refined in order:
///
/// 1. if words would be lost, try a slightly smaller font and tighter word
///    spacing, keeping them only if that shows every word
/// 2. after shrinking, grow the font back up as far as every word still shows
/// 3. balance the lines by moving words down while that reduces raggedness
/// 4. after shrinking, loosen the word spacing back towards the requested spacing
/// 5. cut any line that still overflows and mark it with an ellipsis
///
/// This never fails: text that cannot fit is ellipsized.
///
/// ```
/// use menu_layout::layout::fit_text;
/// use menu_layout::{Extent, Measure, Pt, Px, WordSpacing};
///
/// struct Mono;
/// impl Measure for Mono {
///     fn measure(&self, text: &str, size: Pt, _: WordSpacing) -> Extent {
///         Extent { width: Px(text.chars().count() as f64 * *size * 0.5), height: Px(*size) }
///     }
/// }
///
/// let fitted = fit_text("Extras", Px(200.0), 2, Pt(20.0), &Mono);
/// assert_eq!(fitted.rendered_lines(), vec!["Extras"]);
/// ```
pub fn fit_text<M: Measure + ?Sized>(
    text: &str,
    max_width: Px,
    max_lines: usize,
    point_size: Pt,
    measure: &M,
) -> WrapResult {
    fit_text_with(
        text,
        max_width,
        max_lines,
        point_size,
        WordSpacing::Natural,
        measure,
    )
}

/// Like [fit_text], but starting from the given word spacing instead of the font's
/// natural spacing. Feeding back the `point_size` and `word_spacing` of an earlier
/// result reproduces that result.
pub fn fit_text_with<M: Measure + ?Sized>(
    text: &str,
    max_width: Px,
    max_lines: usize,
    point_size: Pt,
    word_spacing: WordSpacing,
    measure: &M,
) -> WrapResult {
    TextFitter {
        words: text.split_whitespace().map(String::from).collect(),
        max_width,
        max_lines: max_lines.max(1),
        point_size,
        word_spacing,
        measure,
    }
    .fit()
}

#[derive(Debug, Clone, Default)]
struct DraftLine {
    words: Vec<String>,
    /// the line holds a word that does not fit
    overflow: bool,
}

#[derive(Debug, Clone, Default)]
struct Draft {
    lines: Vec<DraftLine>,
    unused: Vec<String>,
}

/// The font size and word spacing a wrapping is made with
#[derive(Debug, Copy, Clone, PartialEq)]
struct Setting {
    size: Pt,
    spacing: WordSpacing,
}

struct TextFitter<'a, M: ?Sized> {
    words: Vec<String>,
    max_width: Px,
    max_lines: usize,
    point_size: Pt,
    word_spacing: WordSpacing,
    measure: &'a M,
}

impl<M: Measure + ?Sized> TextFitter<'_, M> {
    fn fit(&self) -> WrapResult {
        let requested = Setting {
            size: self.point_size,
            spacing: self.word_spacing,
        };
        if self.words.is_empty() {
            return WrapResult {
                lines: Vec::new(),
                unused_words: Vec::new(),
                point_size: requested.size,
                word_spacing: requested.spacing,
            };
        }

        let setting = match self.shrink(requested) {
            Some(shrunk) => {
                let grown = self.maximize_point_size(shrunk);
                self.maximize_word_spacing(grown)
            }
            None => requested,
        };

        let mut draft = self.wrap(setting);
        self.minimize_raggedness(&mut draft.lines, setting);
        tracing::trace!(
            size = *setting.size,
            spacing = ?setting.spacing,
            lines = draft.lines.len(),
            excluded = self.excluded(&draft, setting),
            "fitted label"
        );
        self.ellipsize(draft, setting)
    }

    fn width(&self, text: &str, setting: Setting) -> Px {
        self.measure
            .measure(text, setting.size, setting.spacing)
            .width
    }

    fn fits(&self, text: &str, setting: Setting) -> bool {
        self.width(text, setting) <= self.max_width
    }

    fn space_width(&self, spacing: WordSpacing, size: Pt) -> Px {
        match spacing {
            WordSpacing::Natural => self.measure.natural_word_spacing(size),
            WordSpacing::Exact(width) => width,
        }
    }

    /// Greedily pack words into lines. Once the last allowed line is full the next
    /// word is still attached to it (to be ellipsized) and the rest are left unused.
    fn wrap(&self, setting: Setting) -> Draft {
        let mut lines: Vec<DraftLine> = Vec::with_capacity(self.max_lines);
        let mut current = DraftLine::default();
        let mut remaining = self.words.iter();

        while let Some(word) = remaining.next() {
            if current.words.is_empty() {
                current.overflow = !self.fits(word, setting);
                current.words.push(word.clone());
                continue;
            }

            let candidate = format!("{} {}", current.words.join(" "), word);
            if self.fits(&candidate, setting) {
                current.words.push(word.clone());
            } else if lines.len() + 1 >= self.max_lines {
                current.words.push(word.clone());
                current.overflow = true;
                break;
            } else {
                lines.push(std::mem::take(&mut current));
                current.overflow = !self.fits(word, setting);
                current.words.push(word.clone());
            }
        }

        if !current.words.is_empty() {
            lines.push(current);
        }

        Draft {
            lines,
            unused: remaining.cloned().collect(),
        }
    }

    /// Words that will not be shown in full: every unused word, plus every word of an
    /// overflowing line that reaches past the ellipsis
    fn excluded(&self, draft: &Draft, setting: Setting) -> usize {
        let mut excluded = draft.unused.len();
        for line in draft.lines.iter().filter(|line| line.overflow) {
            let keep = self.trim_point(&line.words.join(" "), setting);
            let mut end = 0;
            for (n, word) in line.words.iter().enumerate() {
                end += word.chars().count() + usize::from(n > 0);
                if end > keep {
                    excluded += 1;
                }
            }
        }
        excluded
    }

    fn shows_everything(&self, setting: Setting) -> bool {
        self.excluded(&self.wrap(setting), setting) == 0
    }

    /// When the requested settings cannot show every word, look for a smaller font
    /// with tighter spacing that can, preferring the requested size. Settings that
    /// only recover some of the words are not used: the requested settings are
    /// ellipsized instead.
    fn shrink(&self, requested: Setting) -> Option<Setting> {
        let excluded = self.excluded(&self.wrap(requested), requested);
        if excluded == 0 {
            return None;
        }

        let natural = self.measure.natural_word_spacing(requested.size);
        let requested_space = self.space_width(requested.spacing, requested.size);
        let tight = WordSpacing::Exact((natural * (1.0 - SPACING_SHRINK)).min(requested_space));
        let min = Setting {
            size: requested.size * (1.0 - SIZE_SHRINK),
            spacing: tight,
        };
        let min_excluded = self.excluded(&self.wrap(min), min);
        tracing::trace!(
            excluded,
            min = min_excluded,
            "compared requested and minimum wrapping"
        );
        if min_excluded > 0 {
            return None;
        }

        let medium = Setting {
            size: requested.size,
            spacing: tight,
        };
        if self.shows_everything(medium) {
            Some(medium)
        } else {
            Some(min)
        }
    }

    /// Step the font size back up towards the requested size for as long as every
    /// word is still shown
    fn maximize_point_size(&self, setting: Setting) -> Setting {
        let mut best = setting;
        while best.size < self.point_size {
            let candidate = Setting {
                size: (best.size + Pt(1.0)).min(self.point_size),
                spacing: best.spacing,
            };
            if !self.shows_everything(candidate) {
                break;
            }
            best = candidate;
        }
        best
    }

    fn unused_width_sq(&self, words: &[String], setting: Setting) -> f64 {
        let unused = *(self.max_width - self.width(&words.join(" "), setting));
        unused * unused
    }

    /// Working from the bottom up, move words from the end of one line to the start
    /// of the next while that lowers the summed square of unused width of the pair
    fn minimize_raggedness(&self, lines: &mut [DraftLine], setting: Setting) {
        for i in (1..lines.len()).rev() {
            if lines[i].overflow {
                continue;
            }

            let (head, tail) = lines.split_at_mut(i);
            let above = &mut head[i - 1];
            let below = &mut tail[0];

            while above.words.len() > 1 {
                let Some(last) = above.words.last() else {
                    break;
                };

                let mut new_below = Vec::with_capacity(below.words.len() + 1);
                new_below.push(last.clone());
                new_below.extend(below.words.iter().cloned());
                if !self.fits(&new_below.join(" "), setting) {
                    break;
                }

                let new_above = &above.words[..above.words.len() - 1];
                let current = self.unused_width_sq(&above.words, setting)
                    + self.unused_width_sq(&below.words, setting);
                let moved = self.unused_width_sq(new_above, setting)
                    + self.unused_width_sq(&new_below, setting);
                if moved >= current {
                    break;
                }

                below.words = new_below;
                above.words.pop();
            }
        }
    }

    /// Loosen tightened word spacing back towards the requested spacing in small
    /// steps, for as long as every word is still shown
    fn maximize_word_spacing(&self, setting: Setting) -> Setting {
        let WordSpacing::Exact(start) = setting.spacing else {
            return setting;
        };

        let natural = self.measure.natural_word_spacing(setting.size);
        let ceiling = self.space_width(self.word_spacing, setting.size);
        let step = natural * SPACING_STEP;
        if step <= Px::ZERO {
            return setting;
        }

        let mut accepted = setting;
        let mut steps = 1u32;
        loop {
            let width = start + step * steps as f64;
            let reached = width >= ceiling;
            let candidate = Setting {
                size: setting.size,
                spacing: if reached {
                    self.word_spacing
                } else {
                    WordSpacing::Exact(width)
                },
            };
            if !self.shows_everything(candidate) {
                break;
            }

            accepted = candidate;
            if reached {
                break;
            }
            steps += 1;
        }

        accepted
    }

    /// The longest prefix of `text` (in characters) that still fits once an
    /// ellipsis is appended
    fn trim_point(&self, text: &str, setting: Setting) -> usize {
        let chars: Vec<char> = text.chars().collect();
        (0..=chars.len())
            .rev()
            .find(|&keep| {
                let mut prefix: String = chars[..keep].iter().collect();
                prefix.push_str(ELLIPSIS);
                self.fits(&prefix, setting)
            })
            .unwrap_or(0)
    }

    fn ellipsize(&self, draft: Draft, setting: Setting) -> WrapResult {
        let last = draft.lines.len().saturating_sub(1);
        let truncated = !draft.unused.is_empty();

        let lines = draft
            .lines
            .into_iter()
            .enumerate()
            .map(|(n, line)| {
                let text = line.words.join(" ");
                let forced = line.overflow || (truncated && n == last);
                let trim = if forced || !self.fits(&text, setting) {
                    Some(self.trim_point(&text, setting))
                } else {
                    None
                };
                TextLine {
                    words: line.words,
                    trim,
                }
            })
            .collect();

        WrapResult {
            lines,
            unused_words: draft.unused,
            point_size: setting.size,
            word_spacing: setting.spacing,
        }
    }
}
