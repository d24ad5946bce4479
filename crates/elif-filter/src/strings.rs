//! Encoding-aware string measurement, slicing and padding
//!
//! All positions and widths are expressed in logical characters: Unicode code
//! points in [`EncodingMode::Multibyte`], raw bytes in [`EncodingMode::Byte`].

use crate::config::{EncodingMode, FilterConfig};

/// Where padding is placed relative to the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadSide {
    Left,
    #[default]
    Right,
    /// Split the padding, giving the odd character to the right side
    Both,
}

/// Length, substring and pad primitives bound to one encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringMetrics {
    mode: EncodingMode,
}

impl StringMetrics {
    pub fn new(mode: EncodingMode) -> Self {
        Self { mode }
    }

    /// Metrics for the process-wide encoding mode
    pub fn global() -> Self {
        Self::new(FilterConfig::global().encoding)
    }

    pub fn multibyte() -> Self {
        Self::new(EncodingMode::Multibyte)
    }

    pub fn byte() -> Self {
        Self::new(EncodingMode::Byte)
    }

    pub fn mode(&self) -> EncodingMode {
        self.mode
    }

    /// Count the logical characters in `s`
    pub fn length(&self, s: &str) -> usize {
        match self.mode {
            EncodingMode::Multibyte => s.chars().count(),
            EncodingMode::Byte => s.len(),
        }
    }

    /// Extract a slice of `s`.
    ///
    /// A negative `start` counts back from the end. `length` of `None` runs to
    /// the end of the string; a negative `length` stops that many characters
    /// before the end. Out-of-range bounds are clamped, never rejected.
    pub fn substring(&self, s: &str, start: isize, length: Option<isize>) -> String {
        let (from, to) = resolve_range(self.length(s), start, length);
        if from >= to {
            return String::new();
        }

        match self.mode {
            EncodingMode::Multibyte => {
                let begin = char_to_byte(s, from);
                let end = char_to_byte(s, to);
                s[begin..end].to_string()
            }
            // bounds inside a multibyte sequence shrink the slice to whole characters
            EncodingMode::Byte => {
                let begin = ceil_char_boundary(s, from);
                let end = floor_char_boundary(s, to);
                if begin >= end {
                    return String::new();
                }
                s[begin..end].to_string()
            }
        }
    }

    /// Keep at most `max` characters from the start of `s`
    pub fn truncate(&self, s: &str, max: usize) -> String {
        if self.length(s) <= max {
            return s.to_string();
        }
        self.substring(s, 0, Some(to_isize(max)))
    }

    /// Widen `input` to exactly `target_length` characters with `pad_string`.
    ///
    /// The input is returned unchanged when it is already long enough or the
    /// pad string is empty; padding never truncates.
    pub fn pad(&self, input: &str, target_length: usize, pad_string: &str, side: PadSide) -> String {
        let input_length = self.length(input);
        let pad_length = self.length(pad_string);
        if target_length <= input_length || pad_length == 0 {
            return input.to_string();
        }

        let deficit = target_length - input_length;
        match side {
            PadSide::Right => {
                let fill = self.fill(pad_string, pad_length, deficit);
                format!("{}{}", input, fill)
            }
            PadSide::Left => {
                let fill = self.fill(pad_string, pad_length, deficit);
                format!("{}{}", fill, input)
            }
            PadSide::Both => {
                let left = deficit / 2;
                let right = deficit - left;
                format!(
                    "{}{}{}",
                    self.fill(pad_string, pad_length, left),
                    input,
                    self.fill(pad_string, pad_length, right)
                )
            }
        }
    }

    /// Repeat the pad string just enough to cover `width`, then cut it to size.
    ///
    /// In byte mode a pad character split by the cut is dropped and the bytes
    /// it would have covered are filled with spaces, keeping the width exact.
    fn fill(&self, pad_string: &str, pad_length: usize, width: usize) -> String {
        if width == 0 {
            return String::new();
        }
        let repeat = width.div_ceil(pad_length);
        let mut fill = self.substring(&pad_string.repeat(repeat), 0, Some(to_isize(width)));
        let shortfall = width - self.length(&fill);
        fill.push_str(&" ".repeat(shortfall));
        fill
    }
}

impl Default for StringMetrics {
    fn default() -> Self {
        Self::global()
    }
}

fn to_isize(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

/// Clamp a start/length pair to `[0, total]`, returning `(from, to)`
fn resolve_range(total: usize, start: isize, length: Option<isize>) -> (usize, usize) {
    let total = to_isize(total);
    let from = if start < 0 {
        total.saturating_add(start).max(0)
    } else {
        start.min(total)
    };
    let to = match length {
        None => total,
        Some(len) if len >= 0 => from.saturating_add(len).min(total),
        Some(len) => total.saturating_add(len).max(from),
    };
    (from as usize, to as usize)
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index += 1;
    }
    index
}

fn char_to_byte(s: &str, index: usize) -> usize {
    s.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}
