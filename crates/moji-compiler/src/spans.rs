//! Span compaction: a set of units becomes one character class.
//!
//! `{0x31, 0x32, 0x33, 0x35}` collapses to the spans `[31..=33, 35]` and renders as `[1-35]`.

use crate::Encoding;

/// Closed range of consecutive units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn single(unit: u32) -> Self {
        Self {
            start: unit,
            end: unit,
        }
    }

    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    fn push_to(&self, out: &mut String, encoding: Encoding) {
        encoding.push_unit(out, self.start);
        match self.len() {
            1 => {}
            // a range operator buys nothing for two members
            2 => encoding.push_unit(out, self.end),
            _ => {
                out.push('-');
                encoding.push_unit(out, self.end);
            }
        }
    }
}

/// Merge units into maximal runs, sorted ascending. Duplicates are ignored.
pub fn find_contiguous_spans(units: &[u32]) -> Vec<Span> {
    let mut sorted = units.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut spans: Vec<Span> = Vec::new();
    for unit in sorted {
        match spans.last_mut() {
            Some(last) if last.end + 1 == unit => last.end = unit,
            _ => spans.push(Span::single(unit)),
        }
    }
    spans
}

/// Render spans as a class. A lone unit is emitted bare, without brackets.
pub fn render_spans(spans: &[Span], encoding: Encoding) -> String {
    let mut out = String::new();
    match spans {
        [] => {}
        [only] if only.is_single() => encoding.push_unit(&mut out, only.start),
        _ => {
            out.push('[');
            for span in spans {
                span.push_to(&mut out, encoding);
            }
            out.push(']');
        }
    }
    out
}

/// `render_spans(find_contiguous_spans(units))`.
pub fn compact(units: &[u32], encoding: Encoding) -> String {
    render_spans(&find_contiguous_spans(units), encoding)
}
