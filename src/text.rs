//! Role-tagged help text and visible-width word wrapping.
//!
//! A help entry is composed as a sequence of [`Segment`]s, each optionally
//! tagged with a semantic color role. Wrapping operates on this sequence and
//! counts visible characters only; styles are applied after wrapping, so
//! color control sequences can never influence layout decisions.

use std::collections::VecDeque;

/// Semantic color roles. The closed set the palette maps onto.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Role {
    Keyword,
    Choice,
    Default,
    Metavar,
}

/// A run of text with at most one color role.
#[derive(PartialEq, Clone, Debug)]
pub struct Segment {
    pub text: String,
    pub role: Option<Role>,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: None,
        }
    }

    pub fn tagged(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role: Some(role),
        }
    }

    /// Visible width in columns.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Total visible width of a segment sequence.
pub fn visible_width(segments: &[Segment]) -> usize {
    segments.iter().map(Segment::width).sum()
}

/// One space-free run of text. A word may span several segments, e.g. the
/// brace, a choice and a separator of `{a/b}` wrap as a single unit.
struct Word {
    parts: Vec<Segment>,
}

impl Word {
    fn width(&self) -> usize {
        visible_width(&self.parts)
    }

    /// Splits at `columns` visible characters, cutting the straddling
    /// segment in two while keeping its role on both halves.
    fn split_at(self, columns: usize) -> (Word, Word) {
        let mut head = Vec::new();
        let mut tail = Vec::new();
        let mut remaining = columns;

        for part in self.parts {
            if remaining == 0 {
                tail.push(part);
                continue;
            }
            let part_width = part.width();
            if part_width <= remaining {
                remaining -= part_width;
                head.push(part);
            } else {
                let head_text: String = part.text.chars().take(remaining).collect();
                let tail_text: String = part.text.chars().skip(remaining).collect();
                head.push(Segment {
                    text: head_text,
                    role: part.role,
                });
                tail.push(Segment {
                    text: tail_text,
                    role: part.role,
                });
                remaining = 0;
            }
        }

        (Word { parts: head }, Word { parts: tail })
    }
}

/// Splits a segment sequence into words, each paired with the width of the
/// gap preceding it. Gaps collapse at line breaks and are preserved inside a
/// line, so deliberate multi-column padding survives wrapping.
fn tokenize(segments: &[Segment]) -> VecDeque<(usize, Word)> {
    let mut words: VecDeque<(usize, Word)> = VecDeque::new();
    let mut pending_gap = 0usize;
    let mut parts: Vec<Segment> = Vec::new();

    for segment in segments {
        let mut run = String::new();
        for ch in segment.text.chars() {
            if ch == ' ' {
                if !run.is_empty() {
                    parts.push(Segment {
                        text: std::mem::take(&mut run),
                        role: segment.role,
                    });
                }
                if !parts.is_empty() {
                    words.push_back((
                        pending_gap,
                        Word {
                            parts: std::mem::take(&mut parts),
                        },
                    ));
                    pending_gap = 0;
                }
                pending_gap += 1;
            } else {
                run.push(ch);
            }
        }
        if !run.is_empty() {
            parts.push(Segment {
                text: run,
                role: segment.role,
            });
        }
    }
    if !parts.is_empty() {
        words.push_back((pending_gap, Word { parts }));
    }

    words
}

/// Greedy word-wrap of `segments` to `width` visible columns.
///
/// The first line starts at column zero; continuation lines are prefixed
/// with `indent` spaces. A word wider than a whole line is broken at the
/// width boundary. The indent is clamped so every line keeps at least one
/// content column, which guarantees termination for any input.
pub fn wrap(segments: &[Segment], width: usize, indent: usize) -> Vec<Vec<Segment>> {
    let width = width.max(1);
    let indent = indent.min(width - 1);

    let mut queue = tokenize(segments);
    let mut lines: Vec<Vec<Segment>> = Vec::new();
    let mut line: Vec<Segment> = Vec::new();
    let mut used = 0usize;
    let mut has_content = false;

    while let Some((gap, word)) = queue.pop_front() {
        let gap = if has_content { gap } else { 0 };
        let word_width = word.width();

        if has_content && used + gap + word_width > width {
            // The word moves down whole; the gap before it disappears.
            lines.push(std::mem::take(&mut line));
            if indent > 0 {
                line.push(Segment::plain(" ".repeat(indent)));
            }
            used = indent;
            has_content = false;
            queue.push_front((0, word));
            continue;
        }

        if gap > 0 {
            line.push(Segment::plain(" ".repeat(gap)));
            used += gap;
        }

        if word_width <= width - used {
            line.extend(word.parts);
            used += word_width;
            has_content = true;
        } else {
            // Wider than a whole line: hard break at the width boundary.
            let (head, tail) = word.split_at(width - used);
            line.extend(head.parts);
            lines.push(std::mem::take(&mut line));
            if indent > 0 {
                line.push(Segment::plain(" ".repeat(indent)));
            }
            used = indent;
            has_content = false;
            queue.push_front((0, tail));
        }
    }

    if has_content || lines.is_empty() {
        lines.push(line);
    }

    lines
}
