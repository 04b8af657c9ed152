//! Positional label templates.
//!
//! A template addresses four slots: the series key (`1`), row key (`2`),
//! column key (`3`) and the cell value (`4`). Specifiers use a
//! `printf`-style subset: `%[index$][width][.precision](s|f)` plus `%%` for
//! a literal percent sign. Specifiers without an explicit `index$` consume
//! the four slots in order; explicit indices may repeat and reorder slots.
//! The `f` conversion applies only to the value slot and defaults to six
//! decimal places; `width` pads on the left, `.precision` on `s` truncates.
//!
//! A sparse cell (absent value) renders as the literal `null` so formatting
//! stays total and deterministic for any dataset.

use std::hash::{Hash, Hasher};
use std::iter::Peekable;
use std::str::Chars;

use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// Sentinel rendered in place of an absent cell value.
const NO_VALUE: &str = "null";

/// Decimal places used by `f` when the template gives no precision.
const DEFAULT_DECIMAL_PRECISION: usize = 6;

/// A validated label template.
///
/// Parsing happens at construction; a `LabelTemplate` that exists always
/// formats successfully. Deserialization re-validates through
/// [`TryFrom<String>`], so a persisted template cannot smuggle in a
/// malformed specifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LabelTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl LabelTemplate {
    pub fn new(template: impl Into<String>) -> OverlayResult<Self> {
        let raw = template.into();
        let segments = parse(&raw)?;
        Ok(Self { raw, segments })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Renders the template against the four slot inputs.
    #[must_use]
    pub fn format(
        &self,
        series_key: &str,
        row_key: &str,
        column_key: &str,
        value: Option<f64>,
    ) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Key {
                    slot,
                    width,
                    precision,
                } => {
                    let key = match slot {
                        KeySlot::Series => series_key,
                        KeySlot::Row => row_key,
                        KeySlot::Column => column_key,
                    };
                    push_text(&mut out, key, *width, *precision);
                }
                Segment::ValueText { width, precision } => match value {
                    Some(v) => push_text(&mut out, &v.to_string(), *width, *precision),
                    None => push_text(&mut out, NO_VALUE, *width, *precision),
                },
                Segment::ValueDecimal { width, precision } => {
                    let text = match value {
                        Some(v) => {
                            let precision = precision.unwrap_or(DEFAULT_DECIMAL_PRECISION);
                            format!("{v:.precision$}")
                        }
                        None => NO_VALUE.to_owned(),
                    };
                    push_padded(&mut out, &text, *width);
                }
            }
        }
        out
    }
}

impl TryFrom<String> for LabelTemplate {
    type Error = OverlayError;

    fn try_from(raw: String) -> OverlayResult<Self> {
        Self::new(raw)
    }
}

impl From<LabelTemplate> for String {
    fn from(template: LabelTemplate) -> Self {
        template.raw
    }
}

// Equality and hashing go through the raw text only; the segments are a
// pure function of it.
impl PartialEq for LabelTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for LabelTemplate {}

impl Hash for LabelTemplate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeySlot {
    Series,
    Row,
    Column,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Key {
        slot: KeySlot,
        width: Option<usize>,
        precision: Option<usize>,
    },
    ValueText {
        width: Option<usize>,
        precision: Option<usize>,
    },
    ValueDecimal {
        width: Option<usize>,
        precision: Option<usize>,
    },
}

fn parse(raw: &str) -> OverlayResult<Vec<Segment>> {
    if raw.is_empty() {
        return Err(OverlayError::InvalidTemplate(
            "template must not be empty".to_owned(),
        ));
    }

    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = raw.chars().peekable();
    let mut next_ordinary = 1usize;

    while let Some(c) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            literal.push('%');
            continue;
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }

        let leading = read_digits(&mut chars);
        let (index, width) = if chars.peek() == Some(&'$') {
            chars.next();
            let Some(index) = leading else {
                return Err(OverlayError::InvalidTemplate(
                    "`$` must be preceded by an argument index".to_owned(),
                ));
            };
            (Some(index), read_digits(&mut chars))
        } else {
            (None, leading)
        };

        let precision = if chars.peek() == Some(&'.') {
            chars.next();
            match read_digits(&mut chars) {
                Some(p) => Some(p),
                None => {
                    return Err(OverlayError::InvalidTemplate(
                        "`.` must be followed by a precision".to_owned(),
                    ));
                }
            }
        } else {
            None
        };

        let Some(conversion) = chars.next() else {
            return Err(OverlayError::InvalidTemplate(
                "unterminated format specifier".to_owned(),
            ));
        };

        let slot = match index {
            Some(explicit) => {
                if !(1..=4).contains(&explicit) {
                    return Err(OverlayError::InvalidTemplate(format!(
                        "argument index {explicit} is out of range 1..=4"
                    )));
                }
                explicit
            }
            None => {
                let slot = next_ordinary;
                next_ordinary += 1;
                if slot > 4 {
                    return Err(OverlayError::InvalidTemplate(
                        "template consumes more than four arguments".to_owned(),
                    ));
                }
                slot
            }
        };

        let segment = match (conversion, slot) {
            ('s', 1) => Segment::Key {
                slot: KeySlot::Series,
                width,
                precision,
            },
            ('s', 2) => Segment::Key {
                slot: KeySlot::Row,
                width,
                precision,
            },
            ('s', 3) => Segment::Key {
                slot: KeySlot::Column,
                width,
                precision,
            },
            ('s', _) => Segment::ValueText { width, precision },
            ('f', 4) => Segment::ValueDecimal { width, precision },
            ('f', _) => {
                return Err(OverlayError::InvalidTemplate(
                    "`f` conversion only applies to the value argument (index 4)".to_owned(),
                ));
            }
            (other, _) => {
                return Err(OverlayError::InvalidTemplate(format!(
                    "unsupported conversion `{other}`"
                )));
            }
        };
        segments.push(segment);
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn read_digits(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(c) = chars.peek() {
        let Some(digit) = c.to_digit(10) else {
            break;
        };
        chars.next();
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
    }
    value
}

fn push_text(out: &mut String, text: &str, width: Option<usize>, precision: Option<usize>) {
    match precision {
        Some(max) if text.chars().count() > max => {
            let truncated: String = text.chars().take(max).collect();
            push_padded(out, &truncated, width);
        }
        _ => push_padded(out, text, width),
    }
}

fn push_padded(out: &mut String, text: &str, width: Option<usize>) {
    if let Some(width) = width {
        for _ in text.chars().count()..width {
            out.push(' ');
        }
    }
    out.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::LabelTemplate;

    fn template(raw: &str) -> LabelTemplate {
        LabelTemplate::new(raw).expect("template parses")
    }

    #[test]
    fn value_only_template_controls_decimal_places() {
        let t = template("%4$.2f");
        assert_eq!(t.format("S", "R", "C", Some(3.14159)), "3.14");
    }

    #[test]
    fn explicit_indices_reorder_and_skip_slots() {
        let t = template("%1$s, %3$s = %4$.3f");
        assert_eq!(
            t.format("Chrome", "Chrome", "Jan-12", Some(0.284)),
            "Chrome, Jan-12 = 0.284"
        );
    }

    #[test]
    fn ordinary_specifiers_consume_slots_in_order() {
        let t = template("%s, %s, %s = %4$.3f");
        assert_eq!(
            t.format("Safari", "Desktop", "Feb-12", Some(0.041)),
            "Safari, Desktop, Feb-12 = 0.041"
        );
    }

    #[test]
    fn absent_value_renders_null_sentinel() {
        assert_eq!(template("%4$.2f").format("S", "R", "C", None), "null");
        assert_eq!(template("%4$s").format("S", "R", "C", None), "null");
    }

    #[test]
    fn decimal_precision_defaults_to_six() {
        assert_eq!(template("%4$f").format("S", "R", "C", Some(0.5)), "0.500000");
    }

    #[test]
    fn width_pads_on_the_left() {
        assert_eq!(template("%1$6s").format("ab", "R", "C", None), "    ab");
        assert_eq!(template("%4$8.2f").format("S", "R", "C", Some(1.5)), "    1.50");
    }

    #[test]
    fn precision_truncates_string_slots() {
        assert_eq!(template("%1$.3s").format("Firefox", "R", "C", None), "Fir");
    }

    #[test]
    fn percent_escape_is_a_literal() {
        let t = template("%4$.1f%%");
        assert_eq!(t.format("S", "R", "C", Some(28.4)), "28.4%");
    }

    #[test]
    fn rejects_malformed_templates() {
        for raw in [
            "",
            "%q",
            "%1$f",
            "%5$s",
            "%0$s",
            "%$s",
            "%4$.f",
            "value: %",
            "%s %s %s %s %s",
        ] {
            assert!(LabelTemplate::new(raw).is_err(), "template {raw:?} should be rejected");
        }
    }

    #[test]
    fn raw_text_round_trips_and_drives_equality() {
        let a = template("%4$.2f");
        let b = template("%4$.2f");
        let c = template("%4$.3f");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str(), "%4$.2f");
    }
}
