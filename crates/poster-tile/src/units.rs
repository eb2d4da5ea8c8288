//! Box and margin specifications
//!
//! A box is written as `[multiplier][offset]unit`, e.g. `A4`, `3x3letter`,
//! `10x25cm` or `200x200+10,10p`. Units are media names or linear units and
//! may be abbreviated to any unique prefix.

use crate::types::{Margin, PageBox, Result, TileError};
use log::debug;

/// A named size, in points along x and y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub name: &'static str,
    pub x: f64,
    pub y: f64,
}

const fn unit(name: &'static str, x: f64, y: f64) -> Unit {
    Unit { name, x, y }
}

/// Media sizes in points, followed by the linear units as fall-back.
/// Order matters: prefixes are resolved by scanning top to bottom.
pub static UNITS: &[Unit] = &[
    unit("Letter", 612.0, 792.0),
    unit("Legal", 612.0, 1008.0),
    unit("Tabloid", 792.0, 1224.0),
    unit("Ledger", 792.0, 1224.0),
    unit("Executive", 540.0, 720.0),
    unit("Monarch", 279.0, 540.0),
    unit("Statement", 396.0, 612.0),
    unit("Folio", 612.0, 936.0),
    unit("Quarto", 610.0, 780.0),
    unit("C5", 459.0, 649.0),
    unit("B4", 729.0, 1032.0),
    unit("B5", 516.0, 729.0),
    unit("Dl", 312.0, 624.0),
    unit("A0", 2380.0, 3368.0),
    unit("A1", 1684.0, 2380.0),
    unit("A2", 1190.0, 1684.0),
    unit("A3", 842.0, 1190.0),
    unit("A4", 595.0, 842.0),
    unit("A5", 420.0, 595.0),
    unit("A6", 297.0, 421.0),
    unit("p", 1.0, 1.0),
    unit("i", 72.0, 72.0),
    unit("ft", 864.0, 864.0),
    unit("mm", 2.83465, 2.83465),
    unit("cm", 28.3465, 28.3465),
    unit("m", 2834.65, 2834.65),
];

/// Comma separated list of all unit names, for error messages
pub fn unit_names() -> String {
    UNITS.iter().map(|u| u.name).collect::<Vec<_>>().join(", ")
}

/// Resolve a (possibly abbreviated) unit name.
///
/// An exact match wins even if the name is also a prefix of other entries;
/// otherwise the prefix has to select exactly one entry.
pub fn lookup_unit(name: &str, spec: &str) -> Result<&'static Unit> {
    if name.is_empty() {
        return Err(TileError::UnknownUnit {
            spec: spec.to_string(),
            available: unit_names(),
        });
    }

    let mut candidates = Vec::new();
    for unit in UNITS {
        if !starts_with_ignore_case(unit.name, name) {
            continue;
        }
        if unit.name.len() == name.len() {
            return Ok(unit);
        }
        candidates.push(unit);
    }

    match candidates.as_slice() {
        [] => Err(TileError::UnknownUnit {
            spec: spec.to_string(),
            available: unit_names(),
        }),
        [unit] => Ok(*unit),
        many => Err(TileError::AmbiguousUnit {
            spec: spec.to_string(),
            unit: name.to_string(),
            candidates: many.iter().map(|u| u.name).collect::<Vec<_>>().join(", "),
        }),
    }
}

fn starts_with_ignore_case(full: &str, prefix: &str) -> bool {
    full.len() >= prefix.len()
        && full
            .bytes()
            .zip(prefix.bytes())
            .all(|(a, b)| a.eq_ignore_ascii_case(&b))
}

/// Convert a textual box specification into a box in points.
pub fn parse_box(spec: &str) -> Result<PageBox> {
    let invalid = || TileError::InvalidBox {
        spec: spec.to_string(),
    };

    let mut rest = spec;
    let (mut mx, mut my) = (1.0, 1.0);
    let (mut ox, mut oy) = (0.0, 0.0);

    // multiplier: number x number | number * number
    if rest.starts_with(|c: char| c.is_ascii_digit()) {
        let (x, after) = take_number(rest).ok_or_else(invalid)?;
        let after = after
            .strip_prefix('x')
            .or_else(|| after.strip_prefix('*'))
            .ok_or_else(invalid)?;
        let (y, after) = take_number(after).ok_or_else(invalid)?;
        (mx, my) = (x, y);
        rest = after;
    }

    // offset: + number , number
    if let Some(after) = rest.strip_prefix('+') {
        let (x, after) = take_number(after).ok_or_else(invalid)?;
        let after = after.strip_prefix(',').ok_or_else(invalid)?;
        let (y, after) = take_number(after).ok_or_else(invalid)?;
        (ox, oy) = (x, y);
        rest = after;
    }

    let unit = lookup_unit(rest, spec)?;

    let left = ox * unit.x;
    let bottom = oy * unit.y;
    let pagebox = PageBox::new(left, bottom, left + mx * unit.x, bottom + my * unit.y);

    debug!(
        "Box_convert: '{}' into [{},{},{},{}]",
        spec, pagebox.left, pagebox.bottom, pagebox.right, pagebox.top
    );

    if pagebox.left < 0.0
        || pagebox.bottom < 0.0
        || pagebox.right < pagebox.left
        || pagebox.top < pagebox.bottom
    {
        return Err(TileError::NegativeBox {
            spec: spec.to_string(),
        });
    }

    Ok(pagebox)
}

/// Convert a margin specification, relative to the given media.
///
/// Accepted forms are a plain `0`, a percentage of the media size (`5%`),
/// or any box specification whose width and height are used.
pub fn parse_margin(spec: &str, media: &PageBox) -> Result<Margin> {
    let margin = if matches!(take_number(spec), Some((v, "")) if v == 0.0) {
        Margin::zero()
    } else if let Some(percent) = spec.strip_suffix('%') {
        let value = match take_number(percent) {
            Some((v, "")) => v,
            _ => {
                return Err(TileError::InvalidMargin {
                    spec: spec.to_string(),
                });
            }
        };
        Margin::new(
            0.01 * value * media.width(),
            0.01 * value * media.height(),
        )
    } else {
        let pagebox = parse_box(spec)?;
        Margin::new(pagebox.width(), pagebox.height())
    };

    for (value, dimension) in [(margin.x, media.width()), (margin.y, media.height())] {
        if value < 0.0 || 2.0 * value >= dimension {
            return Err(TileError::MarginOutOfRange {
                spec: spec.to_string(),
                value,
                limit: dimension / 2.0,
            });
        }
    }

    Ok(margin)
}

/// Split a leading decimal number off `input`.
///
/// Accepts an optional sign, digits with an optional fraction and an
/// exponent only when digits follow it, so `2x2executive` still reads as
/// the number 2 followed by `x2executive`.
pub(crate) fn take_number(input: &str) -> Option<(f64, &str)> {
    let bytes = input.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let value = input[..end].parse::<f64>().ok()?;
    Some((value, &input[end..]))
}
