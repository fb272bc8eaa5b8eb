//! Unit representation with scale strategies and conversion errors

use thiserror::Error;

/// How a unit maps onto its category's base representation.
///
/// Every category has exactly one base representation; a value converts
/// through it in two steps (to base, then from base), so adding a unit
/// costs one scale entry rather than one per unit pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Purely multiplicative: `base = value * factor`.
    Linear(f64),
    /// Affine mapping, used only by temperature units:
    /// `base = (value + offset) * factor`.
    Affine { factor: f64, offset: f64 },
    /// Decimal hours in the time category. Numerically a fixed 3600 s/h,
    /// kept as its own variant so the engine can dispatch clock rendering.
    ClockDuration,
}

impl Scale {
    /// Convert a value in this unit to the category base.
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            Scale::Linear(factor) => value * factor,
            Scale::Affine { factor, offset } => (value + offset) * factor,
            Scale::ClockDuration => value * 3600.0,
        }
    }

    /// Convert a value in the category base to this unit.
    pub fn from_base(&self, base: f64) -> f64 {
        match *self {
            Scale::Linear(factor) => base / factor,
            Scale::Affine { factor, offset } => base / factor - offset,
            Scale::ClockDuration => base / 3600.0,
        }
    }
}

/// A named unit within a category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// Identifier, unique within its category (e.g. "km", "fl oz").
    pub id: &'static str,
    /// Display name (e.g. "Kilometer").
    pub name: &'static str,
    /// Mapping to the category base.
    pub scale: Scale,
}

impl Unit {
    pub const fn linear(id: &'static str, name: &'static str, factor: f64) -> Self {
        Unit {
            id,
            name,
            scale: Scale::Linear(factor),
        }
    }

    pub const fn affine(id: &'static str, name: &'static str, factor: f64, offset: f64) -> Self {
        Unit {
            id,
            name,
            scale: Scale::Affine { factor, offset },
        }
    }

    pub const fn clock(id: &'static str, name: &'static str) -> Self {
        Unit {
            id,
            name,
            scale: Scale::ClockDuration,
        }
    }
}

/// Errors raised by catalog lookups.
///
/// These are the only hard failures in the engine: an operation naming an
/// unknown category or unit aborts with no partial output and no history
/// entry. Unparseable input is not an error (see `Engine::convert`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("unknown category: {0}")]
    CategoryNotFound(String),

    #[error("unknown unit '{unit}' in category '{category}'")]
    UnitNotFound { category: String, unit: String },
}
