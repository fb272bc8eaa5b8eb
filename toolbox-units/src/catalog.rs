//! The fixed catalog of measurement categories and their units
//!
//! Ten categories, defined once at construction. Iteration order is the
//! declaration order and is significant: the surrounding surface renders
//! category buttons and unit pickers in this order.

use crate::unit::{ConvertError, Scale, Unit};

/// A named grouping of mutually convertible units.
#[derive(Debug, Clone)]
pub struct Category {
    /// Identifier used for lookups (e.g. "length").
    pub id: &'static str,
    /// Display name (e.g. "Length").
    pub name: &'static str,
    units: Vec<Unit>,
}

impl Category {
    fn new(id: &'static str, name: &'static str, units: Vec<Unit>) -> Self {
        Category { id, name, units }
    }

    /// Units in declaration order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Look up a unit by identifier.
    pub fn unit(&self, unit_id: &str) -> Result<&Unit, ConvertError> {
        self.units
            .iter()
            .find(|u| u.id == unit_id)
            .ok_or_else(|| ConvertError::UnitNotFound {
                category: self.id.to_string(),
                unit: unit_id.to_string(),
            })
    }

    /// Whether this category accepts clock-formatted (`H:MM`) input.
    pub fn supports_clock(&self) -> bool {
        self.units
            .iter()
            .any(|u| matches!(u.scale, Scale::ClockDuration))
    }
}

/// The read-only category/unit table.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            categories: vec![
                length(),
                weight(),
                temperature(),
                area(),
                volume(),
                time(),
                data(),
                speed(),
                pressure(),
                energy(),
            ],
        }
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by identifier.
    pub fn category(&self, category_id: &str) -> Result<&Category, ConvertError> {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| ConvertError::CategoryNotFound(category_id.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// Base unit: meter
fn length() -> Category {
    Category::new(
        "length",
        "Length",
        vec![
            Unit::linear("mm", "Millimeter", 0.001),
            Unit::linear("cm", "Centimeter", 0.01),
            Unit::linear("m", "Meter", 1.0),
            Unit::linear("km", "Kilometer", 1000.0),
            Unit::linear("in", "Inch", 0.0254),
            Unit::linear("ft", "Foot", 0.3048),
            Unit::linear("yd", "Yard", 0.9144),
            Unit::linear("mi", "Mile", 1609.344),
        ],
    )
}

// Base unit: kilogram
fn weight() -> Category {
    Category::new(
        "weight",
        "Weight",
        vec![
            Unit::linear("mg", "Milligram", 0.000001),
            Unit::linear("g", "Gram", 0.001),
            Unit::linear("kg", "Kilogram", 1.0),
            Unit::linear("oz", "Ounce", 0.0283495),
            Unit::linear("lb", "Pound", 0.453592),
            Unit::linear("st", "Stone", 6.35029),
            Unit::linear("t", "Metric Ton", 1000.0),
        ],
    )
}

// Base unit: degree Celsius. Fahrenheit and Rankine are not simple
// Celsius multiples, hence the affine scales.
fn temperature() -> Category {
    Category::new(
        "temperature",
        "Temperature",
        vec![
            Unit::affine("c", "Celsius", 1.0, 0.0),
            Unit::affine("f", "Fahrenheit", 5.0 / 9.0, -32.0),
            Unit::affine("k", "Kelvin", 1.0, -273.15),
            Unit::affine("r", "Rankine", 5.0 / 9.0, -491.67),
        ],
    )
}

// Base unit: square meter
fn area() -> Category {
    Category::new(
        "area",
        "Area",
        vec![
            Unit::linear("mm²", "Square Millimeter", 0.000001),
            Unit::linear("cm²", "Square Centimeter", 0.0001),
            Unit::linear("m²", "Square Meter", 1.0),
            Unit::linear("km²", "Square Kilometer", 1000000.0),
            Unit::linear("in²", "Square Inch", 0.00064516),
            Unit::linear("ft²", "Square Foot", 0.092903),
            Unit::linear("yd²", "Square Yard", 0.836127),
            Unit::linear("ac", "Acre", 4046.86),
            Unit::linear("ha", "Hectare", 10000.0),
        ],
    )
}

// Base unit: cubic meter
fn volume() -> Category {
    Category::new(
        "volume",
        "Volume",
        vec![
            Unit::linear("ml", "Milliliter", 0.000001),
            Unit::linear("l", "Liter", 0.001),
            Unit::linear("m³", "Cubic Meter", 1.0),
            Unit::linear("cm³", "Cubic Centimeter", 0.000001),
            Unit::linear("in³", "Cubic Inch", 0.0000163871),
            Unit::linear("ft³", "Cubic Foot", 0.0283168),
            Unit::linear("gal", "US Gallon", 0.00378541),
            Unit::linear("qt", "US Quart", 0.000946353),
            Unit::linear("pt", "US Pint", 0.000473176),
            Unit::linear("fl oz", "US Fluid Ounce", 0.0000295735),
        ],
    )
}

// Base unit: second. Factors are seconds per unit; the engine treats the
// clock form (`H:MM`) and decimal hours specially.
fn time() -> Category {
    Category::new(
        "time",
        "Time",
        vec![
            Unit::linear("ns", "Nanosecond", 0.000000001),
            Unit::linear("μs", "Microsecond", 0.000001),
            Unit::linear("ms", "Millisecond", 0.001),
            Unit::linear("s", "Second", 1.0),
            Unit::linear("min", "Minute", 60.0),
            Unit::linear("h", "Hour", 3600.0),
            Unit::linear("d", "Day", 86400.0),
            Unit::linear("wk", "Week", 604800.0),
            Unit::linear("mo", "Month", 2629746.0),
            Unit::linear("yr", "Year", 31556952.0),
            Unit::clock("decimal", "Decimal Hours"),
        ],
    )
}

// Base unit: byte
fn data() -> Category {
    Category::new(
        "data",
        "Data Storage",
        vec![
            Unit::linear("b", "Bit", 0.125),
            Unit::linear("B", "Byte", 1.0),
            Unit::linear("KB", "Kilobyte", 1024.0),
            Unit::linear("MB", "Megabyte", 1048576.0),
            Unit::linear("GB", "Gigabyte", 1073741824.0),
            Unit::linear("TB", "Terabyte", 1099511627776.0),
            Unit::linear("PB", "Petabyte", 1125899906842624.0),
        ],
    )
}

// Base unit: meters per second
fn speed() -> Category {
    Category::new(
        "speed",
        "Speed",
        vec![
            Unit::linear("m/s", "Meters per Second", 1.0),
            Unit::linear("km/h", "Kilometers per Hour", 0.277778),
            Unit::linear("mph", "Miles per Hour", 0.44704),
            Unit::linear("ft/s", "Feet per Second", 0.3048),
            Unit::linear("knot", "Knot", 0.514444),
            Unit::linear("c", "Speed of Light", 299792458.0),
        ],
    )
}

// Base unit: pascal
fn pressure() -> Category {
    Category::new(
        "pressure",
        "Pressure",
        vec![
            Unit::linear("Pa", "Pascal", 1.0),
            Unit::linear("kPa", "Kilopascal", 1000.0),
            Unit::linear("MPa", "Megapascal", 1000000.0),
            Unit::linear("bar", "Bar", 100000.0),
            Unit::linear("atm", "Atmosphere", 101325.0),
            Unit::linear("psi", "Pound per Square Inch", 6894.76),
            Unit::linear("torr", "Torr", 133.322),
        ],
    )
}

// Base unit: joule
fn energy() -> Category {
    Category::new(
        "energy",
        "Energy",
        vec![
            Unit::linear("J", "Joule", 1.0),
            Unit::linear("kJ", "Kilojoule", 1000.0),
            Unit::linear("MJ", "Megajoule", 1000000.0),
            Unit::linear("cal", "Calorie", 4.184),
            Unit::linear("kcal", "Kilocalorie", 4184.0),
            Unit::linear("Wh", "Watt Hour", 3600.0),
            Unit::linear("kWh", "Kilowatt Hour", 3600000.0),
            Unit::linear("BTU", "British Thermal Unit", 1055.06),
        ],
    )
}
