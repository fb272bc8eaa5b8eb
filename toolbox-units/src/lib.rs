//! Toolbox Units - Unit Conversion Engine
//!
//! Converts values between named units within a fixed catalog of
//! measurement categories, formats results for display, and keeps a
//! bounded history of performed conversions.
//!
//! Categories:
//! - Length (mm, cm, m, km, in, ft, yd, mi)
//! - Weight (mg, g, kg, oz, lb, st, t)
//! - Temperature (C, F, K, R)
//! - Area (mm², cm², m², km², in², ft², yd², ac, ha)
//! - Volume (ml, l, m³, gal, qt, pt, fl oz, etc.)
//! - Time (ns through yr, plus decimal hours and H:MM clock input)
//! - Data Storage (bit, byte, KB through PB)
//! - Speed (m/s, km/h, mph, ft/s, knot, c)
//! - Pressure (Pa, kPa, MPa, bar, atm, psi, torr)
//! - Energy (J, kJ, MJ, cal, kcal, Wh, kWh, BTU)

mod catalog;
mod clock;
mod engine;
mod format;
mod history;
mod unit;

pub use catalog::{Catalog, Category};
pub use engine::Engine;
pub use format::format_value;
pub use history::{History, HistoryEntry, HISTORY_CAP};
pub use unit::{ConvertError, Scale, Unit};
