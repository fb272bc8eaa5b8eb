//! The conversion engine
//!
//! Owns the catalog, the active category, the last rendered result, and
//! the bounded conversion history. Every operation is synchronous and runs
//! to completion; there is no I/O and no shared state beyond this struct.

use chrono::Utc;

use crate::catalog::{Catalog, Category};
use crate::clock::{parse_clock, render_clock};
use crate::format::format_value;
use crate::history::{History, HistoryEntry};
use crate::unit::{ConvertError, Scale, Unit};

/// Unit conversion engine.
///
/// Construct once and pass by reference to callers; there is no ambient
/// global instance.
#[derive(Debug)]
pub struct Engine {
    catalog: Catalog,
    active: &'static str,
    last_result: Option<String>,
    history: History,
}

impl Engine {
    /// A fresh engine with the default active category ("length") and an
    /// empty history.
    pub fn new() -> Self {
        Engine {
            catalog: Catalog::new(),
            active: "length",
            last_result: None,
            history: History::new(),
        }
    }

    /// Restore an engine around previously persisted history entries.
    pub fn with_history(entries: Vec<HistoryEntry>) -> Self {
        Engine {
            history: History::load(entries),
            ..Self::new()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Categories in declaration order, for rendering the category buttons.
    pub fn categories(&self) -> &[Category] {
        self.catalog.categories()
    }

    /// Units of a category in declaration order. Both the "from" and "to"
    /// pickers receive this same set.
    pub fn units(&self, category_id: &str) -> Result<&[Unit], ConvertError> {
        Ok(self.catalog.category(category_id)?.units())
    }

    /// Identifier of the currently active category.
    pub fn active_category(&self) -> &str {
        self.active
    }

    /// The most recently rendered result, if any conversion has happened
    /// since the last category switch.
    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// Switch the active category and discard the pending result.
    ///
    /// Unknown identifiers are a hard error rather than the original's
    /// silent no-op.
    pub fn switch_category(&mut self, category_id: &str) -> Result<(), ConvertError> {
        let id = self.catalog.category(category_id)?.id;
        self.active = id;
        self.last_result = None;
        Ok(())
    }

    /// Convert `raw_input` from one unit to another within a category.
    ///
    /// Returns the display string on success, after recording a history
    /// entry. Unknown category or unit identifiers abort with an error and
    /// record nothing. Unparseable input returns `Ok(None)` and leaves all
    /// state untouched, so a caller can keep its prior display.
    pub fn convert(
        &mut self,
        category_id: &str,
        from_id: &str,
        to_id: &str,
        raw_input: &str,
    ) -> Result<Option<String>, ConvertError> {
        let category = self.catalog.category(category_id)?;
        let from = category.unit(from_id)?;
        let to = category.unit(to_id)?;

        let input = raw_input.trim();
        let rendered = if category.supports_clock() {
            convert_time(from, to, input)
        } else {
            convert_scaled(from, to, input)
        };

        let Some(display) = rendered else {
            return Ok(None);
        };

        let entry = HistoryEntry {
            value: input.to_string(),
            from_unit: from.id.to_string(),
            to_unit: to.id.to_string(),
            category: category.name.to_string(),
            timestamp: Utc::now(),
        };
        self.history.record(entry);
        self.last_result = Some(display.clone());
        Ok(Some(display))
    }

    /// History entries, newest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// The generic path: normalize through the category base, denormalize to
/// the destination. Covers both linear and affine (temperature) scales.
fn convert_scaled(from: &Unit, to: &Unit, input: &str) -> Option<String> {
    let value: f64 = input.parse().ok()?;
    let base = from.scale.to_base(value);
    Some(format_value(to.scale.from_base(base)))
}

/// The time path: accepts clock-formatted input when the source unit is
/// the hour, and renders back to `HH:MM` when a clock duration targets it.
fn convert_time(from: &Unit, to: &Unit, input: &str) -> Option<String> {
    // Clock input is only meaningful with hours as the source unit.
    let clock = if from.id == "h" { parse_clock(input) } else { None };

    let base_hours = match clock {
        Some(hours) => hours,
        None => {
            let value: f64 = input.parse().ok()?;
            from.scale.to_base(value) / 3600.0
        }
    };

    let clock_source = clock.is_some() || matches!(from.scale, Scale::ClockDuration);
    if to.id == "h" && clock_source {
        return Some(render_clock(base_hours));
    }
    Some(format_value(to.scale.from_base(base_hours * 3600.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_conversion() {
        let mut engine = Engine::new();
        let result = engine.convert("length", "m", "km", "5000").unwrap();
        assert_eq!(result, Some("5.000000".to_string()));
    }

    #[test]
    fn test_linear_round_trip_within_tolerance() {
        let mut engine = Engine::new();
        let forward = engine.convert("weight", "kg", "lb", "2.5").unwrap().unwrap();
        let back = engine
            .convert("weight", "lb", "kg", &forward)
            .unwrap()
            .unwrap();
        let value: f64 = back.parse().unwrap();
        assert!((value - 2.5).abs() < 1e-4, "round trip gave {}", back);
    }

    #[test]
    fn test_all_linear_categories_round_trip() {
        let engine = Engine::new();
        for category in engine.categories() {
            if category.supports_clock() || category.id == "temperature" {
                continue;
            }
            for from in category.units() {
                for to in category.units() {
                    let base = from.scale.to_base(12.5);
                    let there = to.scale.from_base(base);
                    let back = from.scale.from_base(to.scale.to_base(there));
                    assert!(
                        (back - 12.5).abs() < 1e-9 * 12.5f64.abs().max(1.0),
                        "{}: {} -> {} gave {}",
                        category.id,
                        from.id,
                        to.id,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_temperature_freezing_and_boiling() {
        let mut engine = Engine::new();
        let freezing = engine.convert("temperature", "c", "f", "0").unwrap();
        assert_eq!(freezing, Some("32.000000".to_string()));

        let boiling = engine.convert("temperature", "c", "f", "100").unwrap();
        assert_eq!(boiling, Some("212.000000".to_string()));
    }

    #[test]
    fn test_temperature_fahrenheit_to_kelvin() {
        let mut engine = Engine::new();
        let result = engine.convert("temperature", "f", "k", "32").unwrap();
        assert_eq!(result, Some("273.150000".to_string()));
    }

    #[test]
    fn test_temperature_rankine() {
        let mut engine = Engine::new();
        let result = engine.convert("temperature", "c", "r", "0").unwrap();
        assert_eq!(result, Some("491.670000".to_string()));
    }

    #[test]
    fn test_clock_input_to_decimal_hours() {
        let mut engine = Engine::new();
        let result = engine.convert("time", "h", "decimal", "1:30").unwrap();
        assert_eq!(result, Some("1.500000".to_string()));
    }

    #[test]
    fn test_decimal_hours_to_clock() {
        let mut engine = Engine::new();
        let result = engine.convert("time", "decimal", "h", "1.5").unwrap();
        assert_eq!(result, Some("01:30".to_string()));
    }

    #[test]
    fn test_clock_input_rendered_back_as_clock() {
        let mut engine = Engine::new();
        let result = engine.convert("time", "h", "h", "7:42").unwrap();
        assert_eq!(result, Some("07:42".to_string()));
    }

    #[test]
    fn test_clock_input_to_minutes() {
        let mut engine = Engine::new();
        let result = engine.convert("time", "h", "min", "1:30").unwrap();
        assert_eq!(result, Some("90.000000".to_string()));
    }

    #[test]
    fn test_plain_time_conversion() {
        let mut engine = Engine::new();
        let result = engine.convert("time", "min", "s", "2").unwrap();
        assert_eq!(result, Some("120.000000".to_string()));
    }

    #[test]
    fn test_clock_ignored_for_non_hour_source() {
        // `1:30` from minutes is not clock input; it fails to parse as a
        // number and the operation no-ops.
        let mut engine = Engine::new();
        let result = engine.convert("time", "min", "s", "1:30").unwrap();
        assert_eq!(result, None);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_unparseable_input_is_a_quiet_no_op() {
        let mut engine = Engine::new();
        engine.convert("length", "m", "km", "5000").unwrap();
        let before = engine.last_result().map(str::to_string);

        let result = engine.convert("length", "m", "km", "not a number").unwrap();
        assert_eq!(result, None);
        assert_eq!(engine.last_result(), before.as_deref());
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_unknown_unit_is_an_error_and_records_nothing() {
        let mut engine = Engine::new();
        let err = engine.convert("length", "m", "cubit", "5").unwrap_err();
        assert!(matches!(err, ConvertError::UnitNotFound { .. }));
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let mut engine = Engine::new();
        let err = engine.convert("plasma", "m", "km", "5").unwrap_err();
        assert_eq!(err, ConvertError::CategoryNotFound("plasma".to_string()));
    }

    #[test]
    fn test_history_capped_at_fifty() {
        let mut engine = Engine::new();
        for i in 0..55 {
            engine
                .convert("length", "m", "km", &i.to_string())
                .unwrap();
        }

        assert_eq!(engine.history().len(), 50);
        assert_eq!(engine.history()[0].value, "54");
        assert_eq!(engine.history()[49].value, "5");
    }

    #[test]
    fn test_history_entry_contents() {
        let mut engine = Engine::new();
        engine.convert("temperature", "c", "f", "100").unwrap();

        let entry = &engine.history()[0];
        assert_eq!(entry.value, "100");
        assert_eq!(entry.from_unit, "c");
        assert_eq!(entry.to_unit, "f");
        assert_eq!(entry.category, "Temperature");
    }

    #[test]
    fn test_switch_category_resets_result() {
        let mut engine = Engine::new();
        engine.convert("length", "m", "km", "5000").unwrap();
        assert!(engine.last_result().is_some());

        engine.switch_category("weight").unwrap();
        assert_eq!(engine.active_category(), "weight");
        assert_eq!(engine.last_result(), None);
    }

    #[test]
    fn test_switch_to_unknown_category_fails() {
        let mut engine = Engine::new();
        let err = engine.switch_category("plasma").unwrap_err();
        assert_eq!(err, ConvertError::CategoryNotFound("plasma".to_string()));
        assert_eq!(engine.active_category(), "length");
    }

    #[test]
    fn test_default_active_category_is_length() {
        let engine = Engine::new();
        assert_eq!(engine.active_category(), "length");
    }

    #[test]
    fn test_clear_history() {
        let mut engine = Engine::new();
        engine.convert("length", "m", "km", "1").unwrap();
        engine.clear_history();
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_with_history_restores_entries() {
        let mut source = Engine::new();
        source.convert("length", "m", "ft", "3").unwrap();
        let persisted = source.history().to_vec();

        let restored = Engine::with_history(persisted);
        assert_eq!(restored.history().len(), 1);
        assert_eq!(restored.history()[0].value, "3");
    }

    #[test]
    fn test_data_storage_conversion() {
        let mut engine = Engine::new();
        let result = engine.convert("data", "MB", "KB", "2").unwrap();
        assert_eq!(result, Some("2048.0000".to_string()));
    }

    #[test]
    fn test_units_listing() {
        let engine = Engine::new();
        let units = engine.units("temperature").unwrap();
        let ids: Vec<&str> = units.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["c", "f", "k", "r"]);

        assert!(engine.units("plasma").is_err());
    }
}
