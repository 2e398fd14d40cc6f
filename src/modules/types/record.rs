//! Dataset record definitions
//!
//! The store is owned by someone else; these types describe the columns the
//! service reads and are checked against the live schema at startup.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A table-backed record with a fixed set of required columns
pub trait Record {
    /// Table name in the backing store
    const TABLE: &'static str;

    /// Columns that must exist in `TABLE`
    const COLUMNS: &'static [&'static str];
}

/// One station reading for a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Station identifier (references [`Station::station`])
    pub station: String,

    /// ISO calendar day, `YYYY-MM-DD`
    pub date: String,

    /// Precipitation amount, absent on days without a gauge reading
    pub prcp: Option<Number>,

    /// Observed temperature
    pub tobs: Option<Number>,
}

impl Record for Observation {
    const TABLE: &'static str = "measurement";
    const COLUMNS: &'static [&'static str] = &["station", "date", "prcp", "tobs"];
}

/// A weather-reporting site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Unique station code, e.g. `USC00519281`
    pub station: String,

    /// Display name
    pub name: String,
}

impl Record for Station {
    const TABLE: &'static str = "station";
    const COLUMNS: &'static [&'static str] = &["station", "name"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tables() {
        assert_eq!(Observation::TABLE, "measurement");
        assert_eq!(Station::TABLE, "station");
        assert!(Observation::COLUMNS.contains(&"tobs"));
        assert!(Station::COLUMNS.contains(&"name"));
    }

    #[test]
    fn test_observation_keeps_integer_readings() {
        let obs = Observation {
            station: "USC00519281".to_string(),
            date: "2017-08-23".to_string(),
            prcp: None,
            tobs: Some(Number::from(79)),
        };
        let json = serde_json::to_string(&obs).unwrap();
        assert!(json.contains("\"prcp\":null"));
        assert!(json.contains("\"tobs\":79"));
        assert!(!json.contains("79.0"));
    }
}
