//! Patient Records
//!
//! Wire-format types for the patient collection, plus the small read-only
//! helpers the display layer projects from. Field names mirror the JSON the
//! endpoint serves; unknown fields are ignored, missing fields are a parse
//! failure at the fetch boundary.

use serde::{Deserialize, Serialize};

/// A single patient record from the collection endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub gender: String,
    pub age: u32,
    pub profile_picture: String,
    /// ISO date string, `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub phone_number: String,
    pub emergency_contact: String,
    pub insurance_type: String,
    /// Periodic vitals snapshots, most recent first.
    pub diagnosis_history: Vec<DiagnosisRecord>,
    pub diagnostic_list: Vec<DiagnosticEntry>,
    /// Opaque display labels, one per available lab report.
    pub lab_results: Vec<String>,
}

/// One periodic snapshot of a patient's vital signs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    /// Full month name, e.g. "January".
    pub month: String,
    pub year: i32,
    pub blood_pressure: BloodPressure,
    pub respiratory_rate: VitalReading,
    pub temperature: VitalReading,
    pub heart_rate: VitalReading,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: VitalReading,
    pub diastolic: VitalReading,
}

/// Numeric reading plus its qualitative level label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VitalReading {
    pub value: f64,
    pub levels: String,
}

/// A diagnosed condition with its current status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    pub name: String,
    pub description: String,
    pub status: String,
}

impl Patient {
    /// Latest vitals snapshot, when any history exists.
    pub fn latest(&self) -> Option<&DiagnosisRecord> {
        self.diagnosis_history.first()
    }
}

impl DiagnosisRecord {
    /// Abbreviated period label, e.g. "Jan 2024".
    pub fn period_label(&self) -> String {
        let abbrev = self.month.get(..3).unwrap_or(&self.month);
        format!("{} {}", abbrev, self.year)
    }
}

impl VitalReading {
    /// Direction implied by the level label.
    pub fn trend(&self) -> Trend {
        Trend::from_level(&self.levels)
    }
}

/// Direction of a reading relative to its normal range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Steady,
}

impl Trend {
    /// Case-sensitive substring match, matching how the endpoint phrases
    /// level labels ("Higher than Average", "Lower than Average", "Normal").
    pub fn from_level(levels: &str) -> Self {
        if levels.contains("Higher") {
            Trend::Rising
        } else if levels.contains("Lower") {
            Trend::Falling
        } else {
            Trend::Steady
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(value: f64, levels: &str) -> VitalReading {
        VitalReading {
            value,
            levels: levels.to_string(),
        }
    }

    fn record(month: &str, year: i32) -> DiagnosisRecord {
        DiagnosisRecord {
            month: month.to_string(),
            year,
            blood_pressure: BloodPressure {
                systolic: reading(120.0, "Normal"),
                diastolic: reading(80.0, "Normal"),
            },
            respiratory_rate: reading(20.0, "Normal"),
            temperature: reading(98.6, "Normal"),
            heart_rate: reading(78.0, "Lower than Average"),
        }
    }

    #[test]
    fn test_deserialize_patient_collection() {
        let body = r#"[{
            "name": "Jessica Taylor",
            "gender": "Female",
            "age": 28,
            "profile_picture": "https://example.test/jessica.png",
            "date_of_birth": "1996-08-23",
            "phone_number": "(415) 555-1234",
            "emergency_contact": "(415) 555-5678",
            "insurance_type": "Sunrise Health Assurance",
            "diagnosis_history": [{
                "month": "January",
                "year": 2024,
                "blood_pressure": {
                    "systolic": { "value": 120, "levels": "Normal" },
                    "diastolic": { "value": 80, "levels": "Normal" }
                },
                "respiratory_rate": { "value": 20, "levels": "Normal" },
                "temperature": { "value": 98.6, "levels": "Normal" },
                "heart_rate": { "value": 78, "levels": "Lower than Average" }
            }],
            "diagnostic_list": [{
                "name": "Hypertension",
                "description": "Chronic high blood pressure",
                "status": "Under Observation"
            }],
            "lab_results": ["Blood Tests", "CT Scans"]
        }]"#;

        let patients: Vec<Patient> = serde_json::from_str(body).unwrap();
        assert_eq!(patients.len(), 1);

        let jessica = &patients[0];
        assert_eq!(jessica.name, "Jessica Taylor");
        assert_eq!(jessica.age, 28);

        let latest = jessica.latest().unwrap();
        assert_eq!(latest.blood_pressure.systolic.value, 120.0);
        assert_eq!(latest.heart_rate.trend(), Trend::Falling);
        assert_eq!(jessica.diagnostic_list[0].status, "Under Observation");
        assert_eq!(jessica.lab_results, vec!["Blood Tests", "CT Scans"]);
    }

    #[test]
    fn test_latest_is_first_record() {
        let mut patient = Patient {
            name: "Test".to_string(),
            gender: "Female".to_string(),
            age: 30,
            profile_picture: String::new(),
            date_of_birth: "1994-01-01".to_string(),
            phone_number: String::new(),
            emergency_contact: String::new(),
            insurance_type: String::new(),
            diagnosis_history: vec![record("March", 2024), record("February", 2024)],
            diagnostic_list: Vec::new(),
            lab_results: Vec::new(),
        };
        assert_eq!(patient.latest().unwrap().month, "March");

        patient.diagnosis_history.clear();
        assert!(patient.latest().is_none());
    }

    #[test]
    fn test_period_label_abbreviates_month() {
        assert_eq!(record("January", 2024).period_label(), "Jan 2024");
        assert_eq!(record("May", 2023).period_label(), "May 2023");
    }

    #[test]
    fn test_trend_matches_level_substring() {
        assert_eq!(Trend::from_level("Higher than Average"), Trend::Rising);
        assert_eq!(Trend::from_level("Lower than Average"), Trend::Falling);
        assert_eq!(Trend::from_level("Normal"), Trend::Steady);
        // Match is case-sensitive: a lowercase phrase does not trigger.
        assert_eq!(Trend::from_level("higher than average"), Trend::Steady);
    }
}
