//! Record storage API.
//!
//! Append-only JSONL file: one record per line. Queries read the whole
//! file; the store is intended for engineering logs, not high-volume data.

use crate::types::CalculationRecord;
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Open (or prepare to create) the store at the given file path.
    pub fn new(path: PathBuf) -> ResultsResult<Self> {
        if path.as_os_str().is_empty() {
            return Err(ResultsError::InvalidPath {
                message: "store path is empty".to_string(),
            });
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { path })
    }

    /// Append one record.
    pub fn append(&self, record: &CalculationRecord) -> ResultsResult<()> {
        let line = serde_json::to_string(record)?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }

    /// Load every record, in append order.
    pub fn load_all(&self) -> ResultsResult<Vec<CalculationRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let mut records = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                let record: CalculationRecord = serde_json::from_str(line)?;
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Load the records whose tag matches exactly.
    pub fn find_by_tag(&self, tag: &str) -> ResultsResult<Vec<CalculationRecord>> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|record| record.tag == tag)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_catalog::{lookup, NominalSize, PipeMaterial, Schedule};
    use hc_engine::HydraulicResult;
    use hc_fluids::Liquid;

    fn temp_store(name: &str) -> RecordStore {
        let path = std::env::temp_dir()
            .join("hc-results-tests")
            .join(format!("{}-{}.jsonl", name, std::process::id()));
        let _ = fs::remove_file(&path);
        RecordStore::new(path).unwrap()
    }

    fn sample_record(tag: &str) -> CalculationRecord {
        let pipe = lookup(NominalSize::FourInch, Schedule::Sch40).unwrap();
        let hydraulics = HydraulicResult {
            total_pressure_drop_bar: 49.2,
            friction_pressure_drop_bar: 49.2,
            static_pressure_drop_bar: 0.0,
            velocity_m_per_s: 3.59,
            reynolds_number: 1.49e6,
            friction_factor: 0.0166,
            density_kg_per_m3: 943.1,
            viscosity_pa_s: 2.32e-4,
            pump_head_m: 531.8,
            hydraulic_power_kw: 144.9,
            shaft_power_kw: 193.2,
            inner_diameter_mm: 102.26,
        };
        CalculationRecord::new(
            tag,
            "2024-05-01T10:00:00+00:00",
            Liquid::Water,
            PipeMaterial::CarbonSteel,
            &pipe,
            &hydraulics,
            None,
        )
    }

    #[test]
    fn empty_store_loads_nothing() {
        let store = temp_store("empty");
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn append_then_load_round_trips() {
        let store = temp_store("round-trip");
        let first = sample_record("line A");
        let second = sample_record("line B");

        store.append(&first).unwrap();
        store.append(&second).unwrap();

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![first, second]);
    }

    #[test]
    fn find_by_tag_filters() {
        let store = temp_store("find-by-tag");
        store.append(&sample_record("keep")).unwrap();
        store.append(&sample_record("drop")).unwrap();
        store.append(&sample_record("keep")).unwrap();

        let kept = store.find_by_tag("keep").unwrap();
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|record| record.tag == "keep"));
    }

    #[test]
    fn rejects_empty_path() {
        assert!(RecordStore::new(PathBuf::new()).is_err());
    }
}
