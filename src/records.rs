//! User records and the sources they are loaded from.
//!
//! Records are created once at startup, either from the built-in sample set or
//! from a TOML file, and are never mutated afterwards.

use crate::error::{Result, RowFilterError};
use serde::Deserialize;
use std::path::Path;

/// A single user row: name, age and email.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub name: String,
    pub age: u32,
    pub email: String,
}

impl Record {
    pub fn new(name: impl Into<String>, age: u32, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }
}

/// On-disk layout of a record file: a list of `[[records]]` tables.
#[derive(Debug, Deserialize)]
struct RecordFile {
    #[serde(default)]
    records: Vec<Record>,
}

/// The built-in demo data set.
pub fn sample_records() -> Vec<Record> {
    const SAMPLE: [(&str, u32, &str); 20] = [
        ("Alice Martin", 28, "alice.martin@example.com"),
        ("Bruno Dupont", 34, "bruno.dupont@example.com"),
        ("Camille Durand", 22, "camille.durand@example.com"),
        ("David Bernard", 45, "david.bernard@example.com"),
        ("Élodie Moreau", 31, "elodie.moreau@example.com"),
        ("Fabien Valero", 29, "fabien.valero@example.com"),
        ("Géraldine Petit", 27, "geraldine.petit@example.com"),
        ("Hugo Lefevre", 38, "hugo.lefevre@example.com"),
        ("Isabelle Roux", 41, "isabelle.roux@example.com"),
        ("Julien Garnier", 24, "julien.garnier@example.com"),
        ("Karim Nasser", 33, "karim.nasser@example.com"),
        ("Laura Fontaine", 26, "laura.fontaine@example.com"),
        ("Marc Lemaire", 50, "marc.lemaire@example.com"),
        ("Nadia Roy", 36, "nadia.roy@example.com"),
        ("Olivier Marchand", 42, "olivier.marchand@example.com"),
        ("Pauline Mercier", 23, "pauline.mercier@example.com"),
        ("Quentin Faure", 30, "quentin.faure@example.com"),
        ("Rachid Kamel", 35, "rachid.kamel@example.com"),
        ("Sophie Gilbert", 39, "sophie.gilbert@example.com"),
        ("Théo Renaud", 21, "theo.renaud@example.com"),
    ];

    SAMPLE
        .iter()
        .map(|&(name, age, email)| Record::new(name, age, email))
        .collect()
}

/// Parse records from TOML text.
pub fn parse_records(source: &str, origin: &Path) -> Result<Vec<Record>> {
    let file: RecordFile = toml::from_str(source)
        .map_err(|e| RowFilterError::record_source(origin, e.message().to_string()))?;
    Ok(file.records)
}

/// Load records from a TOML file on disk.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(RowFilterError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let source = std::fs::read_to_string(path)
        .map_err(|e| RowFilterError::file_error(format!("reading {}", path.display()), e))?;
    let records = parse_records(&source, path)?;
    log::info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
