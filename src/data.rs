//! Table Loading
//!
//! Loads the species and enclosure tables using Polars and turns them into a
//! `ZooConfig`. Each table may be CSV or Parquet; Parquet wins when both are
//! present in the directory.
//!
//! `species` columns: `species`, `size`, `biomes` (pipe-separated)
//! `enclosures` columns: `id`, `biome`, `capacity`, `occupants` (pipe-separated
//! species names, may be empty)

use crate::config::{EnclosureRecord, OccupantRecord, SpeciesRecord, ZooConfig};
use anyhow::{Context, Result};
use polars::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const TABLE_EXTENSIONS: &[&str] = &["parquet", "csv"];

/// Raw species and enclosure tables
pub struct ZooTables {
    pub species: DataFrame,
    pub enclosures: DataFrame,
}

impl ZooTables {
    /// Load both tables from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        let species = Self::load_table(&Self::locate(dir, "species")?)?;
        let enclosures = Self::load_table(&Self::locate(dir, "enclosures")?)?;

        tracing::info!("Loaded zoo tables from {:?}", dir);
        tracing::info!("  Species rows: {}", species.height());
        tracing::info!("  Enclosure rows: {}", enclosures.height());

        Ok(ZooTables { species, enclosures })
    }

    fn locate(dir: &Path, stem: &str) -> Result<PathBuf> {
        TABLE_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", stem, ext)))
            .find(|path| path.exists())
            .with_context(|| format!("No {}.parquet or {}.csv in {:?}", stem, stem, dir))
    }

    fn load_table(path: &Path) -> Result<DataFrame> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("parquet") => LazyFrame::scan_parquet(path, Default::default())
                .with_context(|| format!("Failed to scan parquet: {:?}", path))?
                .collect()
                .with_context(|| format!("Failed to load parquet: {:?}", path)),
            _ => CsvReadOptions::default()
                .with_has_header(true)
                .try_into_reader_with_file_path(Some(path.to_path_buf()))
                .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
                .finish()
                .with_context(|| format!("Failed to load CSV: {:?}", path)),
        }
    }

    /// Convert the tables into a `ZooConfig`
    ///
    /// Fails on missing columns, missing values and duplicate species rows.
    /// Invariants (sizes, capacities, ids) are checked later when the
    /// config is built into an engine.
    pub fn to_config(&self) -> Result<ZooConfig> {
        Ok(ZooConfig {
            species: self.species_records()?,
            enclosures: self.enclosure_records()?,
        })
    }

    fn species_records(&self) -> Result<BTreeMap<String, SpeciesRecord>> {
        let df = &self.species;
        let names = string_values(df, "species", "species")?;
        let sizes = integer_values(df, "size", "species")?;
        let biomes = string_values(df, "biomes", "species")?;

        let mut records = BTreeMap::new();

        for idx in 0..df.height() {
            let name = names[idx]
                .clone()
                .with_context(|| format!("species row {}: missing species name", idx))?;
            let size = to_u32(sizes[idx], "size", &name)?;
            let biomes = split_pipe_list(biomes[idx].as_deref());

            if records.insert(name.clone(), SpeciesRecord { size, biomes }).is_some() {
                anyhow::bail!("species '{}' appears more than once", name);
            }
        }

        Ok(records)
    }

    fn enclosure_records(&self) -> Result<Vec<EnclosureRecord>> {
        let df = &self.enclosures;
        let ids = integer_values(df, "id", "enclosures")?;
        let biomes = string_values(df, "biome", "enclosures")?;
        let capacities = integer_values(df, "capacity", "enclosures")?;
        let occupants = string_values(df, "occupants", "enclosures")?;

        let mut records = Vec::with_capacity(df.height());

        for idx in 0..df.height() {
            let label = format!("enclosure row {}", idx);
            let id = to_u32(ids[idx], "id", &label)?;
            let biome = biomes[idx]
                .clone()
                .with_context(|| format!("enclosure {}: missing biome", id))?;
            let capacity = to_u32(capacities[idx], "capacity", &format!("enclosure {}", id))?;
            let occupants = split_pipe_list(occupants[idx].as_deref())
                .into_iter()
                .map(OccupantRecord::Named)
                .collect();

            records.push(EnclosureRecord {
                id,
                biome,
                capacity,
                occupants,
            });
        }

        Ok(records)
    }
}

/// Split "a|b|c" into entries, dropping empties
fn split_pipe_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or("")
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn string_values(df: &DataFrame, name: &str, table: &str) -> Result<Vec<Option<String>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found in {} table", name, table))?
        .cast(&DataType::String)
        .with_context(|| format!("Column '{}' in {} table is not text", name, table))?;
    let values = column
        .str()
        .with_context(|| format!("Column '{}' in {} table is not text", name, table))?;

    Ok(values.into_iter().map(|v| v.map(str::to_string)).collect())
}

fn integer_values(df: &DataFrame, name: &str, table: &str) -> Result<Vec<Option<i64>>> {
    let column = df
        .column(name)
        .with_context(|| format!("Column '{}' not found in {} table", name, table))?
        .cast(&DataType::Int64)
        .with_context(|| format!("Column '{}' in {} table is not an integer", name, table))?;
    let values = column
        .i64()
        .with_context(|| format!("Column '{}' in {} table is not an integer", name, table))?;

    Ok(values.into_iter().collect())
}

fn to_u32(value: Option<i64>, column: &str, row: &str) -> Result<u32> {
    let value = value.with_context(|| format!("{}: missing {}", row, column))?;
    u32::try_from(value).with_context(|| format!("{}: {} {} is out of range", row, column, value))
}
