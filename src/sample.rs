//! Sample Zoo
//!
//! Five enclosures and six species used for demonstrations and tests. The
//! same tables ship as CSV in `data/` for the table loader.
//!
//! | Enclosure | Biome             | Capacity | Occupants |
//! |-----------|-------------------|----------|-----------|
//! | 1         | savanna           | 10       | monkey    |
//! | 2         | forest            | 5        |           |
//! | 3         | savanna-and-river | 7        | gazelle   |
//! | 4         | river             | 8        |           |
//! | 5         | savanna           | 9        | lion      |

use crate::config::ZooConfig;
use crate::query_engine::QueryEngine;
use anyhow::{Context, Result};

pub const SAMPLE_ZOO_JSON: &str = include_str!("../data/sample_zoo.json");

pub fn sample_config() -> Result<ZooConfig> {
    ZooConfig::from_json(SAMPLE_ZOO_JSON).with_context(|| "Built-in sample zoo is malformed")
}

pub fn sample_engine() -> Result<QueryEngine> {
    let engine = sample_config()?
        .into_engine()
        .with_context(|| "Built-in sample zoo breaks a data invariant")?;
    Ok(engine)
}
