// 📦 Catalog - owns the children and gifts for one allocation run
//
// The catalog is populated up front (JSON document or a children/gifts CSV
// pair) and then handed to the allocator, which borrows both collections
// mutably for the duration of the run. No entity is aliased outside that
// borrow.

use crate::entities::{Child, Gift};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub children: Vec<Child>,
    pub gifts: Vec<Gift>,
}

impl Catalog {
    pub fn new(children: Vec<Child>, gifts: Vec<Gift>) -> Self {
        Catalog { children, gifts }
    }

    // ========================================================================
    // LOADERS
    // ========================================================================

    /// Load a full catalog from a JSON document:
    /// `{"children": [...], "gifts": [...]}`
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read catalog file: {:?}", path.as_ref()))?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse catalog JSON")
    }

    /// Load a catalog from two CSV files, one record per row.
    ///
    /// Children CSV columns: id, age, average_score, assigned_budget,
    /// gift_preferences (a `;`-separated list, priority order preserved).
    /// Gifts CSV columns: id, category, price, quantity.
    pub fn from_csv_files<P: AsRef<Path>>(children_path: P, gifts_path: P) -> Result<Self> {
        let children = load_children_csv(children_path.as_ref())?;
        let gifts = load_gifts_csv(gifts_path.as_ref())?;
        Ok(Catalog { children, gifts })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn gift_count(&self) -> usize {
        self.gifts.len()
    }

    pub fn gift_by_id(&self, id: u32) -> Option<&Gift> {
        self.gifts.iter().find(|g| g.id == id)
    }

    /// Split mutable borrow for the allocator: children and gifts live in
    /// separate vectors, so both sides can be mutated during one run.
    pub fn parts_mut(&mut self) -> (&mut Vec<Child>, &mut Vec<Gift>) {
        (&mut self.children, &mut self.gifts)
    }
}

// ============================================================================
// CSV RECORDS
// ============================================================================

/// Raw child row; preferences arrive as one `;`-joined cell
#[derive(Debug, Deserialize)]
struct ChildCsvRecord {
    id: u32,
    age: u32,
    average_score: f64,
    assigned_budget: f64,
    gift_preferences: String,
}

impl ChildCsvRecord {
    fn into_child(self) -> Child {
        let preferences = self
            .gift_preferences
            .split(';')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        Child::new(
            self.id,
            self.age,
            self.average_score,
            self.assigned_budget,
            preferences,
        )
    }
}

fn load_children_csv(path: &Path) -> Result<Vec<Child>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open children CSV: {:?}", path))?;

    let mut children = Vec::new();
    for result in rdr.deserialize() {
        let record: ChildCsvRecord = result.context("Failed to deserialize child record")?;
        children.push(record.into_child());
    }
    Ok(children)
}

fn load_gifts_csv(path: &Path) -> Result<Vec<Gift>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open gifts CSV: {:?}", path))?;

    let mut gifts = Vec::new();
    for result in rdr.deserialize() {
        let gift: Gift = result.context("Failed to deserialize gift record")?;
        gifts.push(gift);
    }
    Ok(gifts)
}

// ============================================================================
// TESTS
// ============================================================================
