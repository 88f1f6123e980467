use anyhow::Result;
use indexmap::{
    IndexMap,
    IndexSet,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::PackError;

/// One entry read off an inventory screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedEntry {
    /// Name of the entry.
    pub name: String,
    /// Held quantity, if the entry tracks one.
    pub quantity: Option<u32>,
}

impl ScannedEntry {
    /// Creates an entry with a tracked quantity.
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity),
        }
    }

    /// Creates an entry without a quantity.
    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
        }
    }
}

/// Inventory of one pack section.
///
/// Iteration order always matches the on-screen cursor order at scan time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inventory {
    /// Entries with a tracked quantity.
    Tracked(IndexMap<String, u32>),
    /// Entries tracked by name alone.
    NameOnly(IndexSet<String>),
}

impl Inventory {
    /// Builds a quantity-tracked inventory from one scan.
    ///
    /// Fails if any entry was recognized without a quantity.
    pub fn with_quantities<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = ScannedEntry>,
    {
        let mut inventory = IndexMap::new();
        for entry in entries {
            let quantity = entry.quantity.ok_or_else(|| PackError::MissingQuantity {
                name: entry.name.clone(),
            })?;
            inventory.insert(entry.name, quantity);
        }
        Ok(Self::Tracked(inventory))
    }

    /// Builds a name-only inventory from one scan, discarding any recognized
    /// quantities.
    pub fn names_only<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ScannedEntry>,
    {
        Self::NameOnly(entries.into_iter().map(|entry| entry.name).collect())
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        match self {
            Self::Tracked(inventory) => inventory.len(),
            Self::NameOnly(inventory) => inventory.len(),
        }
    }

    /// Is the inventory empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Is the named entry held?
    pub fn contains(&self, name: &str) -> bool {
        match self {
            Self::Tracked(inventory) => inventory.contains_key(name),
            Self::NameOnly(inventory) => inventory.contains(name),
        }
    }

    /// Held quantity of the named entry, if the inventory tracks quantities.
    pub fn quantity(&self, name: &str) -> Option<u32> {
        match self {
            Self::Tracked(inventory) => inventory.get(name).copied(),
            Self::NameOnly(_) => None,
        }
    }
}

/// Machine inventory, split by sub-kind.
///
/// Technical machines (TMs) are consumable and display a quantity; hidden
/// machines (HMs) are permanent and display none. One scan covers both, so
/// the split is made on quantity presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machines {
    /// Technical machines, by held quantity.
    pub tm: IndexMap<String, u32>,
    /// Hidden machines.
    pub hm: IndexSet<String>,
}

impl Machines {
    /// Splits one scan of the machine section into TMs and HMs.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ScannedEntry>,
    {
        let mut machines = Self::default();
        for entry in entries {
            match entry.quantity {
                Some(quantity) => {
                    machines.tm.insert(entry.name, quantity);
                }
                None => {
                    machines.hm.insert(entry.name);
                }
            }
        }
        machines
    }
}
