use std::{
    str::FromStr,
    time::Duration,
};

use anyhow::{
    Context,
    Result,
};
use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    Emulator,
    PackError,
    ScannedEntry,
};

const MENU_DELAY: Duration = Duration::from_millis(250);
const THROW_DELAY: Duration = Duration::from_millis(500);

/// A known ball kind.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum BallKind {
    #[string = "masterball"]
    Master,
    #[string = "ultraball"]
    Ultra,
    #[string = "greatball"]
    Great,
    #[string = "pokeball"]
    Poke,
    #[string = "safariball"]
    Safari,
    #[string = "fastball"]
    Fast,
    #[string = "levelball"]
    Level,
    #[string = "lureball"]
    Lure,
    #[string = "heavyball"]
    Heavy,
    #[string = "loveball"]
    Love,
    #[string = "friendball"]
    Friend,
    #[string = "moonball"]
    Moon,
    #[string = "sportball"]
    Sport,
}

impl BallKind {
    /// Canonical priority of the kind, lower is more preferred.
    ///
    /// Only the standard capture balls carry a priority. Specialty balls have
    /// none and are never auto-selected.
    pub fn priority(&self) -> Option<u8> {
        match self {
            Self::Master => Some(1),
            Self::Ultra => Some(2),
            Self::Great => Some(3),
            Self::Poke => Some(4),
            _ => None,
        }
    }
}

/// Ranking of held balls by canonical priority, covering exactly the held
/// kinds that have one.
pub type BallRank = IndexMap<String, u8>;

/// Ball inventory of the pack.
///
/// Beyond plain quantity tracking, the ball inventory can rank its contents,
/// position the in-battle cursor over the best held ball, and throw it. The
/// throw mutates the inventory in place; everything else in the pack snapshot
/// stays immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balls {
    inventory: IndexMap<String, u32>,
}

impl Balls {
    /// Builds the ball inventory from one scan.
    ///
    /// Every entry must carry a quantity.
    pub fn new<I>(entries: I) -> Result<Self>
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
        Ok(Self { inventory })
    }

    /// Currently held balls, in on-screen order.
    pub fn inventory(&self) -> &IndexMap<String, u32> {
        &self.inventory
    }

    /// Ranks every held ball by canonical priority.
    ///
    /// Held kinds without a defined priority are left out of the ranking, so
    /// they can never be selected. A name outside the known ball kinds fails
    /// the whole ranking.
    pub fn rank(&self) -> Result<BallRank> {
        let mut rank = BallRank::new();
        for name in self.inventory.keys() {
            let kind = BallKind::from_str(name).map_err(|_| PackError::UnknownBall {
                name: name.clone(),
            })?;
            if let Some(priority) = kind.priority() {
                rank.insert(name.clone(), priority);
            }
        }
        log::info!("ranking of current balls: {rank:?}");
        Ok(rank)
    }

    /// The held ball with the numerically lowest priority.
    ///
    /// Ties break toward the first occurrence in iteration order, though
    /// priorities are unique across ranked kinds.
    pub fn best(&self, rank: &BallRank) -> Result<BallKind> {
        let mut best: Option<(&str, u8)> = None;
        for (name, &priority) in rank {
            if best.is_none_or(|(_, held)| priority < held) {
                best = Some((name, priority));
            }
        }
        let (name, _) = best.ok_or(PackError::SelectionImpossible)?;
        log::info!("best ball in pocket is {name}");
        BallKind::from_str(name).map_err(anyhow::Error::msg)
    }

    /// Positions the in-battle cursor over the best held ball.
    ///
    /// Enters the ball pocket from the battle menu, re-derives the best ball,
    /// and moves down from the top of the list to its position. Returns the
    /// number of positions moved, which equals the ball's 0-based index in
    /// the current inventory order.
    pub fn position_cursor(&self, emulator: &mut dyn Emulator) -> Result<usize> {
        emulator.move_down(1, MENU_DELAY)?;
        emulator.press_a(1, MENU_DELAY)?;

        let rank = self.rank()?;
        let best = self.best(&rank)?;
        let index = self
            .inventory
            .keys()
            .position(|name| BallKind::from_str(name).is_ok_and(|kind| kind == best))
            .ok_or(PackError::SelectionImpossible)?;
        emulator.move_down(index, MENU_DELAY)?;
        Ok(index)
    }

    /// Throws the best held ball and decrements its quantity.
    ///
    /// A ball whose quantity reaches zero is removed from the inventory
    /// entirely. The cursor index stays valid through the commit because the
    /// whole sequence runs under one mutable borrow; nothing can reorder the
    /// inventory in between. Returns the updated inventory.
    pub fn throw_best(&mut self, emulator: &mut dyn Emulator) -> Result<&IndexMap<String, u32>> {
        let index = self.position_cursor(emulator)?;
        emulator.press_a(2, THROW_DELAY)?;
        log::info!("ball thrown");

        let (name, quantity) = self
            .inventory
            .get_index_mut(index)
            .context("thrown ball missing from inventory")?;
        *quantity = quantity.saturating_sub(1);
        if *quantity == 0 {
            let name = name.clone();
            self.inventory.shift_remove(&name);
        }
        log::info!("current ball inventory: {:?}", self.inventory);
        Ok(&self.inventory)
    }
}
