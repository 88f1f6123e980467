use std::time::Duration;

use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Balls,
    Emulator,
    Inventory,
    Machines,
    Recognizer,
    scan_section,
};

const MENU_DELAY: Duration = Duration::from_millis(250);
const BACK_OUT_DELAY: Duration = Duration::from_millis(500);

/// Snapshot of every item in the pack, captured in one menu session.
///
/// A fresh scan produces a fresh snapshot; nothing here updates in place
/// except the ball inventory, which [`Balls::throw_best`] mutates to reflect
/// consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pack {
    /// General items, by held quantity.
    pub items: Inventory,
    /// Technical and hidden machines.
    pub machines: Machines,
    /// Key items.
    pub key_items: Inventory,
    /// Balls.
    pub balls: Balls,
}

impl Pack {
    /// Collects the full pack inventory.
    ///
    /// Assumes the player is in the overworld with the pause menu untouched.
    /// Opens the pause menu, navigates to the pack, scans all four sections
    /// in order, and backs fully out, so a successful collection leaves the
    /// menus as they started. Any navigation or recognition failure aborts
    /// the whole collection; no partial pack is ever returned.
    pub fn collect(emulator: &mut dyn Emulator, recognizer: &mut dyn Recognizer) -> Result<Self> {
        emulator.press_start(MENU_DELAY)?;
        emulator.move_down(2, MENU_DELAY)?;
        emulator.press_a(1, MENU_DELAY)?;

        let items = scan_section(emulator, recognizer, true)?;
        emulator.move_left(1, MENU_DELAY)?;
        let machines = scan_section(emulator, recognizer, true)?;
        emulator.move_left(1, MENU_DELAY)?;
        let key_items = scan_section(emulator, recognizer, false)?;
        emulator.move_left(1, MENU_DELAY)?;
        let balls = scan_section(emulator, recognizer, true)?;

        emulator.press_b(1, BACK_OUT_DELAY)?;
        emulator.press_b(1, MENU_DELAY)?;

        Ok(Self {
            items: Inventory::with_quantities(items)?,
            machines: Machines::new(machines),
            key_items: Inventory::names_only(key_items),
            balls: Balls::new(balls)?,
        })
    }
}
