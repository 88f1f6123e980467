use std::time::Duration;

use anyhow::Result;

use crate::{
    Emulator,
    Recognizer,
    ScannedEntry,
};

/// The maximum number of entries shown in a single pack screenshot.
pub const PAGE_SIZE: usize = 5;

const SCROLL_DELAY: Duration = Duration::from_millis(100);
const CAPTURE_DELAY: Duration = Duration::from_millis(250);

/// Scans one pack section into an ordered, deduplicated entry list.
///
/// Assumes the cursor starts on the first entry of the section. Pages through
/// the list one screen at a time, keeping only the first sighting of each
/// name, whether a repeat comes from a later page or from the same one.
/// Scrolling past the end of a list repeats entries already collected, so the
/// scan ends when a page yields no new names, or when the collected total
/// stops being a multiple of the page size (the last, partially-filled page).
/// A section holding an exact multiple of the page size costs one extra
/// confirming capture.
pub fn scan_section(
    emulator: &mut dyn Emulator,
    recognizer: &mut dyn Recognizer,
    track_quantity: bool,
) -> Result<Vec<ScannedEntry>> {
    let mut inventory: Vec<ScannedEntry> = Vec::new();
    emulator.move_down(PAGE_SIZE - 1, SCROLL_DELAY)?;
    loop {
        let screenshot = emulator.take_screenshot(CAPTURE_DELAY)?;
        let page = recognizer.recognize(&screenshot, track_quantity)?;
        // Release the capture before the next emulator interaction.
        drop(screenshot);

        let mut new_count = 0;
        for entry in page {
            if inventory.iter().any(|seen| seen.name == entry.name) {
                continue;
            }
            inventory.push(entry);
            new_count += 1;
        }

        emulator.move_down(PAGE_SIZE, SCROLL_DELAY)?;
        if new_count == 0 || inventory.len() % PAGE_SIZE != 0 {
            break;
        }
    }
    Ok(inventory)
}
