use anyhow::Result;

use crate::{
    ScannedEntry,
    Screenshot,
};

/// Converts a screenshot into the inventory entries visible on one page.
pub trait Recognizer {
    /// Reads the entries visible in the capture, in on-screen order, bounded
    /// to one page.
    ///
    /// When `track_quantity` is set, quantities are read alongside names
    /// wherever the screen shows one; entries that display no quantity (such
    /// as hidden machines) come back without one.
    fn recognize(
        &mut self,
        screenshot: &Screenshot,
        track_quantity: bool,
    ) -> Result<Vec<ScannedEntry>>;
}
