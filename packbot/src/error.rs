use thiserror::Error;

/// Errors produced while scanning the pack or selecting a ball.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// Recognition produced an entry without a quantity where one is
    /// required.
    #[error("entry {name} has no quantity")]
    MissingQuantity { name: String },

    /// A recognized ball name is not one of the known ball kinds.
    #[error("unknown ball: {name}")]
    UnknownBall { name: String },

    /// The cursor is not where a scripted sequence assumed it to be,
    /// typically from a missed button press.
    ///
    /// Raised by [`Emulator`][`crate::Emulator`] implementations. The core
    /// never retries; recovery belongs to the caller, which can re-navigate
    /// from a known menu root.
    #[error("navigation desync: {0}")]
    NavigationDesync(String),

    /// No held ball has a defined priority, so there is no best ball to
    /// select.
    #[error("no held ball has a defined priority")]
    SelectionImpossible,
}
