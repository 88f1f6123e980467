use std::time::Duration;

use anyhow::Result;

use crate::Screenshot;

/// Control surface for a running emulator.
///
/// Every action blocks until the input is issued and then waits the given
/// settle delay, so scripted sequences can accommodate emulator frame-advance
/// timing. Actions are strictly sequential; nothing here is cancellable
/// mid-sequence.
pub trait Emulator {
    /// Presses Start once.
    fn press_start(&mut self, delay_after_press: Duration) -> Result<()>;

    /// Presses A the given number of times.
    fn press_a(&mut self, presses: usize, delay_after_press: Duration) -> Result<()>;

    /// Presses B the given number of times.
    fn press_b(&mut self, presses: usize, delay_after_press: Duration) -> Result<()>;

    /// Moves the cursor down the given number of positions.
    fn move_down(&mut self, presses: usize, delay_after_press: Duration) -> Result<()>;

    /// Moves the cursor left the given number of positions.
    fn move_left(&mut self, presses: usize, delay_after_press: Duration) -> Result<()>;

    /// Captures the current screen, returning a handle to the capture file.
    ///
    /// The handle owns the file: dropping it deletes the capture.
    fn take_screenshot(&mut self, delay_after_press: Duration) -> Result<Screenshot>;

    /// Launches the game process.
    fn launch_game(&mut self) -> Result<()>;

    /// Continues a saved game into the overworld.
    fn continue_game(&mut self) -> Result<()>;

    /// Kills the emulator process.
    fn kill_process(&mut self) -> Result<()>;
}
