use std::{
    fs,
    path::PathBuf,
    time::Duration,
};

use anyhow::Result;
use packbot::{
    Emulator,
    PackError,
    Screenshot,
};
use uuid::Uuid;

/// One recorded emulator action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PressStart,
    PressA(usize),
    PressB(usize),
    MoveDown(usize),
    MoveLeft(usize),
    TakeScreenshot,
    LaunchGame,
    ContinueGame,
    KillProcess,
}

/// Fake emulator that records actions instead of pressing buttons.
///
/// Screenshots are real empty files in the system temp directory, so code
/// under test exercises the capture cleanup path. Individual actions can be
/// armed to fail with a navigation desync to test abort semantics.
#[derive(Debug, Default)]
pub struct FakeEmulator {
    actions: Vec<Action>,
    capture_paths: Vec<PathBuf>,
    fail_move_left_at: Option<usize>,
    moves_left: usize,
}

impl FakeEmulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every action taken so far, in order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of screenshots taken so far.
    pub fn captures(&self) -> usize {
        self.capture_paths.len()
    }

    /// Paths of every screenshot taken so far, whether or not the file still
    /// exists.
    pub fn capture_paths(&self) -> &[PathBuf] {
        &self.capture_paths
    }

    /// Arms the n-th `move_left` call (0-based) to fail with
    /// [`PackError::NavigationDesync`].
    pub fn fail_move_left_at(&mut self, call: usize) {
        self.fail_move_left_at = Some(call);
    }
}

impl Emulator for FakeEmulator {
    fn press_start(&mut self, _delay_after_press: Duration) -> Result<()> {
        self.actions.push(Action::PressStart);
        Ok(())
    }

    fn press_a(&mut self, presses: usize, _delay_after_press: Duration) -> Result<()> {
        self.actions.push(Action::PressA(presses));
        Ok(())
    }

    fn press_b(&mut self, presses: usize, _delay_after_press: Duration) -> Result<()> {
        self.actions.push(Action::PressB(presses));
        Ok(())
    }

    fn move_down(&mut self, presses: usize, _delay_after_press: Duration) -> Result<()> {
        self.actions.push(Action::MoveDown(presses));
        Ok(())
    }

    fn move_left(&mut self, presses: usize, _delay_after_press: Duration) -> Result<()> {
        if self.fail_move_left_at == Some(self.moves_left) {
            self.fail_move_left_at = None;
            return Err(PackError::NavigationDesync("missed left press".to_owned()).into());
        }
        self.moves_left += 1;
        self.actions.push(Action::MoveLeft(presses));
        Ok(())
    }

    fn take_screenshot(&mut self, _delay_after_press: Duration) -> Result<Screenshot> {
        let path = std::env::temp_dir().join(format!("packbot-capture-{}.png", Uuid::new_v4()));
        fs::write(&path, [])?;
        self.actions.push(Action::TakeScreenshot);
        self.capture_paths.push(path.clone());
        Ok(Screenshot::new(path))
    }

    fn launch_game(&mut self) -> Result<()> {
        self.actions.push(Action::LaunchGame);
        Ok(())
    }

    fn continue_game(&mut self) -> Result<()> {
        self.actions.push(Action::ContinueGame);
        Ok(())
    }

    fn kill_process(&mut self) -> Result<()> {
        self.actions.push(Action::KillProcess);
        Ok(())
    }
}
