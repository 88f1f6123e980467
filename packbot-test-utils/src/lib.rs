mod fake_emulator;
mod scripted_recognizer;

pub use fake_emulator::{
    Action,
    FakeEmulator,
};
pub use scripted_recognizer::ScriptedRecognizer;
