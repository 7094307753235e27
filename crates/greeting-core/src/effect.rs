/// Side effects requested by the engine. Hosts perform them (audio, timers,
/// UI) after the call that produced them returns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    PlayIntroMusic,
    StopIntroMusic,
    PlaySceneMusic,
    /// A hold began; poll `GreetingEngine::poll_gesture` until stopped.
    StartProgressTimer,
    /// The hold ended or succeeded; the poll timer must be cleared.
    StopProgressTimer,
    Extinguished,
    BlowTooWeak { held_secs: f64 },
}
