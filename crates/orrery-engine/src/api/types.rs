/// Lifecycle events emitted by the engine. Consumers drain these once per
/// frame; the engine never holds a callback into host code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShowerEvent {
    /// A shower started, either auto-scheduled or manually triggered.
    Started {
        count: u32,
        duration: f32,
        manual: bool,
    },
    /// The running shower completed its full runtime. Emitted exactly once
    /// per shower; a superseded or torn-down shower never emits it.
    Ended,
}
