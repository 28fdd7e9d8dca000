use crate::reading::Reading;

/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Sampler task          → `ReadingSampled`
/// - Config watcher task   → `ConfigReloaded`
#[derive(Debug, Clone)]
pub enum Message {
    /// Fresh reading from the background sampler — exactly one per sample
    /// tick, never minted on read.
    ReadingSampled(Reading),
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,
}
