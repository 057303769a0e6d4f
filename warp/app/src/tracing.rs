use tracing::Level;

#[derive(Clone, Copy)]
pub struct TraceOption {
    /// Tracing level to use if an action succeeded.
    pub ok_level: Level,
    /// Tracing level to use if an action fails.
    pub error_level: Level,
}

impl TraceOption {
    /// Used when executing transactions.
    pub const LOUD: Self = Self {
        ok_level: Level::INFO,
        error_level: Level::WARN,
    };
    /// Used when a failure is expected, e.g. when simulating.
    pub const MUTE: Self = Self {
        ok_level: Level::DEBUG,
        error_level: Level::DEBUG,
    };
}
