/// Emit a tracing event at a level chosen at runtime.
///
/// The `tracing` macros require the level to be a constant, which doesn't
/// work with [`TraceOption`](crate::TraceOption).
#[macro_export]
macro_rules! dyn_event {
    ($lvl:expr, $($arg:tt)+) => {{
        let level: ::tracing::Level = $lvl;
        if level == ::tracing::Level::ERROR {
            ::tracing::error!($($arg)+);
        } else if level == ::tracing::Level::WARN {
            ::tracing::warn!($($arg)+);
        } else if level == ::tracing::Level::INFO {
            ::tracing::info!($($arg)+);
        } else if level == ::tracing::Level::DEBUG {
            ::tracing::debug!($($arg)+);
        } else {
            ::tracing::trace!($($arg)+);
        }
    }};
}
