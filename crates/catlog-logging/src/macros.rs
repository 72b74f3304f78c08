//! Call-site macros
//!
//! Each macro checks the category before the payload is formatted, so
//! suppressed messages cost one atomic load. Fatal messages either abort the
//! process straight away (when suppressed) or are written and then abort.

/// Log through a category at an explicit level
///
/// ```ignore
/// catlog!(NETWORK, LogLevel::Warn, "retrying {}", addr);
/// catlog!(to &stream; NETWORK, LogLevel::Info, "written to a specific stream");
/// ```
#[macro_export]
macro_rules! catlog {
    (to $stream:expr; $category:expr, $level:expr, $($arg:tt)+) => {{
        let category: &$crate::Category = &$category;
        let level: $crate::LogLevel = $level;
        if category.enabled_or_abort(level) {
            let stream: &$crate::LogStream = $stream;
            let _ = stream.emit(level, file!(), line!(), format_args!($($arg)+));
            category.abort_if_fatal(level);
        }
    }};
    ($category:expr, $level:expr, $($arg:tt)+) => {
        $crate::catlog!(to $crate::LogStream::global(); $category, $level, $($arg)+)
    };
}

#[macro_export]
macro_rules! catlog_debug {
    ($category:expr, $($arg:tt)+) => {
        $crate::catlog!($category, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! catlog_info {
    ($category:expr, $($arg:tt)+) => {
        $crate::catlog!($category, $crate::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! catlog_warn {
    ($category:expr, $($arg:tt)+) => {
        $crate::catlog!($category, $crate::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! catlog_error {
    ($category:expr, $($arg:tt)+) => {
        $crate::catlog!($category, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal message and abort. Never returns.
#[macro_export]
macro_rules! catlog_fatal {
    ($category:expr, $($arg:tt)+) => {{
        $crate::catlog!($category, $crate::LogLevel::Fatal, $($arg)+);
        ::std::process::abort()
    }};
}

/// Abort with a fatal message when `cond` is false
#[macro_export]
macro_rules! catlog_assert {
    ($category:expr, $cond:expr $(,)?) => {
        if !$cond {
            $crate::catlog_fatal!($category, "assertion failed: {}", stringify!($cond));
        }
    };
    ($category:expr, $cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::catlog_fatal!(
                $category,
                "assertion failed: {}: {}",
                stringify!($cond),
                format_args!($($arg)+)
            );
        }
    };
}
