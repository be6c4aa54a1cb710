use crate::storage::stable::log::StableLog;
use candid::CandidType;
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Level
///

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, CandidType, Display, Serialize, Deserialize,
)]
pub enum Level {
    Debug, // least severe
    Info,
    Ok,
    Warn,
    Error, // most severe
}

impl Level {
    // ANSI color used for the console label
    const fn color(self) -> &'static str {
        match self {
            Self::Ok => "\x1b[32m",
            Self::Info => "\x1b[34m",
            Self::Warn => "\x1b[33m",
            Self::Error => "\x1b[31m",
            Self::Debug => "",
        }
    }
}

///
/// Topic
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    Auth,
    Batch,
    Campus,
    Cascade,
    College,
    Config,
    School,
    Store,
    Submission,
}

///
/// log!
///
/// `log!(Topic::College, Info, "created college id={id}")`
///
/// Every line is echoed to stdout and appended to the stable log, which
/// trims itself back to `log.max_entries` as it grows.
///

#[macro_export]
macro_rules! log {
    ($topic:expr, $level:ident, $($fmt:tt)+) => {{
        $crate::log::__emit($topic, $crate::log::Level::$level, &format!($($fmt)+));
    }};
}

#[doc(hidden)]
pub fn __emit(topic: Topic, level: Level, message: &str) {
    let topic = topic.to_string();

    // append failures are dropped
    let _ = StableLog::append(env!("CARGO_PKG_NAME"), Some(&topic), level, message);

    let color = level.color();
    let reset = if color.is_empty() { "" } else { "\x1b[0m" };
    let label = level.to_string().to_uppercase();

    println!("{color}{label:^5}{reset}| [{topic}] {message}");
}
