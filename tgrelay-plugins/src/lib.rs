//! # tgrelay-plugins
//!
//! Plugins shipped with the relay binary. Text plugins answer slash commands (optionally addressed as
//! `/cmd@botname`) and decline everything else with `NotMatched`.

mod clock;
mod command;
mod echo;
mod inline;
mod ping;

pub use clock::ClockPlugin;
pub use command::Command;
pub use echo::EchoPlugin;
pub use inline::{EchoInlineProducer, LoggingChosenHandler};
pub use ping::PingPlugin;
