// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        interval_secs: args.opt_value_from_str("--interval").unwrap_or(None),
        directory: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok())
            .map(PathBuf::from),
    };

    app::run(flags)
}
