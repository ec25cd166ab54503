// SPDX-License-Identifier: MPL-2.0
use scene_lens::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        viewport_width: args.opt_value_from_str("--viewport-width").unwrap(),
        viewport_height: args.opt_value_from_str("--viewport-height").unwrap(),
        config_path: args
            .opt_value_from_str::<_, std::path::PathBuf>("--config")
            .unwrap(),
    };

    app::run(flags)
}
