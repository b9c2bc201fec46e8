// SPDX-License-Identifier: MPL-2.0
use jetnotes::app::{self, Flags};

const HELP: &str = "\
JetNotes

USAGE:
    jetnotes [OPTIONS]

OPTIONS:
    -h, --help               Print this help message
        --lang <LOCALE>      Interface language (e.g. en-US, fr)
        --config-dir <DIR>   Directory holding settings.toml
                             (overrides JETNOTES_CONFIG_DIR)
        --theme <MODE>       Theme mode: light, dark or system
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match Flags::from_args(args) {
        Ok((flags, remaining)) => {
            if !remaining.is_empty() {
                tracing::warn!(?remaining, "ignoring unrecognized arguments");
            }
            flags
        }
        Err(error) => {
            eprintln!("{error}\n\n{HELP}");
            Flags::default()
        }
    };

    tracing::info!("starting JetNotes");
    app::run(flags)
}
