// SPDX-License-Identifier: MPL-2.0
use core_bci_site::app::{self, Flags};
use core_bci_site::logging;

const HELP: &str = "\
The Core BCI landing page

USAGE:
  core_bci_site [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --section <ID>         Section to scroll to on start-up (home, about,
                         services, works, testimonials, contact)
  --config-dir <PATH>    Directory holding settings.toml
  --log-level <LEVEL>    Log level when RUST_LOG is unset [default: info]
  -h, --help             Print help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let log_level: Option<String> = args.opt_value_from_str("--log-level").unwrap_or_else(|err| {
        eprintln!("--log-level: {err}");
        None
    });
    logging::init(log_level.as_deref().unwrap_or(logging::DEFAULT_LOG_LEVEL));

    let flags = Flags {
        lang: option(&mut args, "--lang"),
        section: option(&mut args, "--section"),
        config_dir: option(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}

/// Reads an optional `--key value` pair, warning on malformed input.
fn option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring {key}");
        None
    })
}
