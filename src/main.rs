// SPDX-License-Identifier: MPL-2.0
use sync_alerts::app::{self, Flags};
use sync_alerts::config::paths;

const HELP: &str = "\
sync-alerts - notification banner demo for playlist sync events

USAGE:
    sync-alerts [OPTIONS]

OPTIONS:
    --script <FILE>       Replay JSON-lines push events from FILE
    --config-dir <DIR>    Read settings.toml from DIR
                          (overrides SYNC_ALERTS_CONFIG_DIR)
    -h, --help            Print this help

KEYS:
    Esc                   Dismiss the current alert
    E                     Export diagnostics to the config directory
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        config_dir: read_option(&mut args, "--config-dir"),
        script: read_option(&mut args, "--script"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("[WARN] Ignoring unexpected arguments: {rest:?}");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        eprintln!("[WARN] Ignoring {key}: {err}");
        None
    })
}
