// SPDX-License-Identifier: MPL-2.0
use gold_nails::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
gold_nails

USAGE:
  gold_nails [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --gallery-dir <DIR>     Directory of gallery images
  --i18n-dir <DIR>        Directory of extra Fluent .ftl files
  --data-dir <DIR>        Directory for persisted state
  --config-dir <DIR>      Directory for settings.toml
";

fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(option = key, %err, "ignoring invalid command-line value");
            None
        }
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gold_nails=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: optional_value(&mut args, "--lang"),
        gallery_dir: optional_value(&mut args, "--gallery-dir"),
        i18n_dir: optional_value(&mut args, "--i18n-dir"),
        data_dir: optional_value(&mut args, "--data-dir"),
        config_dir: optional_value(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
