// SPDX-License-Identifier: MPL-2.0
use gobarber::app::{self, Flags};

const HELP: &str = "\
GoBarber

USAGE:
  gobarber [OPTIONS]

OPTIONS:
  --config-dir <DIR>  Directory holding settings.toml
  --data-dir <DIR>    Directory holding the saved session
  --api-url <URL>     Backend base URL, overriding [api] base_url
  -h, --help          Print this help

ENVIRONMENT:
  GOBARBER_CONFIG_DIR, GOBARBER_DATA_DIR  Directory fallbacks
  GOBARBER_LOG                            Log filter (default: gobarber=info)
";

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "GOBARBER_LOG";

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("gobarber=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    setup_logging();

    let flags = Flags {
        config_dir: opt_value(&mut args, "--config-dir"),
        data_dir: opt_value(&mut args, "--data-dir"),
        api_url: opt_value(&mut args, "--api-url"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(%err, key, "ignoring invalid argument");
        None
    })
}
