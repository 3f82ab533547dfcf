// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, paths, Flags};

const HELP: &str = "\
iced_gallery

USAGE:
  iced_gallery [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          Interface language (e.g. en-US, ru)
  --config-dir <PATH>      Directory holding settings.toml

ENVIRONMENT:
  ICED_GALLERY_CONFIG_DIR  Same as --config-dir
  RUST_LOG                 Log filter (default: iced_gallery=info)
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("iced_gallery=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            log::warn!("ignoring --config-dir: {err}");
            None
        });

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    paths::init_cli_overrides(config_dir);
    app::run(Flags { lang })
}
