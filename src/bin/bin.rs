//This file is part of verstamp
//
//verstamp is free software: you can redistribute it and/or modify
//it under the terms of the GNU General Public License as published by
//the Free Software Foundation, either version 3 of the License, or
//(at your option) any later version.
//
//verstamp is distributed in the hope that it will be useful,
//but WITHOUT ANY WARRANTY; without even the implied warranty of
//MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//GNU General Public License for more details.
//
//You should have received a copy of the GNU General Public License
//along with verstamp.  If not, see <http://www.gnu.org/licenses/>.

use clap::{App, ArgMatches, YamlLoader};
use env_logger::Builder;
use libverstamp::*;
use std::path::Path;

use log::{debug, error, warn};

pub(crate) struct BinOptions {
    pub cli_config: Result<StampConfig, Error>,
    pub config_path: Option<String>,
    pub verbose: bool,
    pub debug: bool,
}

fn main() {
    let bin_options = help_string();

    set_up_logging(bin_options.debug, bin_options.verbose);

    // We want a plain error message for CI instead of the Debug output
    // `main() -> Result` would print, so we exit manually.
    if let Err(e) = actual_work(bin_options) {
        error!("{}", e.to_string());

        if std::env::var("GITHUB_ACTIONS").unwrap_or_default() == "true" {
            println!("{}", gha_error_command(&e.to_string()));
        }

        std::process::exit(1);
    }
}

fn actual_work(opts: BinOptions) -> Result<(), Error> {
    let file_config = match &opts.config_path {
        Some(path) => StampConfig::from_file(Path::new(path))?,
        None => StampConfig::default(),
    };

    let env_config = StampConfig::from_lookup(|x| std::env::var(x).ok())?;

    let config = opts.cli_config?.or(env_config).or(file_config);

    debug!("Resolved inputs: {:?}", &config);

    let (target, stamper) = config.build()?;

    stamper.stamp_file(&target)
}

fn set_up_logging(is_debug: bool, is_verbose: bool) {
    let mut builder = Builder::new();

    if is_debug {
        builder
            .filter_module("libverstamp", log::LevelFilter::Debug)
            .filter_module("verstamp", log::LevelFilter::Debug);
    } else if is_verbose {
        builder
            .filter_module("libverstamp", log::LevelFilter::Info)
            .filter_module("verstamp", log::LevelFilter::Info);
    } else {
        builder
            .filter_module("libverstamp", log::LevelFilter::Warn)
            .filter_module("verstamp", log::LevelFilter::Warn);
    }

    builder.default_format_timestamp(false).init();

    if is_debug && is_verbose {
        warn!("Specified both --verbose and --debug! Will ignore --verbose.");
    }
}

fn cli_config(matches: &ArgMatches) -> Result<StampConfig, Error> {
    let value = |name: &str| matches.value_of(name).map(String::from);

    let version_str_size = match matches.value_of("version_str_size") {
        Some(size) => Some(parse_size(size)?),
        None => None,
    };

    Ok(StampConfig {
        target: value("target"),
        version_str: value("version_str"),
        version_str_size,
        key: value("key"),
    })
}

// Print the help script if invoked with `--help`/`-h`
fn help_string() -> BinOptions {
    let help_yaml =
        YamlLoader::load_from_str(include_str!(concat!(env!("OUT_DIR"), "/cli_gen.yml"))).unwrap();
    let matches = App::from_yaml(&help_yaml[0]).get_matches();

    // Invalid sizes are reported once logging is set up
    let cli_config = cli_config(&matches);

    let config_path = matches.value_of("config").map(String::from);

    let verbose = matches.is_present("verbose");

    let debug = matches.is_present("debug");

    BinOptions {
        cli_config,
        config_path,
        verbose,
        debug,
    }
}
