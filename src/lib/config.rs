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

use crate::errors::Error;
use crate::types::*;
use std::path::{Path, PathBuf};

use log::debug;

/// Prefix the CI runner puts in front of action inputs it exports to the environment
pub const INPUT_ENV_PREFIX: &str = "INPUT_";

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|x| !x.is_empty())
}

/// Parses the value of the `version_str_size` input
///
/// # Errors
///
/// * Errors out if `value` isn't a non-negative integer
pub fn parse_size(value: &str) -> Result<usize, Error> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|e| Error::InvalidInput {
            input: "version_str_size".to_string(),
            err: format!("'{}': {}", value, e),
        })
}

impl StampConfig {
    /// Reads a StampConfig from a TOML file, e.g.
    ///
    /// ```toml
    /// target = "src/ConfigParam.h"
    /// version_str = "0.9.3"
    /// version_str_size = 8
    /// ```
    ///
    /// # Errors
    ///
    /// * If `path` can't be read
    /// * If `path` isn't valid TOML or contains unknown keys
    pub fn from_file(path: &Path) -> Result<StampConfig, Error> {
        let config_string = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        debug!("Read config file {}", path.display());

        Ok(toml::from_str(&config_string)?)
    }

    /// Collects the action inputs the CI runner exported as `INPUT_<NAME>` variables.
    ///
    /// `lookup` resolves a variable name to its value, pass `|x| std::env::var(x).ok()`
    /// to read the real environment.
    ///
    /// # Errors
    ///
    /// * If `INPUT_VERSION_STR_SIZE` is set but isn't an integer
    pub fn from_lookup<F>(lookup: F) -> Result<StampConfig, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = |name: &str| {
            non_empty(
                lookup(&format!("{}{}", INPUT_ENV_PREFIX, name.to_uppercase()))
                    .map(|x| x.trim().to_string()),
            )
        };

        let version_str_size = match input("version_str_size") {
            Some(size) => Some(parse_size(&size)?),
            None => None,
        };

        Ok(StampConfig {
            target: input("target"),
            version_str: input("version_str"),
            version_str_size,
            key: input("key"),
        })
    }

    /// Fills every input that's unset (or empty) in `self` from `fallback`
    pub fn or(self, fallback: StampConfig) -> StampConfig {
        let StampConfig {
            target,
            version_str,
            version_str_size,
            key,
        } = fallback;

        StampConfig {
            target: non_empty(self.target).or_else(|| non_empty(target)),
            version_str: non_empty(self.version_str).or_else(|| non_empty(version_str)),
            version_str_size: self.version_str_size.or(version_str_size),
            key: non_empty(self.key).or_else(|| non_empty(key)),
        }
    }

    /// Checks that all required inputs are there and returns the target alongside a
    /// [Stamper](crate::types::Stamper) set up for it. Doesn't touch the filesystem.
    ///
    /// # Errors
    ///
    /// * If `target` or `version_str` is missing
    pub fn build(&self) -> Result<(PathBuf, Stamper), Error> {
        let target = non_empty(self.target.clone())
            .ok_or_else(|| Error::MissingInput("target".to_string()))?;
        let version_str = non_empty(self.version_str.clone())
            .ok_or_else(|| Error::MissingInput("version_str".to_string()))?;

        let mut stamper = Stamper::new(&version_str);

        if let Some(max_len) = self.version_str_size {
            stamper.set_max_len(max_len);
        }

        if let Some(key) = non_empty(self.key.clone()) {
            stamper.set_key(&key);
        }

        Ok((PathBuf::from(target), stamper))
    }
}
