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
use log::debug;
use regex::Regex;

/// Cuts `version_str` down to `max_len - 1` characters if it's longer than `max_len`.
/// Length is counted in `char`s. A `max_len` of 0 only drops the last character.
pub fn truncate_version(version_str: &str, max_len: Option<usize>) -> String {
    let len = version_str.chars().count();

    match max_len {
        Some(max_len) if len > max_len => {
            let keep = if max_len == 0 { len - 1 } else { max_len - 1 };

            let truncated = version_str
                .chars()
                .take(keep)
                .collect::<String>();

            debug!(
                "Version string '{}' is longer than {} characters, cut it to '{}'",
                version_str, max_len, &truncated
            );

            truncated
        }
        _ => version_str.to_string(),
    }
}

/// Builds the pattern matching `"<key>",<whitespace>"D.D.D"`.
///
/// Group 1 is the key plus separator, group 2 the quoted version.
pub fn version_regex(key: &str) -> Result<Regex, Error> {
    let pattern = format!(r#"("{}",\s+)("[0-9]\.[0-9]\.[0-9]")"#, regex::escape(key));

    debug!("Version pattern: {}", &pattern);

    Ok(Regex::new(&pattern)?)
}

/// Returns the version currently stamped after `key` in `text`, without quotes
///
/// # Errors
///
/// * Errors out if the pattern for `key` can't be compiled
pub fn find_version(text: &str, key: &str) -> Result<Option<String>, Error> {
    Ok(version_regex(key)?
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|ver| ver.as_str().trim_matches('"').to_string()))
}

/// Formats `message` as a GitHub Actions `::error::` workflow command
pub fn gha_error_command(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");

    format!("::error::{}", escaped)
}
