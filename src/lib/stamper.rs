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
use crate::helpers::*;
use crate::types::*;
use regex::Captures;
use std::fs;
use std::path::Path;

use log::{debug, info, warn};

impl Stamper {
    /// Initializes a new Stamper with nothing but version_str set.
    pub fn new(version_str: &str) -> Stamper {
        Stamper {
            version_str: version_str.to_owned(),
            version_str_size: None,
            key: DEFAULT_KEY.to_owned(),
        }
    }

    /// Sets the maximum length of the version string. See [truncate_version](crate::helpers::truncate_version)
    pub fn set_max_len(&mut self, max_len: usize) -> &mut Stamper {
        self.version_str_size = Some(max_len);
        self
    }

    /// Sets the key token preceding the version literal, `CFG_VERSION` by default
    pub fn set_key(&mut self, key: &str) -> &mut Stamper {
        self.key = key.to_owned();
        self
    }

    /// The version string as it will be written, i.e. after truncation
    pub fn version(&self) -> String {
        truncate_version(&self.version_str, self.version_str_size)
    }

    /// Stamps the version into a [Source](crate::types::Source)
    ///
    /// Only the first version literal is replaced. If there is none the returned Source
    /// is identical to the one passed in.
    ///
    /// # Example
    ///
    /// ```
    /// use libverstamp::{Source, Stamper};
    ///
    /// let source = Source {
    ///     inner: r#"define("CFG_VERSION", "1.0.0")"#.to_string(),
    ///     name: "config.h".to_string(),
    /// };
    ///
    /// let stamped = Stamper::new("12345678").set_max_len(5).stamp(&source).unwrap();
    ///
    /// assert_eq!(stamped.inner, r#"define("CFG_VERSION", "1234")"#);
    /// ```
    ///
    /// # Errors
    ///
    /// * If the pattern for [self.key](crate::types::Stamper.key) can't be compiled
    pub fn stamp(&self, source: &Source) -> Result<Source, Error> {
        let version = self.version();
        let re = version_regex(&self.key)?;

        if !re.is_match(&source.inner) {
            warn!(
                "Couldn't find a {} version literal in {}, leaving it as is!",
                &self.key, &source.name
            );
        }

        // Don't use a replacement string here, `$` in the version would expand to groups.
        let stamped = re.replace(&source.inner, |caps: &Captures| {
            format!("{}\"{}\"", &caps[1], &version)
        });

        Ok(Source {
            inner: stamped.into_owned(),
            name: source.name.clone(),
        })
    }

    /// Reads `target`, stamps the version into it and writes it back
    ///
    /// The file is always written, even if no version literal was found.
    ///
    /// # Errors
    ///
    /// * If `target` can't be read (e.g. it doesn't exist or isn't valid UTF-8)
    /// * If `target` can't be written
    pub fn stamp_file(&self, target: &Path) -> Result<(), Error> {
        let source = Source {
            inner: fs::read_to_string(target).map_err(|e| Error::from_io(target, &e))?,
            name: target.display().to_string(),
        };

        match find_version(&source.inner, &self.key)? {
            Some(old_ver) => info!(
                "Updating {} from {} to {}",
                &source.name,
                old_ver,
                self.version()
            ),
            None => debug!("{} has no version to update", &source.name),
        }

        let stamped = self.stamp(&source)?;

        fs::write(target, stamped.inner.as_bytes()).map_err(|e| Error::from_io(target, &e))?;

        Ok(())
    }
}
