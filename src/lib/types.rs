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

use serde_derive::Deserialize;

/// The key token verstamp looks for if none is configured
pub const DEFAULT_KEY: &str = "CFG_VERSION";

/// The Stamper struct, which is used to stamp a version into a [Source](crate::types::Source)
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stamper {
    pub version_str: String,
    pub version_str_size: Option<usize>,
    pub key: String,
}

/// The text of a target file
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Source {
    pub inner: String,
    pub name: String,
}

/// All inputs verstamp understands. Every field is optional here, whether something
/// is actually required is checked by [build](crate::types::StampConfig::build).
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StampConfig {
    pub target: Option<String>,
    pub version_str: Option<String>,
    pub version_str_size: Option<usize>,
    pub key: Option<String>,
}
