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

use failure::Fail;

/// The Error enum containing all Errors that may occur when running verstamp
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Fail)]
pub enum Error {
    #[fail(display = "Input required and not supplied: {}", _0)]
    MissingInput(String),
    #[fail(display = "Invalid value for input {}! Error: {}", input, err)]
    InvalidInput { input: String, err: String },
    #[fail(display = "Failed to read/write the target file {}! Error: {}", path, err)]
    File { path: String, err: String },
    #[fail(display = "Failed to read the config file! Error: {}", _0)]
    Config(String),
    #[fail(display = "Failed to build the version pattern! Error: {}", _0)]
    Pattern(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Error::Pattern(e.to_string())
    }
}

impl Error {
    /// Attach the path of the file an I/O error occurred on
    pub(crate) fn from_io(path: &std::path::Path, e: &std::io::Error) -> Self {
        Error::File {
            path: path.display().to_string(),
            err: e.to_string(),
        }
    }
}
