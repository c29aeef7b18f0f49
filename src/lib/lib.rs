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

//! libverstamp rewrites the version literal of a source file, e.g. the `"1.0.0"` in
//!
//! ```c
//! {"CFG_VERSION", "1.0.0"},
//! ```
//!
//! with a version string handed in by CI, optionally cut to a maximum length.
//!
//! # Usage
//!
//! ```
//! use libverstamp::*;
//! use std::io::Write;
//!
//! let mut file = tempfile::NamedTempFile::new().unwrap();
//! write!(file, r#"{{"CFG_VERSION", "1.0.0"}},"#).unwrap();
//!
//! let config = StampConfig {
//!     target: Some(file.path().display().to_string()),
//!     version_str: Some("2.3.4".to_string()),
//!     ..StampConfig::default()
//! };
//!
//! // Fails if `target` or `version_str` is missing
//! let (target, stamper) = config.build().unwrap();
//! stamper.stamp_file(&target).unwrap();
//!
//! assert_eq!(
//!     std::fs::read_to_string(&target).unwrap(),
//!     r#"{"CFG_VERSION", "2.3.4"},"#
//! );
//! ```

pub mod config;
pub mod errors;
pub mod helpers;
pub mod stamper;
pub mod types;

pub use crate::config::*;
pub use crate::errors::*;
pub use crate::helpers::*;
pub use crate::types::*;
