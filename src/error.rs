use std::io;
use std::path::PathBuf;

use crate::crc::Width;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error
{
	#[error("unsupported register width {0} (must be between 1 and {max})", max = Width::MAX)]
	Width(u32),
	#[error("could not read input stream")]
	Read(#[source] io::Error),
	#[error("could not read {}", path.display())]
	Io{path: PathBuf, #[source] source: io::Error},
}
