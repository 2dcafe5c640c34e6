use core::fmt;
use std::error::Error as StdError;
use std::num::ParseIntError;

use crate::crc::{self, Engine, Width};
use crate::error::Result;

/// Everything needed to run a chained computation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config
{
	pub bits: u32,
	pub poly: u32,
	pub init: u32,
}

impl Config
{
	/// STM32F2/F4 peripheral (these parts cannot reconfigure it).
	pub const STM32: Self = Config{bits: 32, poly: crc::POLYNOMIAL, init: crc::SEED};
	/// 8-bit example from the CRC application note.
	pub const APP_NOTE_8BIT: Self = Config{bits: 8, poly: 0xCB, init: 0xFF};

	pub fn engine(&self) -> Result<Engine>
	{
		Ok(Engine::new(Width::new(self.bits)?, self.poly))
	}
}

impl Default for Config
{
	fn default() -> Self
	{
		Self::STM32
	}
}

/// Parses an unsigned literal with an optional `0x`, `0o` or `0b` prefix.
pub fn parse_int(src: &str) -> Result<u32, ParseError>
{
	let src = src.trim();
	if src.is_empty() {return Err(ParseError::Empty);}
	let (radix, digits) = match src.get(..2)
	{
		Some("0x" | "0X") => (16, &src[2..]),
		Some("0o" | "0O") => (8, &src[2..]),
		Some("0b" | "0B") => (2, &src[2..]),
		_ => (10, src),
	};
	let digits: String = digits.chars().filter(|&c| c != '_').collect();
	if digits.is_empty() || digits.starts_with(['+', '-'])
	{
		return Err(ParseError::Digits(src.to_owned()));
	}
	u32::from_str_radix(&digits, radix).map_err(|err| ParseError::Value{src: src.to_owned(), err})
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError
{
	Empty,
	Digits(String),
	Value{src: String, err: ParseIntError},
}

impl fmt::Display for ParseError
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match self
		{
			Self::Empty => f.write_str("empty number"),
			Self::Digits(src) => write!(f, "missing digits in {src:?}"),
			Self::Value{src, ..} => write!(f, "invalid number {src:?}"),
		}
	}
}

impl StdError for ParseError
{
	fn source(&self) -> Option<&(dyn StdError + 'static)>
	{
		match self
		{
			Self::Value{err, ..} => Some(err),
			_ => None,
		}
	}
}
