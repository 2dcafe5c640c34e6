use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::crc::Engine;
use crate::error::{Error, Result};
use crate::trace::Trace;

#[cfg(test)]
mod test;

/// Bytes per word taken from binary input, independent of the register width.
pub const WORD_LEN: usize = 4;

/// Running CRC threaded through consecutive words.
#[derive(Clone, Debug)]
pub struct Chain
{
	engine: Engine,
	value: u32,
	count: usize,
}

impl Chain
{
	pub fn new(engine: Engine, init: u32) -> Self
	{
		Self{engine, value: init, count: 0}
	}

	pub fn update<T: Trace + ?Sized>(&mut self, word: u32, trace: &mut T)
	{
		self.value = self.engine.step_traced(word, self.value, trace);
		self.count += 1;
	}

	pub fn update_words<I, T>(&mut self, words: I, trace: &mut T)
		where I: IntoIterator<Item = u32>, T: Trace + ?Sized
	{
		for word in words
		{
			self.update(word, &mut *trace);
		}
	}

	pub fn get_value(&self) -> u32
	{
		self.value
	}

	/// Number of words folded in so far.
	pub fn get_count(&self) -> usize
	{
		self.count
	}
}

/// Character codes of all strings, in order, as one flat word sequence.
pub fn text_words<S: AsRef<str>>(data: &[S]) -> impl Iterator<Item = u32> + '_
{
	data.iter().flat_map(|s| s.as_ref().chars()).map(u32::from)
}

/// Little-endian words of `bytes`; a short final chunk is padded with zero bytes after its data.
pub fn words(bytes: &[u8]) -> impl Iterator<Item = u32> + '_
{
	bytes.chunks(WORD_LEN).map(|chunk|
	{
		let mut temp = [0u8; WORD_LEN];
		temp[..chunk.len()].copy_from_slice(chunk);
		u32::from_le_bytes(temp)
	})
}

fn fold<I, T>(engine: Engine, init: u32, words: I, trace: &mut T) -> u32
	where I: IntoIterator<Item = u32>, T: Trace + ?Sized
{
	let mut chain = Chain::new(engine, init);
	chain.update_words(words, trace);
	debug!(words = chain.get_count(), crc = chain.get_value(), "chained words");
	chain.get_value()
}

pub fn chain_words<I, T>(words: I, config: &Config, trace: &mut T) -> Result<u32>
	where I: IntoIterator<Item = u32>, T: Trace + ?Sized
{
	Ok(fold(config.engine()?, config.init, words, trace))
}

pub fn chain_text<S, T>(data: &[S], config: &Config, trace: &mut T) -> Result<u32>
	where S: AsRef<str>, T: Trace + ?Sized
{
	chain_words(text_words(data), config, trace)
}

pub fn chain_bytes<T: Trace + ?Sized>(bytes: &[u8], config: &Config, trace: &mut T) -> Result<u32>
{
	debug!(len = bytes.len(), "chaining binary input");
	chain_words(words(bytes), config, trace)
}

/// Reads `src` to the end, then chains it like [`chain_bytes`].
pub fn chain_reader<R, T>(mut src: R, config: &Config, trace: &mut T) -> Result<u32>
	where R: Read, T: Trace + ?Sized
{
	// reject a bad width before touching the stream
	let engine = config.engine()?;
	let mut buff = Vec::new();
	src.read_to_end(&mut buff).map_err(Error::Read)?;
	debug!(len = buff.len(), "chaining binary input");
	Ok(fold(engine, config.init, words(&buff), trace))
}

pub fn chain_file<P, T>(path: P, config: &Config, trace: &mut T) -> Result<u32>
	where P: AsRef<Path>, T: Trace + ?Sized
{
	let path = path.as_ref();
	let engine = config.engine()?;
	let mut buff = Vec::new();
	File::open(path).and_then(|mut f| f.read_to_end(&mut buff))
		.map_err(|source| Error::Io{path: path.to_path_buf(), source})?;
	debug!(path = %path.display(), len = buff.len(), "chaining file");
	Ok(fold(engine, config.init, words(&buff), trace))
}
