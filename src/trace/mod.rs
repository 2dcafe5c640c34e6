//! Observation of the register while a step runs.
//!
//! The engine reports every intermediate register value to a [`Trace`]
//! passed in by the caller, so each computation decides on its own whether
//! (and where) the steps are shown.

use std::io::{self, Write};


/// One observable point inside a single CRC step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step
{
	/// Register seeded from the running value and the input word.
	Seed{initial: u32, input: u32, reg: u32},
	/// Register value before shift `index`.
	Shift{index: u32, reg: u32},
	/// Register value after shift `index` was reduced by the polynomial.
	Reduce{index: u32, reg: u32},
}

pub trait Trace
{
	fn record(&mut self, step: Step);
}

/// Discards every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl Trace for NoTrace
{
	fn record(&mut self, _: Step) {}
}

impl Trace for Vec<Step>
{
	fn record(&mut self, step: Step)
	{
		self.push(step);
	}
}

impl<T: Trace + ?Sized> Trace for &mut T
{
	fn record(&mut self, step: Step)
	{
		(**self).record(step);
	}
}

/// Emits every step as a `tracing` event at trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTrace;

impl Trace for LogTrace
{
	fn record(&mut self, step: Step)
	{
		match step
		{
			Step::Seed{initial, input, reg} => tracing::trace!(initial, input, reg, "seed"),
			Step::Shift{index, reg} => tracing::trace!(index, reg, "shift"),
			Step::Reduce{index, reg} => tracing::trace!(index, reg, "reduce"),
		}
	}
}

/// Prints every step as a `label 0b...` line.
///
/// The first write error stops further output and is returned by [`WriteTrace::finish`].
pub struct WriteTrace<W: Write>
{
	dst: W,
	err: Option<io::Error>,
}

impl<W: Write> WriteTrace<W>
{
	pub fn new(dst: W) -> Self
	{
		Self{dst, err: None}
	}

	pub fn finish(self) -> io::Result<()>
	{
		match self.err
		{
			None => Ok(()),
			Some(e) => Err(e),
		}
	}

	fn line(&mut self, label: &str, value: u32) -> io::Result<()>
	{
		writeln!(self.dst, "{label} {value:#b}")
	}
}

impl<W: Write> Trace for WriteTrace<W>
{
	fn record(&mut self, step: Step)
	{
		if self.err.is_some() {return;}
		let result = match step
		{
			Step::Seed{initial, input, reg} =>
			{
				self.line("initial_crc", initial)
					.and_then(|_| self.line("input_data", input))
					.and_then(|_| self.line("crc = initial ^ input", reg))
			},
			Step::Shift{reg, ..} => self.line("crc", reg),
			Step::Reduce{reg, ..} => self.line("crc ^ poly", reg),
		};
		self.err = result.err();
	}
}
