use crate::error::{Error, Result};
use crate::trace::{NoTrace, Step, Trace};


/// Polynomial hard-wired into the STM32F2/F4 CRC peripheral.
pub const POLYNOMIAL: u32 = 0x04C11DB7;
/// Register value of the peripheral after a reset.
pub const SEED: u32 = 0xFFFFFFFF;

/// Register width in bits, always within `1..=32`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Width(u32);

impl Width
{
	pub const MAX: u32 = u32::BITS;
	pub const W8: Self = Width(8);
	pub const W32: Self = Width(32);

	pub fn new(bits: u32) -> Result<Self>
	{
		if bits == 0 || bits > Self::MAX
		{
			return Err(Error::Width(bits));
		}
		Ok(Self(bits))
	}

	pub fn get_bits(&self) -> u32
	{
		self.0
	}

	pub fn mask(&self) -> u32
	{
		u32::MAX >> (u32::BITS - self.0)
	}

	pub fn msb(&self) -> u32
	{
		1 << (self.0 - 1)
	}
}

impl TryFrom<u32> for Width
{
	type Error = Error;

	fn try_from(bits: u32) -> Result<Self>
	{
		Self::new(bits)
	}
}

/// Bit-serial CRC step, one input word at a time.
///
/// Models the shift register of the hardware peripheral: the word is XORed
/// into the seed once, then the register is shifted `width` times and
/// reduced by the polynomial whenever the bit shifted out was set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Engine
{
	width: Width,
	poly: u32,
}

impl Engine
{
	pub fn new(width: Width, poly: u32) -> Self
	{
		Self{width, poly: poly & width.mask()}
	}

	/// The peripheral found on STM32F2/F4 (32 bits, [`POLYNOMIAL`]).
	pub fn stm32() -> Self
	{
		Self::new(Width::W32, POLYNOMIAL)
	}

	pub fn get_width(&self) -> Width
	{
		self.width
	}

	pub fn get_polynomial(&self) -> u32
	{
		self.poly
	}

	pub fn step(&self, word: u32, seed: u32) -> u32
	{
		self.step_traced(word, seed, &mut NoTrace)
	}

	pub fn step_traced<T: Trace + ?Sized>(&self, word: u32, seed: u32, trace: &mut T) -> u32
	{
		let mask = self.width.mask();
		let msb = self.width.msb();
		let mut reg = (seed ^ word) & mask;
		trace.record(Step::Seed{initial: seed, input: word, reg});
		for index in 0..self.width.get_bits()
		{
			trace.record(Step::Shift{index, reg});
			if reg & msb != 0
			{
				reg = ((reg << 1) ^ self.poly) & mask;
				trace.record(Step::Reduce{index, reg});
			}
			else {reg = (reg << 1) & mask;}
		}
		reg
	}
}

impl Default for Engine
{
	fn default() -> Self
	{
		Self::stm32()
	}
}

/// One CRC step with every parameter spelled out.
///
/// Fails only if `bits` is not a valid [`Width`]; out of range values for
/// the other arguments are masked to `bits`.
pub fn crc_step(word: u32, poly: u32, seed: u32, bits: u32) -> Result<u32>
{
	Ok(Engine::new(Width::new(bits)?, poly).step(word, seed))
}
