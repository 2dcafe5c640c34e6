use std::io::{self, Write};

use crate::config::Config;
use crate::trace::WriteTrace;

/// Prints the two worked examples: the 8-bit application note setup with
/// every register step, then a single word through the STM32 peripheral.
pub fn demonstration<W: Write>(mut out: W) -> io::Result<()>
{
	writeln!(out, "stm - crc tool demonstration\n")?;
	writeln!(out, "start first test with:\n")?;
	let note = Config::APP_NOTE_8BIT;
	let input = 0xC1;
	writeln!(out, "input_data = {input:#04X}")?;
	writeln!(out, "poly = {:#04X}", note.poly)?;
	writeln!(out, "initial_crc = {:#04X}", note.init)?;
	writeln!(out, "(configuration as in the stm crc application note, algorithm set to 8 bit mode)")?;
	let engine = note.engine().map_err(io::Error::other)?;
	let mut trace = WriteTrace::new(&mut out);
	let crc = engine.step_traced(input, note.init, &mut trace);
	trace.finish()?;
	writeln!(out, "computed crc = {crc:#x}")?;

	writeln!(out, "\n\nstart another test with:\n")?;
	let stm = Config::STM32;
	let input = 0x41;
	writeln!(out, "input_data = {input:#010X}")?;
	writeln!(out, "poly = {:#010X} (in stm32f4 hardware embedded)", stm.poly)?;
	writeln!(out, "initial_crc = {:#010X} (in stm32f4 hardware embedded)", stm.init)?;
	let crc = stm.engine().map_err(io::Error::other)?.step(input, stm.init);
	writeln!(out, "computed crc = {crc:#x}")
}
