use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, ValueEnum};
use tracing::debug;

use stcrc::config::parse_int;
use stcrc::demo::demonstration;
use stcrc::trace::{LogTrace, Trace, WriteTrace};
use stcrc::{chain_file, chain_text, Config};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset
{
	Stm32,
	#[value(name = "app-note-8bit")]
	AppNote8Bit,
}

impl Preset
{
	fn config(self) -> Config
	{
		match self
		{
			Preset::Stm32 => Config::STM32,
			Preset::AppNote8Bit => Config::APP_NOTE_8BIT,
		}
	}
}

#[derive(Debug, Parser)]
#[command(name = "stcrc", version)]
#[command(about = "Calculate a CRC checksum as implemented in the STM32F2 and STM32F4 hardware \
	(on these controllers the CRC module cannot be configured). Pass the data as command line arguments \
	to calculate the checksum with the same algorithm as the STM32Fx modules.")]
#[command(after_help = "The default values equal the ones embedded in the STM hardware modules.")]
struct Cli
{
	/// Characters that will be treated as numbers
	data: Vec<String>,
	/// Display a demonstration of the stm32f4 crc algorithm
	#[arg(short, long)]
	demo: bool,
	/// Bit length of the checksum [default: 32]
	#[arg(short, long, value_name = "BITS", env = "STCRC_BITS", value_parser = parse_int)]
	bits: Option<u32>,
	/// CRC polynomial [default: 0x04C11DB7]
	#[arg(short, long, value_name = "POLY", env = "STCRC_POLY", value_parser = parse_int)]
	poly: Option<u32>,
	/// Initial CRC value [default: 0xFFFFFFFF]
	#[arg(short, long, value_name = "VALUE", env = "STCRC_INIT", value_parser = parse_int)]
	init: Option<u32>,
	/// Defaults for options that are not given
	#[arg(long, value_enum, default_value_t = Preset::Stm32)]
	preset: Preset,
	/// Calculate the checksum of a file's content (4 bytes per word) instead of DATA
	#[arg(short, long, value_name = "PATH")]
	file: Option<PathBuf>,
	/// Print every register step
	#[arg(long)]
	verbose: bool,
}

impl Cli
{
	fn config(&self) -> Config
	{
		let base = self.preset.config();
		Config
		{
			bits: self.bits.unwrap_or(base.bits),
			poly: self.poly.unwrap_or(base.poly),
			init: self.init.unwrap_or(base.init),
		}
	}

	fn compute(&self, config: &Config, trace: &mut dyn Trace) -> anyhow::Result<u32>
	{
		let crc = match &self.file
		{
			Some(path) => chain_file(path, config, trace).context("file checksum failed")?,
			None => chain_text(self.data.as_slice(), config, trace).context("text checksum failed")?,
		};
		Ok(crc)
	}
}

fn init_tracing()
{
	use tracing_subscriber::{fmt, prelude::*, EnvFilter};

	tracing_subscriber::registry()
		.with(fmt::layer().with_writer(io::stderr))
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stcrc=warn")))
		.init();
}

pub fn main() -> anyhow::Result<()>
{
	let cli = Cli::parse();
	init_tracing();

	if cli.demo
	{
		demonstration(io::stdout().lock()).context("could not print demonstration")?;
		return Ok(());
	}
	if cli.file.is_none() && cli.data.is_empty()
	{
		Cli::command().print_help()?;
		return Ok(());
	}

	let config = cli.config();
	debug!(?config, file = ?cli.file, tokens = cli.data.len(), "computing checksum");
	let crc = if cli.verbose
	{
		let mut trace = WriteTrace::new(io::stdout().lock());
		let crc = cli.compute(&config, &mut trace)?;
		trace.finish().context("could not print trace")?;
		crc
	}
	else {cli.compute(&config, &mut LogTrace)?};
	println!("{crc:#x}");
	Ok(())
}

