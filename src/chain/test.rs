use std::io;

use super::*;
use crate::crc::{crc_step, POLYNOMIAL, SEED};
use crate::trace::{NoTrace, Step};

fn step(word: u32, seed: u32) -> u32
{
	crc_step(word, POLYNOMIAL, seed, 32).unwrap()
}

#[test]
fn empty_text()
{
	let empty: [&str; 0] = [];
	assert_eq!(chain_text(&empty, &Config::STM32, &mut NoTrace).unwrap(), SEED);
	assert_eq!(chain_text(&[""], &Config::STM32, &mut NoTrace).unwrap(), SEED);
	// seed is handed back untouched, even when wider than the register
	assert_eq!(chain_text(&empty, &Config{bits: 8, ..Config::STM32}, &mut NoTrace).unwrap(), SEED);
}

#[test]
fn text_composition()
{
	let expect = step('b' as u32, step('a' as u32, SEED));
	assert_eq!(chain_text(&["a", "b"], &Config::STM32, &mut NoTrace).unwrap(), expect);
	assert_eq!(chain_text(&["ab"], &Config::STM32, &mut NoTrace).unwrap(), expect);
	assert_eq!(expect, 0x808123DC);
}

#[test]
fn text_vectors()
{
	assert_eq!(chain_text(&["A"], &Config::STM32, &mut NoTrace).unwrap(), 0xF743B0BB);
	assert_eq!(chain_text(&["abc"], &Config::STM32, &mut NoTrace).unwrap(), 0x9C518B2C);
	assert_eq!(chain_text(&["123", "456", "789"], &Config::STM32, &mut NoTrace).unwrap(), 0x1556F485);
	assert_eq!(chain_text(&["hi"], &Config::APP_NOTE_8BIT, &mut NoTrace).unwrap(), 0xD5);
}

#[test]
fn text_unicode()
{
	// one word per character, not per byte
	assert_eq!(text_words(&["é€"]).collect::<Vec<_>>(), [0xE9, 0x20AC]);
	assert_eq!(chain_text(&["é"], &Config::STM32, &mut NoTrace).unwrap(), 0x20640B0D);
	assert_eq!(chain_text(&["é"], &Config::APP_NOTE_8BIT, &mut NoTrace).unwrap(), 0x52);
	assert_eq!(chain_text(&["€"], &Config{bits: 8, poly: 0x07, init: 0x00}, &mut NoTrace).unwrap(), 0x4D);
}

#[test]
fn word_split()
{
	assert_eq!(words(&[]).count(), 0);
	assert_eq!(words(&[0x78, 0x56, 0x34, 0x12]).collect::<Vec<_>>(), [0x12345678]);
	assert_eq!(words(b"hello").collect::<Vec<_>>(), [0x6C6C6568, 0x6F]);
	assert_eq!(words(&[1, 2, 3]).collect::<Vec<_>>(), [0x030201]);
}

#[test]
fn bytes_hardware_vector()
{
	assert_eq!(chain_bytes(&[0x78, 0x56, 0x34, 0x12], &Config::STM32, &mut NoTrace).unwrap(), 0xDF8A8A2B);
	assert_eq!(chain_bytes(b"hello", &Config::STM32, &mut NoTrace).unwrap(), 0x3FB4EF66);
}

#[test]
fn bytes_padding()
{
	let short = chain_bytes(b"A", &Config::STM32, &mut NoTrace).unwrap();
	let long = chain_bytes(b"A\0\0\0", &Config::STM32, &mut NoTrace).unwrap();
	assert_eq!(short, long);
	assert_eq!(short, 0xF743B0BB);
	assert_eq!(chain_bytes(&[], &Config::STM32, &mut NoTrace).unwrap(), SEED);
}

#[test]
fn bytes_manual_fold()
{
	let data: Vec<u8> = (0u8..32).map(|b| b.wrapping_mul(37)).collect();
	let mut crc = SEED;
	for chunk in data.chunks_exact(4)
	{
		crc = step(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]), crc);
	}
	assert_eq!(chain_bytes(&data, &Config::STM32, &mut NoTrace).unwrap(), crc);
}

#[test]
fn bytes_narrow_width()
{
	// the word is still four bytes, only the register shrinks
	assert_eq!(chain_bytes(&[0xFF; 4], &Config::APP_NOTE_8BIT, &mut NoTrace).unwrap(), 0x00);
	assert_eq!(chain_bytes(&[0x80, 0x00, 0x00, 0x80], &Config{bits: 8, poly: 0x07, init: 0x00}, &mut NoTrace).unwrap(), 0x89);
}

#[test]
fn reader()
{
	let crc = chain_reader(io::Cursor::new(b"hello"), &Config::STM32, &mut NoTrace).unwrap();
	assert_eq!(crc, 0x3FB4EF66);
}

struct Broken;

impl Read for Broken
{
	fn read(&mut self, _: &mut [u8]) -> io::Result<usize>
	{
		Err(io::Error::new(io::ErrorKind::Other, "broken"))
	}
}

#[test]
fn reader_error()
{
	assert!(matches!(chain_reader(Broken, &Config::STM32, &mut NoTrace), Err(Error::Read(..))));
	// width is checked first
	assert!(matches!(chain_reader(Broken, &Config{bits: 0, ..Config::STM32}, &mut NoTrace), Err(Error::Width(0))));
}

#[test]
fn bad_width()
{
	assert!(matches!(chain_text(&["a"], &Config{bits: 33, ..Config::STM32}, &mut NoTrace), Err(Error::Width(33))));
	assert!(matches!(chain_bytes(&[], &Config{bits: 0, ..Config::STM32}, &mut NoTrace), Err(Error::Width(0))));
}

#[test]
fn chain_state()
{
	let mut chain = Chain::new(Engine::stm32(), SEED);
	assert_eq!((chain.get_value(), chain.get_count()), (SEED, 0));
	chain.update_words(text_words(&["abc"]), &mut NoTrace);
	assert_eq!((chain.get_value(), chain.get_count()), (0x9C518B2C, 3));
}

#[test]
fn traced_chain()
{
	let mut steps: Vec<Step> = Vec::new();
	chain_text(&["ab"], &Config::APP_NOTE_8BIT, &mut steps).unwrap();
	let seeds: Vec<_> = steps.iter().filter(|s| matches!(s, Step::Seed{..})).collect();
	assert_eq!(seeds.len(), 2);
	assert!(matches!(seeds[0], Step::Seed{initial: 0xFF, input: 0x61, ..}));
	assert_eq!(steps.iter().filter(|s| matches!(s, Step::Shift{..})).count(), 16);
}

#[test]
fn cloned_chain_diverges()
{
	let mut chain = Chain::new(Engine::stm32(), SEED);
	chain.update('a' as u32, &mut NoTrace);
	let mut fork = chain.clone();
	fork.update('b' as u32, &mut NoTrace);
	assert_eq!((chain.get_value(), chain.get_count()), (step('a' as u32, SEED), 1));
	assert_eq!((fork.get_value(), fork.get_count()), (0x808123DC, 2));
}
