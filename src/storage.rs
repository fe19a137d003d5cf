//! Binary I/O for precomputed tables
//!
//! Format: an 8-byte header (magic "ITBL" + version) followed by a kind tag
//! and length-prefixed records, all little-endian. Words are stored as
//! u16 length + ASCII bytes, patterns as u16 length + one color byte per
//! position. The blobs are opaque: nothing in them records which
//! vocabularies they were built from, so the caller must guarantee a loaded
//! pair matches the vocabularies currently in use.

use crate::core::{Color, Pattern, Word};
use crate::error::{Error, Result};
use crate::solver::{InformationTable, PatternFrequencyTable, TableSource};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Magic bytes "ITBL" identifying an infordle table file
const TABLE_MAGIC: u32 = u32::from_le_bytes(*b"ITBL");
const TABLE_VERSION: u32 = 1;

const KIND_FREQUENCIES: u8 = 1;
const KIND_INFORMATION: u8 = 2;

/// Resolve a precomputed table pair into a [`TableSource`]
///
/// Both paths or neither must be provided; the tables are only meaningful
/// as a pair.
///
/// # Errors
/// Returns [`Error::PartialCacheMismatch`] when exactly one path is given,
/// and propagates load failures otherwise.
pub fn load_table_source(
    frequencies_path: Option<&Path>,
    information_path: Option<&Path>,
) -> Result<TableSource> {
    match (frequencies_path, information_path) {
        (None, None) => Ok(TableSource::Compute),
        (Some(frequencies), Some(information)) => Ok(TableSource::Prebuilt {
            frequencies: load_frequencies(frequencies)?,
            information: load_information(information)?,
        }),
        _ => Err(Error::PartialCacheMismatch),
    }
}

/// Write a pattern frequency table to `path`
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn save_frequencies(path: &Path, table: &PatternFrequencyTable) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_header(&mut writer, KIND_FREQUENCIES)?;

    write_u32(&mut writer, table.len() as u32)?;
    for (word, buckets) in table.as_map() {
        write_word(&mut writer, word)?;
        write_u32(&mut writer, buckets.len() as u32)?;
        for (pattern, bucket) in buckets {
            write_pattern(&mut writer, pattern)?;
            write_u32(&mut writer, bucket.len() as u32)?;
            for member in bucket {
                write_word(&mut writer, member)?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Read a pattern frequency table written by [`save_frequencies`]
///
/// # Errors
/// Returns [`Error::InvalidCache`] on a wrong magic, version, or kind tag,
/// or on structurally corrupt records; I/O failures are propagated.
pub fn load_frequencies(path: &Path) -> Result<PatternFrequencyTable> {
    let mut reader = BufReader::new(File::open(path)?);
    read_header(&mut reader, KIND_FREQUENCIES)?;

    let word_count = read_u32(&mut reader)?;
    let mut table: FxHashMap<Word, FxHashMap<Pattern, FxHashSet<Word>>> = FxHashMap::default();
    for _ in 0..word_count {
        let word = read_word(&mut reader)?;
        let pattern_count = read_u32(&mut reader)?;

        let mut buckets: FxHashMap<Pattern, FxHashSet<Word>> = FxHashMap::default();
        for _ in 0..pattern_count {
            let pattern = read_pattern(&mut reader)?;
            let bucket_size = read_u32(&mut reader)?;

            let mut bucket = FxHashSet::default();
            for _ in 0..bucket_size {
                bucket.insert(read_word(&mut reader)?);
            }
            buckets.insert(pattern, bucket);
        }
        table.insert(word, buckets);
    }

    Ok(PatternFrequencyTable::from_map(table))
}

/// Write an information table to `path`
///
/// # Errors
/// Returns an I/O error if the file cannot be created or written.
pub fn save_information(path: &Path, table: &InformationTable) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_header(&mut writer, KIND_INFORMATION)?;

    write_u32(&mut writer, table.len() as u32)?;
    for (word, bits) in table.as_map() {
        write_word(&mut writer, word)?;
        writer.write_all(&bits.to_le_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Read an information table written by [`save_information`]
///
/// # Errors
/// Returns [`Error::InvalidCache`] on a wrong magic, version, or kind tag,
/// or on structurally corrupt records; I/O failures are propagated.
pub fn load_information(path: &Path) -> Result<InformationTable> {
    let mut reader = BufReader::new(File::open(path)?);
    read_header(&mut reader, KIND_INFORMATION)?;

    let count = read_u32(&mut reader)?;
    let mut scores: FxHashMap<Word, f64> = FxHashMap::default();
    for _ in 0..count {
        let word = read_word(&mut reader)?;
        let mut buf = [0u8; 8];
        reader.read_exact(&mut buf)?;
        scores.insert(word, f64::from_le_bytes(buf));
    }

    Ok(InformationTable::from_map(scores))
}

fn write_header<W: Write>(writer: &mut W, kind: u8) -> Result<()> {
    writer.write_all(&TABLE_MAGIC.to_le_bytes())?;
    writer.write_all(&TABLE_VERSION.to_le_bytes())?;
    writer.write_all(&[kind])?;
    Ok(())
}

fn read_header<R: Read>(reader: &mut R, expected_kind: u8) -> Result<()> {
    let magic = read_u32(reader)?;
    if magic != TABLE_MAGIC {
        return Err(Error::InvalidCache(format!(
            "bad magic 0x{magic:08x}, expected 0x{TABLE_MAGIC:08x}"
        )));
    }

    let version = read_u32(reader)?;
    if version != TABLE_VERSION {
        return Err(Error::InvalidCache(format!(
            "unsupported version {version}, expected {TABLE_VERSION}"
        )));
    }

    let mut kind = [0u8; 1];
    reader.read_exact(&mut kind)?;
    if kind[0] != expected_kind {
        return Err(Error::InvalidCache(format!(
            "wrong table kind {}, expected {expected_kind}",
            kind[0]
        )));
    }
    Ok(())
}

fn write_u32<W: Write>(writer: &mut W, value: u32) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn write_word<W: Write>(writer: &mut W, word: &Word) -> Result<()> {
    writer.write_all(&(word.len() as u16).to_le_bytes())?;
    writer.write_all(word.bytes())?;
    Ok(())
}

fn read_word<R: Read>(reader: &mut R) -> Result<Word> {
    let mut len_buf = [0u8; 2];
    reader.read_exact(&mut len_buf)?;
    let len = u16::from_le_bytes(len_buf) as usize;

    let mut bytes = vec![0u8; len];
    reader.read_exact(&mut bytes)?;
    let text = String::from_utf8(bytes)
        .map_err(|_| Error::InvalidCache("word record is not valid UTF-8".to_string()))?;
    Word::new(text).map_err(|e| Error::InvalidCache(format!("bad word record: {e}")))
}

fn write_pattern<W: Write>(writer: &mut W, pattern: &Pattern) -> Result<()> {
    writer.write_all(&(pattern.len() as u16).to_le_bytes())?;
    for &color in pattern.colors() {
        writer.write_all(&[color.to_byte()])?;
    }
    Ok(())
}

fn read_pattern<R: Read>(reader: &mut R) -> Result<Pattern> {
    let mut len_buf = [0u8; 2];
    reader.read_exact(&mut len_buf)?;
    let len = u16::from_le_bytes(len_buf) as usize;

    let mut bytes = vec![0u8; len];
    reader.read_exact(&mut bytes)?;

    let colors = bytes
        .iter()
        .map(|&byte| {
            Color::from_byte(byte)
                .ok_or_else(|| Error::InvalidCache(format!("bad color byte {byte}")))
        })
        .collect::<Result<Vec<Color>>>()?;
    Ok(Pattern::from_colors(colors))
}
