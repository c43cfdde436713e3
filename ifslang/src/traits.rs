//! Traits for reading the XML export and writing generated language files.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing a resource from one file.
///
/// # Example
///
/// ```rust,no_run
/// use ifslang::{ResourceTree, traits::Parser};
/// let tree = ResourceTree::read_from("translationDb_ActivityEstimate-Cust.xml")?;
/// println!("{} logical units", tree.logical_units.len());
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}

/// A trait for serializing a generated `.lng`/`.trs` file.
///
/// Implementors only provide [`Encoder::encode`]; writing to a file or any
/// other sink goes through the provided methods, which never add a BOM and
/// never translate line endings.
pub trait Encoder {
    /// Render the complete file text (header and blocks).
    fn encode(&self) -> String;

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(self.encode().as_bytes())?;
        writer.flush().map_err(Error::Io)
    }

    /// Write to file path, creating missing parent directories.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.to_writer(writer)
    }
}
