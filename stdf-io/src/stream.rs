//! The stream handle and its four backends.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use bzip2::bufread::BzDecoder;
use flate2::bufread::GzDecoder;
use log::*;
use zip::ZipArchive;

use stdf::{Endianness, RecordHeader};

use crate::error::Error;


/// How the bytes of a datalog are packaged on disk.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Format {

    /// A bare STDF file.
    Plain,

    /// A gzip stream (`.gz`).
    Gzip,

    /// A bzip2 stream (`.bz` or `.bz2`).
    Bzip2,

    /// The first entry of a zip archive (`.zip`).
    Zip,
}

impl Format {

    /// Sniffs the format from the path's final extension,
    /// case-insensitively. Unknown or missing extensions mean an
    /// uncompressed file.
    pub fn from_path(path: &Path) -> Self {
        let ext = path.extension()
                      .and_then(|e| e.to_str())
                      .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("gz")           => Self::Gzip,
            Some("bz" | "bz2")   => Self::Bzip2,
            Some("zip")          => Self::Zip,
            _                    => Self::Plain,
        }
    }
}


/// The closed set of stream backends. Decompressors wrap the buffered file
/// directly; the zip backend holds the first entry's bytes, decompressed at
/// open time, because the archive reader cannot be stored alongside the
/// archive it borrows — and the parser only ever reads forward anyway.
enum Stream {
    Plain(BufReader<File>),
    Gzip(GzDecoder<BufReader<File>>),
    Bzip2(BzDecoder<BufReader<File>>),
    Zip(Cursor<Vec<u8>>),
}

impl Stream {
    fn open(path: &Path, format: Format) -> Result<Self, Error> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        Ok(match format {
            Format::Plain  => Self::Plain(reader),
            Format::Gzip   => Self::Gzip(GzDecoder::new(reader)),
            Format::Bzip2  => Self::Bzip2(BzDecoder::new(reader)),
            Format::Zip    => Self::Zip(Cursor::new(first_zip_entry(reader)?)),
        })
    }
}

impl Read for Stream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Self::Plain(r)  => r.read(buf),
            Self::Gzip(r)   => r.read(buf),
            Self::Bzip2(r)  => r.read(buf),
            Self::Zip(r)    => r.read(buf),
        }
    }
}

fn first_zip_entry(reader: BufReader<File>) -> Result<Vec<u8>, Error> {
    let mut archive = ZipArchive::new(reader)?;
    if archive.len() == 0 {
        return Err(Error::InvalidStdf(String::from("zip archive has no entries")));
    }

    let mut entry = archive.by_index(0)?;
    debug!("Reading zip entry {:?} ({} bytes)", entry.name(), entry.size());

    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes)?;
    Ok(bytes)
}


/// A sequential-read handle over a datalog.
///
/// The contract is deliberately small: open, read exactly N bytes, skip
/// forward, and reopen from the start. There is no seek — two of the four
/// backends cannot seek efficiently, and the record format never needs it.
pub struct StdfFile {
    path: PathBuf,
    format: Format,
    stream: Stream,
}

impl StdfFile {

    /// Opens the datalog at the given path, sniffing its compression format
    /// from the extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let format = Format::from_path(&path);
        info!("Opening {:?} as {:?}", path, format);

        let stream = Stream::open(&path, format)?;
        Ok(Self { path, format, stream })
    }

    /// The path the handle was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The compression format the handle sniffed.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Reads exactly `buf.len()` bytes into the buffer. A short read —
    /// including one of zero bytes — reports `Error::Eof`; reading into an
    /// empty buffer succeeds, which zero-length record payloads rely on.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        if buf.is_empty() {
            return Ok(());
        }

        self.stream.read_exact(buf)?;
        Ok(())
    }

    /// Skips `n` bytes by draining them into a scratch buffer. Implemented
    /// as a read because not every backend can seek.
    pub fn skip(&mut self, n: usize) -> Result<(), Error> {
        let mut scratch = [0_u8; 4096];
        let mut left = n;

        while left > 0 {
            let take = left.min(scratch.len());
            self.read_exact(&mut scratch[.. take])?;
            left -= take;
        }
        Ok(())
    }

    /// Reads and parses one four-byte record header.
    pub fn read_header(&mut self, order: Endianness) -> Result<RecordHeader, Error> {
        let mut buf = [0_u8; 4];
        self.read_exact(&mut buf)?;
        Ok(RecordHeader::from_bytes(buf, order))
    }

    /// Returns the handle to offset zero, for a second pass over the
    /// records. The decompressing backends cannot seek, so this closes and
    /// reopens the underlying file; the zip backend just rewinds its
    /// decompressed buffer.
    pub fn reopen(&mut self) -> Result<(), Error> {
        debug!("Reopening {:?} from the start", self.path);

        match &mut self.stream {
            Stream::Plain(reader) => {
                reader.seek(SeekFrom::Start(0))?;
            }
            Stream::Zip(cursor) => {
                cursor.set_position(0);
            }
            _ => {
                self.stream = Stream::open(&self.path, self.format)?;
            }
        }
        Ok(())
    }
}
