// src/readers/linereader.rs

//! Implements a [`LineReader`], the driver of deriving lines of text from a
//! log file.
//!
//! Lines are decoded permissively; invalid UTF-8 byte sequences become the
//! replacement character `U+FFFD` so a malformed log never stops the read.

use std::fmt;
use std::io::{
    BufRead,
    BufReader,
    Error,
    ErrorKind,
    Result,
};

#[allow(unused_imports)]
use ::si_trace_print::{
    defn,
    defo,
    defx,
    defñ,
};

use crate::common::{
    CRu8,
    Count,
    FPath,
    File,
    FileMetadata,
    FileOpenOptions,
    FileSz,
    NLu8,
    ResultFind,
};
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;
use crate::readers::helpers::fpath_to_path;

/// Initial capacity of the line buffer, grown as needed.
pub const LINE_BUFFER_SZ: usize = 1024;

/// Result of [`LineReader::next_line`].
pub type ResultNextLine = ResultFind<String, Error>;

/// A specialized reader that reads one `String` line at a time from a file.
///
/// _This is not a rust "Reader"; it does not implement trait [`Read`]._
///
/// [`Read`]: std::io::Read
pub struct LineReader {
    path: FPath,
    filesz: FileSz,
    reader: BufReader<File>,
    /// reused across calls to `next_line`
    buffer: Vec<u8>,
    /// `Count` of lines returned
    lines_read: Count,
    /// `Count` of bytes read, including line terminators
    bytes_read: Count,
    /// `Count` of lines that had invalid UTF-8 replaced
    lines_lossy: Count,
}

impl fmt::Debug for LineReader {
    fn fmt(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.debug_struct("LineReader")
            .field("path", &self.path)
            .field("filesz", &self.filesz)
            .field("lines_read", &self.lines_read)
            .field("bytes_read", &self.bytes_read)
            .field("lines_lossy", &self.lines_lossy)
            .finish()
    }
}

/// Read bytes into `buffer` up to the next line end, which is any one of
/// `"\n"`, `"\r\n"`, or a lone `"\r"`. The line end is consumed but not
/// copied into `buffer`.
///
/// Returns the count of bytes consumed, `0` at the end of the file.
pub fn read_line_universal<R: BufRead>(
    reader: &mut R,
    buffer: &mut Vec<u8>,
) -> Result<usize> {
    let mut read: usize = 0;
    loop {
        let available: &[u8] = match reader.fill_buf() {
            Ok(val) => val,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if available.is_empty() {
            return Ok(read);
        }
        match available
            .iter()
            .position(|b| *b == NLu8 || *b == CRu8)
        {
            Some(at) => {
                let terminator: u8 = available[at];
                buffer.extend_from_slice(&available[..at]);
                reader.consume(at + 1);
                read += at + 1;
                if terminator == CRu8 {
                    // "\r\n" may straddle two fills
                    let next_is_nl: bool = loop {
                        match reader.fill_buf() {
                            Ok(next) => break next.first() == Some(&NLu8),
                            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                            Err(err) => return Err(err),
                        }
                    };
                    if next_is_nl {
                        reader.consume(1);
                        read += 1;
                    }
                }
                return Ok(read);
            }
            None => {
                let len: usize = available.len();
                buffer.extend_from_slice(available);
                reader.consume(len);
                read += len;
            }
        }
    }
}

impl LineReader {
    /// Open the file at `path` for reading.
    ///
    /// The returned `Error` names the `path`.
    pub fn new(path: FPath) -> Result<LineReader> {
        defn!("({:?})", path);
        let mut open_options = FileOpenOptions::new();
        let file: File = match open_options
            .read(true)
            .open(fpath_to_path(&path))
        {
            Ok(val) => val,
            Err(err) => {
                defx!("open error {}", err);
                return Err(Error::new(err.kind(), format!("{} for file {:?}", err, path)));
            }
        };
        let metadata: FileMetadata = match file.metadata() {
            Ok(val) => val,
            Err(err) => {
                defx!("metadata error {}", err);
                return Err(Error::new(err.kind(), format!("{} for file {:?}", err, path)));
            }
        };
        if metadata.is_dir() {
            defx!("is a directory");
            return Err(Error::new(ErrorKind::InvalidInput, format!("path is a directory {:?}", path)));
        }
        let filesz: FileSz = metadata.len();
        defx!("filesz {}", filesz);

        Ok(LineReader {
            path,
            filesz,
            reader: BufReader::new(file),
            buffer: Vec::with_capacity(LINE_BUFFER_SZ),
            lines_read: 0,
            bytes_read: 0,
            lines_lossy: 0,
        })
    }

    /// Read the next line, without its line terminator.
    ///
    /// A line ends at `"\n"`, `"\r\n"`, or a lone `"\r"`.
    ///
    /// A final line without a terminator is still returned. Returns
    /// [`Done`] at the end of the file.
    ///
    /// [`Done`]: ResultFind::Done
    pub fn next_line(&mut self) -> ResultNextLine {
        self.buffer.clear();
        let read: usize = match read_line_universal(&mut self.reader, &mut self.buffer) {
            Ok(val) => val,
            Err(err) => {
                defñ!("read_line_universal error {}", err);
                return ResultFind::Err(Error::new(err.kind(), format!("{} for file {:?}", err, self.path)));
            }
        };
        if read == 0 {
            defñ!("Done; lines_read {}", self.lines_read);
            return ResultFind::Done;
        }
        self.bytes_read += read as Count;
        self.lines_read += 1;
        let line: String = match std::str::from_utf8(&self.buffer) {
            Ok(s) => s.to_string(),
            Err(_) => {
                self.lines_lossy += 1;
                String::from_utf8_lossy(&self.buffer).into_owned()
            }
        };
        defñ!("line {}: {:?}", self.lines_read, str_to_String_noraw(&line));

        ResultFind::Found(line)
    }

    pub fn path(&self) -> &FPath {
        &self.path
    }

    /// File size in bytes at the time of opening.
    pub const fn filesz(&self) -> FileSz {
        self.filesz
    }

    pub const fn lines_read(&self) -> Count {
        self.lines_read
    }

    pub const fn bytes_read(&self) -> Count {
        self.bytes_read
    }

    pub const fn lines_lossy(&self) -> Count {
        self.lines_lossy
    }
}

impl Iterator for LineReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_line() {
            ResultFind::Found(line) => Some(Ok(line)),
            ResultFind::Done => None,
            ResultFind::Err(err) => Some(Err(err)),
        }
    }
}
