// src/common.rs
//
// common imports, type aliases, and other globals (avoids circular imports)

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// file-handling
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub use std::fs::File;

/// `F`ake `Path` or `F`ile `Path`
pub type FPath = String;
pub type FileMetadata = std::fs::Metadata;
pub type FileOpenOptions = std::fs::OpenOptions;
/// File size in bytes
pub type FileSz = u64;

/// A general-purpose counting type, large enough for any file.
pub type Count = u64;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// custom Results enums for *Reader functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `Result` Extended for reader functions that step through a file.
///
/// Similar to [`std::result::Result`] but with an additional "done" state
/// for the end of the file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResultFind<T, E> {
    /// Contains the success data
    Found(T),

    /// Nothing more to return, and no errors happened (end of file)
    Done,

    /// Contains the error value, something bad happened
    Err(E),
}

impl<T, E> ResultFind<T, E> {
    /// Returns `true` if the result is [`Done`].
    ///
    /// [`Done`]: ResultFind::Done
    #[inline(always)]
    pub const fn is_done(&self) -> bool {
        matches!(*self, ResultFind::Done)
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Lines and LineReader
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// NewLine as str
#[allow(non_upper_case_globals)]
pub const NLs: &str = "\n";
/// Single-byte newLine char as u8
#[allow(non_upper_case_globals)]
pub const NLu8: u8 = 10;
/// Single-byte carriage return char as u8
#[allow(non_upper_case_globals)]
pub const CRu8: u8 = 13;
