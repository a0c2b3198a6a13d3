//! Output sinks with a declared text encoding.

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};

use smol_str::SmolStr;

use crate::base::constants::DEFAULT_ENCODING;

/// A byte sink that knows the name of the encoding it expects.
///
/// The name is written into the document preamble; the bytes themselves are
/// always produced as UTF-8.
pub trait OutputSink: Write {
    fn encoding(&self) -> &str {
        DEFAULT_ENCODING
    }
}

impl OutputSink for Vec<u8> {}

impl OutputSink for File {}

impl OutputSink for Stdout {}

impl<W: OutputSink> OutputSink for BufWriter<W> {
    fn encoding(&self) -> &str {
        self.get_ref().encoding()
    }
}

impl<W: OutputSink + ?Sized> OutputSink for &mut W {
    fn encoding(&self) -> &str {
        (**self).encoding()
    }
}

/// Wraps a writer and declares a different encoding name for it.
#[derive(Debug)]
pub struct Encoded<W> {
    inner: W,
    encoding: SmolStr,
}

impl<W: Write> Encoded<W> {
    pub fn new(inner: W, encoding: impl Into<SmolStr>) -> Self {
        Self {
            inner,
            encoding: encoding.into(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for Encoded<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<W: Write> OutputSink for Encoded<W> {
    fn encoding(&self) -> &str {
        &self.encoding
    }
}
