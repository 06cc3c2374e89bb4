use std::io::Write;

use tracing::error;

use crate::error::Result;
use crate::sample::TscSample;

/// The line printed for `sample`: decimal digits and a trailing newline.
pub fn format_line(sample: TscSample) -> String {
    format!("{sample}\n")
}

/// Write `sample` as a single line and flush.
pub fn write_sample<W: Write>(out: &mut W, sample: TscSample) -> Result<()> {
    let res = out
        .write_all(format_line(sample).as_bytes())
        .and_then(|()| out.flush());
    if let Err(err) = &res {
        error!(%err, tsc = sample.get(), "could not write sample");
    }
    Ok(res?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RdtscError;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_single_line() {
        let mut buf = Vec::new();
        write_sample(&mut buf, TscSample::from(123_456_789_012_345)).unwrap();
        assert_eq!(buf, b"123456789012345\n");
    }

    #[test]
    fn test_format_matches_write() {
        let sample = TscSample::from(u64::MAX);
        let mut buf = Vec::new();
        write_sample(&mut buf, sample).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format_line(sample));
    }

    #[test]
    fn test_write_error_surfaces() {
        let err = write_sample(&mut BrokenPipe, TscSample::from(1)).unwrap_err();
        match err {
            RdtscError::Write(err) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
        }
    }
}
