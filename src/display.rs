use crate::types::CommandOutput;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Failed to relay stdout")]
    Stdout(#[source] io::Error),

    #[error("Failed to relay stderr")]
    Stderr(#[source] io::Error),
}

/// Relay captured output byte for byte: stdout to `out`, stderr to `err`
pub fn relay_output(
    output: &CommandOutput,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), RelayError> {
    out.write_all(&output.stdout)
        .and_then(|()| out.flush())
        .map_err(RelayError::Stdout)?;

    err.write_all(&output.stderr)
        .and_then(|()| err.flush())
        .map_err(RelayError::Stderr)?;

    Ok(())
}

pub fn print_output(output: &CommandOutput) -> Result<(), RelayError> {
    relay_output(output, &mut io::stdout().lock(), &mut io::stderr().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_relay_is_verbatim() {
        let output = CommandOutput {
            status: Some(1),
            stdout: b"++ 3dMEMA: AFNI version\n".to_vec(),
            stderr: b"** ERROR: bad input\n".to_vec(),
        };
        let mut out = Vec::new();
        let mut err = Vec::new();

        relay_output(&output, &mut out, &mut err).unwrap();

        assert_eq!(out, output.stdout);
        assert_eq!(err, output.stderr);
    }

    #[test]
    fn test_relay_keeps_invalid_utf8() {
        let output = CommandOutput {
            status: Some(0),
            stdout: vec![b'a', 0xff, b'b'],
            stderr: vec![0xc3, 0x28],
        };
        let mut out = Vec::new();
        let mut err = Vec::new();

        relay_output(&output, &mut out, &mut err).unwrap();

        assert_eq!(out, [b'a', 0xff, b'b']);
        assert_eq!(err, [0xc3_u8, 0x28]);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_names_the_stream() {
        let output = CommandOutput {
            status: Some(0),
            stdout: b"x".to_vec(),
            stderr: Vec::new(),
        };

        let result = relay_output(&output, &mut Vec::new(), &mut BrokenPipe);
        assert!(result.is_ok(), "empty stderr never touches the writer");

        let result = relay_output(&output, &mut BrokenPipe, &mut Vec::new());
        assert_matches!(result, Err(RelayError::Stdout(_)));
    }
}
