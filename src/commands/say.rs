use std::io::Write;

use tracing::debug;

use crate::error::CommandResult;
use crate::greeter::Greeter;

/// Writes one greeting per line for each name, preserving input order.
pub fn run<W: Write>(greeter: &Greeter, names: &[String], out: &mut W) -> CommandResult<()> {
    for name in names {
        let greeting = greeter.say(name);
        debug!(%name, "greeting");
        writeln!(out, "{greeting}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::error::GreeterError;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn greets_each_name_in_order() {
        let mut out = Vec::new();
        run(&Greeter::new(), &names(&["alice", "bob"]), &mut out).expect("write succeeds");
        assert_eq!(String::from_utf8(out).unwrap(), "hello, alice\nhello, bob\n");
    }

    #[test]
    fn writes_a_line_for_empty_name() {
        let mut out = Vec::new();
        run(&Greeter::new(), &names(&[""]), &mut out).expect("write succeeds");
        assert_eq!(String::from_utf8(out).unwrap(), "hello, \n");
    }

    #[test]
    fn surfaces_write_failures() {
        let err = run(&Greeter::new(), &names(&["alice"]), &mut BrokenPipe).unwrap_err();
        assert!(matches!(err, GreeterError::Output(ref source) if source.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(err.to_string(), "failed to write greeting");
    }
}
