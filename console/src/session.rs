use iris_match::{enroll, recognize, IdentityStore, MatchError};

use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Enrollment,
    Recognition,
}

/// Interactive enroll-then-recognize session over any line-based input.
pub struct Session<R, W> {
    input: R,
    output: W,
    store: IdentityStore,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            store: IdentityStore::new(),
        }
    }

    /// Run both phases. Closing the input ends the session early but cleanly.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "=====\nEnrollment phase:")?;
        if self.execute()? {
            writeln!(self.output, "=====\nRecognition phase:")?;
            if self.execute()? {
                writeln!(self.output, "Goodbye!")?;
            }
        }
        self.output.flush()
    }

    /// Repeat the current phase until the user says no.
    /// Returns `false` if the input ran out first.
    fn execute(&mut self) -> io::Result<bool> {
        let phase = if self.store.is_empty() {
            Phase::Enrollment
        } else {
            Phase::Recognition
        };
        debug!(?phase, enrolled = self.store.len(), "starting phase");

        'phase: loop {
            write!(self.output, "Name: ")?;
            let Some(name) = self.request_identity(phase)? else {
                return Ok(false);
            };

            write!(self.output, "Iris code (in hex please): ")?;
            loop {
                let Some(raw) = self.request_code()? else {
                    return Ok(false);
                };
                match self.apply(phase, &name, &raw) {
                    Ok(text) => {
                        writeln!(self.output, "{}", text)?;
                        break;
                    }
                    Err(MatchError::Decode(e)) => {
                        debug!(raw = %raw, error = %e, "rejected iris code");
                        write!(self.output, "Invalid input! \nPlease enter a hex number (less than 63 bits): ")?;
                    }
                    Err(MatchError::NotFound(_)) => {
                        writeln!(self.output, "Sorry, name not found.")?;
                        continue 'phase;
                    }
                }
            }

            write!(self.output, "More data? (y/n): ")?;
            match self.read_line()? {
                None => return Ok(false),
                Some(answer) if answer.eq_ignore_ascii_case("n") => return Ok(true),
                Some(_) => {}
            }
        }
    }

    fn apply(&mut self, phase: Phase, name: &str, raw: &str) -> Result<String, MatchError> {
        match phase {
            Phase::Enrollment => enroll(&mut self.store, name, raw).map(|r| r.to_string()),
            Phase::Recognition => recognize(&self.store, name, raw).map(|r| r.to_string()),
        }
    }

    /// Read a name, re-prompting on blank input and, when recognizing, on
    /// names that were never enrolled.
    fn request_identity(&mut self, phase: Phase) -> io::Result<Option<String>> {
        loop {
            let Some(name) = self.read_line()? else {
                return Ok(None);
            };
            if name.trim().is_empty() {
                write!(self.output, "Empty input! \nPlease enter a name: ")?;
            } else if phase == Phase::Recognition && !self.store.is_known(&name) {
                write!(self.output, "Sorry, name not found. \nPlease enter a name again: ")?;
            } else {
                return Ok(Some(name));
            }
        }
    }

    fn request_code(&mut self) -> io::Result<Option<String>> {
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and fail validation like any other bad input.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, usize) {
        run_bytes(script.as_bytes())
    }

    fn run_bytes(script: &[u8]) -> (String, usize) {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new(script), &mut output);
        session.run().unwrap();
        let enrolled = session.store.len();
        (String::from_utf8(output).unwrap(), enrolled)
    }

    #[test]
    fn test_full_session() {
        let (out, enrolled) = run_script("Alice\nF0\ny\nBob\nFF\nn\nAlice\nF0\ny\nBob\n0\nn\n");

        assert_eq!(enrolled, 2);
        assert!(out.starts_with("=====\nEnrollment phase:\nName: "));
        assert!(out.contains(">> Alice's iris code (in binary) = 11110000 recorded\n"));
        assert!(out.contains(">> Bob's iris code (in binary) = 11111111 recorded\n"));
        assert!(out.contains("=====\nRecognition phase:\n"));
        assert!(out.contains("Hamming Distance = 0.00\nAccess granted for Alice\n"));
        assert!(out.contains("Hamming Distance = 1.00\nAccess denied for Bob\n"));
        assert!(out.ends_with("More data? (y/n): Goodbye!\n"));
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let (out, _) = run_script("\n   \nAlice\nG1\n\nF0\nN\nCarol\nAlice\nF3\nn\n");

        assert_eq!(out.matches("Empty input! \nPlease enter a name: ").count(), 2);
        assert_eq!(out.matches("Please enter a hex number (less than 63 bits): ").count(), 2);
        assert!(out.contains("Sorry, name not found. \nPlease enter a name again: "));
        assert!(out.contains("Hamming Distance = 0.25\nAccess granted for Alice\n"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_utf8_code_is_reprompted() {
        let (out, enrolled) = run_bytes(b"Alice\n\xff\xfe\nF0\nn\nAlice\nF0\nn\n");

        assert_eq!(enrolled, 1);
        assert_eq!(out.matches("Invalid input! \nPlease enter a hex number (less than 63 bits): ").count(), 1);
        assert!(out.contains(">> Alice's iris code (in binary) = 11110000 recorded\n"));
        assert!(out.contains("Access granted for Alice"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_windows_line_endings() {
        let (out, enrolled) = run_script("Alice\r\nF0\r\nn\r\nAlice\r\nF0\r\nn\r\n");

        assert_eq!(enrolled, 1);
        assert!(out.contains("Access granted for Alice"));
    }

    #[test]
    fn test_closed_input_ends_quietly() {
        let (out, enrolled) = run_script("Alice\nF0\n");

        assert_eq!(enrolled, 1);
        assert!(!out.contains("Recognition phase"));
        assert!(!out.contains("Goodbye!"));

        let (out, enrolled) = run_script("");
        assert_eq!(enrolled, 0);
        assert_eq!(out, "=====\nEnrollment phase:\nName: ");
    }
}
