use clap::Args;
use std::io::{self, BufRead, Write};

use motionx::responder;

/// Ask the fitness assistant a single question
#[derive(Args)]
pub struct AskCommand {
    /// The question, e.g. "how much protein do I need"
    #[arg(required = true, num_args = 1..)]
    pub question: Vec<String>,
}

impl AskCommand {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let question = self.question.join(" ");
        if question.trim().is_empty() {
            return Err("Question cannot be empty".into());
        }
        println!("{}", responder::respond(&question));
        Ok(())
    }
}

/// Chat with the fitness assistant until `exit`, `quit` or end of input
#[derive(Args)]
pub struct ChatCommand {}

impl ChatCommand {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        chat(stdin.lock(), stdout.lock())?;
        Ok(())
    }
}

const GREETING: &str = "Hi! I'm your MotionX assistant. Ask me about workouts, nutrition, \
recovery or motivation. Type 'exit' to leave.";

fn chat(input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "{}", GREETING)?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        let question = line.trim();

        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
            break;
        }

        writeln!(output, "{}", responder::respond(question))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_chat(script: &str) -> String {
        let mut output = Vec::new();
        chat(Cursor::new(script), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_chat_answers_each_question() {
        let output = run_chat("protein sources\nI need motivation\n");
        assert!(output.starts_with(GREETING));
        assert!(output.contains(responder::respond("protein sources")));
        assert!(output.contains(responder::respond("I need motivation")));
    }

    #[test]
    fn test_chat_skips_blank_lines() {
        let output = run_chat("\n   \n");
        // greeting plus one prompt per line read, then one at end of input
        assert_eq!(output.matches("> ").count(), 3);
        assert!(!output.contains(responder::DEFAULT_RESPONSE));
    }

    #[test]
    fn test_chat_stops_on_exit() {
        let output = run_chat("QUIT\nprotein sources\n");
        assert!(!output.contains(responder::respond("protein sources")));
    }
}
