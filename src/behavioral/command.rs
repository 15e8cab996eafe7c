//! Command
//!
//! Requests are wrapped in objects so an invoker can trigger them without
//! knowing what they do. Simple commands act on their own; complex ones hand
//! the work to a receiver.
//!
//! Run with: cargo run --bin patterns -- command

use std::io::Write;

use crate::error::Result;

pub trait Command {
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
}

/// Business logic a command can delegate to.
pub trait Receiver {
    fn do_something(&self, out: &mut dyn Write, subject: &str) -> Result<()>;
    fn do_something_else(&self, out: &mut dyn Write, subject: &str) -> Result<()>;
}

pub struct SimpleCommand {
    payload: String,
}

impl SimpleCommand {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Command for SimpleCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "SimpleCommand: {}", self.payload)?;
        Ok(())
    }
}

pub struct ComplexCommand<R> {
    receiver: R,
    a: String,
    b: String,
}

impl<R: Receiver> ComplexCommand<R> {
    pub fn new(receiver: R, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            receiver,
            a: a.into(),
            b: b.into(),
        }
    }
}

impl<R: Receiver> Command for ComplexCommand<R> {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "ComplexCommand: Complex stuff should be done by a receiver object.")?;
        self.receiver.do_something(out, &self.a)?;
        self.receiver.do_something_else(out, &self.b)
    }
}

pub struct OnProgressReceiver;

impl Receiver for OnProgressReceiver {
    fn do_something(&self, out: &mut dyn Write, subject: &str) -> Result<()> {
        writeln!(out, "Receiver: processing sth on {subject}")?;
        Ok(())
    }

    fn do_something_else(&self, out: &mut dyn Write, subject: &str) -> Result<()> {
        writeln!(out, "Receiver: processing sth else on {subject}")?;
        Ok(())
    }
}

pub struct FinishReceiver;

impl Receiver for FinishReceiver {
    fn do_something(&self, out: &mut dyn Write, subject: &str) -> Result<()> {
        writeln!(out, "Receiver: As a last step do sth on {subject}")?;
        Ok(())
    }

    fn do_something_else(&self, out: &mut dyn Write, subject: &str) -> Result<()> {
        writeln!(out, "Receiver: As a last step do sth else on {subject}")?;
        Ok(())
    }
}

/// Holds one command per phase and fires them in order.
pub struct Invoker {
    on_start: Box<dyn Command>,
    on_progress: Box<dyn Command>,
    on_finish: Box<dyn Command>,
}

impl Invoker {
    pub fn new(
        on_start: Box<dyn Command>,
        on_progress: Box<dyn Command>,
        on_finish: Box<dyn Command>,
    ) -> Self {
        Self {
            on_start,
            on_progress,
            on_finish,
        }
    }

    pub fn invoke_all(&self, out: &mut dyn Write) -> Result<()> {
        let phases: [(&str, &dyn Command); 3] = [
            ("Start", self.on_start.as_ref()),
            ("On Progress", self.on_progress.as_ref()),
            ("End", self.on_finish.as_ref()),
        ];

        for (label, command) in phases {
            writeln!(out, "\nInvoker: {label}")?;
            command.execute(out)?;
        }
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let invoker = Invoker::new(
        Box::new(SimpleCommand::new("[initialization]")),
        Box::new(ComplexCommand::new(OnProgressReceiver, "[process1]", "[process2]")),
        Box::new(ComplexCommand::new(FinishReceiver, "[just before finish]", "[finish]")),
    );
    invoker.invoke_all(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records calls instead of printing them.
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<String>>,
    }

    impl Receiver for &Recorder {
        fn do_something(&self, _out: &mut dyn Write, subject: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("something:{subject}"));
            Ok(())
        }

        fn do_something_else(&self, _out: &mut dyn Write, subject: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("else:{subject}"));
            Ok(())
        }
    }

    #[test]
    fn test_complex_command_delegates_in_order() {
        let recorder = Recorder::default();
        let command = ComplexCommand::new(&recorder, "a", "b");
        command.execute(&mut Vec::<u8>::new()).unwrap();
        assert_eq!(*recorder.calls.borrow(), ["something:a", "else:b"]);
    }

    #[test]
    fn test_simple_command_output() {
        let mut out: Vec<u8> = Vec::new();
        SimpleCommand::new("[init]").execute(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "SimpleCommand: [init]\n");
    }

    #[test]
    fn test_invoker_runs_phases_in_order() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let start = text.find("Invoker: Start").unwrap();
        let progress = text.find("Invoker: On Progress").unwrap();
        let end = text.find("Invoker: End").unwrap();
        assert!(start < progress && progress < end);
        assert!(text.contains("Receiver: processing sth on [process1]"));
        assert!(text.contains("Receiver: As a last step do sth else on [finish]"));
    }
}
