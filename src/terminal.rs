//! Optional "press enter to exit" pause for operators who launch the tool
//! by double-clicking it.

use std::io::{self, BufRead, Write};

/// Something that can hold the process open until the operator is done
pub trait Pause {
    fn wait(&mut self) -> io::Result<()>;
}

/// Prompt on `output`, then block until one line (or EOF) arrives on `input`
pub struct EnterPause<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> EnterPause<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl EnterPause<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Pause for EnterPause<R, W> {
    fn wait(&mut self) -> io::Result<()> {
        writeln!(self.output, "Press enter to exit . . .")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }
}

/// No pause at all
pub struct NoPause;

impl Pause for NoPause {
    fn wait(&mut self) -> io::Result<()> {
        Ok(())
    }
}
