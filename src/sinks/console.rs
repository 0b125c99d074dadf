//! Console sinks

use super::Sink;
use std::io::{self, IsTerminal};

impl Sink for io::Stdout {
    fn is_tty(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}

impl Sink for io::Stderr {
    fn is_tty(&self) -> bool {
        IsTerminal::is_terminal(self)
    }
}
