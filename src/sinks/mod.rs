//! Output sinks
//!
//! A [`Sink`] is any `Write` that can also say whether it is attached to a
//! terminal. The answer is asked once, when the sink is handed to a logger,
//! and decides whether color is switched on.

pub mod console;
pub mod file;
pub mod memory;

pub use file::FileSink;
pub use memory::MemorySink;

use std::io::{self, Write};

pub trait Sink: Write + Send + Sync {
    /// Whether output lands on an interactive terminal.
    fn is_tty(&self) -> bool {
        false
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn is_tty(&self) -> bool {
        (**self).is_tty()
    }
}

impl Sink for Vec<u8> {}

impl Sink for io::Sink {}
