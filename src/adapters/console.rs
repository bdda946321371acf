use crate::domain::ports::Console;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// Keeps every line in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Console for MemoryConsole {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_console_shares_buffer() {
        let console = MemoryConsole::new();
        let handle = console.clone();

        console.write_line("first");
        (&console).write_line("second");

        assert_eq!(handle.lines(), vec!["first", "second"]);
        handle.clear();
        assert!(console.lines().is_empty());
    }
}
