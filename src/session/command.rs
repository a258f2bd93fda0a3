//! Session command parsing

/// A single session command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Categories,
    Open(u64),
    Close,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line
    ///
    /// Blank lines parse to `Ok(None)`. Errors carry a message meant for the user.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };

        let command = match name {
            "list" => Command::List,
            "categories" => Command::Categories,
            "open" => {
                let Some(id) = words.next() else {
                    return Err("usage: open <id>".to_string());
                };
                let id = id
                    .parse::<u64>()
                    .map_err(|_| format!("invalid product id: {}", id))?;
                Command::Open(id)
            }
            "close" => Command::Close,
            "show" => Command::Show,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command: {} (try help)", other)),
        };

        if let Some(extra) = words.next() {
            return Err(format!("unexpected argument: {}", extra));
        }

        Ok(Some(command))
    }
}
