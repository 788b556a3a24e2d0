//! REPL command parsing.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Type into the search box (echo only).
    Search(String),
    /// Commit a search suggestion.
    Pick(String),
    /// Clear the committed search.
    Clear,
    /// Select a type filter; `None` is "All".
    Type(Option<String>),
    Page(u32),
    Next,
    Prev,
    Open(String),
    Close,
    Refresh,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  search <text>   type into the search box and list suggestions
  pick <name>     search for a suggested name
  clear           clear the search
  type <t|all>    filter by type
  page <n>        go to page n
  next | prev     move one page
  open <id>       show card details
  close           hide card details
  refresh         reload the current page
  help | quit";

/// Parse one input line. `Ok(None)` for a blank line.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    let command = match word.to_lowercase().as_str() {
        "search" | "s" => Command::Search(rest.to_string()),
        "pick" => Command::Pick(required(rest, "pick <name>")?),
        "clear" => Command::Clear,
        "type" | "t" => {
            let t = required(rest, "type <t|all>")?;
            if t.eq_ignore_ascii_case("all") {
                Command::Type(None)
            } else {
                Command::Type(Some(t))
            }
        }
        "page" | "p" => {
            let n = required(rest, "page <n>")?;
            Command::Page(n.parse().map_err(|_| format!("not a page number: {}", n))?)
        }
        "next" | "n" => Command::Next,
        "prev" => Command::Prev,
        "open" | "o" => Command::Open(required(rest, "open <id>")?),
        "close" => Command::Close,
        "refresh" | "r" => Command::Refresh,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{}', try 'help'", other)),
    };
    Ok(Some(command))
}

fn required(arg: &str, usage: &str) -> Result<String, String> {
    if arg.is_empty() {
        Err(format!("usage: {}", usage))
    } else {
        Ok(arg.to_string())
    }
}
