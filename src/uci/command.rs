//! Tokenizing of protocol input lines.

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciCommand {
    Uci,
    IsReady,
    UciNewGame,
    /// Tokens after `position`
    Position(Vec<String>),
    /// Requested depth, if any
    Go(Option<u32>),
    Eval,
    Debug(bool),
    Quit,
    Unknown(String),
}

/// Parse a line. Blank lines yield `None`.
pub fn parse_uci_command(line: &str) -> Option<UciCommand> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let (&head, rest) = parts.split_first()?;

    let cmd = match head {
        "uci" => UciCommand::Uci,
        "isready" => UciCommand::IsReady,
        "ucinewgame" => UciCommand::UciNewGame,
        "position" => UciCommand::Position(rest.iter().map(|p| (*p).to_string()).collect()),
        "go" => UciCommand::Go(parse_go_depth(rest)),
        "eval" => UciCommand::Eval,
        "debug" => match rest.first() {
            Some(&"on") => UciCommand::Debug(true),
            Some(&"off") => UciCommand::Debug(false),
            _ => UciCommand::Unknown(trimmed.to_string()),
        },
        "quit" => UciCommand::Quit,
        _ => UciCommand::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}

// Only `depth` is honoured; clock parameters are skipped.
fn parse_go_depth(parts: &[&str]) -> Option<u32> {
    parts
        .windows(2)
        .find(|w| w[0] == "depth")
        .and_then(|w| w[1].parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_uci_command("   "), None);
        assert_eq!(parse_uci_command(""), None);
    }

    #[test]
    fn go_reads_depth_among_other_tokens() {
        assert_eq!(
            parse_uci_command("go wtime 1000 depth 4 btime 900"),
            Some(UciCommand::Go(Some(4)))
        );
        assert_eq!(parse_uci_command("go"), Some(UciCommand::Go(None)));
        assert_eq!(parse_uci_command("go depth x"), Some(UciCommand::Go(None)));
    }

    #[test]
    fn position_keeps_its_tokens() {
        assert_eq!(
            parse_uci_command("position startpos moves e2e4"),
            Some(UciCommand::Position(vec![
                "startpos".to_string(),
                "moves".to_string(),
                "e2e4".to_string()
            ]))
        );
    }

    #[test]
    fn debug_needs_a_switch() {
        assert_eq!(parse_uci_command("debug on"), Some(UciCommand::Debug(true)));
        assert_eq!(parse_uci_command("debug off"), Some(UciCommand::Debug(false)));
        assert_eq!(
            parse_uci_command("debug maybe"),
            Some(UciCommand::Unknown("debug maybe".to_string()))
        );
    }
}
