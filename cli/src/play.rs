use std::fmt::Write;

use super::*;

pub(super) const HELP: &str = "\
commands:
  <from> <to>   move the top disk, pegs are 0/1/2 or a/b/c (also `0-2`, `a>c`)
  reset [n]     start over, optionally with n disks
  show          print the pegs
  help          this text
  quit          leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PlayCommand {
    Move { source: PegIndex, target: PegIndex },
    Reset { disk_count: Option<u32> },
    Show,
    Help,
    Quit,
    Empty,
}

impl PlayCommand {
    pub(super) fn parse(line: &str) -> Result<Self, String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(PlayCommand::Empty);
        }
        let mut words = trimmed.split_whitespace();
        let head = words.next().unwrap_or("").to_ascii_lowercase();
        match head.as_str() {
            "q" | "quit" | "exit" => Ok(PlayCommand::Quit),
            "h" | "help" | "?" => Ok(PlayCommand::Help),
            "s" | "show" => Ok(PlayCommand::Show),
            "reset" | "restart" | "new" => {
                let disk_count = match words.next() {
                    Some(raw) => Some(
                        raw.parse::<u32>()
                            .map_err(|_| format!("not a disk count: {raw}"))?,
                    ),
                    None => None,
                };
                Ok(PlayCommand::Reset { disk_count })
            }
            _ => {
                let (source, target) = parse_move(trimmed)?;
                Ok(PlayCommand::Move { source, target })
            }
        }
    }
}

/// Parses `0 2`, `0-2`, `a>c`, `a,c` and `ac`.
pub(super) fn parse_move(raw: &str) -> Result<(PegIndex, PegIndex), String> {
    let trimmed = raw.trim();
    let parts: Vec<&str> = trimmed
        .split(|ch: char| ch.is_whitespace() || matches!(ch, '-' | '>' | ','))
        .filter(|part| !part.is_empty())
        .collect();
    let (source, target) = match parts.as_slice() {
        [source, target] => (*source, *target),
        [pair] if pair.chars().count() == 2 => {
            let mid = pair
                .char_indices()
                .nth(1)
                .map(|(index, _)| index)
                .unwrap_or(pair.len());
            (&pair[..mid], &pair[mid..])
        }
        _ => return Err(format!("expected two pegs, got `{trimmed}`")),
    };
    let source = PegIndex::parse(source).ok_or_else(|| format!("unknown peg `{source}`"))?;
    let target = PegIndex::parse(target).ok_or_else(|| format!("unknown peg `{target}`"))?;
    Ok((source, target))
}

pub(super) fn parse_move_list(raw: &str) -> Result<Vec<(PegIndex, PegIndex)>, String> {
    raw.split(|ch: char| ch == ',' || ch == ';')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(parse_move)
        .collect()
}

/// Draws the pegs side by side, widest disk `2n+1` columns.
pub(super) fn render_pegs(snapshot: &PuzzleSnapshot) -> String {
    let width = snapshot.disk_count as usize * 2 + 1;
    let height = snapshot.tallest_peg().max(snapshot.disk_count as usize);
    let mut out = String::new();
    for level in (0..height).rev() {
        let row: Vec<String> = snapshot
            .pegs
            .iter()
            .map(|disks| match disks.get(level) {
                Some(&size) => centered(&"=".repeat(size as usize * 2 + 1), width),
                None => centered("|", width),
            })
            .collect();
        let _ = writeln!(out, "{}", row.join(" ").trim_end());
    }
    let labels: Vec<String> = PegIndex::ALL
        .iter()
        .map(|peg| centered(&peg.label().to_string(), width))
        .collect();
    let _ = write!(out, "{}", labels.join(" ").trim_end());
    out
}

fn centered(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoi_core::PegIndex::{Left, Middle, Right};

    #[test]
    fn parse_move_accepts_common_spellings() {
        assert_eq!(parse_move("0 2"), Ok((Left, Right)));
        assert_eq!(parse_move("0-2"), Ok((Left, Right)));
        assert_eq!(parse_move("a>c"), Ok((Left, Right)));
        assert_eq!(parse_move("B, a"), Ok((Middle, Left)));
        assert_eq!(parse_move("bc"), Ok((Middle, Right)));
        assert!(parse_move("0 3").is_err());
        assert!(parse_move("0").is_err());
        assert!(parse_move("0 1 2").is_err());
    }

    #[test]
    fn parse_move_list_splits_on_commas() {
        let moves = parse_move_list("0-1, 0-2 ,1-2").unwrap();
        assert_eq!(moves, vec![(Left, Middle), (Left, Right), (Middle, Right)]);
        assert!(parse_move_list("").unwrap().is_empty());
        assert!(parse_move_list("0-1,x-2").is_err());
    }

    #[test]
    fn play_command_parsing() {
        assert_eq!(PlayCommand::parse("  "), Ok(PlayCommand::Empty));
        assert_eq!(PlayCommand::parse("quit"), Ok(PlayCommand::Quit));
        assert_eq!(
            PlayCommand::parse("reset 3"),
            Ok(PlayCommand::Reset { disk_count: Some(3) })
        );
        assert_eq!(
            PlayCommand::parse("reset"),
            Ok(PlayCommand::Reset { disk_count: None })
        );
        assert!(PlayCommand::parse("reset lots").is_err());
        assert_eq!(
            PlayCommand::parse("a c"),
            Ok(PlayCommand::Move {
                source: Left,
                target: Right
            })
        );
    }

    #[test]
    fn render_shows_every_disk() {
        let snapshot = PuzzleSnapshot {
            pegs: [vec![2], vec![], vec![1]],
            move_count: 1,
            disk_count: 2,
            solved: false,
        };
        let drawn = render_pegs(&snapshot);
        let lines: Vec<&str> = drawn.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  |     |     |");
        assert_eq!(lines[1], "=====   |    ===");
        assert_eq!(lines[2], "  A     B     C");
    }
}
