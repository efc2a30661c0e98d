//! Interactive move source reading positions from a terminal

use std::io::{BufRead, Write};

use hexpath_core::{Agent, GameState, Position};

use crate::render::render;

/// Human player with an engine hint.
///
/// Before each prompt the board is shown with the helper's suggestion marked
/// `S`, and the prompt reads `[c4]> `. An empty line accepts the hint; a
/// malformed, off-board or occupied position is reported and asked again.
/// End of input ends the game (no move).
pub struct HumanAgent<R, W> {
    helper: Box<dyn Agent>,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(helper: Box<dyn Agent>, input: R, output: W, color: bool) -> Self {
        Self {
            helper,
            input,
            output,
            color,
        }
    }

    fn prompt(&mut self, state: &GameState, hint: Option<Position>) -> std::io::Result<Option<Position>> {
        writeln!(self.output, "{}\n", render(state, hint, self.color))?;

        loop {
            match hint {
                Some(pos) => write!(self.output, "[{pos}]> ")?,
                None => write!(self.output, "> ")?,
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let line = line.trim();
            if line.is_empty() {
                if hint.is_some() {
                    return Ok(hint);
                }
                continue;
            }

            match parse_move(state, line) {
                Ok(pos) => return Ok(Some(pos)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

/// Parse `line` and check that it names an empty cell on `state`'s board
pub fn parse_move(state: &GameState, line: &str) -> anyhow::Result<Position> {
    let pos = state.check_position(line.parse()?)?;
    anyhow::ensure!(state.get(pos).is_empty(), "cell {pos} is already taken");
    Ok(pos)
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn act(&mut self, state: &GameState) -> Option<Position> {
        let hint = self.helper.act(state);
        match self.prompt(state, hint) {
            Ok(pos) => pos,
            Err(e) => {
                tracing::warn!("terminal input failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use hexpath_core::{Cell, RandomAgent};

    /// Always suggests the same cell
    struct FixedHint(Position);

    impl Agent for FixedHint {
        fn name(&self) -> &str {
            "fixed"
        }

        fn act(&mut self, _state: &GameState) -> Option<Position> {
            Some(self.0)
        }
    }

    fn human(input: &str, hint: Position) -> HumanAgent<Cursor<Vec<u8>>, Vec<u8>> {
        HumanAgent::new(
            Box::new(FixedHint(hint)),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            false,
        )
    }

    #[test]
    fn test_empty_line_accepts_hint() {
        let state = GameState::new(5, Cell::Blue).unwrap();
        let mut agent = human("\n", Position::new(2, 3));
        assert_eq!(agent.act(&state), Some(Position::new(2, 3)));

        let shown = String::from_utf8(agent.output.clone()).unwrap();
        assert!(shown.contains("[d2]> "));
        assert!(shown.contains(" S"));
    }

    #[test]
    fn test_typed_position_either_order() {
        let state = GameState::new(5, Cell::Blue).unwrap();
        assert_eq!(human("b3\n", Position::new(0, 0)).act(&state), Some(Position::new(3, 1)));
        assert_eq!(human("3b\n", Position::new(0, 0)).act(&state), Some(Position::new(3, 1)));
    }

    #[test]
    fn test_bad_input_reprompts() {
        let state = GameState::new(3, Cell::Blue)
            .unwrap()
            .place_peg(Some(Position::new(0, 0)));
        let mut agent = human("zz\nq1\na0\nc2\n", Position::new(1, 1));
        assert_eq!(agent.act(&state), Some(Position::new(2, 2)));

        let shown = String::from_utf8(agent.output.clone()).unwrap();
        assert!(shown.contains("cannot parse position"));
        assert!(shown.contains("outside a 3x3 board"));
        assert!(shown.contains("already taken"));
    }

    #[test]
    fn test_color_prompt_keeps_earlier_output() {
        let state = GameState::new(3, Cell::Blue).unwrap();
        let mut agent = HumanAgent::new(
            Box::new(FixedHint(Position::new(1, 1))),
            Cursor::new(b"\n".to_vec()),
            Vec::new(),
            true,
        );
        assert_eq!(agent.act(&state), Some(Position::new(1, 1)));

        let shown = String::from_utf8(agent.output.clone()).unwrap();
        assert!(!shown.contains(crate::render::CLEAR_SCREEN));
        assert!(shown.contains("[b1]> "));
    }

    #[test]
    fn test_end_of_input_gives_no_move() {
        let state = GameState::new(3, Cell::Blue).unwrap();
        assert_eq!(human("", Position::new(1, 1)).act(&state), None);
    }

    #[test]
    fn test_random_helper_hint_is_legal() {
        let state = GameState::new(3, Cell::Red).unwrap();
        let mut agent = HumanAgent::new(
            Box::new(RandomAgent::new(5)),
            Cursor::new(b"\n".to_vec()),
            Vec::new(),
            false,
        );
        let pos = agent.act(&state).unwrap();
        assert_eq!(state.get(pos), Cell::Empty);
    }
}
