//! Terminal board rendering with optional ANSI colours

use hexpath_core::board::column_letter;
use hexpath_core::{Cell, GameState, Position};

const RESET: &str = "\x1b[0m";
const BLUE: &str = "\x1b[94m";
const RED: &str = "\x1b[91m";
const YELLOW: &str = "\x1b[93m";

/// Clear screen and move the cursor home
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

fn paint(glyph: char, code: &str, color: bool) -> String {
    if color {
        format!("{code}{glyph}{RESET}")
    } else {
        glyph.to_string()
    }
}

fn cell_glyph(cell: Cell, color: bool) -> String {
    match cell {
        Cell::Empty => paint('.', RESET, color),
        Cell::Blue => paint('B', BLUE, color),
        Cell::Red => paint('R', RED, color),
    }
}

/// Board in the same layout as `GameState`'s `Display`, with `selected`
/// drawn as `S` (the suggested move)
pub fn render(state: &GameState, selected: Option<Position>, color: bool) -> String {
    let size = state.size();
    let mut out = cell_glyph(state.active_color(), color);
    out.push_str("  ");
    for col in 0..size {
        out.push(' ');
        out.push(column_letter(col).unwrap_or('?'));
    }

    for row in 0..size {
        out.push_str(&format!("\n{:indent$}{:>2}", "", row, indent = row));
        for col in 0..size {
            let pos = Position::new(row, col);
            let glyph = if selected == Some(pos) {
                paint('S', YELLOW, color)
            } else {
                cell_glyph(state.get(pos), color)
            };
            out.push(' ');
            out.push_str(&glyph);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_render_matches_display() {
        let state = GameState::new(4, Cell::Red)
            .unwrap()
            .place_peg(Some(Position::new(2, 1)))
            .place_peg(Some(Position::new(0, 3)));
        assert_eq!(render(&state, None, false), state.to_string());
    }

    #[test]
    fn test_selected_cell_marked() {
        let state = GameState::new(2, Cell::Blue).unwrap();
        let out = render(&state, Some(Position::new(0, 1)), false);
        assert_eq!(out, "B   a b\n 0 . S\n  1 . .");
    }

    #[test]
    fn test_rows_indent_by_row_number() {
        let state = GameState::new(3, Cell::Red)
            .unwrap()
            .place_peg(Some(Position::new(2, 0)));
        let out = render(&state, Some(Position::new(1, 2)), false);
        assert_eq!(out, "B   a b c\n 0 . . .\n  1 . . S\n   2 R . .");
    }

    #[test]
    fn test_color_codes() {
        let state = GameState::new(1, Cell::Blue)
            .unwrap()
            .place_peg(Some(Position::new(0, 0)));
        let out = render(&state, None, true);
        assert!(out.contains(&format!("{BLUE}B{RESET}")));
        assert!(out.starts_with(RED));
    }
}
