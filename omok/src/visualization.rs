use crate::{format_coordinate, Cell, GameState, GameStatus, Player, BOARD_SIZE};

/// Render the board as fixed-width text with coordinate labels.
///
/// Columns are headed `A` through `O`, rows numbered 1 through 15. Stones
/// are `●` (Black) and `○` (White), empty intersections `·`, and the last
/// move is bracketed.
pub fn board_text(state: &GameState) -> String {
    let mut result = String::from("  ");
    for col in 0..BOARD_SIZE {
        result += &format!(" {} ", (b'A' + col as u8) as char);
    }

    for row in 0..BOARD_SIZE {
        result += &format!("\n{:>2}", row + 1);
        for col in 0..BOARD_SIZE {
            let is_last_move = state.last_move() == Some((row, col));
            result += match (state.board().get(row, col), is_last_move) {
                (Cell::Black, true) => "[●]",
                (Cell::Black, false) => " ● ",
                (Cell::White, true) => "[○]",
                (Cell::White, false) => " ○ ",
                (Cell::Empty, _) => " · ",
            };
        }
    }
    result
}

/// The Markdown status block rendered below the board.
pub fn status_markdown(state: &GameState) -> String {
    let mut result = format!("**Game Status:** {}", state.status_line());
    result += &format!("\n**Moves played:** {}", state.move_count());

    if let Some((row, col)) = state.last_move() {
        // Move k (1-indexed) was made by Black exactly when k is odd.
        let last_player = if state.move_count() % 2 == 1 {
            Player::Black
        } else {
            Player::White
        };
        result += &format!(
            "\n**Last move:** {} at {}",
            last_player,
            format_coordinate(row, col)
        );
    }

    match state.status() {
        GameStatus::BlackWins | GameStatus::WhiteWins => {
            // Winner is always set alongside a *Wins status.
            if let Some(winner) = state.winner() {
                result += &format!("\n**Winner:** {}", winner);
            }
        }
        GameStatus::Draw => result += "\n**Result:** Draw - Board is full",
        GameStatus::Ongoing => {
            result += &format!("\n**Next turn:** {}", state.current_player());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_shape() {
        let text = board_text(&GameState::new());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), BOARD_SIZE + 1);
        assert!(lines[0].contains('A'));
        assert!(lines[0].contains('O'));
        assert!(lines[1].starts_with(" 1"));
        assert!(lines[15].starts_with("15"));
        assert!(!text.contains('●'));
        assert!(!text.contains('○'));
    }

    #[test]
    fn stones_and_last_move_marker() {
        let mut state = GameState::new();
        state.apply_move(7, 7).unwrap();
        state.apply_move(7, 8).unwrap();

        let text = board_text(&state);
        assert!(text.contains(" ● "));
        // Only the most recent stone is bracketed.
        assert!(text.contains("[○]"));
        assert!(!text.contains("[●]"));
    }

    #[test]
    fn status_block_while_ongoing() {
        let mut state = GameState::new();
        state.apply_move(7, 7).unwrap();

        let status = status_markdown(&state);
        assert!(status.contains("**Game Status:** Current turn: White (Move #2)"));
        assert!(status.contains("**Moves played:** 1"));
        assert!(status.contains("**Last move:** Black at H,8"));
        assert!(status.contains("**Next turn:** White"));
    }

    #[test]
    fn status_block_after_a_win() {
        let mut state = GameState::new();
        for col in 0..4 {
            state.apply_move(0, col).unwrap();
            state.apply_move(10, col).unwrap();
        }
        state.apply_move(0, 4).unwrap();

        let status = status_markdown(&state);
        assert!(status.contains("**Game Status:** Black wins!"));
        assert!(status.contains("**Winner:** Black"));
        assert!(!status.contains("**Next turn:**"));
    }
}
