use omok::{Cell, GameState, BOARD_SIZE};

const CELL_SIZE: usize = 30;
const MARGIN: usize = 40;
const STONE_RADIUS: usize = 12;
/// Height of the status caption strip below the board.
const STATUS_STRIP: usize = 60;
/// Traditional star point markings, as (row, col).
const STAR_POINTS: [(usize, usize); 5] = [(3, 3), (3, 11), (7, 7), (11, 3), (11, 11)];

/// Renders the board as a standalone SVG image.
pub struct SvgBoard {
    board_width: usize,
    board_height: usize,
    svg_width: usize,
    svg_height: usize,
}

impl Default for SvgBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgBoard {
    pub fn new() -> Self {
        let board_width = (BOARD_SIZE - 1) * CELL_SIZE;
        let board_height = (BOARD_SIZE - 1) * CELL_SIZE;
        Self {
            board_width,
            board_height,
            svg_width: board_width + 2 * MARGIN,
            svg_height: board_height + 2 * MARGIN + STATUS_STRIP,
        }
    }

    /// The intersection of grid line `col` and grid line `row`, in SVG
    /// coordinates.
    fn point(&self, row: usize, col: usize) -> (usize, usize) {
        (MARGIN + col * CELL_SIZE, MARGIN + row * CELL_SIZE)
    }

    pub fn render(&self, state: &GameState) -> String {
        let mut svg = format!(
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            self.svg_width, self.svg_height
        );
        svg.push('\n');

        svg += &format!(
            r##"<rect width="{}" height="{}" fill="#f5f5dc" stroke="none"/>"##,
            self.svg_width, self.svg_height
        );
        svg.push('\n');
        svg += &format!(
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#daa520" stroke="#8b4513" stroke-width="2"/>"##,
            MARGIN - 10,
            MARGIN - 10,
            self.board_width + 20,
            self.board_height + 20
        );
        svg.push('\n');
        svg += &stone_gradients();

        self.add_grid_lines(&mut svg);
        self.add_star_points(&mut svg);
        self.add_labels(&mut svg);
        self.add_stones(&mut svg, state);
        if let Some((row, col)) = state.last_move() {
            self.add_last_move_marker(&mut svg, row, col);
        }
        self.add_status(&mut svg, state);

        svg += "</svg>\n";
        svg
    }

    fn add_grid_lines(&self, svg: &mut String) {
        for i in 0..BOARD_SIZE {
            let (x, y) = self.point(i, i);
            *svg += &format!(
                r##"<line x1="{x}" y1="{top}" x2="{x}" y2="{bottom}" stroke="#8b4513" stroke-width="1"/>"##,
                x = x,
                top = MARGIN,
                bottom = MARGIN + self.board_height
            );
            svg.push('\n');
            *svg += &format!(
                r##"<line x1="{left}" y1="{y}" x2="{right}" y2="{y}" stroke="#8b4513" stroke-width="1"/>"##,
                left = MARGIN,
                right = MARGIN + self.board_width,
                y = y
            );
            svg.push('\n');
        }
    }

    fn add_star_points(&self, svg: &mut String) {
        for &(row, col) in &STAR_POINTS {
            let (x, y) = self.point(row, col);
            *svg += &format!(r##"<circle cx="{}" cy="{}" r="3" fill="#8b4513"/>"##, x, y);
            svg.push('\n');
        }
    }

    fn add_labels(&self, svg: &mut String) {
        for col in 0..BOARD_SIZE {
            let (x, _) = self.point(0, col);
            *svg += &format!(
                r##"<text x="{}" y="{}" text-anchor="middle" font-family="Arial, sans-serif" font-size="12" font-weight="bold" fill="#8b4513">{}</text>"##,
                x,
                MARGIN - 15,
                (b'A' + col as u8) as char
            );
            svg.push('\n');
        }
        for row in 0..BOARD_SIZE {
            let (_, y) = self.point(row, 0);
            *svg += &format!(
                r##"<text x="{}" y="{}" text-anchor="middle" font-family="Arial, sans-serif" font-size="12" font-weight="bold" fill="#8b4513">{}</text>"##,
                MARGIN - 15,
                y + 5,
                row + 1
            );
            svg.push('\n');
        }
    }

    fn add_stones(&self, svg: &mut String, state: &GameState) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let gradient = match state.board().get(row, col) {
                    Cell::Empty => continue,
                    Cell::Black => "blackStone",
                    Cell::White => "whiteStone",
                };
                let (x, y) = self.point(row, col);
                *svg += &format!(
                    r##"<circle cx="{}" cy="{}" r="{}" fill="url(#{})" stroke="#000000" stroke-width="1"/>"##,
                    x, y, STONE_RADIUS, gradient
                );
                svg.push('\n');
            }
        }
    }

    fn add_last_move_marker(&self, svg: &mut String, row: usize, col: usize) {
        let (x, y) = self.point(row, col);
        *svg += &format!(
            r##"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="#ff0000" stroke-width="2" opacity="0.8"/>"##,
            x,
            y,
            STONE_RADIUS + 4
        );
        svg.push('\n');
    }

    fn add_status(&self, svg: &mut String, state: &GameState) {
        let status_y = self.svg_height - 30;
        *svg += &format!(
            r##"<rect x="10" y="{}" width="{}" height="40" fill="#ffffff" stroke="#cccccc" stroke-width="1" rx="5"/>"##,
            status_y - 20,
            self.svg_width - 20
        );
        svg.push('\n');
        *svg += &format!(
            r##"<text x="{}" y="{}" text-anchor="middle" font-family="Arial, sans-serif" font-size="16" font-weight="bold" fill="#333333">{}</text>"##,
            self.svg_width / 2,
            status_y,
            state.status_line()
        );
        svg.push('\n');
    }
}

fn stone_gradients() -> String {
    String::from(
        r##"<defs>
<radialGradient id="blackStone" cx="0.3" cy="0.3" r="0.7">
<stop offset="0%" stop-color="#444444"/>
<stop offset="100%" stop-color="#000000"/>
</radialGradient>
<radialGradient id="whiteStone" cx="0.3" cy="0.3" r="0.7">
<stop offset="0%" stop-color="#ffffff"/>
<stop offset="100%" stop-color="#e0e0e0"/>
</radialGradient>
</defs>
"##,
    )
}
