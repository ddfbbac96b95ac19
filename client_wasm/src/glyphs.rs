//! 3x5 block font for scores and menu text

pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;

/// Horizontal advance per character, in glyph cells (one cell of spacing)
pub const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + 1;

/// Rows top to bottom; bit 2 is the leftmost column
pub fn glyph(c: char) -> Option<[u8; 5]> {
    let rows = match c.to_ascii_uppercase() {
        '0' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'N' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        ' ' => [0; 5],
        _ => return None,
    };
    Some(rows)
}

/// Filled cells of a glyph as (column, row)
pub fn cells(rows: [u8; 5]) -> impl Iterator<Item = (i32, i32)> {
    (0..GLYPH_HEIGHT).flat_map(move |row| {
        (0..GLYPH_WIDTH)
            .filter(move |col| (rows[row as usize] & (0b100 >> *col)) != 0)
            .map(move |col| (col, row))
    })
}

/// Width in pixels of `text` drawn with `scale` pixels per cell
pub fn text_width(text: &str, scale: i32) -> i32 {
    let chars = text.chars().count() as i32;
    if chars == 0 {
        return 0;
    }
    (chars * GLYPH_ADVANCE - 1) * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_digit_has_a_glyph() {
        for d in '0'..='9' {
            assert!(glyph(d).is_some(), "missing digit {d}");
        }
    }

    #[test]
    fn test_menu_text_is_covered() {
        for text in ["PONG", "PRESS SPACE", "R TO RESET", "ESC TO QUIT", "YOU WIN", "CPU WINS"] {
            for c in text.chars() {
                assert!(glyph(c).is_some(), "missing glyph {c:?} in {text}");
            }
        }
    }

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        assert_eq!(glyph('p'), glyph('P'));
        assert_eq!(glyph('x'), None);
    }

    #[test]
    fn test_cells() {
        let one: Vec<_> = cells([0b010, 0b110, 0b010, 0b010, 0b111]).collect();
        assert_eq!(one.len(), 8);
        assert_eq!(one[0], (1, 0));
        assert_eq!(one[1], (0, 1));
        assert!(cells([0; 5]).next().is_none());
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 4), 0);
        assert_eq!(text_width("1", 4), 12);
        assert_eq!(text_width("11", 2), 14);
    }
}
