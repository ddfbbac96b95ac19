//! Scene building: game state in, colored rectangles out
//!
//! Everything the renderer draws is an axis-aligned quad in arena pixels.

use game_core::{GamePhase, GameWorld, Rect, Side};

use crate::glyphs::{cells, glyph, text_width, GLYPH_ADVANCE, GLYPH_HEIGHT};

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const GREY: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
pub const OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.75];

const SCORE_SCALE: i32 = 6;
const SCORE_TOP: i32 = 16;
const NET_WIDTH: i32 = 2;
const NET_DASH: i32 = 10;
const NET_GAP: i32 = 10;

/// One filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub rect: Rect,
    pub color: [f32; 4],
}

impl Quad {
    pub fn new(rect: Rect, color: [f32; 4]) -> Self {
        Self { rect, color }
    }
}

/// Build the frame for the current phase. Never mutates the game.
pub fn build_scene(game: &GameWorld) -> Vec<Quad> {
    let mut quads = Vec::new();
    match game.phase() {
        GamePhase::Menu => push_menu(&mut quads, game),
        GamePhase::Playing => push_court(&mut quads, game),
        GamePhase::GameOver => {
            push_court(&mut quads, game);
            push_game_over(&mut quads, game);
        }
    }
    quads
}

fn push_menu(quads: &mut Vec<Quad>, game: &GameWorld) {
    let center_x = game.config.arena_width / 2;
    let h = game.config.arena_height;

    push_scores(quads, game);
    push_text(quads, "PONG", center_x, h / 5, 16, WHITE);
    push_text(quads, "PRESS SPACE", center_x, h / 2 + 20, 4, WHITE);
    push_text(quads, "R TO RESET", center_x, h / 2 + 60, 4, GREY);
    push_text(quads, "ESC TO QUIT", center_x, h / 2 + 90, 4, GREY);
}

fn push_court(quads: &mut Vec<Quad>, game: &GameWorld) {
    let config = &game.config;

    // Dashed centre net
    let net_x = (config.arena_width - NET_WIDTH) / 2;
    let mut y = NET_GAP / 2;
    while y < config.arena_height {
        let dash = NET_DASH.min(config.arena_height - y);
        quads.push(Quad::new(Rect::new(net_x, y, NET_WIDTH, dash), GREY));
        y += NET_DASH + NET_GAP;
    }

    push_scores(quads, game);

    for side in [Side::Player, Side::Cpu] {
        if let Some(paddle) = game.paddle(side) {
            quads.push(Quad::new(paddle.rect, WHITE));
        }
    }
    if let Some(ball) = game.ball() {
        quads.push(Quad::new(ball.rect, WHITE));
    }
}

fn push_scores(quads: &mut Vec<Quad>, game: &GameWorld) {
    let w = game.config.arena_width;
    let player = game.score.get(Side::Player).to_string();
    let cpu = game.score.get(Side::Cpu).to_string();
    push_text(quads, &player, w / 4, SCORE_TOP, SCORE_SCALE, WHITE);
    push_text(quads, &cpu, w * 3 / 4, SCORE_TOP, SCORE_SCALE, WHITE);
}

fn push_game_over(quads: &mut Vec<Quad>, game: &GameWorld) {
    let config = &game.config;
    let band_height = 100;
    let band_top = (config.arena_height - band_height) / 2;
    quads.push(Quad::new(
        Rect::new(0, band_top, config.arena_width, band_height),
        OVERLAY,
    ));

    let message = match game.winner() {
        Some(Side::Player) => "YOU WIN",
        Some(Side::Cpu) => "CPU WINS",
        None => return,
    };
    let scale = 8;
    let top = band_top + (band_height - GLYPH_HEIGHT * scale) / 2;
    push_text(quads, message, config.arena_width / 2, top, scale, WHITE);
}

/// Lay out `text` horizontally centered on `center_x`, one quad per lit cell
pub fn push_text(
    quads: &mut Vec<Quad>,
    text: &str,
    center_x: i32,
    top: i32,
    scale: i32,
    color: [f32; 4],
) {
    let mut x = center_x - text_width(text, scale) / 2;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (col, row) in cells(rows) {
                quads.push(Quad::new(
                    Rect::new(x + col * scale, top + row * scale, scale, scale),
                    color,
                ));
            }
        }
        x += GLYPH_ADVANCE * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{step, FrameCommands};

    fn playing() -> GameWorld {
        let mut game = GameWorld::default();
        step(
            &mut game,
            &FrameCommands {
                start: true,
                ..Default::default()
            },
        );
        game
    }

    fn overlays(quads: &[Quad]) -> usize {
        quads.iter().filter(|q| q.color == OVERLAY).count()
    }

    #[test]
    fn test_playing_scene_draws_ball_and_paddles() {
        let game = playing();
        let quads = build_scene(&game);

        let ball = game.ball().unwrap();
        assert!(quads.contains(&Quad::new(ball.rect, WHITE)));
        for side in [Side::Player, Side::Cpu] {
            let paddle = game.paddle(side).unwrap();
            assert!(quads.contains(&Quad::new(paddle.rect, WHITE)));
        }
        assert_eq!(overlays(&quads), 0);
    }

    #[test]
    fn test_net_stays_inside_arena() {
        let game = playing();
        let h = game.config.arena_height;
        let net: Vec<_> = build_scene(&game)
            .into_iter()
            .filter(|q| q.rect.size.x == NET_WIDTH)
            .collect();

        assert!(!net.is_empty());
        for dash in net {
            assert!(dash.rect.top() >= 0 && dash.rect.bottom() <= h);
        }
    }

    #[test]
    fn test_menu_scene_has_no_ball() {
        let game = GameWorld::default();
        let quads = build_scene(&game);
        let ball = game.ball().unwrap();

        assert!(!quads.iter().any(|q| q.rect == ball.rect));
        assert!(!quads.is_empty(), "Menu text should be drawn");
    }

    #[test]
    fn test_game_over_scene_adds_overlay() {
        let mut game = playing();
        game.enter_game_over(Side::Cpu);
        let quads = build_scene(&game);

        assert_eq!(overlays(&quads), 1);
        let band = quads.iter().position(|q| q.color == OVERLAY).unwrap();
        assert!(
            quads[band + 1..].iter().any(|q| q.color == WHITE),
            "Winner text is drawn on top of the band"
        );
    }

    #[test]
    fn test_scene_is_read_only() {
        let game = playing();
        let ball = game.ball();
        let first = build_scene(&game);
        let second = build_scene(&game);
        assert_eq!(first, second);
        assert_eq!(game.ball(), ball);
    }

    #[test]
    fn test_push_text_centers_and_skips_spaces() {
        let mut quads = Vec::new();
        push_text(&mut quads, "1 1", 100, 0, 2, WHITE);

        // Two "1" glyphs with 8 lit cells each, nothing for the space
        assert_eq!(quads.len(), 16);
        let left = quads.iter().map(|q| q.rect.left()).min().unwrap();
        let right = quads.iter().map(|q| q.rect.right()).max().unwrap();
        assert_eq!(left, 100 - text_width("1 1", 2) / 2);
        assert_eq!(right - left, text_width("1 1", 2));
    }
}
