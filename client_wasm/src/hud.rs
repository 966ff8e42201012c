//! DOM score display
//!
//! Writes the counters and the game-over banner into well-known page
//! elements. Any element missing from the page leaves the corresponding
//! update a no-op.

use game_core::{Score, Side};
use web_sys::Element;

pub struct Hud {
    left_score: Option<Element>,
    right_score: Option<Element>,
    game_over: Option<Element>,
    winner: Option<Element>,
}

impl Hud {
    pub fn new() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        let find = |id: &str| document.as_ref().and_then(|d| d.get_element_by_id(id));
        Self {
            left_score: find("leftScore"),
            right_score: find("rightScore"),
            game_over: find("gameOver"),
            winner: find("winner"),
        }
    }

    /// Push the current counters to the page
    pub fn show_scores(&self, score: Score) {
        if let Some(el) = &self.left_score {
            el.set_text_content(Some(&score.left.to_string()));
        }
        if let Some(el) = &self.right_score {
            el.set_text_content(Some(&score.right.to_string()));
        }
    }

    /// Reveal the game-over overlay with the winner's label
    pub fn show_game_over(&self, winner: Side) {
        if let Some(el) = &self.winner {
            el.set_text_content(Some(&format!("{} Wins!", winner.label())));
        }
        if let Some(el) = &self.game_over {
            let _ = el.class_list().remove_1("hidden");
        }
    }

    /// Hide the overlay again on restart
    pub fn hide_game_over(&self) {
        if let Some(el) = &self.game_over {
            let _ = el.class_list().add_1("hidden");
        }
    }
}
