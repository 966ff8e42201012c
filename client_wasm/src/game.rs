//! Client-side composition: the simulation session plus its external
//! collaborators (renderer, audio cues, score display).

use game_core::{Events, Phase, Session};
use web_sys::HtmlCanvasElement;

use crate::audio::{AudioCues, Cue};
use crate::hud::Hud;
use crate::input::{self, Command};
use crate::renderer::Renderer;

/// Main client state
pub struct Client {
    session: Session,
    renderer: Renderer,
    audio: AudioCues,
    hud: Hud,
}

impl Client {
    pub async fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let session = Session::new(js_sys::Date::now() as u64);
        let renderer = Renderer::new(canvas, session.config()).await?;
        let audio = AudioCues::new();
        let hud = Hud::new();
        hud.show_scores(session.score());
        Ok(Self {
            session,
            renderer,
            audio,
            hud,
        })
    }

    /// Apply a raw key-down: either a held movement action or a discrete
    /// command. Keys are matched case-insensitively.
    pub fn key_down(&mut self, key: &str) {
        let key = key.to_ascii_lowercase();
        if let Some(action) = input::map_action(&key) {
            self.session.actions_mut().press(action);
        } else if let Some(command) = input::map_command(&key) {
            match command {
                Command::Start => self.start(),
                Command::Restart => self.restart(),
            }
        }
    }

    /// Apply a raw key-up. Only held actions care about releases.
    pub fn key_up(&mut self, key: &str) {
        if let Some(action) = input::map_action(&key.to_ascii_lowercase()) {
            self.session.actions_mut().release(action);
        }
    }

    pub fn start(&mut self) {
        if self.session.start() {
            self.hud.show_scores(self.session.score());
        }
    }

    pub fn restart(&mut self) {
        if self.session.restart() {
            self.hud.show_scores(self.session.score());
            self.hud.hide_game_over();
        }
    }

    /// One driver callback: tick, emit side effects, paint.
    pub fn frame(&mut self) -> Result<(), String> {
        let events = self.session.tick();
        self.emit(&events);
        self.renderer.draw(self.session.court())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
    }

    /// Translate the tick's events into audio cues and score display
    /// updates. Cue playback is fire-and-forget.
    fn emit(&mut self, events: &Events) {
        if events.wall_bounce {
            self.audio.play(Cue::Wall);
        }
        if events.paddle_bounce {
            self.audio.play(Cue::Paddle);
        }
        if events.scored().is_some() {
            self.audio.play(Cue::Score);
            self.hud.show_scores(self.session.score());

            // The match only ever ends on a scoring tick.
            if self.session.phase() == Phase::GameOver {
                if let Some(winner) = self.session.winner() {
                    self.hud.show_game_over(winner);
                }
            }
        }
    }
}
