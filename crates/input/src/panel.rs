//! Button panel: held state and change ticks for the six logical buttons.
//!
//! Terminals differ in what they report. With keyboard enhancement a key
//! produces press, repeat and release events; without it only presses
//! arrive (auto-repeated by the OS), so a held button is released after a
//! short quiet period instead.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::map::{map_key, KeyInput};
use crate::types::{Button, ButtonSource, Orientation, BUTTON_COUNT, KEY_RELEASE_TIMEOUT_MS};

#[derive(Debug, Clone)]
pub struct ButtonPanel {
    held: [bool; BUTTON_COUNT],
    changed_at: [u32; BUTTON_COUNT],
    last_seen: [u32; BUTTON_COUNT],
    orientation: Orientation,
    release_timeout: Option<u32>,
    quit: bool,
}

impl ButtonPanel {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            held: [false; BUTTON_COUNT],
            changed_at: [0; BUTTON_COUNT],
            last_seen: [0; BUTTON_COUNT],
            orientation,
            release_timeout: Some(KEY_RELEASE_TIMEOUT_MS),
            quit: false,
        }
    }

    /// Set the auto-release timeout. `None` trusts the terminal's release
    /// events completely.
    pub fn with_release_timeout(mut self, timeout: Option<u32>) -> Self {
        self.release_timeout = timeout;
        self
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Press a physical button. Repeats of an already held button only
    /// refresh the release timer; the change tick stays put.
    pub fn press(&mut self, physical: Button, now: u32) {
        let i = self.orientation.remap(physical).index();
        if !self.held[i] {
            self.held[i] = true;
            self.changed_at[i] = now;
        }
        self.last_seen[i] = now;
    }

    pub fn release(&mut self, physical: Button, now: u32) {
        let i = self.orientation.remap(physical).index();
        if self.held[i] {
            self.held[i] = false;
            self.changed_at[i] = now;
        }
    }

    /// Feed one terminal event into the panel.
    pub fn handle_event(&mut self, event: &Event, now: u32) {
        if let Event::Key(key) = event {
            self.handle_key(*key, now);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: u32) {
        match map_key(key) {
            Some(KeyInput::Quit) => {
                if key.kind != KeyEventKind::Release {
                    self.quit = true;
                }
            }
            Some(KeyInput::Button(button)) => match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => self.press(button, now),
                KeyEventKind::Release => self.release(button, now),
            },
            None => {}
        }
    }

    /// Release buttons that have been quiet for longer than the timeout.
    pub fn expire(&mut self, now: u32) {
        let Some(timeout) = self.release_timeout else {
            return;
        };
        for i in 0..BUTTON_COUNT {
            if self.held[i] && now.wrapping_sub(self.last_seen[i]) > timeout {
                self.held[i] = false;
                self.changed_at[i] = now;
            }
        }
    }
}

impl Default for ButtonPanel {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl ButtonSource for ButtonPanel {
    fn held(&self, button: Button) -> bool {
        self.held[button.index()]
    }

    fn last_change_tick(&self, button: Button) -> u32 {
        let i = button.index();
        if self.held[i] {
            self.changed_at[i]
        } else {
            0
        }
    }
}
