//! Input resolver - one button event per frame.
//!
//! Each frame the resolver looks at a fixed, ordered list of buttons and picks
//! the held button with the highest last-change tick. Equal ticks keep the
//! button listed first. Selection is recomputed from scratch every frame.
//!
//! A resolved button only becomes an accepted event when it differs from the
//! previously accepted one, when it was pressed again (its change tick moved),
//! or when the key-repeat interval has passed since the last acceptance.

use crate::types::{Button, ButtonSource, KEY_REPEAT_MS};

/// Held button with the greatest last-change tick, first in list order on ties.
pub fn latest_held(source: &impl ButtonSource, buttons: &[Button]) -> Option<(Button, u32)> {
    let mut best: Option<(Button, u32)> = None;
    for &button in buttons {
        if !source.held(button) {
            continue;
        }
        let tick = source.last_change_tick(button);
        match best {
            Some((_, best_tick)) if tick <= best_tick => {}
            _ => best = Some((button, tick)),
        }
    }
    best
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Accepted {
    button: Button,
    change_tick: u32,
    accepted_at: u32,
}

/// Debounced, priority-resolved button events.
#[derive(Debug, Clone)]
pub struct InputResolver {
    buttons: &'static [Button],
    repeat_ticks: u32,
    last: Option<Accepted>,
}

impl InputResolver {
    pub fn new(buttons: &'static [Button]) -> Self {
        Self::with_repeat(buttons, KEY_REPEAT_MS)
    }

    pub fn with_repeat(buttons: &'static [Button], repeat_ticks: u32) -> Self {
        Self {
            buttons,
            repeat_ticks,
            last: None,
        }
    }

    /// Resolve this frame's buttons and return the button if it is a new event.
    pub fn poll(&mut self, source: &impl ButtonSource, now: u32) -> Option<Button> {
        let (button, change_tick) = latest_held(source, self.buttons)?;

        let is_new = match self.last {
            None => true,
            Some(last) => {
                last.button != button
                    || last.change_tick != change_tick
                    || now.wrapping_sub(last.accepted_at) >= self.repeat_ticks
            }
        };
        if !is_new {
            return None;
        }

        self.last = Some(Accepted {
            button,
            change_tick,
            accepted_at: now,
        });
        Some(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BUTTON_COUNT, GAME_BUTTONS};

    #[derive(Default)]
    struct Pins {
        held: [bool; BUTTON_COUNT],
        ticks: [u32; BUTTON_COUNT],
    }

    impl Pins {
        fn press(&mut self, button: Button, tick: u32) {
            self.held[button.index()] = true;
            self.ticks[button.index()] = tick;
        }

        fn release(&mut self, button: Button) {
            self.held[button.index()] = false;
            self.ticks[button.index()] = 0;
        }
    }

    impl ButtonSource for Pins {
        fn held(&self, button: Button) -> bool {
            self.held[button.index()]
        }

        fn last_change_tick(&self, button: Button) -> u32 {
            self.ticks[button.index()]
        }
    }

    #[test]
    fn test_latest_tick_wins() {
        let mut pins = Pins::default();
        pins.press(Button::Up, 5);
        pins.press(Button::Left, 9);
        assert_eq!(latest_held(&pins, &[Button::Up, Button::Left]), Some((Button::Left, 9)));
    }

    #[test]
    fn test_tie_keeps_list_order() {
        let mut pins = Pins::default();
        pins.press(Button::Up, 9);
        pins.press(Button::Left, 9);
        assert_eq!(latest_held(&pins, &[Button::Up, Button::Left]), Some((Button::Up, 9)));
        assert_eq!(latest_held(&pins, &[Button::Left, Button::Up]), Some((Button::Left, 9)));
    }

    #[test]
    fn test_nothing_held() {
        let pins = Pins::default();
        assert_eq!(latest_held(&pins, &GAME_BUTTONS), None);
    }

    #[test]
    fn test_held_button_repeats_after_interval() {
        let mut pins = Pins::default();
        let mut resolver = InputResolver::with_repeat(&GAME_BUTTONS, 200);
        pins.press(Button::Down, 100);

        assert_eq!(resolver.poll(&pins, 100), Some(Button::Down));
        assert_eq!(resolver.poll(&pins, 140), None);
        assert_eq!(resolver.poll(&pins, 299), None);
        assert_eq!(resolver.poll(&pins, 300), Some(Button::Down));
        // The interval restarts from the last acceptance.
        assert_eq!(resolver.poll(&pins, 340), None);
        assert_eq!(resolver.poll(&pins, 500), Some(Button::Down));
    }

    #[test]
    fn test_repress_is_a_new_event() {
        let mut pins = Pins::default();
        let mut resolver = InputResolver::new(&GAME_BUTTONS);
        pins.press(Button::Up, 10);
        assert_eq!(resolver.poll(&pins, 10), Some(Button::Up));

        pins.release(Button::Up);
        assert_eq!(resolver.poll(&pins, 20), None);

        pins.press(Button::Up, 30);
        assert_eq!(resolver.poll(&pins, 30), Some(Button::Up));
    }

    #[test]
    fn test_switching_buttons_is_a_new_event() {
        let mut pins = Pins::default();
        let mut resolver = InputResolver::new(&GAME_BUTTONS);
        pins.press(Button::Up, 10);
        assert_eq!(resolver.poll(&pins, 10), Some(Button::Up));

        pins.press(Button::Down, 20);
        assert_eq!(resolver.poll(&pins, 20), Some(Button::Down));

        // Releasing the newer button falls back to the older one.
        pins.release(Button::Down);
        assert_eq!(resolver.poll(&pins, 30), Some(Button::Up));
    }
}
