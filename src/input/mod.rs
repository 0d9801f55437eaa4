use egui::{Pos2, Rect};

/// Pointer events delivered to the canvas, already in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while a gesture is in progress
    PointerMove { position: Pos2 },
    /// Primary button released
    PointerUp { position: Pos2 },
    /// Pointer left the canvas mid-gesture; handled like a release
    PointerLeave { last_known_position: Pos2 },
}

/// Raw pointer state for one frame, in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub position: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    /// The canvas widget is the topmost thing under the pointer.
    pub hovered: bool,
}

impl PointerSample {
    pub fn from_egui(input: &egui::InputState, response: &egui::Response) -> Self {
        Self {
            position: input.pointer.latest_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
            hovered: response.hovered(),
        }
    }
}

/// Turns per-frame pointer samples into a press/move/release protocol for the canvas.
#[derive(Debug, Default)]
pub struct InputHandler {
    canvas_rect: Option<Rect>,
    /// Last screen position seen during the active gesture, `None` when idle.
    gesture_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = Some(rect);
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture_pos.is_some()
    }

    /// Screen space to canvas space.
    pub fn to_canvas(&self, screen: Pos2) -> Pos2 {
        match self.canvas_rect {
            Some(rect) => (screen - rect.min).to_pos2(),
            None => screen,
        }
    }

    fn over_canvas(&self, screen: Pos2) -> bool {
        self.canvas_rect.is_some_and(|rect| rect.contains(screen))
    }

    /// Translate one frame of pointer state into canvas events.
    pub fn process(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if self.gesture_pos.is_none() && sample.pressed && sample.hovered {
            if let Some(pos) = sample.position.filter(|p| self.over_canvas(*p)) {
                events.push(InputEvent::PointerDown {
                    position: self.to_canvas(pos),
                });
                self.gesture_pos = Some(pos);
            }
        }

        let Some(last) = self.gesture_pos else {
            return events;
        };

        match sample.position {
            Some(pos) if !self.over_canvas(pos) => {
                events.push(InputEvent::PointerLeave {
                    last_known_position: self.to_canvas(pos),
                });
                self.gesture_pos = None;
                return events;
            }
            Some(pos) if pos != last => {
                events.push(InputEvent::PointerMove {
                    position: self.to_canvas(pos),
                });
                self.gesture_pos = Some(pos);
            }
            Some(_) => {}
            None => {
                events.push(InputEvent::PointerLeave {
                    last_known_position: self.to_canvas(last),
                });
                self.gesture_pos = None;
                return events;
            }
        }

        if sample.released {
            let pos = sample.position.unwrap_or(last);
            events.push(InputEvent::PointerUp {
                position: self.to_canvas(pos),
            });
            self.gesture_pos = None;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn handler() -> InputHandler {
        let mut handler = InputHandler::new();
        handler.set_canvas_rect(Rect::from_min_max(pos2(80.0, 50.0), pos2(580.0, 450.0)));
        handler
    }

    fn at(x: f32, y: f32) -> PointerSample {
        PointerSample {
            position: Some(pos2(x, y)),
            hovered: true,
            ..Default::default()
        }
    }

    #[test]
    fn converts_screen_to_canvas_space() {
        let handler = handler();
        assert_eq!(handler.to_canvas(pos2(100.0, 70.0)), pos2(20.0, 20.0));
    }

    #[test]
    fn press_move_release_sequence() {
        let mut handler = handler();

        let down = handler.process(PointerSample {
            pressed: true,
            ..at(90.0, 60.0)
        });
        assert_eq!(down, vec![InputEvent::PointerDown { position: pos2(10.0, 10.0) }]);
        assert!(handler.is_drawing());

        assert!(handler.process(at(90.0, 60.0)).is_empty());
        assert_eq!(
            handler.process(at(95.0, 60.0)),
            vec![InputEvent::PointerMove { position: pos2(15.0, 10.0) }]
        );

        let up = handler.process(PointerSample {
            released: true,
            ..at(95.0, 60.0)
        });
        assert_eq!(up, vec![InputEvent::PointerUp { position: pos2(15.0, 10.0) }]);
        assert!(!handler.is_drawing());
    }

    #[test]
    fn press_outside_canvas_or_under_a_window_is_ignored() {
        let mut handler = handler();
        assert!(handler.process(PointerSample { pressed: true, ..at(10.0, 10.0) }).is_empty());
        assert!(
            handler
                .process(PointerSample {
                    pressed: true,
                    hovered: false,
                    ..at(100.0, 100.0)
                })
                .is_empty()
        );
    }

    #[test]
    fn leaving_the_canvas_ends_the_gesture() {
        let mut handler = handler();
        handler.process(PointerSample { pressed: true, ..at(100.0, 100.0) });

        let events = handler.process(at(10.0, 100.0));
        assert!(matches!(events.as_slice(), [InputEvent::PointerLeave { .. }]));
        assert!(!handler.is_drawing());

        // A later release without a gesture produces nothing.
        assert!(handler.process(PointerSample { released: true, ..at(100.0, 100.0) }).is_empty());
    }

    #[test]
    fn click_in_one_frame_is_down_then_up() {
        let mut handler = handler();
        let events = handler.process(PointerSample {
            pressed: true,
            released: true,
            ..at(100.0, 100.0)
        });
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], InputEvent::PointerDown { .. }));
        assert!(matches!(events[1], InputEvent::PointerUp { .. }));
    }
}
