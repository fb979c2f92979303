use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{Content, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::HitMap;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        if self.focused.is_some() {
            self.focused = None;
            true
        } else {
            false
        }
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => {
                let idx = focusable.iter().position(|id| id == current);
                match idx {
                    Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                    None => focusable[0].clone(),
                }
            }
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[focusable.len() - 1].clone(),
            Some(current) => {
                let idx = focusable.iter().position(|id| id == current);
                match idx {
                    Some(0) => focusable[focusable.len() - 1].clone(),
                    Some(i) => focusable[i - 1].clone(),
                    None => focusable[focusable.len() - 1].clone(),
                }
            }
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm events and produce high-level events.
    /// Tab/BackTab and Down/Up move focus; clicks focus the hit element.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        hits: &HitMap,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    // Tab/BackTab and Down/Up move focus between fields
                    let forward = matches!(key, Key::Tab) || (key == Key::Down && modifiers.none());
                    let backward =
                        matches!(key, Key::BackTab) || (key == Key::Up && modifiers.none());

                    if forward || backward {
                        let old = self.focused.clone();
                        let new = if forward {
                            self.focus_next(root)
                        } else {
                            self.focus_prev(root)
                        };
                        if let Some(new) = new {
                            log::debug!("[focus] {:?} -> {}", old, new);
                            if let Some(old) = old {
                                events.push(Event::Blur { target: old });
                            }
                            events.push(Event::Focus { target: new });
                        }
                        continue;
                    }

                    // Escape blurs focused element; only emits key event if nothing focused
                    if key == Key::Escape {
                        if let Some(old) = self.focused.take() {
                            events.push(Event::Blur { target: old });
                            continue;
                        }
                        // Fall through to emit key event
                    }

                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    let x = mouse_event.column;
                    let y = mouse_event.row;

                    if let MouseEventKind::Down(_) = mouse_event.kind {
                        // Clicking a focusable element moves focus to it
                        if let Some(target) = hits.hit_test_focusable(x, y) {
                            if self.focused.as_ref() != Some(&target) {
                                if let Some(old) = self.focused.take() {
                                    events.push(Event::Blur { target: old });
                                }
                                self.focused = Some(target.clone());
                                events.push(Event::Focus { target });
                            }
                        }

                        events.push(Event::Click {
                            target: hits.hit_test(x, y),
                            x,
                            y,
                        });
                    }
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }
}

/// Collect all focusable element IDs in tree order.
/// Disabled elements don't receive input, so they are skipped.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.focusable && !element.disabled {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, result);
        }
    }
}
