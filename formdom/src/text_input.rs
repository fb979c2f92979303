use std::collections::HashMap;

use crate::element::{find_element, Content, Element};
use crate::event::{Event, Key, Modifiers};

/// Data for a single text input: text content and cursor position (in chars).
#[derive(Debug, Clone, Default)]
pub struct TextInputData {
    pub text: String,
    pub cursor: usize,
}

impl TextInputData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }
}

/// Tracks text input state for multiple elements.
#[derive(Debug, Default)]
pub struct TextInputState {
    inputs: HashMap<String, TextInputData>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text value for an input.
    pub fn get(&self, id: &str) -> &str {
        self.inputs.get(id).map(|d| d.text.as_str()).unwrap_or("")
    }

    /// Get the full input data (text and cursor).
    pub fn get_data(&self, id: &str) -> Option<&TextInputData> {
        self.inputs.get(id)
    }

    /// Get mutable access to input data.
    pub fn get_data_mut(&mut self, id: &str) -> &mut TextInputData {
        self.inputs.entry(id.to_string()).or_default()
    }

    /// Set the text value for an input, placing cursor at end.
    pub fn set(&mut self, id: &str, text: impl Into<String>) {
        self.inputs.insert(id.to_string(), TextInputData::new(text));
    }

    /// Clear every tracked input (form reset).
    pub fn reset_all(&mut self) {
        for data in self.inputs.values_mut() {
            data.text.clear();
            data.cursor = 0;
        }
    }

    /// Process events and handle text input and checkbox activation.
    /// Returns events that were generated (Input, Submit, Toggle) or passed through.
    pub fn process_events(&mut self, events: &[Event], root: &Element) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            match event {
                Event::Key {
                    target: Some(target),
                    key,
                    modifiers,
                } => {
                    let Some(element) = find_element(root, target) else {
                        output.push(event.clone());
                        continue;
                    };

                    // Space or Enter toggles a focused checkbox
                    if let Content::Checkbox { checked } = element.content {
                        if matches!(key, Key::Char(' ') | Key::Enter) && modifiers.none() {
                            output.push(Event::Toggle {
                                target: target.clone(),
                                checked: !checked,
                            });
                            continue;
                        }
                    }

                    if element.captures_input && !element.disabled {
                        match self.handle_key(target, *key, *modifiers) {
                            TextEditResult::Changed => {
                                output.push(Event::Input {
                                    target: target.clone(),
                                    text: self.get(target).to_string(),
                                });
                                continue;
                            }
                            TextEditResult::Submitted => {
                                output.push(Event::Submit {
                                    target: target.clone(),
                                });
                                continue;
                            }
                            TextEditResult::Handled => {
                                // Cursor moved, no event needed
                                continue;
                            }
                            TextEditResult::Ignored => {
                                // Pass through
                            }
                        }
                    }
                    output.push(event.clone());
                }

                Event::Click {
                    target: Some(target),
                    ..
                } => {
                    // Clicking a checkbox toggles it
                    if let Some(element) = find_element(root, target) {
                        if let Content::Checkbox { checked } = element.content {
                            if !element.disabled {
                                output.push(Event::Toggle {
                                    target: target.clone(),
                                    checked: !checked,
                                });
                                continue;
                            }
                        }
                    }
                    output.push(event.clone());
                }

                _ => output.push(event.clone()),
            }
        }

        output
    }

    /// Handle a key press for text editing.
    fn handle_key(&mut self, id: &str, key: Key, modifiers: Modifiers) -> TextEditResult {
        match key {
            Key::Char(c) if c != '\0' && (modifiers.none() || (modifiers.shift && !modifiers.ctrl)) => {
                self.insert_char(id, c);
                TextEditResult::Changed
            }

            Key::Backspace if modifiers.none() => {
                if self.delete_back(id) {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                if self.delete_forward(id) {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left if !modifiers.ctrl => {
                let data = self.get_data_mut(id);
                data.cursor = data.cursor.saturating_sub(1);
                TextEditResult::Handled
            }

            Key::Right if !modifiers.ctrl => {
                let data = self.get_data_mut(id);
                let char_count = data.text.chars().count();
                data.cursor = (data.cursor + 1).min(char_count);
                TextEditResult::Handled
            }

            Key::Home if !modifiers.ctrl => {
                self.get_data_mut(id).cursor = 0;
                TextEditResult::Handled
            }

            Key::End if !modifiers.ctrl => {
                let data = self.get_data_mut(id);
                data.cursor = data.text.chars().count();
                TextEditResult::Handled
            }

            Key::Enter => TextEditResult::Submitted,

            _ => TextEditResult::Ignored,
        }
    }

    /// Insert a character at the cursor.
    fn insert_char(&mut self, id: &str, c: char) {
        let data = self.get_data_mut(id);
        let byte_pos = char_to_byte_index(&data.text, data.cursor);
        data.text.insert(byte_pos, c);
        data.cursor += 1;
    }

    /// Delete character before cursor. Returns true if text changed.
    fn delete_back(&mut self, id: &str) -> bool {
        let data = self.get_data_mut(id);
        if data.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&data.text, data.cursor - 1);
        let end = char_to_byte_index(&data.text, data.cursor);
        data.text.replace_range(start..end, "");
        data.cursor -= 1;
        true
    }

    /// Delete character at cursor. Returns true if text changed.
    fn delete_forward(&mut self, id: &str) -> bool {
        let data = self.get_data_mut(id);
        let char_count = data.text.chars().count();
        if data.cursor >= char_count {
            return false;
        }
        let start = char_to_byte_index(&data.text, data.cursor);
        let end = char_to_byte_index(&data.text, data.cursor + 1);
        data.text.replace_range(start..end, "");
        true
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
