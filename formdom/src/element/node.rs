use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Direction, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the form's visual tree.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Layout
    pub direction: Direction,
    /// Blank lines (column) or spaces (row) between children.
    pub gap: u16,

    // Interaction
    pub focusable: bool,
    pub clickable: bool,
    /// When true, this element captures keyboard input (for text fields).
    pub captures_input: bool,

    // State
    /// Whether this element is currently focused. Set by the app each frame.
    pub focused: bool,
    /// Whether this element is disabled. Disabled elements don't receive input.
    pub disabled: bool,
    /// Whether this element is visually flagged as invalid.
    pub flagged: bool,

    // Visual
    pub style: Style,
    pub style_focused: Option<Style>,
    pub style_disabled: Option<Style>,
    pub style_flagged: Option<Style>,

    // Declared associations (e.g. a toggle's target field id)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            direction: Direction::Column,
            gap: 0,
            focusable: false,
            clickable: false,
            captures_input: false,
            focused: false,
            disabled: false,
            flagged: false,
            style: Style::default(),
            style_focused: None,
            style_disabled: None,
            style_flagged: None,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// Create a text input element.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            content: Content::TextInput {
                value: value.into(),
                cursor: 0,
                placeholder: None,
                focused: false,
                mask: None,
            },
            focusable: true,
            captures_input: true,
            ..Default::default()
        }
    }

    /// Create a checkbox element.
    pub fn checkbox(checked: bool) -> Self {
        Self {
            id: generate_id("checkbox"),
            content: Content::Checkbox { checked },
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    /// Create a button element.
    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            content: Content::Button {
                label: label.into(),
            },
            focusable: true,
            clickable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Layout
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style_focused(mut self, style: Style) -> Self {
        self.style_focused = Some(style);
        self
    }

    pub fn style_disabled(mut self, style: Style) -> Self {
        self.style_disabled = Some(style);
        self
    }

    pub fn style_flagged(mut self, style: Style) -> Self {
        self.style_flagged = Some(style);
        self
    }

    // Interaction
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn captures_input(mut self, captures: bool) -> Self {
        self.captures_input = captures;
        self
    }

    // State
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn flagged(mut self, flagged: bool) -> Self {
        self.flagged = flagged;
        self
    }

    // Text input methods

    /// Set the placeholder text for a text input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::TextInput { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Set value, cursor and focus from live input state.
    pub fn input_state(mut self, data: &crate::text_input::TextInputData, is_focused: bool) -> Self {
        if let Content::TextInput {
            value,
            cursor,
            focused,
            ..
        } = &mut self.content
        {
            *value = data.text.clone();
            *cursor = data.cursor;
            *focused = is_focused;
        }
        self
    }

    /// Set the text input to password mode (displays • for each character).
    pub fn password(mut self) -> Self {
        if let Content::TextInput { mask, .. } = &mut self.content {
            *mask = Some('•');
        }
        self
    }

    /// Set a custom mask character for the text input.
    pub fn masked(mut self, mask_char: char) -> Self {
        if let Content::TextInput { mask, .. } = &mut self.content {
            *mask = Some(mask_char);
        }
        self
    }

    /// Remove any mask from a text input (plain text display).
    pub fn unmasked(mut self) -> Self {
        if let Content::TextInput { mask, .. } = &mut self.content {
            *mask = None;
        }
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// The style to render with, given current interaction state.
    pub fn effective_style(&self) -> Style {
        let mut style = self.style;
        if self.focused {
            if let Some(focused) = &self.style_focused {
                style = style.merge(focused);
            }
        }
        if self.flagged {
            if let Some(flagged) = &self.style_flagged {
                style = style.merge(flagged);
            }
        }
        if self.disabled {
            if let Some(disabled) = &self.style_disabled {
                style = style.merge(disabled);
            }
        }
        style
    }
}
