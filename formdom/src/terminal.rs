use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::element::{Content, Element};
use crate::hit::{HitMap, HitSpan};
use crate::types::{Direction, Style};

/// Visual width reserved for text inputs.
const INPUT_WIDTH: usize = 32;

pub struct Terminal {
    stdout: io::Stdout,
    hits: HitMap,
    cursor_pos: Option<(u16, u16)>,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self {
            stdout,
            hits: HitMap::new(),
            cursor_pos: None,
        })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw the element tree top-to-bottom and record interactive regions.
    /// The whole screen is redrawn each frame.
    pub fn draw(&mut self, root: &Element) -> io::Result<&HitMap> {
        self.hits = HitMap::new();
        self.cursor_pos = None;

        queue!(self.stdout, cursor::Hide, Clear(ClearType::All))?;
        self.draw_block(root, 0, 0)?;

        if let Some((x, y)) = self.cursor_pos {
            queue!(self.stdout, cursor::MoveTo(x, y), cursor::Show)?;
        }
        self.stdout.flush()?;

        Ok(&self.hits)
    }

    /// Interactive regions from the last draw.
    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    /// Draw an element as a block. Returns the number of lines used.
    fn draw_block(&mut self, element: &Element, x: u16, y: u16) -> io::Result<u16> {
        match (&element.content, element.direction) {
            (Content::Children(children), Direction::Column) => {
                let mut cur = y;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        cur += element.gap;
                    }
                    cur += self.draw_block(child, x, cur)?;
                }
                Ok(cur - y)
            }

            (Content::Children(children), Direction::Row) => {
                let mut cur = x;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        cur += element.gap.max(1);
                    }
                    cur += self.draw_inline(child, cur, y)?;
                }
                Ok(1)
            }

            (Content::None, _) => Ok(0),

            _ => {
                self.draw_inline(element, x, y)?;
                Ok(1)
            }
        }
    }

    /// Draw a leaf element on one line. Returns its width.
    fn draw_inline(&mut self, element: &Element, x: u16, y: u16) -> io::Result<u16> {
        let mut style = element.effective_style();

        let text = match &element.content {
            Content::Text(text) => text.clone(),

            Content::TextInput {
                value,
                cursor,
                placeholder,
                focused,
                mask,
            } => {
                let display = if value.is_empty() {
                    if let Some(placeholder) = placeholder {
                        style = style.merge(&Style::new().dim());
                        placeholder.clone()
                    } else {
                        String::new()
                    }
                } else if let Some(mask) = mask {
                    mask.to_string().repeat(value.chars().count())
                } else {
                    value.clone()
                };

                if *focused {
                    let prefix = match mask {
                        Some(mask) if !value.is_empty() => {
                            mask.width().unwrap_or(1) * (*cursor).min(value.chars().count())
                        }
                        _ => value
                            .chars()
                            .take(*cursor)
                            .map(|c| c.width().unwrap_or(0))
                            .sum(),
                    };
                    self.cursor_pos = Some((x + prefix as u16, y));
                }

                format!("{display:<width$}", width = INPUT_WIDTH)
            }

            Content::Checkbox { checked } => {
                if *checked {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }

            Content::Button { label } => format!("[ {label} ]"),

            // Nested containers inside a row are flattened to their text
            Content::Children(_) | Content::None => String::new(),
        };

        queue!(self.stdout, cursor::MoveTo(x, y))?;
        if let Some(fg) = style.fg {
            queue!(self.stdout, SetForegroundColor(fg))?;
        }
        if let Some(bg) = style.bg {
            queue!(self.stdout, SetBackgroundColor(bg))?;
        }
        if style.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
        }
        queue!(
            self.stdout,
            Print(&text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;

        let width = text.width() as u16;
        if element.focusable || element.clickable {
            self.hits.insert(HitSpan {
                id: element.id.clone(),
                x,
                y,
                width,
                focusable: element.focusable && !element.disabled,
                clickable: element.clickable && !element.disabled,
            });
        }

        Ok(width)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
