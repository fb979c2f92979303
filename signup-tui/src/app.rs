use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use formdom::crossterm::event::Event as CrosstermEvent;
use formdom::{find_element, Element, Event, FocusState, HitMap, Key, TextInputState};
use signup_lib::{Debouncer, Effect, FieldId, FormSnapshot, Validator};

/// Registration form state: live inputs, focus, pending debounced
/// validation, and the display state produced by validation effects.
pub struct App {
    pub(crate) focus: FocusState,
    pub(crate) inputs: TextInputState,
    pub(crate) debouncer: Debouncer<FieldId>,
    pub(crate) validator: Validator,
    pub(crate) terms_accepted: bool,
    /// Password-type fields currently shown as plain text.
    pub(crate) revealed: HashSet<FieldId>,
    /// At most one visible error message per field.
    pub(crate) errors: HashMap<FieldId, String>,
    pub(crate) submit_enabled: bool,
    pub(crate) success: Option<String>,
    running: bool,
}

impl App {
    pub fn new(validator: Validator) -> Self {
        let mut focus = FocusState::new();
        focus.focus(FieldId::FullName.as_str());

        Self {
            focus,
            inputs: TextInputState::new(),
            debouncer: Debouncer::default(),
            validator,
            terms_accepted: false,
            revealed: HashSet::new(),
            errors: HashMap::new(),
            submit_enabled: false,
            success: None,
            running: true,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Rebuild the snapshot from the live field values. Never cached.
    pub fn snapshot(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot::new();
        for field in FieldId::ALL {
            if field.is_text() {
                snapshot.set_value(field, self.inputs.get(field.as_str()));
            }
        }
        snapshot.terms_accepted = self.terms_accepted;
        snapshot
    }

    /// How long the event loop may block before the pending debounce is due.
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.debouncer
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Run raw terminal events through focus and input processing, then
    /// handle the resulting form events and any due debounced validation.
    pub fn process(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        hits: &HitMap,
        now: Instant,
    ) {
        let events = self.focus.process_events(raw, root, hits);
        let events = self.inputs.process_events(&events, root);
        for event in &events {
            self.handle_event(event, root, now);
        }
        self.tick(now);
    }

    pub fn handle_event(&mut self, event: &Event, root: &Element, now: Instant) {
        match event {
            // Typing: submit enablement tracks validity immediately, the
            // error annotation follows after the debounce delay.
            Event::Input { target, .. } => {
                let Some(field) = FieldId::from_id(target).filter(FieldId::is_text) else {
                    return;
                };
                self.success = None;
                self.submit_enabled = self.validator.is_form_valid(&self.snapshot());
                self.debouncer.schedule(field, now);
            }

            // Leaving a field validates it immediately.
            Event::Blur { target } => {
                if let Some(field) = FieldId::from_id(target).filter(FieldId::is_text) {
                    let effects = self.validator.validate_field(field, &self.snapshot());
                    self.apply(effects);
                }
            }

            Event::Toggle { target, checked } => {
                if target == FieldId::Terms.as_str() {
                    self.terms_accepted = *checked;
                    self.success = None;
                    let effects = self.validator.terms_changed(&self.snapshot());
                    self.apply(effects);
                }
            }

            // Enter inside a text input validates it and moves on.
            Event::Submit { target } => {
                if let Some(field) = FieldId::from_id(target).filter(FieldId::is_text) {
                    let effects = self.validator.validate_field(field, &self.snapshot());
                    self.apply(effects);
                    self.focus.focus_next(root);
                }
            }

            Event::Click {
                target: Some(target),
                ..
            } => {
                if target == "submit" {
                    self.attempt_submit();
                } else if let Some(field) = toggle_target(root, target) {
                    self.toggle_reveal(field);
                }
            }

            Event::Key {
                target,
                key,
                modifiers,
            } => {
                if *key == Key::Char('q') && modifiers.ctrl {
                    self.running = false;
                    return;
                }
                match target.as_deref() {
                    // Escape with nothing focused quits
                    None if *key == Key::Escape => self.running = false,
                    Some("submit") if *key == Key::Enter => self.attempt_submit(),
                    Some(target) if *key == Key::Enter => {
                        if let Some(field) = toggle_target(root, target) {
                            self.toggle_reveal(field);
                        }
                    }
                    _ => {}
                }
            }

            _ => {}
        }
    }

    /// Fire any debounced validation whose delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(field) = self.debouncer.poll_ready(now) {
            log::debug!("[debounce] validating {field}");
            let effects = self.validator.validate_field(field, &self.snapshot());
            self.apply(effects);
        }
    }

    fn attempt_submit(&mut self) {
        if !self.submit_enabled {
            log::debug!("[submit] ignored, submit is disabled");
            return;
        }
        let effects = self.validator.submit(&self.snapshot());
        self.apply(effects);
    }

    /// Flip a password field between masked and plain display.
    /// Purely presentational; validation state is untouched.
    fn toggle_reveal(&mut self, field: FieldId) {
        if !self.revealed.remove(&field) {
            self.revealed.insert(field);
        }
    }

    /// Fold validation effects into the display state.
    pub fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ClearError(field) => {
                    self.errors.remove(&field);
                }
                Effect::ShowError(err) => {
                    self.errors.insert(err.field, err.message);
                }
                Effect::ClearAllErrors => self.errors.clear(),
                Effect::SetSubmitEnabled(enabled) => self.submit_enabled = enabled,
                Effect::ShowSuccess(message) => self.success = Some(message),
                Effect::ResetForm => {
                    self.inputs.reset_all();
                    self.terms_accepted = false;
                    self.revealed.clear();
                    self.debouncer.cancel();
                }
            }
        }
    }
}

/// Resolve a visibility toggle to its declared target field.
fn toggle_target(root: &Element, id: &str) -> Option<FieldId> {
    let element = find_element(root, id)?;
    FieldId::from_id(element.get_data("target")?)
}
