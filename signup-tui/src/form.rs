//! Pure view builder: application state in, element tree out.

use formdom::{Color, Element, Style};
use signup_lib::FieldId;

use crate::app::App;

fn label_style() -> Style {
    Style::new().dim()
}

fn input_style() -> Style {
    Style::new().background(Color::DarkGrey)
}

fn focused_style() -> Style {
    Style::new().background(Color::Grey).foreground(Color::Black)
}

fn error_style() -> Style {
    Style::new().foreground(Color::Red)
}

/// Build the registration form tree from current state.
pub fn build(app: &App) -> Element {
    let mut form = Element::col()
        .id("registrationForm")
        .gap(1)
        .child(Element::text("Create your account").style(Style::new().bold()))
        .child(text_field(app, FieldId::FullName, "Full Name", "Jane Doe"))
        .child(text_field(app, FieldId::Email, "Email", "you@example.com"))
        .child(password_field(
            app,
            FieldId::Password,
            "Password",
            "At least 8 characters",
        ))
        .child(password_field(
            app,
            FieldId::ConfirmPassword,
            "Confirm Password",
            "Repeat your password",
        ))
        .child(text_field(app, FieldId::Phone, "Phone (optional)", "10 digits"))
        .child(text_field(app, FieldId::Dob, "Date of Birth", "YYYY-MM-DD"))
        .child(terms_row(app))
        .child(
            Element::button("Register")
                .id("submit")
                .disabled(!app.submit_enabled)
                .focused(app.focus.focused() == Some("submit"))
                .style_focused(focused_style())
                .style_disabled(Style::new().dim()),
        );

    if let Some(message) = &app.success {
        form = form.child(
            Element::text(message.clone())
                .id("success")
                .style(Style::new().foreground(Color::Green).bold()),
        );
    }

    form.child(
        Element::text("tab/↑↓ move · space toggles · enter submits · ctrl+q quits")
            .style(Style::new().dim()),
    )
}

/// Label, input, and the inline error line beneath it.
fn text_field(app: &App, field: FieldId, label: &str, placeholder: &str) -> Element {
    let mut block = Element::col()
        .child(Element::text(label).style(label_style()))
        .child(input_element(app, field, placeholder));

    if let Some(message) = app.errors.get(&field) {
        block = block.child(error_line(field, message));
    }
    block
}

/// A password field wrapped with its visibility toggle. The error line is
/// placed after the wrapper row, not inside it.
fn password_field(app: &App, field: FieldId, label: &str, placeholder: &str) -> Element {
    let id = field.as_str();
    let revealed = app.revealed.contains(&field);

    let mut input = input_element(app, field, placeholder);
    input = if revealed {
        input.unmasked()
    } else {
        input.password()
    };

    let container = Element::row()
        .id(format!("{id}-container"))
        .gap(1)
        .child(input)
        .child(
            Element::button(if revealed { "hide" } else { "show" })
                .id(format!("toggle-{id}"))
                .data("target", id)
                .focused(app.focus.focused() == Some(format!("toggle-{id}").as_str()))
                .style_focused(focused_style()),
        );

    let mut block = Element::col()
        .child(Element::text(label).style(label_style()))
        .child(container);

    if let Some(message) = app.errors.get(&field) {
        block = block.child(error_line(field, message));
    }
    block
}

fn input_element(app: &App, field: FieldId, placeholder: &str) -> Element {
    let id = field.as_str();
    let data = app.inputs.get_data(id).cloned().unwrap_or_default();

    Element::text_input("")
        .id(id)
        .placeholder(placeholder)
        .input_state(&data, app.focus.focused() == Some(id))
        .flagged(app.errors.contains_key(&field))
        .style(input_style())
        .style_focused(focused_style())
        .style_flagged(error_style())
}

fn terms_row(app: &App) -> Element {
    let mut block = Element::col().child(
        Element::row()
            .gap(1)
            .child(
                Element::checkbox(app.terms_accepted)
                    .id("terms")
                    .focused(app.focus.focused() == Some("terms"))
                    .flagged(app.errors.contains_key(&FieldId::Terms))
                    .style_focused(focused_style())
                    .style_flagged(error_style()),
            )
            .child(Element::text("I accept the terms and conditions")),
    );

    if let Some(message) = app.errors.get(&FieldId::Terms) {
        block = block.child(error_line(FieldId::Terms, message));
    }
    block
}

fn error_line(field: FieldId, message: &str) -> Element {
    Element::text(message)
        .id(format!("{field}-error"))
        .style(error_style())
}
