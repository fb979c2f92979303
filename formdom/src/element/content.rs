/// What an element renders.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Single-line editable text.
    TextInput {
        value: String,
        cursor: usize,
        placeholder: Option<String>,
        focused: bool,
        /// When set, every character is displayed as this char instead.
        mask: Option<char>,
    },
    Checkbox {
        checked: bool,
    },
    Button {
        label: String,
    },
}

impl Content {
    /// Children of this element, if it has any.
    pub fn children(&self) -> &[super::Element] {
        match self {
            Content::Children(children) => children,
            _ => &[],
        }
    }

}
