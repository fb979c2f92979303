/// Screen region an interactive element occupied in the last draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitSpan {
    pub id: String,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub focusable: bool,
    pub clickable: bool,
}

impl HitSpan {
    fn contains(&self, x: u16, y: u16) -> bool {
        y == self.y && x >= self.x && x < self.x + self.width
    }
}

/// Interactive regions recorded during the last draw, for mouse targeting.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    spans: Vec<HitSpan>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, span: HitSpan) {
        self.spans.push(span);
    }

    /// Find the clickable element at a point. Later spans win (drawn on top).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<String> {
        self.spans
            .iter()
            .rev()
            .find(|span| span.clickable && span.contains(x, y))
            .map(|span| span.id.clone())
    }

    /// Find the focusable element at a point.
    pub fn hit_test_focusable(&self, x: u16, y: u16) -> Option<String> {
        self.spans
            .iter()
            .rev()
            .find(|span| span.focusable && span.contains(x, y))
            .map(|span| span.id.clone())
    }
}
