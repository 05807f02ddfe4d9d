//! Current values of the placement input fields.
//!
//! The host mirrors its text/font/size/color/alignment controls into an
//! `InputFields`. New items and the placement preview are both stamped out
//! of it, so they always look identical.

use lb_core::{Align, SizePolicy, TextItem};

#[derive(Debug, Clone, PartialEq)]
pub struct InputFields {
    pub text: String,
    pub family: String,
    /// Raw size field contents; parsed with a [`SizePolicy`] at use.
    pub size: String,
    pub color: String,
    pub align: Align,
}

impl Default for InputFields {
    fn default() -> Self {
        Self {
            text: String::new(),
            family: "Inter".to_string(),
            size: "48".to_string(),
            color: "#111111".to_string(),
            align: Align::Center,
        }
    }
}

impl InputFields {
    /// Whether there is anything to place. Whitespace-only text counts as empty.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// An item built from the fields, anchored at `(x, y)` with the field
    /// alignment. `None` when the text field is empty.
    pub fn item_at(&self, x: f32, y: f32, policy: &SizePolicy) -> Option<TextItem> {
        self.item_with_align(x, y, self.align, policy)
    }

    /// Like [`Self::item_at`] but with an explicit alignment.
    pub fn item_with_align(
        &self,
        x: f32,
        y: f32,
        align: Align,
        policy: &SizePolicy,
    ) -> Option<TextItem> {
        if !self.has_text() {
            return None;
        }
        Some(TextItem {
            text: self.text.clone(),
            x,
            y,
            size: policy.parse(&self.size),
            family: self.family.clone(),
            color: self.color.clone(),
            align,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_yields_nothing() {
        let fields = InputFields::default();
        assert_eq!(fields.item_at(1.0, 1.0, &SizePolicy::default()), None);

        let blank = InputFields {
            text: "   ".to_string(),
            ..InputFields::default()
        };
        assert_eq!(blank.item_at(1.0, 1.0, &SizePolicy::default()), None);
    }

    #[test]
    fn item_copies_fields_and_clamps_size() {
        let fields = InputFields {
            text: "HELLO".to_string(),
            family: "Georgia".to_string(),
            size: "1000".to_string(),
            color: "#ff0000".to_string(),
            align: Align::TopLeft,
        };
        let item = fields.item_at(100.0, 100.0, &SizePolicy::default()).unwrap();
        assert_eq!(
            item,
            TextItem {
                text: "HELLO".to_string(),
                x: 100.0,
                y: 100.0,
                size: 800.0,
                family: "Georgia".to_string(),
                color: "#ff0000".to_string(),
                align: Align::TopLeft,
            }
        );
    }

    #[test]
    fn non_numeric_size_uses_default() {
        let fields = InputFields {
            text: "x".to_string(),
            size: "abc".to_string(),
            ..InputFields::default()
        };
        let item = fields.item_at(0.0, 0.0, &SizePolicy::default()).unwrap();
        assert_eq!(item.size, 48.0);
    }
}
