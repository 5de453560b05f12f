// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{City, DialogField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogVisibility {
    #[default]
    Hidden,
    Visible,
}

/// Emitted once per accepted confirm; carries the buffers exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCityRequested {
    pub name: String,
    pub country: String,
}

impl AddCityRequested {
    pub fn into_city(self) -> City {
        City::new(self.name, self.country)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Requested(AddCityRequested),
    /// Guard failed on this field; the dialog stays open.
    Rejected(DialogField),
    NotOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEdit {
    Push(char),
    Backspace,
    NextField,
    PrevField,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddCityDialog {
    visibility: DialogVisibility,
    city: String,
    country: String,
    focus: Option<DialogField>,
}

impl AddCityDialog {
    pub fn visibility(&self) -> DialogVisibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == DialogVisibility::Visible
    }

    pub fn buffer(&self, field: DialogField) -> &str {
        match field {
            DialogField::City => &self.city,
            DialogField::Country => &self.country,
        }
    }

    /// Focused field; `None` while hidden.
    pub fn focus(&self) -> Option<DialogField> {
        self.focus
    }

    /// Returns false when the dialog was already open; buffers are left as-is
    /// in that case.
    pub fn open(&mut self) -> bool {
        if self.is_visible() {
            return false;
        }
        self.reset();
        self.visibility = DialogVisibility::Visible;
        self.focus = Some(DialogField::City);
        true
    }

    pub fn cancel(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        self.close();
        true
    }

    pub fn confirm(&mut self) -> ConfirmOutcome {
        if !self.is_visible() {
            return ConfirmOutcome::NotOpen;
        }
        if let Some(field) = self.first_missing_field() {
            return ConfirmOutcome::Rejected(field);
        }

        let request = AddCityRequested {
            name: std::mem::take(&mut self.city),
            country: std::mem::take(&mut self.country),
        };
        self.close();
        ConfirmOutcome::Requested(request)
    }

    pub fn set_buffer(&mut self, field: DialogField, value: impl Into<String>) {
        if !self.is_visible() {
            return;
        }
        *self.buffer_mut(field) = value.into();
    }

    pub fn edit(&mut self, edit: DialogEdit) {
        let Some(focus) = self.focus else {
            return;
        };
        match edit {
            DialogEdit::Push(ch) => self.buffer_mut(focus).push(ch),
            DialogEdit::Backspace => {
                self.buffer_mut(focus).pop();
            }
            DialogEdit::NextField | DialogEdit::PrevField => {
                self.focus = Some(focus.next());
            }
        }
    }

    pub fn first_missing_field(&self) -> Option<DialogField> {
        DialogField::ALL
            .into_iter()
            .find(|field| self.buffer(*field).is_empty())
    }

    fn buffer_mut(&mut self, field: DialogField) -> &mut String {
        match field {
            DialogField::City => &mut self.city,
            DialogField::Country => &mut self.country,
        }
    }

    fn close(&mut self) {
        self.reset();
        self.visibility = DialogVisibility::Hidden;
        self.focus = None;
    }

    fn reset(&mut self) {
        self.city.clear();
        self.country.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{AddCityDialog, AddCityRequested, ConfirmOutcome, DialogEdit, DialogVisibility};
    use crate::{City, DialogField};

    fn type_text(dialog: &mut AddCityDialog, text: &str) {
        for ch in text.chars() {
            dialog.edit(DialogEdit::Push(ch));
        }
    }

    #[test]
    fn starts_hidden_with_empty_buffers() {
        let dialog = AddCityDialog::default();
        assert_eq!(dialog.visibility(), DialogVisibility::Hidden);
        assert_eq!(dialog.focus(), None);
        assert_eq!(dialog.buffer(DialogField::City), "");
        assert_eq!(dialog.buffer(DialogField::Country), "");
    }

    #[test]
    fn open_focuses_city_field() {
        let mut dialog = AddCityDialog::default();
        assert!(dialog.open());
        assert!(dialog.is_visible());
        assert_eq!(dialog.focus(), Some(DialogField::City));
        assert!(!dialog.open());
    }

    #[test]
    fn confirm_with_empty_city_is_rejected() {
        let mut dialog = AddCityDialog::default();
        dialog.open();
        dialog.set_buffer(DialogField::Country, "Spain");

        assert_eq!(dialog.confirm(), ConfirmOutcome::Rejected(DialogField::City));
        assert!(dialog.is_visible());
        assert_eq!(dialog.buffer(DialogField::Country), "Spain");
    }

    #[test]
    fn confirm_with_empty_country_is_rejected() {
        let mut dialog = AddCityDialog::default();
        dialog.open();
        dialog.set_buffer(DialogField::City, "Rome");

        assert_eq!(
            dialog.confirm(),
            ConfirmOutcome::Rejected(DialogField::Country)
        );
        assert!(dialog.is_visible());
    }

    #[test]
    fn confirm_emits_literal_values_and_closes() {
        let mut dialog = AddCityDialog::default();
        dialog.open();
        type_text(&mut dialog, " Rome");
        dialog.edit(DialogEdit::NextField);
        type_text(&mut dialog, "Italy");

        let outcome = dialog.confirm();
        assert_eq!(
            outcome,
            ConfirmOutcome::Requested(AddCityRequested {
                name: " Rome".to_owned(),
                country: "Italy".to_owned(),
            }),
        );
        assert_eq!(dialog.visibility(), DialogVisibility::Hidden);
        assert_eq!(dialog.confirm(), ConfirmOutcome::NotOpen);
    }

    #[test]
    fn cancel_discards_input() {
        let mut dialog = AddCityDialog::default();
        assert!(!dialog.cancel());

        dialog.open();
        type_text(&mut dialog, "Lisbon");
        assert!(dialog.cancel());
        assert!(!dialog.is_visible());
        assert_eq!(dialog.buffer(DialogField::City), "");
    }

    #[test]
    fn reopen_always_starts_blank() {
        let mut dialog = AddCityDialog::default();

        dialog.open();
        type_text(&mut dialog, "Porto");
        dialog.cancel();
        dialog.open();
        assert_eq!(dialog.buffer(DialogField::City), "");
        assert_eq!(dialog.buffer(DialogField::Country), "");

        type_text(&mut dialog, "Faro");
        dialog.edit(DialogEdit::NextField);
        type_text(&mut dialog, "Portugal");
        dialog.confirm();
        dialog.open();
        assert_eq!(dialog.buffer(DialogField::City), "");
        assert_eq!(dialog.buffer(DialogField::Country), "");
    }

    #[test]
    fn edits_are_ignored_while_hidden() {
        let mut dialog = AddCityDialog::default();
        dialog.edit(DialogEdit::Push('x'));
        dialog.set_buffer(DialogField::City, "Nope");
        assert_eq!(dialog, AddCityDialog::default());
    }

    #[test]
    fn backspace_and_field_switching() {
        let mut dialog = AddCityDialog::default();
        dialog.open();
        type_text(&mut dialog, "Nicee");
        dialog.edit(DialogEdit::Backspace);
        dialog.edit(DialogEdit::PrevField);
        assert_eq!(dialog.focus(), Some(DialogField::Country));
        dialog.edit(DialogEdit::Backspace);
        type_text(&mut dialog, "France");

        assert_eq!(dialog.buffer(DialogField::City), "Nice");
        assert_eq!(dialog.buffer(DialogField::Country), "France");
    }

    #[test]
    fn request_converts_to_city() {
        let request = AddCityRequested {
            name: "Hanoi".to_owned(),
            country: "Vietnam".to_owned(),
        };
        assert_eq!(request.into_city(), City::new("Hanoi", "Vietnam"));
    }
}
