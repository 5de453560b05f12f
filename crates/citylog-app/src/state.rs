// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::borrow::Cow;

use crate::{
    AddCityDialog, City, CityStore, ConfirmOutcome, DialogEdit, DialogField, DialogVisibility,
    project,
};

#[derive(Debug, Default)]
pub struct ScreenState {
    pub store: CityStore,
    pub sort_enabled: bool,
    pub dialog: AddCityDialog,
    pub status_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCommand {
    ToggleSort,
    OpenDialog,
    CancelDialog,
    ConfirmDialog,
    EditDialog(DialogEdit),
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    SortChanged(bool),
    DialogOpened,
    DialogClosed,
    CityAdded(City),
    AddRejected(DialogField),
    StatusUpdated(String),
    StatusCleared,
}

impl ScreenState {
    pub fn with_sort(sort_enabled: bool) -> Self {
        Self {
            sort_enabled,
            ..Self::default()
        }
    }

    pub fn dispatch(&mut self, command: ScreenCommand) -> Vec<ScreenEvent> {
        match command {
            ScreenCommand::ToggleSort => {
                self.sort_enabled = !self.sort_enabled;
                tracing::info!(sort_enabled = self.sort_enabled, "sort toggled");
                let label = if self.sort_enabled {
                    "sorted A-Z"
                } else {
                    "insertion order"
                };
                vec![
                    ScreenEvent::SortChanged(self.sort_enabled),
                    self.set_status(label),
                ]
            }
            ScreenCommand::OpenDialog => {
                if self.dialog.open() {
                    tracing::debug!("add-city dialog opened");
                    vec![ScreenEvent::DialogOpened]
                } else {
                    Vec::new()
                }
            }
            ScreenCommand::CancelDialog => {
                if self.dialog.cancel() {
                    tracing::debug!("add-city dialog cancelled");
                    vec![ScreenEvent::DialogClosed]
                } else {
                    Vec::new()
                }
            }
            ScreenCommand::ConfirmDialog => self.confirm_dialog(),
            ScreenCommand::EditDialog(edit) => {
                self.dialog.edit(edit);
                Vec::new()
            }
            ScreenCommand::SetStatus(message) => vec![self.set_status(&message)],
            ScreenCommand::ClearStatus => {
                self.status_line = None;
                vec![ScreenEvent::StatusCleared]
            }
        }
    }

    /// Cities in the order the list should show them.
    pub fn visible_cities(&self) -> Cow<'_, [City]> {
        project(self.store.snapshot(), self.sort_enabled)
    }

    pub fn dialog_visibility(&self) -> DialogVisibility {
        self.dialog.visibility()
    }

    pub fn on_sort_toggle_tapped(&mut self) -> Vec<ScreenEvent> {
        self.dispatch(ScreenCommand::ToggleSort)
    }

    pub fn on_add_button_tapped(&mut self) -> Vec<ScreenEvent> {
        self.dispatch(ScreenCommand::OpenDialog)
    }

    pub fn on_dialog_cancelled(&mut self) -> Vec<ScreenEvent> {
        self.dispatch(ScreenCommand::CancelDialog)
    }

    /// Loads `name` and `country` into the open dialog and confirms it.
    pub fn on_dialog_confirmed(&mut self, name: &str, country: &str) -> Vec<ScreenEvent> {
        self.dialog.set_buffer(DialogField::City, name);
        self.dialog.set_buffer(DialogField::Country, country);
        self.dispatch(ScreenCommand::ConfirmDialog)
    }

    fn confirm_dialog(&mut self) -> Vec<ScreenEvent> {
        match self.dialog.confirm() {
            ConfirmOutcome::Requested(request) => {
                let city = request.into_city();
                tracing::info!(name = city.name(), country = city.country(), "city added");
                self.store.append(city.clone());
                vec![
                    ScreenEvent::DialogClosed,
                    ScreenEvent::CityAdded(city.clone()),
                    self.set_status(&format!("added {city}")),
                ]
            }
            ConfirmOutcome::Rejected(field) => {
                tracing::debug!(field = field.label(), "add rejected");
                vec![
                    ScreenEvent::AddRejected(field),
                    self.set_status(field.required_message()),
                ]
            }
            ConfirmOutcome::NotOpen => Vec::new(),
        }
    }

    fn set_status(&mut self, message: &str) -> ScreenEvent {
        self.status_line = Some(message.to_owned());
        ScreenEvent::StatusUpdated(message.to_owned())
    }
}
