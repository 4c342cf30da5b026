//! Dialog API
//!
//! Presentable alert dialogs and the builder that wires alert content and
//! handlers into them.

use std::fmt;

use crate::content::{AlertContent, AlertVariant};
use crate::AlertError;

/// Action style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionStyle {
    Cancel,
    #[default]
    Default,
}

/// Runs when the user picks an action
pub type ActionHandler = Box<dyn FnOnce() -> Result<(), AlertError>>;

/// Dialog button
pub struct DialogAction {
    pub label: Option<String>,
    pub style: ActionStyle,
    handler: ActionHandler,
}

impl DialogAction {
    pub fn new(label: Option<String>, style: ActionStyle, handler: ActionHandler) -> Self {
        Self { label, style, handler }
    }
}

impl fmt::Debug for DialogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogAction")
            .field("label", &self.label)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Modal alert dialog.
///
/// Picking an action consumes the dialog, so one dialog delivers at most one
/// user decision.
#[derive(Debug, Default)]
pub struct Dialog {
    pub title: Option<String>,
    pub message: Option<String>,
    actions: Vec<DialogAction>,
    preferred: Option<usize>,
}

impl Dialog {
    pub fn new(title: Option<String>, message: Option<String>) -> Self {
        Self {
            title,
            message,
            actions: Vec::new(),
            preferred: None,
        }
    }

    /// Append an action, returning its index
    pub fn add_action(&mut self, action: DialogAction) -> usize {
        self.actions.push(action);
        self.actions.len() - 1
    }

    /// Mark the action emphasised by the platform's default gesture
    pub fn set_preferred_action(&mut self, index: usize) {
        if index < self.actions.len() {
            self.preferred = Some(index);
        }
    }

    pub fn actions(&self) -> &[DialogAction] {
        &self.actions
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Labels in display order
    pub fn labels(&self) -> Vec<&str> {
        self.actions
            .iter()
            .map(|a| a.label.as_deref().unwrap_or(""))
            .collect()
    }

    pub fn preferred_index(&self) -> Option<usize> {
        self.preferred
    }

    pub fn preferred_action(&self) -> Option<&DialogAction> {
        self.preferred.and_then(|i| self.actions.get(i))
    }

    pub fn cancel_action(&self) -> Option<&DialogAction> {
        self.actions.iter().find(|a| a.style == ActionStyle::Cancel)
    }

    /// Run the action at `index`
    pub fn choose(mut self, index: usize) -> Result<(), AlertError> {
        if index >= self.actions.len() {
            return Err(AlertError::NoSuchAction(index.to_string()));
        }
        let action = self.actions.swap_remove(index);
        tracing::debug!("Dialog action chosen: {:?}", action.label);
        (action.handler)()
    }

    /// Run the action labelled `label`
    pub fn choose_label(self, label: &str) -> Result<(), AlertError> {
        let found = self.actions.iter().position(|a| a.label.as_deref() == Some(label));
        match found {
            Some(index) => self.choose(index),
            None => Err(AlertError::NoSuchAction(label.to_string())),
        }
    }

    /// Run the cancel action (dismissal)
    pub fn cancel(self) -> Result<(), AlertError> {
        let found = self.actions.iter().position(|a| a.style == ActionStyle::Cancel);
        match found {
            Some(index) => self.choose(index),
            None => Err(AlertError::NoSuchAction("cancel".to_string())),
        }
    }

    /// Run the preferred action
    pub fn confirm(self) -> Result<(), AlertError> {
        match self.preferred {
            Some(index) => self.choose(index),
            None => Err(AlertError::NoSuchAction("preferred".to_string())),
        }
    }
}

/// Handlers an alert hands to the builder
pub struct AlertHandlers {
    pub cancel: ActionHandler,
    /// Settings or confirm handler; ignored for disabled alerts
    pub primary: Option<ActionHandler>,
}

/// Build the dialog for `variant` from `content`.
///
/// Always adds the cancel action. Denied and pre-permission alerts add one
/// more action, marked preferred.
pub fn build_dialog(
    variant: AlertVariant,
    content: &AlertContent,
    handlers: AlertHandlers,
) -> Dialog {
    let mut dialog = Dialog::new(content.title.clone(), content.message.clone());

    dialog.add_action(DialogAction::new(
        content.cancel_label.clone(),
        ActionStyle::Cancel,
        handlers.cancel,
    ));

    match variant {
        AlertVariant::Disabled => {}
        AlertVariant::Denied | AlertVariant::PrePermission => match handlers.primary {
            Some(handler) => {
                let index = dialog.add_action(DialogAction::new(
                    content.primary_label.clone(),
                    ActionStyle::Default,
                    handler,
                ));
                dialog.set_preferred_action(index);
            }
            None => tracing::warn!("{:?} alert built without a primary handler", variant),
        },
    }

    tracing::debug!("Built {:?} dialog with {} actions", variant, dialog.action_count());
    dialog
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn content() -> AlertContent {
        AlertContent {
            title: Some("Title".into()),
            message: Some("Message".into()),
            cancel_label: Some("Cancel".into()),
            primary_label: Some("Settings".into()),
        }
    }

    fn counting(counter: &Rc<Cell<u32>>) -> ActionHandler {
        let counter = counter.clone();
        Box::new(move || {
            counter.set(counter.get() + 1);
            Ok(())
        })
    }

    #[test]
    fn test_disabled_has_single_cancel_action() {
        let hits = Rc::new(Cell::new(0));
        let handlers = AlertHandlers {
            cancel: counting(&hits),
            primary: Some(counting(&hits)),
        };
        let dialog = build_dialog(AlertVariant::Disabled, &content(), handlers);

        assert_eq!(dialog.action_count(), 1);
        assert_eq!(dialog.actions()[0].style, ActionStyle::Cancel);
        assert!(dialog.preferred_action().is_none());
    }

    #[test]
    fn test_denied_second_action_is_preferred() {
        let hits = Rc::new(Cell::new(0));
        let handlers = AlertHandlers {
            cancel: counting(&hits),
            primary: Some(counting(&hits)),
        };
        let dialog = build_dialog(AlertVariant::Denied, &content(), handlers);

        assert_eq!(dialog.action_count(), 2);
        assert_eq!(dialog.preferred_index(), Some(1));
        assert_eq!(dialog.labels(), vec!["Cancel", "Settings"]);
        assert_eq!(dialog.preferred_action().unwrap().style, ActionStyle::Default);
    }

    #[test]
    fn test_choose_runs_only_that_handler() {
        let cancel = Rc::new(Cell::new(0));
        let primary = Rc::new(Cell::new(0));
        let handlers = AlertHandlers {
            cancel: counting(&cancel),
            primary: Some(counting(&primary)),
        };
        let dialog = build_dialog(AlertVariant::PrePermission, &content(), handlers);

        dialog.confirm().unwrap();
        assert_eq!(cancel.get(), 0);
        assert_eq!(primary.get(), 1);
    }

    #[test]
    fn test_choose_unknown_label() {
        let hits = Rc::new(Cell::new(0));
        let handlers = AlertHandlers {
            cancel: counting(&hits),
            primary: None,
        };
        let dialog = build_dialog(AlertVariant::Disabled, &content(), handlers);

        let err = dialog.choose_label("Settings").unwrap_err();
        assert!(matches!(err, AlertError::NoSuchAction(_)));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_choose_out_of_range() {
        let dialog = Dialog::new(None, None);
        assert!(dialog.choose(3).is_err());
    }
}
