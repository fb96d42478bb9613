//! Renderer state for editable, grouped field lists.
//!
//! [`FormState`] is an immutable snapshot: every edit returns a new state
//! and leaves the previous one intact, so a presentation layer can hold the
//! old snapshot while deciding what to re-render. [`FormSession`] pairs a
//! state with a change listener for callers that want the full updated
//! field sequence pushed to them after each edit.
//!
//! Neither type serializes concurrent edits; callers must apply changes one
//! at a time, in event order, feeding each returned state into the next
//! edit.

use log::warn;
use serde_json::Value;

use crate::data::Document;
use crate::data::field::FieldDescriptor;
use crate::error::FormError;

/// Immutable snapshot of an editable field list.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    fields: Vec<FieldDescriptor>,
}

/// One display group: the group name plus its members in original order.
#[derive(Debug, PartialEq)]
pub struct FieldGroup<'a> {
    /// Shared `group` key of the members.
    pub name: &'a str,
    /// Member fields, keeping their relative order from the field list.
    pub fields: Vec<&'a FieldDescriptor>,
}

impl FormState {
    /// Store the given fields as current state, in the order received.
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }

    /// The full field sequence in its original order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Cluster fields by their `group` key.
    ///
    /// Groups appear in first-seen order of `group` values and members keep
    /// their relative order, so the same input order always produces the
    /// same output.
    pub fn grouped(&self) -> Vec<FieldGroup<'_>> {
        let mut groups: Vec<FieldGroup<'_>> = Vec::new();
        for field in &self.fields {
            match groups.iter_mut().find(|g| g.name == field.group) {
                Some(group) => group.fields.push(field),
                None => groups.push(FieldGroup {
                    name: &field.group,
                    fields: vec![field],
                }),
            }
        }
        groups
    }

    /// Return a new state with the named field set to `value`.
    ///
    /// The value is normalized for the field's kind before storing; all
    /// other fields pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::FieldNotFound`] when no field has that name,
    /// or [`FormError::TypeMismatch`] when the value cannot be normalized.
    pub fn set_value(&self, name: &str, value: Value) -> Result<FormState, FormError> {
        let idx = self
            .fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| FormError::FieldNotFound {
                name: name.to_string(),
            })?;
        let normalized = self.fields[idx].normalize(value)?;
        let mut fields = self.fields.clone();
        fields[idx].value = normalized;
        Ok(FormState::new(fields))
    }

    /// Permissive variant of [`FormState::set_value`].
    ///
    /// An unknown name or unusable value is a logged no-op returning an
    /// equivalent state, matching editors that must never fail on input.
    pub fn apply_change(&self, name: &str, value: Value) -> FormState {
        match self.set_value(name, value) {
            Ok(next) => next,
            Err(e) => {
                warn!("ignoring edit of {name:?}: {e}");
                self.clone()
            }
        }
    }
}

impl From<Document> for FormState {
    fn from(doc: Document) -> Self {
        Self::new(doc.into_fields())
    }
}

/// Callback invoked with the full field sequence after every change.
pub type ChangeListener = Box<dyn FnMut(&[FieldDescriptor])>;

/// A form state plus a change listener, driving one editing session.
pub struct FormSession {
    state: FormState,
    on_change: Option<ChangeListener>,
}

impl FormSession {
    /// Start a session over the given state.
    pub fn new(state: FormState) -> Self {
        Self {
            state,
            on_change: None,
        }
    }

    /// Register the listener notified synchronously after each change.
    pub fn on_change(mut self, listener: ChangeListener) -> Self {
        self.on_change = Some(listener);
        self
    }

    /// The current state snapshot.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Apply one edit and notify the listener before returning.
    ///
    /// # Errors
    ///
    /// Propagates [`FormState::set_value`] errors; the listener is not
    /// invoked and the state does not change on failure.
    pub fn handle_change(&mut self, name: &str, value: Value) -> Result<(), FormError> {
        self.state = self.state.set_value(name, value)?;
        if let Some(listener) = self.on_change.as_mut() {
            listener(self.state.fields());
        }
        Ok(())
    }
}
