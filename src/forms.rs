use std::collections::BTreeMap;

use uuid::Uuid;

/// Field-keyed validation messages produced by a single validation pass.
///
/// The map is always rebuilt from scratch; a missing key means the field
/// is valid. Setting a field twice keeps the last message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMap<F: Ord>(BTreeMap<F, String>);

impl<F: Ord> Default for ErrorMap<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Ord> ErrorMap<F> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn set(&mut self, field: F, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &F) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// A record that can be edited through a [`SaveForm`].
pub trait FormRecord: Clone {
    /// Entity noun used in save notices ("Course added").
    const KIND: &'static str;

    /// Statically known set of validated fields.
    type Field: Copy + Ord + std::fmt::Debug;
    /// One variant per editable field; picker-style inputs get their own
    /// variant instead of a second calling convention.
    type Patch;

    fn id(&self) -> Option<Uuid>;
    fn apply(&mut self, patch: Self::Patch);
    fn validate(&self) -> ErrorMap<Self::Field>;
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone)]
pub enum Submit<R: FormRecord> {
    /// Validation failed. The error map has been replaced; nothing may be
    /// sent to the persistence action.
    Rejected,
    /// Validation passed and the saving flag is now set. `record` is the
    /// draft snapshot to persist; `notice` is the message to show once the
    /// save resolves, decided by id presence at this moment.
    Accepted { record: R, notice: String },
}

/// Modal save-form state: a private draft of the record under edit, the
/// current error map, and the saving/visibility flags.
///
/// The draft is always a clone of whatever the container supplied, so
/// edits never leak back until a save round-trips.
#[derive(Debug, Clone)]
pub struct SaveForm<R: FormRecord> {
    record: R,
    errors: ErrorMap<R::Field>,
    saving: bool,
    visible: bool,
}

impl<R: FormRecord> SaveForm<R> {
    pub fn new(record: &R) -> Self {
        Self {
            record: record.clone(),
            errors: ErrorMap::new(),
            saving: false,
            visible: false,
        }
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap<R::Field> {
        &self.errors
    }

    pub fn error(&self, field: R::Field) -> Option<&str> {
        self.errors.get(&field)
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Dialog header, e.g. "Create Course" / "Edit Course".
    pub fn title(&self) -> String {
        if self.record.id().is_some() {
            format!("Edit {}", R::KIND)
        } else {
            format!("Create {}", R::KIND)
        }
    }

    /// Show the dialog for the given record.
    pub fn open(&mut self, record: &R) {
        self.set_record(record);
        self.saving = false;
        self.errors = ErrorMap::new();
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Replace the draft wholesale with a clone of the supplied record.
    ///
    /// External truth wins: any unsaved edits are discarded. The error map
    /// is left as-is until the next submit.
    pub fn set_record(&mut self, record: &R) {
        self.record = record.clone();
    }

    /// Route a field update into the draft. All other fields are untouched
    /// and no validation runs until submit.
    pub fn apply(&mut self, patch: R::Patch) {
        self.record.apply(patch);
    }

    /// Validate the draft and, if it passes, arm the saving flag and hand
    /// back the snapshot to persist.
    ///
    /// The error map is replaced on every attempt, pass or fail. There is
    /// no guard against submitting again while a save is in flight.
    pub fn submit(&mut self) -> Submit<R> {
        let errors = self.record.validate();
        let valid = errors.is_empty();
        self.errors = errors;

        if !valid {
            return Submit::Rejected;
        }

        self.saving = true;
        let notice = if self.record.id().is_some() {
            format!("{} updated", R::KIND)
        } else {
            format!("{} added", R::KIND)
        };
        Submit::Accepted {
            record: self.record.clone(),
            notice,
        }
    }

    /// The persistence action rejected: drop the saving flag and leave the
    /// dialog open. The rejection reason is not surfaced per field.
    pub fn save_failed(&mut self) {
        self.saving = false;
    }
}
