//! User record persisted as the session snapshot.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so the stored JSON stays
//! `{"id","name","email","learningStyle","subjects"}`. Optional fields are
//! omitted when absent rather than written as `null`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in learner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque identifier (`user-` followed by a base-36 suffix).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address used to sign in.
    pub email: String,
    /// Preferred learning style tag (e.g. `"visual"`), if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_style: Option<String>,
    /// Subject tags the learner follows, if any have been chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
}

impl User {
    /// Shallow-merge `update` into a copy of this user.
    ///
    /// Fields left as `None` in the update keep their current value.
    #[must_use]
    pub fn merged(&self, update: &ProfileUpdate) -> Self {
        let mut next = self.clone();
        if let Some(name) = &update.name {
            next.name.clone_from(name);
        }
        if let Some(email) = &update.email {
            next.email.clone_from(email);
        }
        if let Some(style) = &update.learning_style {
            next.learning_style = Some(style.clone());
        }
        if let Some(subjects) = &update.subjects {
            next.subjects = Some(subjects.clone());
        }
        next
    }

    /// Subject tags, empty when none were ever set.
    pub fn subject_list(&self) -> &[String] {
        self.subjects.as_deref().unwrap_or_default()
    }
}

/// Partial profile patch applied by the profile page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub learning_style: Option<String>,
    pub subjects: Option<Vec<String>>,
}
