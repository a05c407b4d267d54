//! Locally recorded class enrollments.
//!
//! Enrollments are a JSON array of class ids under `enrolledClasses`. The list
//! is per-browser rather than per-account and is never synced to the backend.

#[cfg(test)]
#[path = "enrollment_test.rs"]
mod enrollment_test;

use crate::util::storage::{KeyValueStore, LocalStorage, load_json, save_json};

pub const ENROLLED_CLASSES_KEY: &str = "enrolledClasses";

#[derive(Clone, Debug, Default)]
pub struct EnrollmentLedger<K> {
    storage: K,
}

pub type BrowserEnrollmentLedger = EnrollmentLedger<LocalStorage>;

impl<K: KeyValueStore> EnrollmentLedger<K> {
    pub fn new(storage: K) -> Self {
        Self { storage }
    }

    /// Enrolled class ids in enrollment order.
    pub fn enrolled(&self) -> Vec<String> {
        load_json(&self.storage, ENROLLED_CLASSES_KEY).unwrap_or_default()
    }

    pub fn is_enrolled(&self, class_id: &str) -> bool {
        self.enrolled().iter().any(|id| id == class_id)
    }

    /// Record an enrollment. Returns `false` if the class was already enrolled.
    pub fn enroll(&self, class_id: &str) -> bool {
        let mut ids = self.enrolled();
        if ids.iter().any(|id| id == class_id) {
            return false;
        }
        ids.push(class_id.to_owned());
        save_json(&self.storage, ENROLLED_CLASSES_KEY, &ids);
        log::info!("enrolled in class {class_id}");
        true
    }
}
