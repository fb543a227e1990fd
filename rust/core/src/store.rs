// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Caller-owned project collection
//!
//! The collection of projects is an explicit value the caller owns and
//! passes around, never ambient state. Projects are replaced wholesale on
//! update, so no partially written project is ever observable through the
//! store.

use crate::types::ScanProject;

/// Ordered collection of projects, most recent scan first.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Vec<ScanProject>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Insert a project at the front of the display order.
    pub fn insert(&mut self, project: ScanProject) {
        self.projects.insert(0, project);
    }

    /// Look up a project by id.
    pub fn get(&self, id: &str) -> Option<&ScanProject> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Replace the stored project with a matching id.
    ///
    /// Returns `false` (store unchanged) when no project matched, so
    /// callers that care about not-found can observe it.
    pub fn replace(&mut self, project: ScanProject) -> bool {
        match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => {
                *slot = project;
                true
            }
            None => false,
        }
    }

    /// Remove and return the project with `id`.
    pub fn remove(&mut self, id: &str) -> Option<ScanProject> {
        let index = self.projects.iter().position(|p| p.id == id)?;
        Some(self.projects.remove(index))
    }

    /// Projects in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ScanProject> {
        self.projects.iter()
    }
}
