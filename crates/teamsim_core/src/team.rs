//! Teams: ordered personas plus their bound tasks.
//!
//! Persona order is insertion order and is meaningful: the runner
//! presents personas in this order and uses position 0 as the
//! hierarchical-coordinator fallback. Role lookup goes through a
//! validated index built at insertion, so duplicate roles are rejected
//! up front rather than silently matching first.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{TeamError, TeamResult};
use crate::persona::Persona;
use crate::task::Task;

/// An ordered team of personas and the tasks bound to them.
#[derive(Debug, Clone, Default)]
pub struct Team {
    personas: Vec<Persona>,
    tasks: Vec<Task>,
    /// Role → index into `personas`; rebuilt only by insertion.
    role_index: HashMap<String, usize>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a persona to the team.
    ///
    /// Names and roles are both unique per team: fails with
    /// [`TeamError::DuplicateName`] or [`TeamError::DuplicateRole`]
    /// when another persona already holds either.
    pub fn add_persona(&mut self, persona: Persona) -> TeamResult<()> {
        if self.personas.iter().any(|p| p.name == persona.name) {
            return Err(TeamError::DuplicateName(persona.name.clone()));
        }
        if self.role_index.contains_key(&persona.role) {
            return Err(TeamError::DuplicateRole(persona.role.clone()));
        }
        debug!(name = %persona.name, role = %persona.role, "adding persona to team");
        self.role_index
            .insert(persona.role.clone(), self.personas.len());
        self.personas.push(persona);
        Ok(())
    }

    /// Bind a task to the persona holding `assigned_role`.
    ///
    /// The role is validated eagerly, before any engine call is ever
    /// made; on failure no task is appended. Binding the same role
    /// again appends another task.
    pub fn bind_task(
        &mut self,
        description: impl Into<String>,
        assigned_role: impl Into<String>,
        expected_output: impl Into<String>,
        context: impl Into<String>,
    ) -> TeamResult<&Task> {
        let assigned_role = assigned_role.into();
        if !self.role_index.contains_key(&assigned_role) {
            return Err(TeamError::UnknownRole(assigned_role));
        }

        let task = Task::new(description, assigned_role, expected_output, context);
        debug!(role = %task.assigned_role, "bound task");
        self.tasks.push(task);
        let idx = self.tasks.len() - 1;
        Ok(&self.tasks[idx])
    }

    /// Look up a persona by role.
    pub fn persona_by_role(&self, role: &str) -> Option<&Persona> {
        self.role_index.get(role).map(|&i| &self.personas[i])
    }

    /// Whether a persona with the given role exists.
    pub fn has_role(&self, role: &str) -> bool {
        self.role_index.contains_key(role)
    }

    /// The coordinator for hierarchical runs: the first Leader-variant
    /// persona, or, when no leader exists, the persona at team position
    /// 0 (a deterministic, documented fallback).
    pub fn coordinator(&self) -> Option<&Persona> {
        self.personas
            .iter()
            .find(|p| p.variant.is_leader())
            .or_else(|| self.personas.first())
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}
