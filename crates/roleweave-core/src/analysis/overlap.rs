//! Shared-resource maps.
//!
//! A task or tool is "shared" when its name appears under more than one
//! owner (the role itself and/or several collaborators). The maps are pure
//! functions of the current store contents and are never stored.

use crate::rolemap::{Collaborator, SoloTask};
use std::collections::BTreeMap;

/// Owner name the role itself contributes to the tool map.
pub const ROLE_OWNER: &str = "Role";

/// Task name -> owners whose task list contains it (exact string match, no
/// normalization). A bucket longer than one marks a shared task.
pub fn shared_tasks_map(collaborators: &[Collaborator]) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for collaborator in collaborators {
        for task in &collaborator.tasks {
            map.entry(task.clone())
                .or_default()
                .push(collaborator.name.clone());
        }
    }
    map
}

/// Tool name -> owners, seeding the role itself as owner [`ROLE_OWNER`] for
/// its own tool list.
pub fn shared_tools_map(
    role_tools: &[String],
    collaborators: &[Collaborator],
) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for tool in role_tools {
        map.entry(tool.clone())
            .or_default()
            .push(ROLE_OWNER.to_string());
    }
    for collaborator in collaborators {
        for tool in &collaborator.tools {
            map.entry(tool.clone())
                .or_default()
                .push(collaborator.name.clone());
        }
    }
    map
}

/// Whether `name` is shared according to an owner map.
pub fn is_shared(map: &BTreeMap<String, Vec<String>>, name: &str) -> bool {
    map.get(name).is_some_and(|owners| owners.len() > 1)
}

/// The entries of an owner map with more than one owner.
pub fn shared_entries(
    map: &BTreeMap<String, Vec<String>>,
) -> impl Iterator<Item = (&String, &Vec<String>)> {
    map.iter().filter(|(_, owners)| owners.len() > 1)
}

/// Every task name across collaborators and solo tasks, deduplicated and in
/// first-seen order. Feeds the pain-point task picker.
pub fn task_options(collaborators: &[Collaborator], solo_tasks: &[SoloTask]) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    let mut push = |task: &str| {
        if !options.iter().any(|t| t == task) {
            options.push(task.to_string());
        }
    };
    for collaborator in collaborators {
        for task in &collaborator.tasks {
            push(task);
        }
    }
    for task in solo_tasks {
        push(&task.title);
    }
    options
}
