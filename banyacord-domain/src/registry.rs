use crate::model::{Participant, ParticipantId};
use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateName { name: String },
    EmptyName,
    NotFound,
}

/// The set of known participants. Identity is the trimmed display name;
/// insertion order is the canonical display order.
#[derive(Debug, Default, Clone)]
pub struct ParticipantRegistry {
    participants: IndexMap<ParticipantId, Participant>,
    next_id: u64,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new participant. The name is trimmed before the
    /// uniqueness check; exact string match decides duplicates.
    pub fn register(&mut self, name: &str) -> Result<&Participant, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.participants.values().any(|p| p.display_name == name) {
            return Err(RegistryError::DuplicateName {
                name: name.to_string(),
            });
        }

        let id = ParticipantId(self.next_id);
        self.next_id += 1;
        let participant = Participant {
            id,
            display_name: name.to_string(),
        };
        Ok(self.participants.entry(id).or_insert(participant))
    }

    /// Remove a participant. `shift_remove` keeps the remaining display
    /// order intact.
    pub fn remove(&mut self, id: ParticipantId) -> Result<Participant, RegistryError> {
        self.participants
            .shift_remove(&id)
            .ok_or(RegistryError::NotFound)
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(&id)
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.participants.contains_key(&id)
    }

    pub fn display_name(&self, id: ParticipantId) -> Option<&str> {
        self.get(id).map(|p| p.display_name.as_str())
    }

    /// Participants in registration order.
    pub fn list(&self) -> impl Iterator<Item = &Participant> {
        self.participants.values()
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
