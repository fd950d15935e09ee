use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnId(pub Uuid);

impl TurnId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Bot,
}

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub id: TurnId,
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: TurnId::new(),
            role,
            content: content.into(),
        }
    }
}

/// Ordered, append-only message log for the current session.
///
/// Insertion order is the only order: no reordering, no removal of
/// individual turns. `clear` runs exactly once per chat-open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, role: Role, content: impl Into<String>) -> &Turn {
        self.turns.push(Turn::new(role, content));
        // Just pushed, so the log is non-empty.
        &self.turns[self.turns.len() - 1]
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.append(Role::User, "oi");
        transcript.append(Role::Bot, "olá");

        let roles: Vec<Role> = transcript.turns().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Bot]);
        assert_eq!(transcript.last().map(|t| t.content.as_str()), Some("olá"));
    }

    #[test]
    fn clear_empties_the_log() {
        let mut transcript = Transcript::new();
        transcript.append(Role::Bot, "olá");
        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }

    #[test]
    fn turns_get_distinct_ids() {
        let mut transcript = Transcript::new();
        let a = transcript.append(Role::User, "a").id.clone();
        let b = transcript.append(Role::User, "a").id.clone();
        assert_ne!(a, b);
    }
}
