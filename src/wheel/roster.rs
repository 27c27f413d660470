use crate::model::Member;

use super::{Participant, ParticipantSet};

/// The names available to the wheel.
///
/// By default these are the eligible members. The operator may type in a
/// custom list for an ad-hoc draw; while that list is non-empty it wholly
/// replaces the default set (never merges with it). Clearing it falls back
/// to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    default: ParticipantSet,
    custom: Vec<Participant>,
}

impl Roster {
    pub fn new(default: ParticipantSet) -> Self {
        Self {
            default,
            custom: Vec::new(),
        }
    }

    /// A roster defaulting to the draw-eligible members.
    pub fn from_members(members: &[Member]) -> Self {
        Self::new(ParticipantSet::eligible(members))
    }

    /// Add a custom name. Whitespace is trimmed; an empty or duplicate name
    /// (exact, case-sensitive match within the custom list) is rejected.
    pub fn add_custom(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.custom.iter().any(|p| p.name == name) {
            return false;
        }
        self.custom.push(Participant::named(name));
        true
    }

    /// Remove a custom name by exact match. No-op if absent.
    pub fn remove_custom(&mut self, name: &str) -> bool {
        match self.custom.iter().position(|p| p.name == name) {
            Some(index) => {
                self.custom.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the custom entry at `index`. No-op if out of range.
    pub fn remove_custom_at(&mut self, index: usize) -> bool {
        if index < self.custom.len() {
            self.custom.remove(index);
            true
        } else {
            false
        }
    }

    /// Drop the whole custom list, falling back to the default set.
    pub fn reset(&mut self) {
        self.custom.clear();
    }

    pub fn has_custom(&self) -> bool {
        !self.custom.is_empty()
    }

    pub fn custom(&self) -> &[Participant] {
        &self.custom
    }

    pub fn default_set(&self) -> &ParticipantSet {
        &self.default
    }

    /// The set the wheel actually draws from.
    pub fn active(&self) -> &[Participant] {
        if self.custom.is_empty() {
            self.default.as_slice()
        } else {
            &self.custom
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(ParticipantSet::example_names(&["Asha", "Binu", "Chandra"]))
    }

    #[test]
    fn defaults_to_eligible_members() {
        let members = vec![
            Member::example_paid("m1", "Asha"),
            Member::example_past_winner("m2", "Binu"),
        ];
        let roster = Roster::from_members(&members);
        let names: Vec<_> = roster.active().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Asha"]);
    }

    #[test]
    fn custom_names_are_trimmed_and_deduplicated() {
        let mut roster = roster();
        assert!(roster.add_custom("  Meera "));
        assert!(!roster.add_custom("Meera"));
        assert!(!roster.add_custom("   "));
        // Case-sensitive: a different casing is a different name.
        assert!(roster.add_custom("meera"));
        let names: Vec<_> = roster.custom().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Meera", "meera"]);
        assert!(roster.custom().iter().all(|p| p.id.is_none()));
    }

    #[test]
    fn non_empty_custom_list_replaces_the_default() {
        let mut roster = roster();
        roster.add_custom("Guest A");
        roster.add_custom("Guest B");
        let names: Vec<_> = roster.active().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Guest A", "Guest B"]);
    }

    #[test]
    fn reset_falls_back_to_the_default() {
        let mut roster = roster();
        roster.add_custom("Guest A");
        roster.reset();
        assert!(!roster.has_custom());
        assert_eq!(roster.active().len(), 3);
    }

    #[test]
    fn removal_is_a_no_op_when_absent() {
        let mut roster = roster();
        roster.add_custom("Guest A");
        assert!(!roster.remove_custom("Guest B"));
        assert!(!roster.remove_custom_at(5));
        assert!(roster.remove_custom("Guest A"));
        assert!(!roster.has_custom());
    }
}
