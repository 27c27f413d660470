use serde::{Deserialize, Serialize};

use crate::model::{Id, Member};

/// A name occupying one slice of the wheel.
///
/// The id is present when the participant came from real membership and
/// absent for names typed in by the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub name: String,
}

impl Participant {
    /// A manually-entered participant with no backing member.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

impl From<&Member> for Participant {
    fn from(member: &Member) -> Self {
        Self {
            id: Some(member.id.clone()),
            name: member.name.clone(),
        }
    }
}

/// An ordered sequence of participants. Order is significant: it fixes each
/// participant's angular slice on the wheel. Empty is valid and disables the
/// draw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantSet(Vec<Participant>);

impl ParticipantSet {
    /// The draw-eligible participants: members who have paid the current
    /// period and not yet won, in membership order.
    pub fn eligible(members: &[Member]) -> Self {
        Self(
            members
                .iter()
                .filter(|m| m.is_eligible())
                .map(Participant::from)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.0.get(index)
    }

    pub fn as_slice(&self) -> &[Participant] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|p| p.name.as_str())
    }
}

impl From<Vec<Participant>> for ParticipantSet {
    fn from(participants: Vec<Participant>) -> Self {
        Self(participants)
    }
}

impl FromIterator<Participant> for ParticipantSet {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ParticipantSet {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Example test data.
#[cfg(test)]
mod examples {
    use super::*;

    impl ParticipantSet {
        pub fn example_names(names: &[&str]) -> Self {
            names.iter().copied().map(Participant::named).collect()
        }
    }
}
