use crate::state::{Displacement, ParticipantId};
use crate::strategy::Strategy;

/// A racer: identity, move-choice strategy, crash flag and retained inertia.
///
/// Only the turn engine mutates participants.
#[derive(Clone, Debug)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    strategy: Strategy,
    crashed: bool,
    last_displacement: Displacement,
}

impl Participant {
    pub fn new(
        id: ParticipantId,
        name: impl Into<String>,
        strategy: Strategy,
        last_displacement: Displacement,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            strategy,
            crashed: false,
            last_displacement,
        }
    }

    pub fn id(&self) -> ParticipantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn has_crashed(&self) -> bool {
        self.crashed
    }

    pub fn last_displacement(&self) -> Displacement {
        self.last_displacement
    }

    pub(crate) fn strategy_mut(&mut self) -> &mut Strategy {
        &mut self.strategy
    }

    pub(crate) fn crash(&mut self) {
        self.crashed = true;
    }

    pub(crate) fn set_last_displacement(&mut self, displacement: Displacement) {
        self.last_displacement = displacement;
    }
}
