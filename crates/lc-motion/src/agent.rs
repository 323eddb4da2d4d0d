use lc_core::{AgentId, Point};

/// Mutable state of one agent, owned by the simulator.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentState {
    pub id:       AgentId,
    pub position: Point,
    /// Heading reported for the last step, radians.
    pub heading:  f64,
    /// Destination the agent is steering toward.  Only target-seeking models
    /// use it; `None` means "pick one before moving".
    pub target:   Option<Point>,
}

impl AgentState {
    pub fn new(id: AgentId, position: Point, heading: f64, target: Option<Point>) -> Self {
        Self { id, position, heading, target }
    }

    #[inline]
    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot {
            id:      self.id,
            x:       self.position.x,
            y:       self.position.y,
            heading: self.heading,
        }
    }
}

/// What the renderer sees: one position and heading per agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:      AgentId,
    pub x:       f64,
    pub y:       f64,
    pub heading: f64,
}
