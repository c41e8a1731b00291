//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction, Port};

/// Per port/method queues over a loaded cassette.
///
/// Interactions for one port/method pair come back in recording order; the
/// relative order between different pairs is not enforced.
pub struct CassetteReplayer {
    queues: HashMap<(Port, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Creates a replayer over every interaction in `cassette`.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(Port, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port, interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Takes the next interaction recorded for `port`/`method`.
    ///
    /// # Panics
    ///
    /// Panics if nothing was recorded for the pair, or if every recorded
    /// interaction for it has already been served.
    pub fn next_interaction(&mut self, port: Port, method: &str) -> Interaction {
        let key = (port, method.to_string());
        let Some(queue) = self.queues.get_mut(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        };

        queue.pop_front().unwrap_or_else(|| {
            panic!(
                "Cassette exhausted: every interaction for port={port} method={method:?} \
                 has already been replayed"
            )
        })
    }

    /// Number of interactions not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }
}
