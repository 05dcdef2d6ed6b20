//! Application context wiring the catalog, vote store and simulation.

use crate::catalog::{find, Genre};
use crate::export::{export_file, ExportFile};
use crate::interaction::{apply_drag, handle_pointer_down, Drag, VoteOutcome};
use crate::label::{fit_label, LabelLayout, TextMeasure};
use crate::radius::radius_for_votes;
use crate::sim::{SimBody, SimConfig, Simulation};
use crate::storage::KeyValueStore;
use crate::votes::{VoteStore, VoteTally};
use chrono::NaiveDateTime;
use std::fmt::Display;

/// A body together with its fitted label for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLabel {
    pub body: SimBody,
    pub layout: LabelLayout,
}

pub struct BubbleApp<S: KeyValueStore> {
    catalog: &'static [Genre],
    votes: VoteStore<S>,
    sim: Simulation,
    drag: Option<Drag>,
}

impl<S: KeyValueStore> BubbleApp<S> {
    pub fn new(catalog: &'static [Genre], store: S, config: SimConfig) -> Self {
        let votes = VoteStore::open(catalog, store);
        let sim = Simulation::new(catalog, votes.tally(), config);
        Self {
            catalog,
            votes,
            sim,
            drag: None,
        }
    }

    #[inline]
    pub fn tally(&self) -> &VoteTally {
        self.votes.tally()
    }

    #[inline]
    pub fn votes(&self) -> &VoteStore<S> {
        &self.votes
    }

    #[inline]
    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    /// Key of the bubble currently held by the pointer.
    #[inline]
    pub fn dragged(&self) -> Option<&'static str> {
        self.drag.map(|d| d.genre_key)
    }

    /// One simulation step, steering any held bubble first.
    pub fn tick(&mut self) -> usize {
        if let Some(drag) = self.drag {
            if !apply_drag(&mut self.sim, &drag) {
                self.drag = None;
            }
        }
        self.sim.step()
    }

    pub fn pointer_down(&mut self, point: glam::Vec2) -> Option<VoteOutcome> {
        handle_pointer_down(&mut self.sim, &mut self.votes, point)
    }

    /// Grab the bubble under `point`, if any. Grabbing does not vote.
    pub fn drag_start(&mut self, point: glam::Vec2) -> Option<&'static str> {
        let key = self.sim.hit_test(point)?;
        self.drag = Some(Drag {
            genre_key: key,
            target: point,
        });
        log::debug!("[drag] grab {}", key);
        Some(key)
    }

    pub fn drag_to(&mut self, point: glam::Vec2) {
        if let Some(drag) = self.drag.as_mut() {
            drag.target = point;
        }
    }

    /// Let go. The bubble keeps whatever velocity the drag gave it.
    pub fn drag_end(&mut self) -> Option<&'static str> {
        let drag = self.drag.take()?;
        log::debug!("[drag] release {}", drag.genre_key);
        Some(drag.genre_key)
    }

    pub fn labels(&self, measure: &impl TextMeasure) -> Vec<PlacedLabel> {
        self.sim
            .bodies()
            .map(|body| {
                let label = find(self.catalog, body.genre_key).map_or(body.genre_key, |g| g.label);
                let votes = self.votes.count(body.genre_key);
                PlacedLabel {
                    body,
                    layout: fit_label(measure, label, body.radius, votes),
                }
            })
            .collect()
    }

    /// Export the tally as CSV, hand it to `download`, then zero every count
    /// and shrink every bubble to the base radius.
    ///
    /// A failed download is logged and the reset still happens.
    pub fn export_and_reset<E: Display>(
        &mut self,
        at: NaiveDateTime,
        download: impl FnOnce(&ExportFile) -> Result<(), E>,
    ) -> ExportFile {
        let file = export_file(self.catalog, self.votes.tally(), at);
        match download(&file) {
            Ok(()) => log::info!("[export] {} ({} bytes)", file.filename, file.contents.len()),
            Err(e) => log::warn!("[export] download of {} failed: {}", file.filename, e),
        }

        self.votes.reset();
        let base = radius_for_votes(0);
        for g in self.catalog {
            self.sim.resize(g.key, base);
        }
        log::info!("[export] votes reset");
        file
    }

    pub fn teardown(&mut self) {
        self.drag = None;
        self.sim.teardown();
    }
}
