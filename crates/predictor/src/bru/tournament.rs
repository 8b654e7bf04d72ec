//! Tournament Branch Predictor.
//!
//! A hybrid predictor that employs a meta-predictor (chooser table) to select
//! between a Global predictor indexed by global history and a Local predictor
//! indexed by each branch's own history (PAg). The two components learn
//! independently; the chooser only learns from their disagreements.

use super::{
    BranchPredictor, SaturatingCounter,
    branch_predictor::{mask, shift_in, table_entries},
};
use crate::common::Direction;

/// Table geometry for a [`TournamentPredictor`], as index widths in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentGeometry {
    /// Global history width; sizes the global and chooser tables.
    pub ghistory_bits: u32,
    /// Local history width; sizes the local predictor table.
    pub lhistory_bits: u32,
    /// PC index width; sizes the local history table.
    pub pc_index_bits: u32,
}

/// Values read from the tables for one branch.
///
/// Computed identically by `predict` and `train` from the pre-update histories.
#[derive(Debug, Clone, Copy)]
struct Lookup {
    pc_index: usize,
    local_history: u32,
    global_index: usize,
    local: Direction,
    global: Direction,
    use_global: bool,
}

/// Tournament Predictor structure.
#[derive(Debug, Clone)]
pub struct TournamentPredictor {
    /// Global History Register shared by the global and chooser tables.
    ghr: u32,
    /// Mask for the Global History Register and global-indexed tables.
    global_mask: u32,

    /// Global Pattern History Table (2-bit counters).
    global_pht: Vec<SaturatingCounter>,

    /// Choice Prediction Table (2-bit counters).
    /// Selects Local (0,1) or Global (2,3).
    choice_pht: Vec<SaturatingCounter>,

    /// Local History Table storing a history pattern per branch.
    local_history_table: Vec<u32>,
    /// Mask for indexing the Local History Table by PC.
    pc_mask: u32,

    /// Local Pattern History Table indexed by local history patterns.
    local_pht: Vec<SaturatingCounter>,
    /// Mask applied to local history patterns.
    local_mask: u32,
}

impl TournamentPredictor {
    /// Creates a new Tournament Predictor.
    ///
    /// Every counter starts at `WeaklyNotTaken`, every history at zero. The
    /// widths must already be validated by
    /// [`Config::validate`](crate::config::Config::validate).
    pub fn new(geometry: TournamentGeometry) -> Self {
        let global_size = table_entries(geometry.ghistory_bits);

        Self {
            ghr: 0,
            global_mask: mask(geometry.ghistory_bits),

            global_pht: vec![SaturatingCounter::default(); global_size],
            choice_pht: vec![SaturatingCounter::default(); global_size],

            local_history_table: vec![0; table_entries(geometry.pc_index_bits)],
            pc_mask: mask(geometry.pc_index_bits),

            local_pht: vec![SaturatingCounter::default(); table_entries(geometry.lhistory_bits)],
            local_mask: mask(geometry.lhistory_bits),
        }
    }

    fn lookup(&self, pc: u32) -> Lookup {
        let pc_index = (pc & self.pc_mask) as usize;
        let local_history = self.local_history_table[pc_index];
        let global_index = (self.ghr & self.global_mask) as usize;

        Lookup {
            pc_index,
            local_history,
            global_index,
            local: self.local_pht[local_history as usize].direction(),
            global: self.global_pht[global_index].direction(),
            use_global: self.choice_pht[global_index].direction().is_taken(),
        }
    }

    /// Returns the current Global History Register.
    pub const fn global_history(&self) -> u32 {
        self.ghr
    }

    /// Returns the local history pattern recorded for `pc`.
    pub fn local_history(&self, pc: u32) -> u32 {
        self.local_history_table[(pc & self.pc_mask) as usize]
    }

    /// Returns the local predictor counter for a local history pattern.
    pub fn local_counter(&self, pattern: u32) -> Option<SaturatingCounter> {
        self.local_pht.get(pattern as usize).copied()
    }

    /// Returns the global predictor counter at `index`.
    pub fn global_counter(&self, index: usize) -> Option<SaturatingCounter> {
        self.global_pht.get(index).copied()
    }

    /// Returns the chooser counter at `index`.
    pub fn chooser(&self, index: usize) -> Option<SaturatingCounter> {
        self.choice_pht.get(index).copied()
    }

    /// Returns the directions the local and global components give for `pc`,
    /// in that order.
    pub fn component_predictions(&self, pc: u32) -> (Direction, Direction) {
        let lookup = self.lookup(pc);
        (lookup.local, lookup.global)
    }

    /// Returns every counter table: local, global, then chooser.
    pub fn counter_tables(&self) -> [&[SaturatingCounter]; 3] {
        [&self.local_pht, &self.global_pht, &self.choice_pht]
    }
}

impl BranchPredictor for TournamentPredictor {
    /// Queries both components and lets the chooser pick: a chooser in the
    /// taken half selects the global prediction.
    fn predict(&self, pc: u32) -> Direction {
        let lookup = self.lookup(pc);
        if lookup.use_global {
            lookup.global
        } else {
            lookup.local
        }
    }

    /// Trains both components toward the outcome, moves the chooser toward
    /// whichever component was right when they disagreed, then shifts the
    /// outcome into the local and global histories.
    fn train(&mut self, pc: u32, outcome: Direction) {
        let lookup = self.lookup(pc);

        self.local_pht[lookup.local_history as usize].update(outcome);
        self.global_pht[lookup.global_index].update(outcome);

        if lookup.local != lookup.global {
            let choice = &mut self.choice_pht[lookup.global_index];
            *choice = if lookup.global == outcome {
                choice.increment()
            } else {
                choice.decrement()
            };
        }

        self.local_history_table[lookup.pc_index] =
            shift_in(lookup.local_history, outcome, self.local_mask);
        self.ghr = shift_in(self.ghr, outcome, self.global_mask);
    }
}
