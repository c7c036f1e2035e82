//! Which models an export visits and how their entities are bracketed.
//!
//! A single-model export writes entity lines flat. An all-models export
//! wraps every model in a `#range` of a `#switch (clock)` so each model
//! becomes one animation step: model `m` is visible for clock values in
//! `[m + 0.9, m + 1.1]`.

use std::fmt;
use std::io::{self, Write};

use crate::scene::Scene;

/// Export strategy: one model, or every model as an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameMode {
    /// Only entities of this model index, written flat.
    Single(usize),
    /// Every model, one clock range each.
    All,
}

impl FrameMode {
    /// The model currently displayed by the viewer.
    #[must_use]
    pub fn current(scene: &Scene) -> Self {
        Self::Single(scene.display_model)
    }

    /// `All` when `all_models` is set, otherwise the displayed model.
    #[must_use]
    pub fn for_scene(scene: &Scene, all_models: bool) -> Self {
        if all_models {
            Self::All
        } else {
            Self::current(scene)
        }
    }
}

/// Clock interval during which one model is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockRange {
    /// Model shown in this interval.
    pub model_index: usize,
}

impl ClockRange {
    /// Lower clock bound, `m + 0.9`.
    #[must_use]
    pub fn lower(self) -> f64 {
        self.model_index as f64 + 0.9
    }

    /// Upper clock bound, `m + 1.1`.
    #[must_use]
    pub fn upper(self) -> f64 {
        self.model_index as f64 + 1.1
    }
}

impl fmt::Display for ClockRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#range ({:.1},{:.1})", self.lower(), self.upper())
    }
}

/// One model visited by an export, with its clock bracket if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameBlock {
    /// Model whose entities are written in this block.
    pub model_index: usize,
    /// Clock bracket, present only in all-models exports.
    pub range: Option<ClockRange>,
}

/// Enumerates entities per model according to a [`FrameMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSelector {
    mode: FrameMode,
    model_count: usize,
}

impl FrameSelector {
    /// Selector for `mode` over a scene with `model_count` models.
    #[must_use]
    pub const fn new(mode: FrameMode, model_count: usize) -> Self {
        Self { mode, model_count }
    }

    /// The export strategy.
    #[must_use]
    pub const fn mode(&self) -> FrameMode {
        self.mode
    }

    /// Models visited, in emission order.
    #[must_use]
    pub fn blocks(&self) -> Vec<FrameBlock> {
        match self.mode {
            FrameMode::Single(model_index) => vec![FrameBlock {
                model_index,
                range: None,
            }],
            FrameMode::All => (0..self.model_count)
                .map(|model_index| FrameBlock {
                    model_index,
                    range: Some(ClockRange { model_index }),
                })
                .collect(),
        }
    }

    /// Write one entity kind.
    ///
    /// For each visited model, `emit` is called on every entity whose
    /// `model_of` matches, in slice order. `emit` returns whether it wrote
    /// anything; the total is returned.
    pub fn emit<W, T, M, F>(
        &self,
        w: &mut W,
        entities: &[T],
        model_of: M,
        mut emit: F,
    ) -> io::Result<usize>
    where
        W: Write,
        M: Fn(&T) -> usize,
        F: FnMut(&mut W, &T) -> io::Result<bool>,
    {
        let animated = self.mode == FrameMode::All;
        if animated {
            w.write_all(b"#switch (clock)\n")?;
        }
        let mut written = 0;
        for block in self.blocks() {
            if let Some(range) = block.range {
                writeln!(w, "{range}")?;
            }
            for entity in entities
                .iter()
                .filter(|&e| model_of(e) == block.model_index)
            {
                if emit(w, entity)? {
                    written += 1;
                }
            }
            if block.range.is_some() {
                w.write_all(b"#break\n")?;
            }
        }
        if animated {
            w.write_all(b"#end\n")?;
        }
        Ok(written)
    }
}
