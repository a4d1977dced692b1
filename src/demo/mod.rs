//! Demonstration call sites
//!
//! Each [`Scenario`] pushes a handful of register rows around one or two
//! intrinsics so the viewer has something to show. The intrinsics themselves
//! are emulated in portable Rust by [`ops`]; they illustrate the display and
//! are not a reference for the instruction semantics.

pub mod ops;
pub mod scenarios;

use crate::register::RegisterError;
use crate::viewer::Viewer;
use rustc_hash::FxHashMap;

/// Pushes one frame's rows
pub type ScenarioFn = fn(&mut Viewer) -> Result<(), RegisterError>;

#[derive(Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub build: ScenarioFn,
}

impl Scenario {
    pub fn run(&self, viewer: &mut Viewer) -> Result<(), RegisterError> {
        (self.build)(viewer)
    }
}

/// Ordered list of scenarios with lookup by name
pub struct Catalogue {
    scenarios: Vec<Scenario>,
    by_name: FxHashMap<&'static str, usize>,
}

impl Catalogue {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        let by_name = scenarios
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name, i))
            .collect();
        Catalogue { scenarios, by_name }
    }

    /// Every built-in scenario, `unpack` first
    pub fn builtin() -> Self {
        Self::new(vec![
            Scenario {
                name: "unpack",
                description: "_mm256_unpacklo/hi_epi8 with the granularity picker",
                build: scenarios::unpack,
            },
            Scenario {
                name: "compare",
                description: "_mm256_cmpeq_epi64 mask in hex",
                build: scenarios::compare,
            },
            Scenario {
                name: "float",
                description: "_mm256_add_ps / _mm256_mul_pd rounding",
                build: scenarios::float,
            },
            Scenario {
                name: "shuffle",
                description: "128-bit _mm_shuffle_epi32 and _mm_adds_epu8",
                build: scenarios::shuffle,
            },
            Scenario {
                name: "reinterpret",
                description: "one bit pattern at every integer lane width",
                build: scenarios::reinterpret,
            },
        ])
    }

    pub fn get(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.scenarios.iter().map(|s| s.name).collect()
    }
}
