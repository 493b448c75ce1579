//! The fixed set of built-in journal variables.
//!
//! ## Example
//!
//! ```ignore
//! use journal_core::{Catalog, JournalConfig, LocalMemory, current_module_base};
//!
//! let base = current_module_base()?;
//! let config = JournalConfig::builder().base_address(base).build();
//! let catalog = Catalog::build(&config, &config.offset_table()?);
//!
//! let reader = unsafe { LocalMemory::new(base)? };
//! for variable in catalog.variables() {
//!     println!("{}: {}", variable.name, catalog.render(variable, &reader));
//! }
//! ```

use tracing::{info, warn};

use crate::config::JournalConfig;
use crate::memory::ReadMemory;
use crate::offset::{FindOffset, JournalTargets};
use crate::variable::{ConverterKind, Variable};

pub const GAME_TIME_ID: u32 = 1;
pub const LOCAL_TIME_ID: u32 = 2;
pub const PLAYER_POSITION_ID: u32 = 3;

const GAME_TIME_INFO: &str = "Following substitions starts with %:\n\
    y is the year number (e.g. 201)\n\
    Y is the year with the epoch in front (e.g. 4E201)\n\
    lm is long month name (e.g. First Seed)\n\
    bm is the birth sign for that month (e.g. The Mage)\n\
    am is the Argonian month (e.g. Hist-Dooka (Mature Hist))\n\
    mo is the month number (from 1 to 12)\n\
    md is the month day numer (from 1 to 28,30 or 31)\n\
    sd is short day name, the 1st three letters (e.g. Tir)\n\
    ld is the long day name (e.g. Middas)\n\
    wd is the week day numer (from 1 to 7)\n\
    h is the hour (from 0 to 23)\n\
    m are the minutes (from 0 to 59)\n\
    s are the seconds (from 0 to 59)\n\
    r is the raw input (aka Papyrus.GetCurrentGameTime ())\n\
    ri is the integer part of %r (i.e. game days since start)";

const PLAYER_POSITION_INFO: &str = "The World/cell/XYZ coordinates of the player.\n\
    This is the same as the Console \"player.getpos <axis>\"\n\
    %x %y %z each coordinate respectively\n\
    %cx %cy cell coordinates (useful for modders)\n\
    %cn current cell name, if any\n\
    %wn world space name if any";

const LOCAL_TIME_INFO: &str = "Look the format specification on\n\
    https://en.cppreference.com/w/cpp/chrono/c/strftime";

/// Built-in variables plus the chains they read from
#[derive(Debug, Clone)]
pub struct Catalog {
    base_address: u64,
    targets: JournalTargets,
    variables: Vec<Variable>,
}

impl Catalog {
    /// Wire address chains and assemble the built-in variables.
    ///
    /// Game variables are only included when their root offset was found
    /// and the base address is known. Local time is always present.
    pub fn build<F: FindOffset + ?Sized>(config: &JournalConfig, finder: &F) -> Self {
        let targets = if config.base_address == 0 {
            warn!("Module base address is null, game variables are unavailable");
            JournalTargets::default()
        } else {
            JournalTargets::wire(finder)
        };

        let mut variables = Vec::new();

        if targets.game_time.is_wired() {
            variables.push(Variable::builtin(
                GAME_TIME_ID,
                "Game time (fixed)",
                GAME_TIME_INFO,
                "%h:%m %ld, day %md of %lm, %Y",
                ConverterKind::GameTime,
            ));
        }

        if targets.player_position.is_wired() {
            variables.push(Variable::builtin(
                PLAYER_POSITION_ID,
                "Player position (fixed)",
                PLAYER_POSITION_INFO,
                "%wn, %cn: %x %y %z",
                ConverterKind::PlayerLocation,
            ));
        }

        variables.push(Variable::builtin(
            LOCAL_TIME_ID,
            "Local time (fixed)",
            LOCAL_TIME_INFO,
            "%X %x",
            ConverterKind::LocalTime,
        ));

        info!(
            "Built {} journal variables (base: {:#x})",
            variables.len(),
            config.base_address
        );

        Self {
            base_address: config.base_address,
            targets,
            variables,
        }
    }

    pub fn base_address(&self) -> u64 {
        self.base_address
    }

    pub fn targets(&self) -> &JournalTargets {
        &self.targets
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn get(&self, id: u32) -> Option<&Variable> {
        self.variables.iter().find(|v| v.id == id)
    }

    /// Mutable access, e.g. for the user to edit a format string
    pub fn get_mut(&mut self, id: u32) -> Option<&mut Variable> {
        self.variables.iter_mut().find(|v| v.id == id)
    }

    /// Render a variable with its current format string
    pub fn render<R: ReadMemory + ?Sized>(&self, variable: &Variable, reader: &R) -> String {
        variable.render(reader, self.base_address, &self.targets)
    }

    /// Render every variable, in catalog order
    pub fn render_all<R: ReadMemory + ?Sized>(&self, reader: &R) -> Vec<(u32, String)> {
        self.variables
            .iter()
            .map(|v| (v.id, self.render(v, reader)))
            .collect()
    }
}
