//! Journal variables: named, user-editable format strings bound to a converter.

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

use crate::calendar::format_game_time;
use crate::local_time::format_local_time;
use crate::location::format_player_location;
use crate::memory::ReadMemory;
use crate::offset::JournalTargets;

/// How a built-in variable turns game state into text
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, IntoStaticStr, Display,
)]
pub enum ConverterKind {
    #[strum(serialize = "game time")]
    GameTime,
    #[strum(serialize = "player location")]
    PlayerLocation,
    #[strum(serialize = "local time")]
    LocalTime,
}

impl ConverterKind {
    /// Render `format` from the current game state. Reads memory fresh on
    /// every call.
    pub fn render<R: ReadMemory + ?Sized>(
        self,
        format: &str,
        reader: &R,
        base: u64,
        targets: &JournalTargets,
    ) -> String {
        match self {
            Self::GameTime => format_game_time(format, targets.game_time(reader, base)),
            Self::PlayerLocation => {
                let Some(position) = targets.player_position(reader, base) else {
                    return format_player_location(format, None, None, None);
                };
                let world = targets.worldspace_name(reader, base);
                let cell = targets.cell_name(reader, base);
                format_player_location(format, Some(position), world.as_deref(), cell.as_deref())
            }
            Self::LocalTime => format_local_time(format),
        }
    }
}

/// A formattable journal variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub id: u32,
    pub name: String,
    /// Built-in variables can not be removed by the user
    pub deletable: bool,
    /// Help text describing the escapes
    pub info: String,
    /// Current, user-editable format string
    pub params: String,
    #[serde(skip)]
    pub kind: Option<ConverterKind>,
}

impl Variable {
    pub fn builtin(
        id: u32,
        name: &str,
        info: &str,
        params: &str,
        kind: ConverterKind,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            deletable: false,
            info: info.to_string(),
            params: params.to_string(),
            kind: Some(kind),
        }
    }

    /// A user-created variable: deletable, rendered verbatim
    pub fn user(id: u32, name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            deletable: true,
            info: String::new(),
            params: params.into(),
            kind: None,
        }
    }

    pub fn render<R: ReadMemory + ?Sized>(
        &self,
        reader: &R,
        base: u64,
        targets: &JournalTargets,
    ) -> String {
        match self.kind {
            Some(kind) => kind.render(&self.params, reader, base, targets),
            None => self.params.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MockMemoryBuilder;
    use crate::offset::OffsetTable;

    const BASE: u64 = 0x1_4000_0000;

    #[test]
    fn test_user_variable_renders_verbatim() {
        let reader = MockMemoryBuilder::new().build();
        let variable = Variable::user(100, "Mood", "tired %h");
        assert!(variable.deletable);
        assert_eq!(
            variable.render(&reader, BASE, &JournalTargets::default()),
            "tired %h"
        );
    }

    #[test]
    fn test_location_without_names() {
        let targets = JournalTargets::wire(&OffsetTable::builtin());
        let reader = MockMemoryBuilder::new()
            .write_u64(BASE + 0x2f26ef8, 0x9000)
            .write_f32(0x9054, 100.0)
            .write_f32(0x9058, 200.0)
            .write_f32(0x905c, 300.0)
            // No worldspace in the main menu / interiors
            .write_u64(0x9628, 0)
            .write_u64(0x9060, 0)
            .build();

        let text = ConverterKind::PlayerLocation.render("%wn|%cn|%x %y %z", &reader, BASE, &targets);
        assert_eq!(text, "||100 200 300");
    }

    #[test]
    fn test_missing_player_skips_name_reads() {
        let targets = JournalTargets::wire(&OffsetTable::builtin());
        let reader = MockMemoryBuilder::new().write_u64(BASE + 0x2f26ef8, 0).build();

        let text = ConverterKind::PlayerLocation.render("%x", &reader, BASE, &targets);
        assert_eq!(text, "(n/a)");
        assert_eq!(reader.read_count(), 1);
    }

    #[test]
    fn test_serialize_skips_converter() {
        let variable = Variable::builtin(1, "Game time (fixed)", "help", "%h", ConverterKind::GameTime);
        let json = serde_json::to_string(&variable).unwrap();
        assert!(!json.contains("kind"));

        let back: Variable = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, None);
        assert_eq!(back.params, "%h");
        assert!(!back.deletable);
    }

    #[test]
    fn test_converter_names() {
        assert_eq!(ConverterKind::GameTime.to_string(), "game time");
        assert_eq!(ConverterKind::PlayerLocation.to_string(), "player location");
    }
}
