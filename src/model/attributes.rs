//! Fixed attribute level tables and index lookup.

use std::fmt;

use thiserror::Error;

/// Attribute category selectable on the creation screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Intelligence,
    Strength,
    Endurance,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 3] = [
        AttributeKind::Intelligence,
        AttributeKind::Strength,
        AttributeKind::Endurance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AttributeKind::Intelligence => "intelligence",
            AttributeKind::Strength => "strength",
            AttributeKind::Endurance => "endurance",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One selectable level of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeValue {
    pub name: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    #[error("{kind} index {index} out of range (0..{len})")]
    OutOfRange {
        kind: AttributeKind,
        index: usize,
        len: usize,
    },
}

/// Resolves a selected index into a concrete attribute value.
pub trait AttributeLookup: Send + Sync + 'static {
    fn value(&self, kind: AttributeKind, index: usize) -> Result<u32, AttributeError>;
}

static LEVELS: [AttributeValue; 4] = [
    AttributeValue { name: "None", value: 0 },
    AttributeValue { name: "Low", value: 3 },
    AttributeValue { name: "Medium", value: 7 },
    AttributeValue { name: "High", value: 10 },
];

/// The built-in attribute tables. Every category shares the same levels.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeStore;

impl AttributeStore {
    /// Selectable levels for `kind`, in index order.
    pub fn levels(&self, kind: AttributeKind) -> &'static [AttributeValue] {
        match kind {
            AttributeKind::Intelligence | AttributeKind::Strength | AttributeKind::Endurance => {
                &LEVELS
            }
        }
    }
}

impl AttributeLookup for AttributeStore {
    fn value(&self, kind: AttributeKind, index: usize) -> Result<u32, AttributeError> {
        let levels = self.levels(kind);
        levels
            .get(index)
            .map(|level| level.value)
            .ok_or(AttributeError::OutOfRange {
                kind,
                index,
                len: levels.len(),
            })
    }
}
