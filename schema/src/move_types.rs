use crate::Element;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCategory::Physical => write!(f, "Physical"),
            MoveCategory::Special => write!(f, "Special"),
        }
    }
}

impl MoveCategory {
    pub fn for_element(element: Element) -> Self {
        if element.is_special() {
            MoveCategory::Special
        } else {
            MoveCategory::Physical
        }
    }
}

/// A move as produced by the creature generator.
///
/// `accuracy` is carried for display and future hit/miss resolution; every
/// attack currently connects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    pub element: Element,
    pub power: u16,
    #[serde(default = "default_accuracy")]
    pub accuracy: u8,
}

fn default_accuracy() -> u8 {
    100
}

impl MoveData {
    pub fn new(name: impl Into<String>, element: Element, power: u16) -> Self {
        Self {
            name: name.into(),
            element,
            power,
            accuracy: default_accuracy(),
        }
    }

    pub fn category(&self) -> MoveCategory {
        MoveCategory::for_element(self.element)
    }
}

impl fmt::Display for MoveData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.element, self.power)
    }
}
