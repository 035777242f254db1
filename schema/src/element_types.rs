use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Element {
    Fire,
    Water,
    Grass,
    Electric,
    Rock,
    Psychic,
    Normal,
    Dark,
    Fighting,
    Bug,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Element {
    /// Multiplier for an attack of element `attacking` landing on a `defending` creature.
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    ///
    /// The chart is sparse: every pair not matched below is neutral.
    pub fn type_effectiveness(attacking: Element, defending: Element) -> f64 {
        use Element::*;

        match (attacking, defending) {
            // Fire
            (Fire, Grass) | (Fire, Bug) => 2.0,
            (Fire, Water) | (Fire, Rock) => 0.5,

            // Water
            (Water, Fire) | (Water, Rock) => 2.0,
            (Water, Electric) | (Water, Grass) => 0.5,

            // Grass
            (Grass, Water) | (Grass, Rock) => 2.0,
            (Grass, Fire) | (Grass, Electric) => 0.5,

            // Electric
            (Electric, Water) => 2.0,
            (Electric, Grass) | (Electric, Rock) => 0.5,

            // Rock
            (Rock, Fire) | (Rock, Electric) => 2.0,
            (Rock, Grass) | (Rock, Fighting) => 0.5,

            // Psychic
            (Psychic, Fighting) => 2.0,
            (Psychic, Dark) => 0.0,

            // Dark
            (Dark, Psychic) => 2.0,
            (Dark, Fighting) => 0.5,

            // Fighting
            (Fighting, Normal) | (Fighting, Rock) | (Fighting, Dark) => 2.0,
            (Fighting, Psychic) => 0.5,

            // Normal
            (Normal, Rock) => 0.5,

            // Bug
            (Bug, Grass) | (Bug, Psychic) => 2.0,
            (Bug, Fighting) | (Bug, Fire) => 0.5,

            _ => 1.0,
        }
    }

    pub fn is_immune(attacking: Element, defending: Element) -> bool {
        Self::type_effectiveness(attacking, defending) == 0.0
    }

    /// Elements whose moves resolve against special attack / special defense.
    pub fn is_special(self) -> bool {
        matches!(
            self,
            Element::Fire
                | Element::Water
                | Element::Grass
                | Element::Electric
                | Element::Psychic
                | Element::Dark
        )
    }

    /// Every element in declaration order.
    pub fn all() -> Vec<Element> {
        Element::iter().collect()
    }
}

/// The tier a type-chart multiplier falls into, for messaging without float comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effectiveness {
    Immune,
    Resisted,
    Neutral,
    SuperEffective,
}

impl Effectiveness {
    pub fn between(attacking: Element, defending: Element) -> Self {
        Self::from_multiplier(Element::type_effectiveness(attacking, defending))
    }

    pub fn from_multiplier(multiplier: f64) -> Self {
        match multiplier {
            m if m <= 0.0 => Effectiveness::Immune,
            m if m < 1.0 => Effectiveness::Resisted,
            m if m > 1.0 => Effectiveness::SuperEffective,
            _ => Effectiveness::Neutral,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Effectiveness::Immune => 0.0,
            Effectiveness::Resisted => 0.5,
            Effectiveness::Neutral => 1.0,
            Effectiveness::SuperEffective => 2.0,
        }
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Effectiveness::Immune => "It had no effect!",
            Effectiveness::Resisted => "It's not very effective...",
            Effectiveness::Neutral => "",
            Effectiveness::SuperEffective => "It's super effective!",
        };
        write!(f, "{}", text)
    }
}
