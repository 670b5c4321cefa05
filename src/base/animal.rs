use crate::Result;
use crate::Species;
use std::io;

/// State shared by every animal.
/// Only the variants in this crate can create one, and each of them
/// passes its own species, so `species` always matches the concrete type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalBase {
    name: String,
    species: Species,
}

impl AnimalBase {
    pub(crate) fn new(species: Species) -> Self {
        Self {
            name: "animal".to_owned(),
            species,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn species(&self) -> Species {
        self.species
    }
}

pub trait Animal {
    fn base(&self) -> &AnimalBase;

    /// The variant specific label ("cat" or "dog")
    fn alias(&self) -> &str;

    /// Writes exactly one line to `out`
    fn talk(&self, out: &mut dyn io::Write) -> Result<()>;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn species(&self) -> Species {
        self.base().species()
    }
}

impl std::fmt::Debug for dyn Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{} {}>", self.species(), self.alias())
    }
}
