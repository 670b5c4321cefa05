use crate::Animal;
use crate::AnimalBase;
use crate::Result;
use crate::Species;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    base: AnimalBase,
    cat_alias: String,
}

impl Cat {
    pub fn new() -> Self {
        Self {
            base: AnimalBase::new(Species::Cat),
            cat_alias: "cat".to_owned(),
        }
    }
    pub fn cat_alias(&self) -> &str {
        &self.cat_alias
    }
}

impl Default for Cat {
    fn default() -> Self {
        Self::new()
    }
}

impl Animal for Cat {
    fn base(&self) -> &AnimalBase {
        &self.base
    }
    fn alias(&self) -> &str {
        &self.cat_alias
    }
    fn talk(&self, out: &mut dyn io::Write) -> Result<()> {
        writeln!(out, "{}: Meow!", self.cat_alias)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_is_fixed() {
        let cat = Cat::new();
        assert_eq!(cat.species(), Species::Cat);
        assert_eq!(Cat::default(), cat);
        assert_eq!(cat.cat_alias(), "cat");
    }

    #[test]
    fn talk_writes_one_line() {
        let mut out = Vec::new();
        Cat::new().talk(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "cat: Meow!\n");
    }
}
