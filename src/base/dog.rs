use crate::Animal;
use crate::AnimalBase;
use crate::Result;
use crate::Species;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dog {
    base: AnimalBase,
    dog_alias: String,
}

impl Dog {
    pub fn new() -> Self {
        Self {
            base: AnimalBase::new(Species::Dog),
            dog_alias: "dog".to_owned(),
        }
    }
    pub fn dog_alias(&self) -> &str {
        &self.dog_alias
    }

    /// Accepts a string and does nothing with it
    pub fn foo(&self, text: &str) {
        tracing::trace!(text, "Dog::foo");
    }
}

impl Default for Dog {
    fn default() -> Self {
        Self::new()
    }
}

impl Animal for Dog {
    fn base(&self) -> &AnimalBase {
        &self.base
    }
    fn alias(&self) -> &str {
        &self.dog_alias
    }
    fn talk(&self, out: &mut dyn io::Write) -> Result<()> {
        writeln!(out, "{}: Woof!", self.dog_alias)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_is_fixed() {
        let dog = Dog::new();
        assert_eq!(dog.species(), Species::Dog);
        assert_eq!(dog.dog_alias(), "dog");
        assert_eq!(dog.name(), "animal");
    }

    #[test]
    fn talk_writes_one_line() {
        let mut out = Vec::new();
        Dog::new().talk(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "dog: Woof!\n");
    }

    #[test]
    fn foo_leaves_dog_unchanged() {
        let dog = Dog::new();
        let before = dog.clone();
        dog.foo("");
        dog.foo("hello");
        assert_eq!(dog, before);
    }

    #[test]
    fn talk_propagates_write_errors() {
        struct Broken;
        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        assert!(Dog::new().talk(&mut Broken).is_err());
    }
}
