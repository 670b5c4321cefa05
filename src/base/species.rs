use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Cat,
    Dog,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Cat, Species::Dog];

    pub fn name(self) -> &'static str {
        match self {
            Species::Cat => "Cat",
            Species::Dog => "Dog",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Species::Cat.to_string(), "Cat");
        assert_eq!(Species::Dog.to_string(), "Dog");
        assert_eq!(Species::ALL, [Species::Cat, Species::Dog]);
    }
}
