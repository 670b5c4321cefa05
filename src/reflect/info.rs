use indexmap::IndexMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    name: &'static str,
    full_name: String,
    signature: &'static str,
    declared_in: &'static str,
}

impl MethodInfo {
    /// short name, e.g. `talk`
    pub fn name(&self) -> &'static str {
        self.name
    }
    /// e.g. `project::Dog::talk`
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
    pub fn signature(&self) -> &'static str {
        self.signature
    }
    /// full name of the class that declares this method
    pub fn declared_in(&self) -> &'static str {
        self.declared_in
    }
}

impl fmt::Display for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    name: &'static str,
    full_name: String,
    type_name: &'static str,
    declared_in: &'static str,
}

impl FieldInfo {
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
    pub fn declared_in(&self) -> &'static str {
        self.declared_in
    }
}

impl fmt::Display for FieldInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

/// Declared members of one class.
/// `fields` and `methods` keep declaration order.
pub struct ClassInfo {
    full_name: &'static str,
    short_name: &'static str,
    bases: Vec<&'static str>,
    fields: IndexMap<&'static str, FieldInfo>,
    methods: IndexMap<&'static str, MethodInfo>,
}

impl ClassInfo {
    /// `full_name` must have the form `namespace::Name`
    pub fn new(full_name: &'static str) -> Self {
        let short_name = full_name.rsplit("::").next().unwrap_or(full_name);
        Self {
            full_name,
            short_name,
            bases: Vec::new(),
            fields: IndexMap::new(),
            methods: IndexMap::new(),
        }
    }

    pub fn with_base(mut self, base: &'static str) -> Self {
        self.bases.push(base);
        self
    }

    pub fn with_field(mut self, name: &'static str, type_name: &'static str) -> Self {
        let info = FieldInfo {
            name,
            full_name: format!("{}::{}", self.full_name, name),
            type_name,
            declared_in: self.full_name,
        };
        self.fields.insert(name, info);
        self
    }

    /// Declaring the same name twice keeps the first position
    /// but takes the later signature
    pub fn with_method(mut self, name: &'static str, signature: &'static str) -> Self {
        let info = MethodInfo {
            name,
            full_name: format!("{}::{}", self.full_name, name),
            signature,
            declared_in: self.full_name,
        };
        self.methods.insert(name, info);
        self
    }

    pub fn full_name(&self) -> &'static str {
        self.full_name
    }
    pub fn short_name(&self) -> &'static str {
        self.short_name
    }
    pub fn bases(&self) -> &[&'static str] {
        &self.bases
    }
    pub fn methods(&self) -> impl Iterator<Item = &MethodInfo> {
        self.methods.values()
    }
    pub fn fields(&self) -> impl Iterator<Item = &FieldInfo> {
        self.fields.values()
    }
    pub fn method_names(&self) -> Vec<&'static str> {
        self.methods.keys().copied().collect()
    }
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.methods.get(name)
    }
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.get(name)
    }
    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Debug for ClassInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<class {}>", self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClassInfo {
        ClassInfo::new("project::Thing")
            .with_base("project::Root")
            .with_field("size", "usize")
            .with_method("b", "fn(&self)")
            .with_method("a", "fn(&self)")
    }

    #[test]
    fn names() {
        let cls = sample();
        assert_eq!(cls.full_name(), "project::Thing");
        assert_eq!(cls.short_name(), "Thing");
        assert_eq!(cls.bases(), &["project::Root"]);
        assert_eq!(format!("{:?}", cls), "<class project::Thing>");
        assert_eq!(ClassInfo::new("Bare").short_name(), "Bare");
    }

    #[test]
    fn declaration_order() {
        let cls = sample();
        assert_eq!(cls.method_names(), vec!["b", "a"]);
        let full: Vec<_> = cls.methods().map(|m| m.full_name().to_owned()).collect();
        assert_eq!(full, vec!["project::Thing::b", "project::Thing::a"]);
    }

    #[test]
    fn redeclaring_keeps_position() {
        let cls = sample().with_method("b", "fn(&self, x: i32)");
        assert_eq!(cls.method_names(), vec!["b", "a"]);
        assert_eq!(cls.method("b").unwrap().signature(), "fn(&self, x: i32)");
    }

    #[test]
    fn members() {
        let cls = sample();
        let field = cls.field("size").unwrap();
        assert_eq!(field.full_name(), "project::Thing::size");
        assert_eq!(field.type_name(), "usize");
        assert_eq!(field.declared_in(), "project::Thing");
        assert_eq!(cls.field_count(), 1);
        assert!(cls.method("c").is_none());
        assert_eq!(cls.method("a").unwrap().to_string(), "project::Thing::a");
    }
}
