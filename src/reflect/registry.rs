use crate::ClassInfo;
use crate::Error;
use crate::FieldInfo;
use crate::MethodInfo;
use crate::Reflect;
use crate::Result;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

static GLOBAL: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::new();
    registry.register::<crate::AnimalBase>();
    registry.register::<crate::Cat>();
    registry.register::<crate::Dog>();
    tracing::debug!(classes = registry.len(), "populated class registry");
    registry
});

/// Maps full type names to their class descriptions, in registration order
#[derive(Debug, Default)]
pub struct Registry {
    classes: IndexMap<&'static str, &'static ClassInfo>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry holding every reflected type in this crate
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    pub fn register<T: Reflect>(&mut self) {
        self.insert(T::class_info());
    }

    pub fn insert(&mut self, cls: &'static ClassInfo) {
        tracing::trace!(class = cls.full_name(), "register");
        self.classes.insert(cls.full_name(), cls);
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> impl Iterator<Item = &'static ClassInfo> + '_ {
        self.classes.values().copied()
    }

    /// Looks up a class by full name (`project::Dog`), falling back
    /// to the short name (`Dog`)
    pub fn get(&self, name: &str) -> Option<&'static ClassInfo> {
        self.classes.get(name).copied().or_else(|| {
            self.classes
                .values()
                .copied()
                .find(|cls| cls.short_name() == name)
        })
    }

    pub fn lookup(&self, name: &str) -> Result<&'static ClassInfo> {
        match self.get(name) {
            Some(cls) => Ok(cls),
            None => {
                tracing::debug!(name, "class lookup failed");
                Err(Error::UnknownClass(name.to_owned()))
            }
        }
    }

    pub fn of<T: Reflect>(&self) -> Result<&'static ClassInfo> {
        self.lookup(T::class_info().full_name())
    }

    pub fn method(&self, class: &str, method: &str) -> Result<&'static MethodInfo> {
        let cls = self.lookup(class)?;
        cls.method(method).ok_or_else(|| Error::UnknownMethod {
            class: cls.full_name().to_owned(),
            method: method.to_owned(),
        })
    }

    /// Methods of `cls` including those declared on its bases.
    /// Base members come first; an override keeps the base's position
    /// but resolves to the overriding declaration.
    pub fn all_methods(&self, cls: &ClassInfo) -> Result<Vec<&'static MethodInfo>> {
        let mut map: IndexMap<&'static str, &'static MethodInfo> = IndexMap::new();
        self.collect_methods(cls, &mut Vec::new(), &mut map)?;
        Ok(map.into_iter().map(|(_, method)| method).collect())
    }

    /// Fields of `cls` including inherited ones, bases first
    pub fn all_fields(&self, cls: &ClassInfo) -> Result<Vec<&'static FieldInfo>> {
        let mut fields = Vec::new();
        self.collect_fields(cls, &mut Vec::new(), &mut fields)?;
        Ok(fields)
    }

    fn collect_methods(
        &self,
        cls: &ClassInfo,
        stack: &mut Vec<&'static str>,
        out: &mut IndexMap<&'static str, &'static MethodInfo>,
    ) -> Result<()> {
        let cls = self.enter(cls, stack)?;
        for base in cls.bases() {
            self.collect_methods(self.lookup(base)?, stack, out)?;
        }
        for method in cls.methods() {
            out.insert(method.name(), method);
        }
        stack.pop();
        Ok(())
    }

    fn collect_fields(
        &self,
        cls: &ClassInfo,
        stack: &mut Vec<&'static str>,
        out: &mut Vec<&'static FieldInfo>,
    ) -> Result<()> {
        let cls = self.enter(cls, stack)?;
        for base in cls.bases() {
            self.collect_fields(self.lookup(base)?, stack, out)?;
        }
        out.extend(cls.fields());
        stack.pop();
        Ok(())
    }

    /// Pushes `cls` onto the chain of classes being walked.
    /// A class that is already on the chain is its own ancestor.
    fn enter(&self, cls: &ClassInfo, stack: &mut Vec<&'static str>) -> Result<&'static ClassInfo> {
        let cls = self.lookup(cls.full_name())?;
        if stack.contains(&cls.full_name()) {
            return Err(Error::CyclicBases(cls.full_name().to_owned()));
        }
        stack.push(cls.full_name());
        Ok(cls)
    }
}

/// Calls `f` on each method `T` declares, in declaration order
pub fn foreach_method<T: Reflect, F: FnMut(&MethodInfo)>(mut f: F) {
    for method in T::class_info().methods() {
        f(method);
    }
}
