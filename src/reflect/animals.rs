use crate::AnimalBase;
use crate::Cat;
use crate::ClassInfo;
use crate::Dog;
use crate::Reflect;
use once_cell::sync::Lazy;

// Member tables mirror the declarations in base/. Keep them in the
// same order as the source when adding members there. Field names are
// the declared names of the reflected model (camelCase), not the Rust ones.

const TALK: &str = "fn(&self, out: &mut dyn io::Write) -> Result<()>";

static ANIMAL: Lazy<ClassInfo> = Lazy::new(|| {
    ClassInfo::new("project::Animal")
        .with_field("name", "String")
        .with_field("species", "Species")
        .with_method("talk", TALK)
});

static CAT: Lazy<ClassInfo> = Lazy::new(|| {
    ClassInfo::new("project::Cat")
        .with_base(ANIMAL.full_name())
        .with_field("catAlias", "String")
        .with_method("talk", TALK)
});

static DOG: Lazy<ClassInfo> = Lazy::new(|| {
    ClassInfo::new("project::Dog")
        .with_base(ANIMAL.full_name())
        .with_field("dogAlias", "String")
        .with_method("talk", TALK)
        .with_method("foo", "fn(&self, text: &str)")
});

impl Reflect for AnimalBase {
    fn class_info() -> &'static ClassInfo {
        &ANIMAL
    }
}

impl Reflect for Cat {
    fn class_info() -> &'static ClassInfo {
        &CAT
    }
}

impl Reflect for Dog {
    fn class_info() -> &'static ClassInfo {
        &DOG
    }
}
