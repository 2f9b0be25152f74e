use std::fmt;

/// Base template family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    #[default]
    Vanilla,
    React,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Vanilla, TemplateKind::React];

    pub fn slug(&self) -> &'static str {
        match self {
            TemplateKind::Vanilla => "vanilla",
            TemplateKind::React => "react",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateKind::Vanilla => "Vanilla",
            TemplateKind::React => "React",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Composite lookup key of a template variant: kind × typed × linted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    pub kind: TemplateKind,
    pub typed: bool,
    pub linted: bool,
}

impl TemplateKey {
    pub fn new(kind: TemplateKind, typed: bool, linted: bool) -> Self {
        Self { kind, typed, linted }
    }

    /// Every defined variant.
    pub fn all() -> impl Iterator<Item = TemplateKey> {
        TemplateKind::ALL.into_iter().flat_map(|kind| {
            [(false, false), (true, false), (false, true), (true, true)]
                .into_iter()
                .map(move |(typed, linted)| TemplateKey::new(kind, typed, linted))
        })
    }

    /// Directory holding the variant, e.g. `react-ts-airbnb`.
    pub fn dir_name(&self) -> String {
        let mut parts = vec![self.kind.slug()];
        if self.typed {
            parts.push("ts");
        }
        if self.linted {
            parts.push("airbnb");
        }
        parts.join("-")
    }

    /// Human readable label, e.g. `React + TypeScript + Airbnb`.
    pub fn label(&self) -> String {
        let mut parts = vec![self.kind.display_name()];
        if self.typed {
            parts.push("TypeScript");
        }
        if self.linted {
            parts.push("Airbnb");
        }
        parts.join(" + ")
    }
}
