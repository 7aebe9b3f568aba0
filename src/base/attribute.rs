//! Attribute registry: the fixed catalog of display categories.
//!
//! Token classifications map onto these categories; the renderer looks them
//! up by name or by kind to find colors and font styles without knowing
//! anything about scanner internals.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// A named display category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum AttributeKind {
    Assembler,
    Character,
    Comment,
    Class,
    Float,
    Function,
    GlobalVariable,
    Hexadecimal,
    Identifier,
    IllegalChar,
    LocalVariable,
    Number,
    Octal,
    Preprocessor,
    ReservedWord,
    Space,
    String,
    StringEscapeSequence,
    Symbol,
    Variable,
}

impl AttributeKind {
    /// Every category, in registry order.
    pub const ALL: [AttributeKind; 20] = [
        Self::Assembler,
        Self::Character,
        Self::Comment,
        Self::Class,
        Self::Float,
        Self::Function,
        Self::GlobalVariable,
        Self::Hexadecimal,
        Self::Identifier,
        Self::IllegalChar,
        Self::LocalVariable,
        Self::Number,
        Self::Octal,
        Self::Preprocessor,
        Self::ReservedWord,
        Self::Space,
        Self::String,
        Self::StringEscapeSequence,
        Self::Symbol,
        Self::Variable,
    ];

    /// The display name used in color schemes and fold region tables.
    pub fn name(self) -> &'static str {
        match self {
            Self::Assembler => "Assembler",
            Self::Character => "Character",
            Self::Comment => "Comment",
            Self::Class => "Class",
            Self::Float => "Float",
            Self::Function => "Function",
            Self::GlobalVariable => "Global variable",
            Self::Hexadecimal => "Hexadecimal",
            Self::Identifier => "Identifier",
            Self::IllegalChar => "Illegal Char",
            Self::LocalVariable => "Local Variable",
            Self::Number => "Number",
            Self::Octal => "Octal",
            Self::Preprocessor => "Preprocessor",
            Self::ReservedWord => "Reserved Word",
            Self::Space => "Space",
            Self::String => "String",
            Self::StringEscapeSequence => "Escape sequences",
            Self::Symbol => "Symbol",
            Self::Variable => "Variable",
        }
    }

    /// Look up a category by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for AttributeKind {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name).ok_or_else(|| format!("unknown attribute `{name}`"))
    }
}

impl From<AttributeKind> for String {
    fn from(kind: AttributeKind) -> Self {
        kind.name().to_string()
    }
}

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Font style flags for an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike_out: bool,
}

/// Display data attached to a category. The scanner never reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    kind: AttributeKind,
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub style: FontStyle,
}

impl Attribute {
    pub fn new(kind: AttributeKind) -> Self {
        Self {
            kind,
            foreground: None,
            background: None,
            style: FontStyle::default(),
        }
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Ordered name → attribute table holding one entry per [`AttributeKind`].
#[derive(Debug, Clone)]
pub struct AttributeRegistry {
    attributes: IndexMap<&'static str, Attribute, FxBuildHasher>,
}

impl Default for AttributeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeRegistry {
    /// Build the full catalog with empty display data.
    pub fn new() -> Self {
        let mut attributes =
            IndexMap::with_capacity_and_hasher(AttributeKind::ALL.len(), FxBuildHasher);
        for kind in AttributeKind::ALL {
            attributes.insert(kind.name(), Attribute::new(kind));
        }
        Self { attributes }
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.attributes.get_mut(name)
    }

    /// Infallible lookup; every kind is registered at construction.
    pub fn by_kind(&self, kind: AttributeKind) -> &Attribute {
        &self.attributes[kind as usize]
    }

    pub fn by_kind_mut(&mut self, kind: AttributeKind) -> &mut Attribute {
        &mut self.attributes[kind as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
