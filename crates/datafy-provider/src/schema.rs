//! Attribute schema descriptors
//!
//! Every resource and data source declares its attributes so that a
//! host can validate configuration before any API call is made:
//! which attributes are required, which are computed by the API, which
//! hold secrets, and which force replacement when changed.

/// Schema of a resource or data source
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub description: &'static str,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(description: &'static str, attributes: Vec<Attribute>) -> Self {
        Self {
            description,
            attributes,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// Value type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    Bool,
    StringList,
    /// A JSON document carried as a string, compared semantically
    Json,
    /// A Go-style duration string, e.g. `"1h30m"`
    Duration,
}

/// A single attribute declaration
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: AttributeKind,
    pub required: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub requires_replace: bool,
}

impl Attribute {
    pub fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            description: "",
            kind,
            required: false,
            computed: false,
            sensitive: false,
            requires_replace: false,
        }
    }

    pub fn string(name: &'static str) -> Self {
        Self::new(name, AttributeKind::String)
    }

    pub fn bool(name: &'static str) -> Self {
        Self::new(name, AttributeKind::Bool)
    }

    pub fn string_list(name: &'static str) -> Self {
        Self::new(name, AttributeKind::StringList)
    }

    pub fn json(name: &'static str) -> Self {
        Self::new(name, AttributeKind::Json)
    }

    pub fn duration(name: &'static str) -> Self {
        Self::new(name, AttributeKind::Duration)
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn requires_replace(mut self) -> Self {
        self.requires_replace = true;
        self
    }
}
