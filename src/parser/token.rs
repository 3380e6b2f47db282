/// One event from the tokenizer, already decoded into owned strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StartElement(StartTag),
    EndElement(String),
    Text(String),
    Eof,
}

/// An opening tag: element name plus its attributes in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartTag {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl StartTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Writes `<name k="v" ...>` into `out`.
    ///
    /// Values are written as decoded, without re-escaping.
    pub fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push('>');
    }
}
