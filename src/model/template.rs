//! Pre-written informational embeds served by prefix commands.

/// One field of a template embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateField {
    /// Fixed `(name, value)` text.
    Text(&'static str, &'static str),
    /// A field listing every template command with the configured prefix.
    CommandList(&'static str),
}

/// A fixed embed posted verbatim by a prefix command such as `!!revolut`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Command name without the prefix.
    pub command: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub colour: u32,
    pub fields: &'static [TemplateField],
    pub footer: &'static str,
}
