//! Option lists for selector-style controls.
//!
//! A field declares its choices either as a flat list of name/label pairs or as
//! a list of labeled groups. Selectors don't care which: they consume the flat
//! sequence produced by [`flatten`], where groups become non-selectable headers.

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameLabelPair {
    pub name: String,
    pub label: String,
}

impl NameLabelPair {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<NameLabelPair>,
}

impl OptionGroup {
    pub fn new(label: impl Into<String>, options: Vec<NameLabelPair>) -> Self {
        Self {
            label: label.into(),
            options,
        }
    }
}

/// One declared option: a group (carries nested `options`) or a plain pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionEntry {
    Group(OptionGroup),
    Pair(NameLabelPair),
}

impl OptionEntry {
    pub fn is_group(&self) -> bool {
        matches!(self, OptionEntry::Group(_))
    }
}

impl From<NameLabelPair> for OptionEntry {
    fn from(pair: NameLabelPair) -> Self {
        OptionEntry::Pair(pair)
    }
}

impl From<OptionGroup> for OptionEntry {
    fn from(group: OptionGroup) -> Self {
        OptionEntry::Group(group)
    }
}

/// A row in a selector's visible choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderableEntry {
    GroupHeader { label: String },
    Item { name: String, label: String },
}

impl RenderableEntry {
    pub fn item(name: impl Into<String>, label: impl Into<String>) -> Self {
        RenderableEntry::Item {
            name: name.into(),
            label: label.into(),
        }
    }

    pub fn header(label: impl Into<String>) -> Self {
        RenderableEntry::GroupHeader {
            label: label.into(),
        }
    }

    /// Headers are presentational only.
    pub fn is_selectable(&self) -> bool {
        matches!(self, RenderableEntry::Item { .. })
    }
}

/// True when the list is non-empty and every entry is a group.
pub fn is_option_group_array(options: &[OptionEntry]) -> bool {
    !options.is_empty() && options.iter().all(OptionEntry::is_group)
}

fn is_flat_array(options: &[OptionEntry]) -> bool {
    options.iter().all(|o| !o.is_group())
}

/// Flatten declared options into the ordered rows a selector renders.
///
/// Lists mixing groups and plain pairs have no defined layout and produce an
/// empty sequence.
pub fn flatten(options: &[OptionEntry]) -> Vec<RenderableEntry> {
    if is_option_group_array(options) {
        let mut entries = Vec::new();
        for entry in options {
            if let OptionEntry::Group(group) = entry {
                entries.push(RenderableEntry::header(&group.label));
                entries.extend(
                    group
                        .options
                        .iter()
                        .map(|opt| RenderableEntry::item(&opt.name, &opt.label)),
                );
            }
        }
        return entries;
    }

    if is_flat_array(options) {
        return options
            .iter()
            .filter_map(|entry| match entry {
                OptionEntry::Pair(opt) => Some(RenderableEntry::item(&opt.name, &opt.label)),
                OptionEntry::Group(_) => None,
            })
            .collect();
    }

    warn!(
        entries = options.len(),
        "option list mixes groups and plain pairs; rendering no choices"
    );
    Vec::new()
}
