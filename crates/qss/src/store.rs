//! The editable collection of style entries.
//!
//! [`StyleStore`] owns an ordered list of [`StyleEntry`] values. Callers
//! mutate it only through [`add_or_update`](StyleStore::add_or_update),
//! [`reset`](StyleStore::reset) and [`load`](StyleStore::load); after every
//! mutation the store re-serializes itself and hands the text to an attached
//! [`StyleSink`], which is where a front-end applies the live style.
//!
//! Lookups use the first entry whose selector matches exactly. Entries that
//! share a selector are never merged.

use std::fmt;

use crate::error::Result;
use crate::ordered::Properties;
use crate::parser::{StyleEntry, Stylesheet, parse_stylesheet};
use crate::selector::split_selector_list;

static EMPTY: Properties = Properties::new();

/// Receives the serialized style sheet after each store mutation.
pub trait StyleSink {
    fn apply(&mut self, stylesheet: &str);
}

impl<F> StyleSink for F
where
    F: FnMut(&str),
{
    fn apply(&mut self, stylesheet: &str) {
        self(stylesheet)
    }
}

/// How [`StyleStore::get_merged`] treats selectors that have no entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// Any selector without an entry makes the merged result empty.
    #[default]
    RequireAll,
    /// Selectors without an entry are ignored; the rest are intersected.
    IntersectFound,
}

#[derive(Default)]
pub struct StyleStore {
    entries: Vec<StyleEntry>,
    merge_policy: MergePolicy,
    sink: Option<BoxedSink>,
    revision: u64,
}

pub(crate) type BoxedSink = Box<dyn StyleSink + Send>;

impl StyleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<StyleEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    /// Builds a store from style sheet text, parsed in strict mode.
    pub fn from_source(source: &str) -> Result<Self> {
        Ok(Self::from_entries(parse_stylesheet(source)?.into_entries()))
    }

    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }

    pub fn set_merge_policy(&mut self, policy: MergePolicy) {
        self.merge_policy = policy;
    }

    pub fn merge_policy(&self) -> MergePolicy {
        self.merge_policy
    }

    /// Attaches the sink that receives the style sheet text after every
    /// mutation, replacing any previous one. The sink is not called until
    /// the next mutation.
    pub fn attach_sink(&mut self, sink: impl StyleSink + Send + 'static) {
        self.sink = Some(Box::new(sink));
    }

    pub fn detach_sink(&mut self) {
        self.sink = None;
    }

    pub fn entries(&self) -> &[StyleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.selector.as_str())
    }

    /// Sets `property` to `value` on the first entry for `selector`,
    /// appending a new entry when there is none.
    pub fn add_or_update(
        &mut self,
        selector: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) {
        let selector = selector.into();
        let property = property.into();
        let value = value.into();
        log::trace!("set {selector} {{ {property}: {value} }}");

        match self.find_mut(&selector) {
            Some(entry) => {
                entry.properties.insert(property, value);
            }
            None => self
                .entries
                .push(StyleEntry::with_property(selector, property, value)),
        }
        self.notify();
    }

    /// The properties of the first entry for `selector`.
    ///
    /// Empty when the selector is empty or has no entry.
    pub fn get(&self, selector: &str) -> &Properties {
        if selector.is_empty() {
            return &EMPTY;
        }
        self.find(selector)
            .map(|entry| &entry.properties)
            .unwrap_or(&EMPTY)
    }

    /// The properties shared, by name and value, by every selector in a
    /// comma-separated list.
    ///
    /// Under [`MergePolicy::RequireAll`] a selector without an entry yields
    /// an empty result. Order follows the first selector's properties.
    ///
    /// ```rust
    /// use qss::StyleStore;
    ///
    /// let mut store = StyleStore::new();
    /// store.add_or_update("QLabel", "color", "red");
    /// store.add_or_update("QLabel", "border", "1px");
    /// store.add_or_update("QLineEdit", "color", "red");
    /// store.add_or_update("QLineEdit", "border", "2px");
    ///
    /// let merged = store.get_merged("QLabel, QLineEdit");
    /// assert_eq!(merged.len(), 1);
    /// assert_eq!(merged.get("color").map(String::as_str), Some("red"));
    /// assert!(store.get_merged("QLabel, QSlider").is_empty());
    /// ```
    pub fn get_merged(&self, selectors: &str) -> Properties {
        let mut maps = Vec::new();
        for selector in split_selector_list(selectors) {
            match self.find(selector) {
                Some(entry) => maps.push(&entry.properties),
                None if self.merge_policy == MergePolicy::RequireAll => {
                    log::trace!("merge: no entry for {selector:?}");
                    return Properties::new();
                }
                None => {}
            }
        }

        let Some((first, rest)) = maps.split_first() else {
            return Properties::new();
        };
        let mut merged = (*first).clone();
        merged.retain(|property, value| {
            rest.iter()
                .all(|other| other.get(property.as_str()) == Some(value))
        });
        merged
    }

    /// Renders every entry in insertion order.
    ///
    /// Values are written verbatim. A value holding `;`, even inside quotes,
    /// is cut at that `;` when the text is parsed again.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    pub fn reset(&mut self) {
        log::trace!("reset style store ({} entries)", self.entries.len());
        self.entries.clear();
        self.notify();
    }

    /// Replaces the whole collection.
    pub fn load(&mut self, entries: impl Into<Vec<StyleEntry>>) {
        self.entries = entries.into();
        log::trace!("loaded {} style entries", self.entries.len());
        self.notify();
    }

    fn find(&self, selector: &str) -> Option<&StyleEntry> {
        self.entries.iter().find(|entry| entry.selector == selector)
    }

    fn find_mut(&mut self, selector: &str) -> Option<&mut StyleEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.selector == selector)
    }

    /// Counts mutations; used to tell whether a batch changed anything.
    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn take_sink(&mut self) -> Option<BoxedSink> {
        self.sink.take()
    }

    fn notify(&mut self) {
        self.revision += 1;
        if self.sink.is_none() {
            return;
        }
        let stylesheet = self.serialize();
        if let Some(sink) = self.sink.as_mut() {
            sink.apply(&stylesheet);
        }
    }
}

impl fmt::Display for StyleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            entry.fmt(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for StyleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleStore")
            .field("entries", &self.entries)
            .field("merge_policy", &self.merge_policy)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl From<Stylesheet> for StyleStore {
    fn from(sheet: Stylesheet) -> Self {
        Self::from_entries(sheet.into_entries())
    }
}
