//! Pass-through HTML/ARIA attributes for atoms that wrap a native element.

use yew::AttrValue;
use yew::Html;
use yew::virtual_dom::VNode;

/// Attributes forwarded verbatim to the element an atom renders.
///
/// Entries are applied after the component's own attributes: anything the
/// component does not know about is passed through unchanged, and an entry that
/// shares a name with a component attribute replaces it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NativeAttrs {
    entries: Vec<(&'static str, AttrValue)>,
}

impl NativeAttrs {
    /// Empty attribute set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds (or replaces) an attribute.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
        self
    }

    /// Value of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Number of forwarded attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is forwarded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    /// Writes every entry onto the root element of `node`.
    ///
    /// Nodes whose root is not an element (fragments, text, components) are
    /// returned untouched.
    #[must_use]
    pub fn apply(&self, mut node: Html) -> Html {
        if let VNode::VTag(tag) = &mut node {
            for (name, value) in &self.entries {
                tag.add_attribute(*name, value.clone());
            }
        }
        node
    }
}

impl<const N: usize> From<[(&'static str, &'static str); N]> for NativeAttrs {
    fn from(pairs: [(&'static str, &'static str); N]) -> Self {
        pairs
            .into_iter()
            .fold(Self::new(), |attrs, (name, value)| attrs.with(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::html;

    #[test]
    fn with_replaces_existing_entries() {
        let attrs = NativeAttrs::new()
            .with("aria-label", "first")
            .with("data-testid", "probe")
            .with("aria-label", "second");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("aria-label"), Some(&AttrValue::from("second")));
        let names: Vec<_> = attrs.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["aria-label", "data-testid"]);
    }

    #[test]
    fn apply_writes_onto_root_tag() {
        let attrs = NativeAttrs::from([("aria-expanded", "false"), ("id", "menu")]);
        let node = attrs.apply(html! { <button id="original" /> });
        let VNode::VTag(tag) = node else {
            panic!("expected an element node");
        };
        let collected: Vec<(String, String)> = tag
            .attributes
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        assert!(collected.contains(&("aria-expanded".into(), "false".into())));
        assert!(collected.contains(&("id".into(), "menu".into())));
        assert!(!collected.contains(&("id".into(), "original".into())));
    }

    #[test]
    fn apply_ignores_non_element_roots() {
        let attrs = NativeAttrs::new().with("title", "ignored");
        let node = attrs.apply(html! { <>{"text"}</> });
        assert!(matches!(node, VNode::VList(_)));
    }
}
