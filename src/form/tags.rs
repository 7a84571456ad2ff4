//! Ordered, deduplicated tag list

/// Tags attached to a draft, in insertion order, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Empty tag set
    pub const fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Add a tag
    ///
    /// The input is trimmed. Blank input and exact (case-sensitive)
    /// duplicates are ignored. Returns true if the tag was appended.
    pub fn add(&mut self, text: &str) -> bool {
        let tag = text.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove the tag at `index`, ignoring out-of-range indexes
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.tags.len()).then(|| self.tags.remove(index))
    }

    /// True if `tag` is present (exact match)
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Tags as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when there are no tags
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Remove every tag
    pub fn clear(&mut self) {
        self.tags.clear();
    }
}
