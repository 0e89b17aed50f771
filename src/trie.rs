use super::*;

/// A prefix tree storing a set of strings.
///
/// Children are keyed by `char`, so any Unicode input is accepted. Lookups
/// cost `O(len)` in the length of the query, independent of how many strings
/// are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: Node,
    len: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Node {
    // Sorted by character.
    children: Vec<(char, Node)>,
    terminal: bool,
}

impl Node {
    fn child(&self, c: char) -> Option<&Node> {
        self.children
            .binary_search_by_key(&c, |(key, _)| *key)
            .ok()
            .map(|ix| &self.children[ix].1)
    }

    fn child_or_insert(&mut self, c: char) -> &mut Node {
        let ix = match self.children.binary_search_by_key(&c, |(key, _)| *key) {
            Ok(ix) => ix,
            Err(ix) => {
                // Most nodes only ever get one child.
                if self.children.is_empty() {
                    self.children.reserve_exact(1);
                }
                self.children.insert(ix, (c, Node::default()));
                ix
            }
        };
        &mut self.children[ix].1
    }

    fn count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.count())
            .sum::<usize>()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a string, creating the nodes along its path as needed.
    pub fn add(&mut self, value: &str) {
        let mut node = &mut self.root;
        for c in value.chars() {
            node = node.child_or_insert(c);
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// Returns `true` if exactly this string was inserted.
    pub fn contains(&self, value: &str) -> bool {
        let mut node = &self.root;
        for c in value.chars() {
            match node.child(c) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }

    /// Drops every node, leaving a single empty root.
    pub fn clear(&mut self) {
        self.root = Node::default();
        self.len = 0;
    }

    /// Returns the number of distinct strings stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes, counting the root.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}

impl Container for Trie {
    fn add(&mut self, value: String) {
        Trie::add(self, &value);
    }

    fn contains(&self, value: &str) -> bool {
        Trie::contains(self, value)
    }

    fn clear(&mut self) {
        Trie::clear(self);
    }

    fn len(&self) -> usize {
        Trie::len(self)
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.add(value.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_fresh_trie_contains_nothing() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.contains("a"));
        assert!(!trie.contains("hello"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn test_add_then_contains() {
        let mut trie = Trie::new();
        trie.add("hello");
        assert!(trie.contains("hello"));
        assert!(!trie.contains("hell"));
        assert!(!trie.contains("hello!"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut trie = Trie::new();
        trie.add("banana");
        let nodes = trie.node_count();

        trie.add("banana");
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.len(), 1);
        assert!(trie.contains("banana"));
        assert!(!trie.contains("banan"));
    }

    #[test]
    fn test_prefix_is_not_a_member() {
        let mut trie = Trie::new();
        trie.add("cat");
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("c"));

        trie.add("ca");
        assert!(trie.contains("ca"));
        assert!(trie.contains("cat"));
        // "ca" reuses the existing path.
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn test_empty_string_marks_root() {
        let mut trie = Trie::new();
        trie.add("");
        assert!(trie.contains(""));
        assert!(!trie.contains("a"));
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_shared_prefix() {
        let mut trie = Trie::new();
        trie.add("abc");
        trie.add("abd");

        assert!(!trie.contains("ab"));
        assert!(trie.contains("abc"));
        assert!(trie.contains("abd"));
        assert!(!trie.contains("ab c"));
        // root, a, b, c, d
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn test_characters_outside_lowercase() {
        let mut trie = Trie::new();
        trie.add("ab c");
        trie.add("Zürich");
        trie.add("日本");

        assert!(trie.contains("ab c"));
        assert!(trie.contains("Zürich"));
        assert!(trie.contains("日本"));
        assert!(!trie.contains("abc"));
        assert!(!trie.contains("zürich"));
    }

    #[test]
    fn test_clear() {
        let mut trie: Trie = ["one", "two", "three"].into_iter().collect();
        assert_eq!(trie.len(), 3);

        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.contains("one"));
        assert!(!trie.contains("two"));
        assert!(!trie.contains("three"));
        assert_eq!(trie, Trie::new());
    }

    #[test]
    fn test_children_stay_sorted() {
        let trie: Trie = ["d", "b", "a", "c"].into_iter().collect();
        let keys: Vec<char> = trie.root.children.iter().map(|(c, _)| *c).collect();
        assert_eq!(keys, vec!['a', 'b', 'c', 'd']);
        for value in ["a", "b", "c", "d"] {
            assert!(trie.contains(value));
        }
    }

    #[test]
    fn test_single_child_allocates_one_slot() {
        let mut trie = Trie::new();
        trie.add("abc");

        let mut node = &trie.root;
        for c in "abc".chars() {
            assert_eq!(node.children.capacity(), 1);
            node = node.child(c).unwrap();
        }
        assert_eq!(node.children.capacity(), 0);

        trie.add("b");
        assert_eq!(trie.root.children.len(), 2);
        assert!(trie.contains("abc"));
        assert!(trie.contains("b"));
    }

    #[test]
    fn test_large_random_corpus() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = CorpusConfig::default();
        let corpus = Corpus::generate(&mut rng, &config).unwrap();

        let mut trie = Trie::new();
        corpus.populate(&mut trie);

        assert!(trie.contains(corpus.target()));
        assert!(!trie.contains(&"z".repeat(config.string_len + 1)));
        assert!(!trie.contains(&"z".repeat(config.string_len - 1)));
    }
}
