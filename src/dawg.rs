use crate::labelset::LetterSet;
use crate::tiles::Letter;
use crate::Error;
use log::{info, warn};
use std::fmt;
use std::fs::read_to_string;

/// A node in the dictionary trie.
///
/// The children are kept in alphabetical order; `labels` holds the set of
/// child letters, so the position of a child is the rank of its letter.
#[derive(Debug, Clone, Default)]
pub struct DawgNode {
    labels: LetterSet,
    children: Vec<DawgNode>,
    terminal: bool,
}

impl DawgNode {
    fn new() -> DawgNode {
        DawgNode::default()
    }

    /// Check if the path to this node spells a complete word
    pub fn is_word(&self) -> bool {
        self.terminal
    }

    /// The letters of the children of this node
    pub fn labels(&self) -> LetterSet {
        self.labels
    }

    pub fn child(&self, letter: Letter) -> Option<&DawgNode> {
        self.labels
            .index_of(letter)
            .map(|index| &self.children[index])
    }

    /// Iterate over (letter, child) in alphabetical order
    pub fn children(&self) -> impl Iterator<Item = (Letter, &DawgNode)> {
        self.labels.iter().zip(self.children.iter())
    }

    /// Follow the path spelled by `letters` from this node.
    pub fn follow<I: IntoIterator<Item = Letter>>(&self, letters: I) -> Option<&DawgNode> {
        letters
            .into_iter()
            .try_fold(self, |node, letter| node.child(letter))
    }

    fn child_or_insert(&mut self, letter: Letter) -> (&mut DawgNode, bool) {
        let pos = self.labels.rank(letter);
        let created = !self.labels.insert(letter);
        if created {
            self.children.insert(pos, DawgNode::new());
        }
        (&mut self.children[pos], created)
    }

    fn collect_words(&self, prefix: &mut String, words: &mut Vec<String>) {
        if self.terminal {
            words.push(prefix.clone());
        }
        for (letter, child) in self.children() {
            prefix.push(letter.to_char());
            child.collect_words(prefix, words);
            prefix.pop();
        }
    }
}

/// The dictionary: a trie of all valid words.
///
/// Every node is owned by its parent, and the root by the `Dawg`. After
/// construction a `Dawg` is only read, so it can be shared between threads.
#[derive(Debug, Clone)]
pub struct Dawg {
    root: DawgNode,
    word_count: usize,
    node_count: usize,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if it is not build from a file.
    wordfile: String,
}

impl Default for Dawg {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Dawg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dawg: {} words, {} nodes from '{}'>",
            self.word_count, self.node_count, self.wordfile
        )
    }
}

impl Dawg {
    /// Create an empty dictionary. It has a single (root) node.
    pub fn new() -> Dawg {
        Dawg {
            root: DawgNode::new(),
            word_count: 0,
            node_count: 1,
            wordfile: String::new(),
        }
    }

    /// Build the dictionary from a list of words.
    /// ## Errors
    /// If a word contains a character that is not a letter.
    /// ## Examples
    /// ```
    /// # use scradle::{Dawg, Error};
    /// let dawg = Dawg::from_words(&["chat", "chien"])?;
    /// assert!(dawg.contains("CHAT"));
    /// assert!(dawg.has_prefix("CHI"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Dawg, Error> {
        let mut dawg = Dawg::new();
        for word in words {
            dawg.insert(word.as_ref())?;
        }
        Ok(dawg)
    }

    /// Read the dictionary from a file with one word per line.
    /// Blank lines and lines starting with `#` are skipped, as are lines with
    /// other characters than letters.
    /// ## Errors
    /// Fails if the file can not be read.
    pub fn from_file(wordfile: &str) -> Result<Dawg, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut dawg = Dawg::new();
        for (i, line) in contents.lines().enumerate() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            if dawg.insert(word).is_err() {
                warn!("Skip invalid word \"{}\" at line {} of {}", word, i + 1, wordfile);
            }
        }
        dawg.wordfile = String::from(wordfile);
        info!("{}", dawg);
        Ok(dawg)
    }

    /// Replace the contents of the dictionary with the words in `wordfile`.
    /// On error the dictionary is left unchanged.
    pub fn load_from_file(&mut self, wordfile: &str) -> Result<(), Error> {
        *self = Dawg::from_file(wordfile)?;
        Ok(())
    }

    /// Add a word. Case is ignored. Return true if the word was not yet present.
    /// The empty word is never added.
    /// ## Errors
    /// If the word contains a character that is not a letter.
    pub fn insert(&mut self, word: &str) -> Result<bool, Error> {
        let letters = Letter::parse_word(word)?;
        if letters.is_empty() {
            return Ok(false);
        }
        let mut new_nodes = 0;
        let mut node = &mut self.root;
        for letter in letters {
            let (child, created) = node.child_or_insert(letter);
            if created {
                new_nodes += 1;
            }
            node = child;
        }
        let added = !node.terminal;
        node.terminal = true;
        self.node_count += new_nodes;
        if added {
            self.word_count += 1;
        }
        Ok(added)
    }

    /// Check if `word` is in the dictionary. The empty word never is.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.node_at(word).map_or(false, DawgNode::is_word)
    }

    /// Check if some word in the dictionary starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node_at(prefix).is_some()
    }

    /// Return the node reached by `prefix`, to continue traversal from there.
    pub fn node_at(&self, prefix: &str) -> Option<&DawgNode> {
        let letters = Letter::parse_word(prefix).ok()?;
        self.root.follow(letters)
    }

    pub fn root(&self) -> &DawgNode {
        &self.root
    }

    /// All words starting with `prefix`, in alphabetical order
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        if let Some(node) = self.node_at(prefix) {
            let mut prefix = prefix.to_ascii_uppercase();
            node.collect_words(&mut prefix, &mut words);
        }
        words
    }

    /// The number of words in the dictionary
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes, including the root
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }

    /// Remove all words
    pub fn clear(&mut self) {
        *self = Dawg::new();
    }
}
