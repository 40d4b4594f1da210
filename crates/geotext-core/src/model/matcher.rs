// crates/geotext-core/src/model/matcher.rs
use super::lookup::{LocationKind, LookupData};
use super::result::LocationBucket;
use crate::text::{is_acronym, tokenize, Span, Token};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Word-level trie over folded tokens.
///
/// Node 0 is the root. A node carries one terminal per spelling that ends
/// there; acronym spellings keep their original tokens for the exact-case
/// check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TrieNode {
    children: HashMap<String, u32>,
    terminals: Vec<Terminal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Terminal {
    entry: u32,
    exact: Option<Vec<String>>,
}

impl Terminal {
    fn accepts(&self, tokens: &[Token<'_>]) -> bool {
        match &self.exact {
            None => true,
            Some(exact) => {
                exact.len() == tokens.len()
                    && exact.iter().zip(tokens).all(|(e, t)| e == t.text)
            }
        }
    }
}

/// Exact, token-boundary keyword matcher for one [`LocationKind`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatcher {
    kind: LocationKind,
    names: Vec<String>,
    nodes: Vec<TrieNode>,
    keywords: usize,
}

impl KeywordMatcher {
    /// Compile a lookup table into a trie.
    ///
    /// A spelling shared by two entries stays with the first one.
    pub fn build(data: &LookupData) -> Self {
        let mut matcher = Self {
            kind: data.kind,
            names: Vec::with_capacity(data.len()),
            nodes: vec![TrieNode::default()],
            keywords: 0,
        };

        for entry in data.entries() {
            let idx = matcher.names.len() as u32;
            matcher.names.push(entry.name.clone());
            for spelling in entry.spellings() {
                matcher.insert(idx, spelling);
            }
        }

        tracing::debug!(
            kind = data.kind.bucket(),
            entries = matcher.names.len(),
            keywords = matcher.keywords,
            nodes = matcher.nodes.len(),
            "keyword matcher built"
        );
        matcher
    }

    fn insert(&mut self, entry: u32, spelling: &str) {
        let tokens = tokenize(spelling);
        if tokens.is_empty() {
            return;
        }

        let mut node = 0usize;
        for token in &tokens {
            node = match self.nodes[node].children.get(&token.folded) {
                Some(&next) => next as usize,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node]
                        .children
                        .insert(token.folded.clone(), next as u32);
                    next
                }
            };
        }

        let exact = is_acronym(spelling)
            .then(|| tokens.iter().map(|t| t.text.to_string()).collect::<Vec<_>>());

        let terminals = &mut self.nodes[node].terminals;
        if let Some(existing) = terminals.iter().find(|t| t.exact == exact) {
            if existing.entry != entry {
                tracing::warn!(
                    kind = self.kind.bucket(),
                    spelling,
                    kept = %self.names[existing.entry as usize],
                    dropped = %self.names[entry as usize],
                    "spelling already registered for another entry"
                );
            }
            return;
        }
        // exact-case terminals are tried before the folded one
        if exact.is_some() {
            terminals.insert(0, Terminal { entry, exact });
        } else {
            terminals.push(Terminal { entry, exact });
        }
        self.keywords += 1;
    }

    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    /// Number of canonical names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of registered spellings.
    pub fn keyword_count(&self) -> usize {
        self.keywords
    }

    /// Scan `text` left to right, taking the longest match at each position.
    pub fn find_into(&self, text: &str, bucket: &mut LocationBucket) {
        let tokens = tokenize(text);
        let mut i = 0;

        while i < tokens.len() {
            let mut node = 0usize;
            let mut best: Option<(usize, u32)> = None;

            for (j, token) in tokens.iter().enumerate().skip(i) {
                match self.nodes[node].children.get(&token.folded) {
                    Some(&next) => node = next as usize,
                    None => break,
                }
                let window = &tokens[i..=j];
                if let Some(t) = self.nodes[node].terminals.iter().find(|t| t.accepts(window)) {
                    best = Some((j + 1, t.entry));
                }
            }

            match best {
                Some((end, entry)) => {
                    let span = Span::new(tokens[i].span.start, tokens[end - 1].span.end);
                    bucket.record(&self.names[entry as usize], span, span.slice(text));
                    i = end;
                }
                None => i += 1,
            }
        }
    }

    /// Convenience wrapper around [`KeywordMatcher::find_into`].
    pub fn find(&self, text: &str) -> LocationBucket {
        let mut bucket = LocationBucket::default();
        self.find_into(text, &mut bucket);
        bucket
    }
}
