//! Huffman code construction
//!
//! Counts symbol frequencies, merges the two lightest trees until one
//! remains, then reads each leaf's path off the finished tree. Left edges
//! are `0`, right edges are `1`.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::priority_queue::{PriorityQueue, DEFAULT_CAPACITY};

/// One unit of input: a character codepoint.
pub type Symbol = u32;

/// Occurrence counts in ascending symbol order. Zero counts are never stored.
pub type FrequencyTable = BTreeMap<Symbol, u64>;

#[derive(Debug, Clone)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

// Nodes order by weight alone. Equal weights are left to the queue's
// tie rule, which makes the result depend on insertion order.
impl Eq for Node {}
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.weight() == other.weight()
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight().cmp(&other.weight())
    }
}

/// A leaf path. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<bool>);

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, &self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable(BTreeMap<Symbol, Code>);

impl CodeTable {
    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.0.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> {
        self.0.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// True when no code is a prefix of a different one. Checks every pair.
    pub fn is_prefix_free(&self) -> bool {
        self.0.iter().all(|(a, code_a)| {
            self.0
                .iter()
                .all(|(b, code_b)| a == b || !code_a.is_prefix_of(code_b))
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedBits(Vec<bool>);

impl EncodedBits {
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EncodedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, &self.0)
    }
}

fn write_bits(f: &mut fmt::Formatter<'_>, bits: &[bool]) -> fmt::Result {
    for &bit in bits {
        f.write_str(if bit { "1" } else { "0" })?;
    }
    Ok(())
}

/// The two outputs of a coding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuffmanCoding {
    pub codes: CodeTable,
    pub bits: EncodedBits,
}

/// Character codepoints of `text`, in order.
pub fn symbols_from_text(text: &str) -> Vec<Symbol> {
    text.chars().map(Symbol::from).collect()
}

pub fn frequency_table(input: &[Symbol]) -> FrequencyTable {
    let mut freq = FrequencyTable::new();
    for &symbol in input {
        *freq.entry(symbol).or_insert(0) += 1;
    }
    freq
}

/// Build the coding tree. Returns `None` when the table is empty.
///
/// Leaves enter the queue in ascending symbol order through the bulk
/// constructor. Each merge takes the first extracted node as the left child.
/// `capacity` is a hint, never allowed past `max(freq.len(), DEFAULT_CAPACITY)`.
pub fn build_tree(freq: &FrequencyTable, capacity: usize) -> Result<Option<Node>> {
    let hint = capacity.min(freq.len().max(DEFAULT_CAPACITY));
    let mut leaves = Vec::with_capacity(hint.max(freq.len()));
    leaves.extend(
        freq.iter()
            .filter(|&(_, &weight)| weight > 0)
            .map(|(&symbol, &weight)| Node::Leaf { symbol, weight }),
    );
    if leaves.is_empty() {
        return Ok(None);
    }

    let mut queue = PriorityQueue::from_vec(leaves);
    while queue.len() > 1 {
        let left = queue.extract_min()?;
        let right = queue.extract_min()?;
        queue.insert(Node::merge(left, right));
    }
    Ok(Some(queue.extract_min()?))
}

/// Read every leaf's path off the tree. A lone leaf root gets the code `0`.
pub fn build_codes(root: &Node) -> CodeTable {
    let mut codes = BTreeMap::new();
    match root {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, Code(vec![false]));
        }
        Node::Internal { .. } => collect_codes(root, &mut Vec::new(), &mut codes),
    }
    CodeTable(codes)
}

fn collect_codes(node: &Node, path: &mut Vec<bool>, codes: &mut BTreeMap<Symbol, Code>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, Code(path.clone()));
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            collect_codes(left, path, codes);
            path.pop();
            path.push(true);
            collect_codes(right, path, codes);
            path.pop();
        }
    }
}

/// Code `input` with a queue of the default initial capacity.
pub fn encode(input: &[Symbol]) -> Result<HuffmanCoding> {
    encode_with_capacity(input, DEFAULT_CAPACITY)
}

pub fn encode_with_capacity(input: &[Symbol], capacity: usize) -> Result<HuffmanCoding> {
    let freq = frequency_table(input);
    debug!(symbols = input.len(), distinct = freq.len(), "counted frequencies");

    let Some(root) = build_tree(&freq, capacity)? else {
        return Ok(HuffmanCoding::default());
    };
    debug!(weight = root.weight(), "built coding tree");

    let codes = build_codes(&root);
    debug!(codes = codes.len(), "derived code table");

    let mut bits = Vec::new();
    for &symbol in input {
        let code = codes
            .get(symbol)
            .expect("every input symbol has a leaf in the coding tree");
        bits.extend_from_slice(code.bits());
    }
    debug!(bits = bits.len(), "encoded input");

    Ok(HuffmanCoding {
        codes,
        bits: EncodedBits(bits),
    })
}
