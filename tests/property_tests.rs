use std::collections::HashMap;

use literature_huffman::huffman::{encode, frequency_table, HuffmanCoding, Symbol};
use literature_huffman::priority_queue::PriorityQueue;
use proptest::prelude::*;

fn decode(coding: &HuffmanCoding) -> Option<Vec<Symbol>> {
    let lookup: HashMap<Vec<bool>, Symbol> = coding
        .codes
        .iter()
        .map(|(symbol, code)| (code.bits().to_vec(), symbol))
        .collect();
    let mut out = Vec::new();
    let mut current = Vec::new();
    for &bit in coding.bits.as_slice() {
        current.push(bit);
        if let Some(&symbol) = lookup.get(&current) {
            out.push(symbol);
            current.clear();
        }
    }
    current.is_empty().then_some(out)
}

proptest! {
    #[test]
    fn test_huffman_roundtrip(input in prop::collection::vec(0..40u32, 0..300)) {
        let coding = encode(&input).unwrap();
        prop_assert_eq!(decode(&coding), Some(input));
    }

    #[test]
    fn test_codes_prefix_free_and_non_empty(input in prop::collection::vec(0..1000u32, 1..300)) {
        let coding = encode(&input).unwrap();
        prop_assert!(coding.codes.is_prefix_free());
        prop_assert!(coding.codes.iter().all(|(_, code)| !code.is_empty()));
        prop_assert_eq!(coding.codes.len(), frequency_table(&input).len());
    }

    #[test]
    fn test_frequencies_sum_to_length(input in prop::collection::vec(any::<u32>(), 0..300)) {
        let freq = frequency_table(&input);
        prop_assert_eq!(freq.values().sum::<u64>(), input.len() as u64);
    }

    #[test]
    fn test_never_worse_than_fixed_width(input in prop::collection::vec(0..256u32, 1..300)) {
        let coding = encode(&input).unwrap();
        prop_assert!(coding.bits.len() <= 8 * input.len());
    }

    #[test]
    fn test_queue_extracts_non_decreasing(
        ops in prop::collection::vec(prop::option::of(any::<i32>()), 0..400),
    ) {
        let mut queue = PriorityQueue::new();
        let mut reference = std::collections::BinaryHeap::new();
        for op in ops {
            match op {
                Some(v) => {
                    queue.insert(v);
                    reference.push(std::cmp::Reverse(v));
                }
                None => {
                    let expected = reference.pop().map(|std::cmp::Reverse(v)| v);
                    prop_assert_eq!(queue.extract_min().ok(), expected);
                }
            }
        }
        prop_assert_eq!(queue.len(), reference.len());
    }

    #[test]
    fn test_heapify_matches_insertion(values in prop::collection::vec(any::<i16>(), 0..300)) {
        let mut bulk = PriorityQueue::from_vec(values.clone());
        let mut one_by_one = PriorityQueue::with_capacity(0);
        for &v in &values {
            one_by_one.insert(v);
        }
        let mut sorted = values;
        sorted.sort_unstable();
        for expected in sorted {
            prop_assert_eq!(bulk.extract_min(), Ok(expected));
            prop_assert_eq!(one_by_one.extract_min(), Ok(expected));
        }
        prop_assert!(bulk.is_empty() && one_by_one.is_empty());
    }
}
