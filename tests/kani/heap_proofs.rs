//! Heap-order proofs for the array core

use rust_dary_heaps::{MaxHeap, MinHeap};

/// Proof: the heap stays valid and pops the minimum after arbitrary pushes
#[kani::proof]
#[kani::unwind(8)]
fn verify_min_heap_push_pop() {
    let factor: usize = kani::any();
    kani::assume(factor >= 2 && factor <= 4);
    let mut heap: MinHeap<u8> = MinHeap::new(factor).unwrap();

    let a: u8 = kani::any();
    let b: u8 = kani::any();
    let c: u8 = kani::any();
    let d: u8 = kani::any();
    heap.push(a);
    heap.push(b);
    heap.push(c);
    heap.push(d);

    assert!(heap.is_valid());
    assert_eq!(heap.len(), 4);

    let min = a.min(b).min(c).min(d);
    assert_eq!(heap.pop(), Some(min));
    assert!(heap.is_valid());
    assert_eq!(heap.len(), 3);
}

/// Proof: heapify produces a valid max heap with the maximum on top
#[kani::proof]
#[kani::unwind(8)]
fn verify_max_heap_heapify() {
    let values: [u8; 5] = kani::any();
    let mut heap: MaxHeap<u8> = MaxHeap::new(3).unwrap();
    heap.heapify(values);

    assert!(heap.is_valid());
    let max = values.iter().copied().max();
    assert_eq!(heap.peek().copied(), max);
}

/// Proof: popping an empty heap returns None and changes nothing
#[kani::proof]
fn verify_empty_pop() {
    let mut heap: MinHeap<u8> = MinHeap::new(2).unwrap();
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.peek(), None);
    assert!(heap.is_empty());
}
