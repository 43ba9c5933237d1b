//! Index arithmetic proofs
//!
//! For every factor and index in range, each candidate child maps back to its
//! parent and the candidates are contiguous.

use rust_dary_heaps::MinHeap;

/// Proof: parent(children(i)[k]) == i
#[kani::proof]
#[kani::unwind(10)]
fn verify_children_map_back_to_parent() {
    let factor: usize = kani::any();
    let index: usize = kani::any();
    kani::assume(factor >= 2 && factor <= 8);
    kani::assume(index < 1 << 16);

    let heap: MinHeap<u8> = MinHeap::new(factor).unwrap();
    let children = heap.children(index);

    assert_eq!(children.len(), factor);
    assert_eq!(children.start, index * factor + 1);
    for child in children {
        assert_eq!(heap.parent(child), index);
    }
}

/// Proof: candidate ranges never overflow, whatever the factor
#[kani::proof]
fn verify_children_saturate() {
    let factor: usize = kani::any();
    let index: usize = kani::any();
    kani::assume(factor >= 2);

    let heap: MinHeap<u8> = MinHeap::new(factor).unwrap();
    let children = heap.children(index);

    assert!(children.start <= children.end);
    if index < usize::MAX {
        assert!(children.start > index);
    }
    assert_eq!(heap.parent(factor), 0);
}

/// Proof: every non-root index has a strictly smaller parent
#[kani::proof]
fn verify_parent_is_smaller() {
    let factor: usize = kani::any();
    let index: usize = kani::any();
    kani::assume(factor >= 2 && factor <= 64);
    kani::assume(index > 0);

    let heap: MinHeap<u8> = MinHeap::new(factor).unwrap();
    assert!(heap.parent(index) < index);
}

/// Proof: factors below two are always rejected
#[kani::proof]
fn verify_small_factor_rejected() {
    let factor: usize = kani::any();
    kani::assume(factor < 2);
    assert!(MinHeap::<u8>::new(factor).is_err());
}
