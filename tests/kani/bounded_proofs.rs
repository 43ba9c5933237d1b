//! Admission proofs for the bounded queues

use rust_dary_heaps::{MaxPQ, MinPQ};

/// Proof: a full MaxPQ rejects anything not strictly larger than its worst
#[kani::proof]
#[kani::unwind(6)]
fn verify_max_pq_rejects_ties_and_worse() {
    let mut pq: MaxPQ<u8> = MaxPQ::new(2).unwrap();
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    pq.push(a);
    pq.push(b);

    let worst = a.min(b);
    let incoming: u8 = kani::any();
    kani::assume(incoming <= worst);

    assert!(!pq.push(incoming));
    assert_eq!(pq.len(), 2);
    assert_eq!(pq.peek(), Some(&worst));
}

/// Proof: a full MinPQ evicts its worst for a strictly smaller element
#[kani::proof]
#[kani::unwind(6)]
fn verify_min_pq_evicts_worst() {
    let mut pq: MinPQ<u8> = MinPQ::new(2).unwrap();
    let a: u8 = kani::any();
    let b: u8 = kani::any();
    pq.push(a);
    pq.push(b);

    let incoming: u8 = kani::any();
    kani::assume(incoming < a.max(b));

    assert!(pq.push(incoming));
    assert_eq!(pq.len(), 2);
    assert!(pq.is_valid());
    assert_eq!(pq.peek(), Some(&a.min(b).max(incoming)));
}
