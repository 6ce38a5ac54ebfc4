use chunk_deque::{ChunkDeque, DirectoryLayout};
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Operation {
    PushBack(u16),
    PushFront(u16),
    PopBack,
    PopFront,
    Get(usize),
}

fn operations() -> impl Strategy<Value = Vec<Operation>> {
    proptest::collection::vec(
        prop_oneof![
            3 => any::<u16>().prop_map(Operation::PushBack),
            3 => any::<u16>().prop_map(Operation::PushFront),
            2 => Just(Operation::PopBack),
            2 => Just(Operation::PopFront),
            1 => (0usize..400).prop_map(Operation::Get),
        ],
        1..400,
    )
}

/// Invariants observable from the public layout snapshot.
fn check_layout(layout: &DirectoryLayout, len: usize) {
    let c = layout.chunk_capacity;
    assert!(layout.begin_cursor < c && layout.end_cursor < c);
    assert!(
        (layout.begin_chunk, layout.begin_cursor) <= (layout.end_chunk, layout.end_cursor),
        "begin after end: {layout:?}"
    );
    assert!(layout.end_chunk < layout.directory_capacity, "end off directory: {layout:?}");
    assert_eq!(layout.len(), len);

    if len == 0 {
        assert!(layout.allocated_chunks <= 1, "empty deque holds chunks: {layout:?}");
    } else {
        let occupied = layout.end_chunk - layout.begin_chunk + usize::from(layout.end_cursor != 0);
        assert_eq!(layout.allocated_chunks, occupied, "chunk accounting: {layout:?}");
    }
}

fn run<const CHUNK: usize>(ops: Vec<Operation>) {
    let mut model = VecDeque::new();
    let mut dq: ChunkDeque<u16, CHUNK> = ChunkDeque::new();

    for op in ops {
        match op {
            Operation::PushBack(v) => {
                model.push_back(v);
                dq.push_back(v);
            }
            Operation::PushFront(v) => {
                model.push_front(v);
                dq.push_front(v);
            }
            Operation::PopBack => assert_eq!(dq.pop_back(), model.pop_back()),
            Operation::PopFront => assert_eq!(dq.pop_front(), model.pop_front()),
            Operation::Get(i) => {
                assert_eq!(dq.get(i), model.get(i), "get({}) mismatch", i);
                assert_eq!(dq.at(i).ok(), model.get(i));
            }
        }
        assert_eq!(dq.len(), model.len(), "Length mismatch");
        check_layout(&dq.layout(), model.len());
    }

    assert!(dq.iter().eq(model.iter()), "Final content mismatch");
    assert!(dq.iter().rev().eq(model.iter().rev()));
    let cloned = dq.clone();
    if !dq.is_empty() {
        // An emptied deque may still hold its begin chunk; a clone never does.
        assert_eq!(cloned.layout(), dq.layout());
    }
    assert!(cloned.into_iter().eq(model.into_iter()));
}

proptest! {
    #[test]
    fn test_matches_vec_deque_default_chunk(ops in operations()) {
        run::<10>(ops);
    }

    #[test]
    fn test_matches_vec_deque_single_slot_chunk(ops in operations()) {
        run::<1>(ops);
    }

    #[test]
    fn test_matches_vec_deque_odd_chunk(ops in operations()) {
        run::<3>(ops);
    }

    #[test]
    fn test_matches_vec_deque_pow2_chunk(ops in operations()) {
        run::<8>(ops);
    }

    #[test]
    fn test_index_translation(front in 0usize..120, back in 0usize..120) {
        let mut dq: ChunkDeque<usize> = ChunkDeque::new();
        for i in 0..back {
            dq.push_back(front + i);
        }
        for i in (0..front).rev() {
            dq.push_front(i);
        }
        for i in 0..front + back {
            prop_assert_eq!(dq[i], i);
        }
        prop_assert!(dq.at(front + back).is_err());
    }
}
