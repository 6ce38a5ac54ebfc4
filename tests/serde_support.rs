use chunk_deque::{chunk_deque, ChunkDeque, DirectoryLayout};

#[test]
fn test_serialize_as_sequence() {
    let dq = chunk_deque![1u32, 2, 3];
    assert_eq!(serde_json::to_string(&dq).unwrap(), "[1,2,3]");

    let empty: ChunkDeque<u32> = ChunkDeque::new();
    assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
}

#[test]
fn test_deserialize_round_trip() {
    let mut dq: ChunkDeque<String, 4> = ChunkDeque::new();
    for i in 0..23 {
        dq.push_front(format!("v{i}"));
    }
    let json = serde_json::to_string(&dq).unwrap();
    let back: ChunkDeque<String, 4> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dq);

    let err = serde_json::from_str::<ChunkDeque<u8>>("{\"a\": 1}").unwrap_err();
    assert!(err.to_string().contains("a sequence"));
}

#[test]
fn test_layout_dumps_as_json() {
    let dq: ChunkDeque<u8> = (0..25).collect();
    let value = serde_json::to_value(dq.layout()).unwrap();
    assert_eq!(value["chunk_capacity"], 10);
    assert_eq!(value["begin_cursor"], 4);
    assert_eq!(value["end_chunk"].as_u64().unwrap() as usize, dq.layout().end_chunk);

    let parsed: DirectoryLayout = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, dq.layout());
}

#[test]
fn test_inverted_layout_reports_no_elements() {
    let json = r#"{
        "begin_chunk": 3, "begin_cursor": 2,
        "end_chunk": 1, "end_cursor": 0,
        "directory_capacity": 9, "allocated_chunks": 0, "chunk_capacity": 10
    }"#;
    let layout: DirectoryLayout = serde_json::from_str(json).unwrap();
    assert_eq!(layout.len(), 0);
    assert!(layout.is_empty());
}
