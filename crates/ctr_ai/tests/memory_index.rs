mod common;

use ctr_ai::index::{Include, MemoryIndex, VectorIndex};
use ctr_core::error::codes;

use common::{complaint_index, meta, record};

#[test]
fn ranks_by_cosine_and_reports_distances() {
    let index = complaint_index();
    let resp = index
        .query(&[vec![1.0, 0.0]], 2, &[Include::Documents, Include::Distances])
        .unwrap();

    assert_eq!(resp.ids, vec![vec!["c-a".to_string(), "c-ab".to_string()]]);
    assert!(resp.metadatas.is_none());
    let distances = resp.distances.unwrap();
    assert!(distances[0][0].unwrap().abs() < 1e-6);
    assert!(distances[0][0].unwrap() < distances[0][1].unwrap());
}

#[test]
fn equal_scores_keep_insertion_order() {
    let index = MemoryIndex::new(vec![
        record("second-id", vec![1.0, 1.0], "first inserted", meta("Mortgage", 10)),
        record("first-id", vec![1.0, 1.0], "second inserted", meta("Mortgage", 11)),
    ]);
    let resp = index.query(&[vec![3.0, 3.0]], 2, &[Include::Documents]).unwrap();
    assert_eq!(resp.ids[0], vec!["second-id".to_string(), "first-id".to_string()]);
}

#[test]
fn zero_norm_vectors_are_skipped() {
    let index = MemoryIndex::new(vec![
        record("empty", vec![0.0, 0.0], "never matches", meta("Mortgage", 1)),
        record("real", vec![1.0, 0.0], "matches", meta("Mortgage", 2)),
    ]);
    let resp = index.query(&[vec![1.0, 1.0]], 5, &[Include::Documents]).unwrap();
    assert_eq!(resp.ids[0], vec!["real".to_string()]);
}

#[test]
fn one_row_per_query_embedding() {
    let index = complaint_index();
    let resp = index
        .query(&[vec![1.0, 0.0], vec![0.0, 1.0]], 1, &[Include::Metadatas])
        .unwrap();
    let metas = resp.metadatas.unwrap();
    assert_eq!(metas.len(), 2);
    assert_eq!(metas[0][0].as_ref().unwrap()["complaint_id"], 1);
    assert_eq!(metas[1][0].as_ref().unwrap()["complaint_id"], 2);
}

#[test]
fn dimension_mismatch_is_an_error() {
    let err = complaint_index()
        .query(&[vec![1.0, 0.0, 0.0]], 1, &[Include::Documents])
        .unwrap_err();
    assert_eq!(err.code, codes::INDEX_QUERY_FAILED);
}

#[test]
fn non_finite_scores_are_dropped_instead_of_ranked() {
    let mut records = Vec::new();
    for i in 0..40u64 {
        let embedding = if i % 3 == 0 {
            vec![f32::NAN, 1.0]
        } else {
            vec![1.0, i as f32]
        };
        records.push(record(&format!("r{i}"), embedding, "complaint", meta("Mortgage", i)));
    }
    // Components this large overflow the norm to inf, and inf/inf is NaN.
    records.push(record("huge", vec![f32::MAX, f32::MAX], "complaint", meta("Mortgage", 99)));
    let index = MemoryIndex::new(records);

    let resp = index.query(&[vec![1.0, 2.0]], 10, &[Include::Documents]).unwrap();
    assert_eq!(resp.ids[0].len(), 10);
    assert!(resp.ids[0].iter().all(|id| id != "huge"));
    assert!(!resp.ids[0].contains(&"r0".to_string()));
    assert!(!resp.ids[0].contains(&"r3".to_string()));
}
