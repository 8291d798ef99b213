use mentor_core::models::Candidate;
use mentor_retrieval::RerankEngine;
use proptest::prelude::*;

fn pool_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(
        ("[a-d]{0,6}", prop::collection::vec(-1.0f32..1.0, 3)),
        1..8,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(content, embedding)| Candidate::new(content, embedding, 0.0))
            .collect()
    })
}

proptest! {
    #[test]
    fn output_length_is_min_of_k_and_pool(
        pool in pool_strategy(),
        k in 1usize..10,
        weight in 0.0f64..=1.0,
        query in "[a-d ]{0,12}",
    ) {
        let engine = RerankEngine::new();
        let expected = k.min(pool.len());
        let result = engine.rerank(&[1.0, 0.0, 0.0], pool, k, weight, &query).unwrap();
        prop_assert_eq!(result.len(), expected);
    }

    #[test]
    fn covering_k_returns_a_permutation(
        pool in pool_strategy(),
        weight in 0.0f64..=1.0,
        query in "[a-d ]{0,12}",
    ) {
        let engine = RerankEngine::new();
        let k = pool.len();
        let mut expected: Vec<String> = pool.iter().map(|c| c.content.clone()).collect();
        let result = engine.rerank(&[1.0, 0.0, 0.0], pool, k, weight, &query).unwrap();

        let mut got: Vec<String> = result.iter().map(|c| c.content.clone()).collect();
        expected.sort_unstable();
        got.sort_unstable();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn identical_inputs_give_identical_order(
        pool in pool_strategy(),
        k in 1usize..10,
        weight in 0.0f64..=1.0,
        query in "[a-d ]{0,12}",
    ) {
        let engine = RerankEngine::new();
        let first = engine.rerank(&[0.5, -0.5, 0.2], pool.clone(), k, weight, &query).unwrap();
        let second = engine.rerank(&[0.5, -0.5, 0.2], pool, k, weight, &query).unwrap();

        let a: Vec<&str> = first.iter().map(|c| c.content.as_str()).collect();
        let b: Vec<&str> = second.iter().map(|c| c.content.as_str()).collect();
        prop_assert_eq!(a, b);
    }
}
