//! Property tests for identity assignment.

use std::collections::HashSet;

use proptest::prelude::*;

use blueprint::{Context, Deployment};

fn image_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,6}").unwrap()
}

fn build(images: &[(String, usize)]) -> blueprint::Document {
    let ctx = Context::new();
    let mut deployment = Deployment::default();
    for (i, (image, replicas)) in images.iter().enumerate() {
        let service = ctx.service(&format!("svc{i}"), ctx.container(image.as_str()).replicate(*replicas));
        deployment.deploy(service).unwrap();
    }
    deployment.compile().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every separately constructed container gets its own identifier.
    #[test]
    fn property_container_ids_are_unique(
        images in proptest::collection::vec((image_name(), 1usize..4), 0..6),
    ) {
        let document = build(&images);
        let expected: usize = images.iter().map(|(_, n)| n).sum();
        let ids: HashSet<_> = document.containers.iter().map(|c| c.id.clone()).collect();
        prop_assert_eq!(document.containers.len(), expected);
        prop_assert_eq!(ids.len(), expected);
    }

    /// PROPERTY: Rebuilding the same graph in a fresh context yields the same document.
    #[test]
    fn property_compilation_is_deterministic(
        images in proptest::collection::vec((image_name(), 1usize..4), 0..6),
    ) {
        prop_assert_eq!(build(&images), build(&images));
    }
}
