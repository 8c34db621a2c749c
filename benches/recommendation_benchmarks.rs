use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wellgraph::analytics::{network_analytics, update_user_activity};
use wellgraph::graph::{keys, Edge, EdgeType, GraphStore, Node, NodeId, NodeType};
use wellgraph::recommend::{find_optimal_groups, find_recommended_content, find_similar_users};

const INTERESTS: [&str; 8] = [
    "fitness", "nutrition", "sports", "sleep", "yoga", "running", "meditation", "cycling",
];

/// Random social graph: `users` users with ~`degree` follows each, plus
/// content and groups
fn random_graph(users: usize, degree: usize, seed: u64) -> GraphStore {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut store = GraphStore::new();

    for i in 0..users {
        let interests: Vec<&str> = (0..3).map(|_| INTERESTS[rng.gen_range(0..INTERESTS.len())]).collect();
        store.add_node(
            Node::new(format!("u{}", i), NodeType::User)
                .with_property(keys::INTERESTS, interests)
                .with_property(keys::LEVEL, rng.gen_range(0..10) as i64),
        );
    }
    for i in 0..users / 4 {
        store.add_node(
            Node::new(format!("c{}", i), NodeType::Content)
                .with_property(keys::CATEGORY, INTERESTS[i % INTERESTS.len()]),
        );
    }
    for i in 0..users / 20 {
        store.add_node(
            Node::new(format!("g{}", i), NodeType::Group)
                .with_property(keys::INTERESTS, vec![INTERESTS[i % INTERESTS.len()]])
                .with_property(keys::AVG_LEVEL, rng.gen_range(0.0..10.0f64))
                .with_property(keys::ACTIVITY_SCORE, rng.gen_range(0.0..1.0f64))
                .with_property(keys::MEMBER_COUNT, rng.gen_range(1..100) as i64),
        );
    }

    for i in 0..users {
        for _ in 0..degree {
            let to = rng.gen_range(0..users);
            if to != i {
                let weight = rng.gen_range(0.1..1.0);
                store
                    .add_edge(Edge::new(format!("u{}", i), format!("u{}", to), EdgeType::Follows, weight))
                    .ok();
            }
        }
        if users >= 4 {
            let content = rng.gen_range(0..users / 4);
            store
                .add_edge(Edge::new(format!("u{}", i), format!("c{}", content), EdgeType::Likes, 0.5))
                .ok();
        }
    }
    store
}

fn bench_similar_users(c: &mut Criterion) {
    let mut group = c.benchmark_group("similar_users");

    for size in [1_000, 10_000].iter() {
        let store = random_graph(*size, 10, 42);
        let user = NodeId::new("u0");
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| find_similar_users(&store, &user, 10));
        });
    }
    group.finish();
}

fn bench_content_and_groups(c: &mut Criterion) {
    let store = random_graph(5_000, 10, 7);
    let user = NodeId::new("u1");

    c.bench_function("recommended_content_5k", |b| {
        b.iter(|| find_recommended_content(&store, &user, 10));
    });
    c.bench_function("optimal_groups_5k", |b| {
        b.iter(|| find_optimal_groups(&store, &user, 10));
    });
    c.bench_function("network_analytics_5k", |b| {
        b.iter(|| network_analytics(&store, &user, 1_700_000_000_000));
    });
}

fn bench_activity_updates(c: &mut Criterion) {
    c.bench_function("activity_update", |b| {
        let mut store = random_graph(1_000, 5, 3);
        let mut rng = StdRng::seed_from_u64(9);
        b.iter(|| {
            let actor = NodeId::new(format!("u{}", rng.gen_range(0..1_000)));
            let target = NodeId::new(format!("c{}", rng.gen_range(0..250)));
            update_user_activity(&mut store, &actor, EdgeType::Likes, Some(&target), 1_700_000_000_000)
        });
    });
}

criterion_group!(benches, bench_similar_users, bench_content_and_groups, bench_activity_updates);
criterion_main!(benches);
