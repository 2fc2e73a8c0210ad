use agent_bt::{BehaviorNode, BehaviorTree, Condition, Sequence};
use agent_core::{AgentContext, TickContext};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn always_true(_ctx: &TickContext, _blackboard: &AgentContext) -> bool {
    true
}

fn bench_tree_tick(c: &mut Criterion) {
    let conditions = (0..32)
        .map(|_| Box::new(Condition::new(always_true)) as Box<dyn BehaviorNode>)
        .collect::<Vec<_>>();

    let mut tree = BehaviorTree::new(Box::new(Sequence::new(conditions)));

    let mut now_ms: u64 = 0;
    c.bench_function("agent-bt/tick(conditions=32)", |b| {
        b.iter(|| {
            let ctx = TickContext {
                now_ms,
                dt_seconds: 0.1,
            };
            black_box(tree.tick(&ctx));
            now_ms = now_ms.wrapping_add(16);
        })
    });
}

criterion_group!(benches, bench_tree_tick);
criterion_main!(benches);
