use arbitrary::Arbitrary;
use disjoint::test_tools::{self, Op};

#[derive(Debug, Clone, Copy, Arbitrary)]
pub enum RawOp {
    Union(u16, u16),
    SameSet(u16, u16),
    Find(u16),
}

#[derive(Debug, Arbitrary)]
pub struct Input {
    len: u8,
    ops: Vec<RawOp>,
}

impl Input {
    pub fn run(self) {
        let Self { len, ops } = self;
        let len = usize::from(len) + 1;
        let idx = |i: u16| usize::from(i) % len;

        let ops: Vec<_> = ops
            .into_iter()
            .map(|op| match op {
                RawOp::Union(a, b) => Op::Union(idx(a), idx(b)),
                RawOp::SameSet(a, b) => Op::SameSet(idx(a), idx(b)),
                RawOp::Find(a) => Op::Find(idx(a)),
            })
            .collect();

        test_tools::run_differential(len, &ops);
    }
}
