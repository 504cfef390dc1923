use fuzz_disjoint::Input;

fn main() {
    afl::fuzz!(|data: Input| data.run());
}
