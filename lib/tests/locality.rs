use collatz_ca_lib::{
    check_multiply,
    rules::{Collatz, MultiplyAddOne, Rule},
    State, Tape,
};
use num_bigint::BigUint;
use proptest::{prelude::*, sample::Index};

fn interior() -> impl Strategy<Value = Vec<State>> {
    prop::collection::vec(prop::sample::select(State::ALL[1..].to_vec()), 3..40)
}

fn tape(interior: &[State]) -> Tape {
    let mut cells = vec![State::Blank];
    cells.extend_from_slice(interior);
    cells.push(State::Blank);
    Tape::from_cells(cells).unwrap()
}

/// Changing one cell changes at most the cells next to it.
fn check_locality<R: Rule>(cells: &[State], i: usize, j: usize, state: State) {
    let before = tape(cells);
    let mut changed = cells.to_vec();
    changed[j] = state;
    let after = tape(&changed);
    // Interior index `i` is cell `i + 1` on the tape.
    assert_eq!(before.next_state::<R>(i + 1), after.next_state::<R>(i + 1));
}

proptest! {
    #[test]
    fn collatz_locality(
        cells in interior(),
        i in any::<Index>(),
        j in any::<Index>(),
        state in prop::sample::select(State::ALL[1..].to_vec()),
    ) {
        let (i, j) = (i.index(cells.len()), j.index(cells.len()));
        prop_assume!(i.abs_diff(j) > 1);
        check_locality::<Collatz>(&cells, i, j, state);
        check_locality::<MultiplyAddOne>(&cells, i, j, state);
    }

    #[test]
    fn multiply_large(n in 1u64..(1 << 40)) {
        let odd = 2 * n + 1;
        prop_assert_eq!(check_multiply(odd)?, BigUint::from(3 * odd + 1));
    }

    #[test]
    fn halve_large(n in 1u64..(1 << 62)) {
        let even = BigUint::from(n) << 1;
        let next = Tape::from_value(&even)?.step::<Collatz>();
        prop_assert_eq!(next.value(), Some(BigUint::from(n)));
    }
}
