use collatz_ca_lib::{
    rules::{Collatz, MultiplyAddOne, Rule, RuleKind},
    Carry, Error, State,
};

/// Applies a rule to a neighborhood written as three symbols.
fn apply<R: Rule>(nbhd: &str) -> char {
    let states = nbhd
        .chars()
        .map(|c| State::from_symbol(c).unwrap())
        .collect::<Vec<_>>();
    R::next_state(states[0], states[1], states[2]).symbol()
}

/// The Collatz rule, written case by case.
fn collatz_cases(center: State, right: State) -> State {
    if right == State::Blank && center == State::Zero {
        return State::Blank;
    }
    if right == State::Blank && center == State::One {
        return State::Carry(Carry::C12);
    }
    if let State::Carry(carry) = center {
        if carry.count() % 2 == 1 {
            return State::One;
        }
        if right == State::Blank {
            return State::Blank;
        }
        return State::Zero;
    }
    if let State::Carry(carry) = right {
        let z = center == State::One;
        let sum = z as u8 + carry.bit() as u8 + carry.count() / 2;
        if center == State::Blank && sum == 0 {
            return State::Blank;
        }
        return State::Carry(Carry::new(z, sum).unwrap());
    }
    center
}

#[test]
fn symbols() {
    let symbols = State::ALL.iter().map(|s| s.symbol()).collect::<String>();
    assert_eq!(symbols, "S01abcABCD");
    for &state in State::ALL.iter() {
        assert_eq!(State::from_symbol(state.symbol()), Ok(state));
        assert_eq!(state.to_string(), state.symbol().to_string());
    }
}

#[test]
fn unrecognized_symbols() {
    for c in (0u8..128).map(char::from).chain(['é', '∞']) {
        if !"S01abcABCD".contains(c) {
            assert_eq!(State::from_symbol(c), Err(Error::UnrecognizedSymbol(c)));
        }
    }
}

#[test]
fn carry_pairs() {
    for carry in Carry::ALL {
        assert_eq!(Carry::new(carry.bit(), carry.count()), Some(carry));
        assert_eq!(State::from(carry).carry(), Some(carry));
    }
    assert_eq!(Carry::new(false, 3), None);
    assert_eq!(Carry::new(true, 4), None);
    assert_eq!(State::Carry(Carry::C12).symbol(), 'C');
    assert_eq!(State::from(true), State::One);
    assert_eq!(State::Zero.digit(), Some(false));
    assert_eq!(State::Blank.digit(), None);
}

#[test]
fn division() {
    assert_eq!(apply::<Collatz>("10S"), 'S');
    assert_eq!(apply::<Collatz>("S0S"), 'S');
}

#[test]
fn start_multiplication() {
    assert_eq!(apply::<Collatz>("01S"), 'C');
    assert_eq!(apply::<Collatz>("S1S"), 'C');
}

#[test]
fn resolve_carry() {
    assert_eq!(apply::<Collatz>("0D0"), '1');
    assert_eq!(apply::<Collatz>("SbS"), '1');
    assert_eq!(apply::<Collatz>("1CS"), 'S');
    assert_eq!(apply::<Collatz>("1C1"), '0');
    assert_eq!(apply::<Collatz>("SaS"), 'S');
    assert_eq!(apply::<Collatz>("Sa0"), '0');
    assert_eq!(apply::<Collatz>("SAC"), '0');
}

#[test]
fn receive_carry() {
    assert_eq!(apply::<Collatz>("S1C"), 'D');
    assert_eq!(apply::<Collatz>("S0C"), 'c');
    assert_eq!(apply::<Collatz>("SSC"), 'c');
    assert_eq!(apply::<Collatz>("SSa"), 'S');
    assert_eq!(apply::<Collatz>("SSb"), 'S');
    assert_eq!(apply::<Collatz>("SSA"), 'b');
    assert_eq!(apply::<Collatz>("S0a"), 'a');
    assert_eq!(apply::<Collatz>("S1a"), 'B');
    assert_eq!(apply::<Collatz>("S1D"), 'D');
    assert_eq!(apply::<Collatz>("S0c"), 'b');
}

#[test]
fn unchanged() {
    assert_eq!(apply::<Collatz>("101"), '0');
    assert_eq!(apply::<Collatz>("S11"), '1');
    assert_eq!(apply::<Collatz>("SSS"), 'S');
    assert_eq!(apply::<Collatz>("SS1"), 'S');
}

#[test]
fn collatz_all_neighborhoods() {
    for &left in State::ALL.iter() {
        for &center in State::ALL.iter() {
            for &right in State::ALL.iter() {
                assert_eq!(
                    Collatz::next_state(left, center, right),
                    collatz_cases(center, right),
                    "{}{}{}",
                    left,
                    center,
                    right
                );
            }
        }
    }
}

#[test]
fn multiply() {
    assert_eq!(apply::<MultiplyAddOne>("S1S"), '1');
    assert_eq!(apply::<MultiplyAddOne>("10S"), '0');
    assert_eq!(apply::<MultiplyAddOne>("1CS"), '0');
    assert_eq!(apply::<MultiplyAddOne>("SDS"), '1');
    assert_eq!(apply::<MultiplyAddOne>("1a1"), '0');
    assert_eq!(apply::<MultiplyAddOne>("SSC"), 'c');
    assert_eq!(apply::<MultiplyAddOne>("S1C"), 'D');
}

#[test]
fn multiply_all_neighborhoods() {
    for &left in State::ALL.iter() {
        for &center in State::ALL.iter() {
            for &right in State::ALL.iter() {
                let expected = match (center, right) {
                    (State::Zero, State::Blank) | (State::One, State::Blank) => center,
                    (State::Carry(carry), _) => State::from(carry.count() % 2 == 1),
                    _ => collatz_cases(center, right),
                };
                assert_eq!(MultiplyAddOne::next_state(left, center, right), expected);
            }
        }
    }
}

#[test]
fn rule_kinds() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!("collatz".parse::<RuleKind>()?, RuleKind::Collatz);
    assert_eq!("multiply".parse::<RuleKind>()?, RuleKind::MultiplyAddOne);
    assert_eq!(
        "rule110".parse::<RuleKind>(),
        Err(Error::InvalidRule(String::from("rule110")))
    );
    assert_eq!(RuleKind::MultiplyAddOne.to_string(), "multiply");
    assert_eq!(Collatz::KIND, RuleKind::Collatz);
    assert_eq!(MultiplyAddOne::KIND, RuleKind::MultiplyAddOne);
    Ok(())
}
