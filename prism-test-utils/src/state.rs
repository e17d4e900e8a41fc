// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// A small view state: `foo` is always set, `bar` only once initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub foo: String,
    pub bar: Option<String>,
}

impl State {
    #[must_use]
    pub fn new(foo: &str, bar: Option<&str>) -> Self {
        Self {
            foo: foo.to_string(),
            bar: bar.map(str::to_string),
        }
    }

    #[must_use]
    pub fn with_foo(mut self, foo: &str) -> Self {
        self.foo = foo.to_string();
        self
    }

    #[must_use]
    pub fn with_bar(mut self, bar: &str) -> Self {
        self.bar = Some(bar.to_string());
        self
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new("foo", None)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[foo={}, bar={:?}]", self.foo, self.bar)
    }
}

/// `State { foo: "foo", bar: None }`
#[must_use]
pub fn state() -> State {
    State::default()
}

/// `State { foo: "foo", bar: Some(bar) }`
#[must_use]
pub fn state_with_bar(bar: &str) -> State {
    State::default().with_bar(bar)
}

/// The three-step sequence: initial, `bar` initialized, `foo` changed.
#[must_use]
pub fn initialization_sequence() -> Vec<State> {
    vec![
        state(),
        state_with_bar("initialized"),
        state_with_bar("initialized").with_foo("changed"),
    ]
}
