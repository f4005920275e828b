//! Generated shell bindings for `virtualchime-core` live in `generated/`.
