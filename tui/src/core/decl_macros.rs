// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

/// Simply unwraps into `Ok(())` or `Ok($value)`. Avoids having to write
/// `Ok(())` repeatedly at the end of functions that return a `Result`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Wrap the given block so that it returns `Ok(())` after running. Syntactic
/// sugar for functions whose body is all side effects.
#[macro_export]
macro_rules! throws {
    ($it:block) => {{
        $it
        return Ok(());
    }};
}
