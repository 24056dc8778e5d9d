// Copyright (c) 2025 Paneline Authors. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter};

/// An abstract tag carried by every terminal write, used to select colours
/// without coupling any of the core logic to a concrete palette. The mapping
/// from kind to colour lives entirely inside the [`crate::TerminalDevice`]
/// implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum OutputKind {
    #[default]
    Default,
    Prompt,
    UserInput,
    Error,
    MenuHeader,
    MenuBody,
}
