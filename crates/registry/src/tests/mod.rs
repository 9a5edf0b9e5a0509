//! Cross-cutting checks over the builtin tables.

mod consistency;
mod props;
mod scenarios;
