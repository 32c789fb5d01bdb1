//! Stateful viewer components
//!
//! - `config`: layout, theme and viewport settings
//! - `session`: the texts under comparison and their latest diff
//! - `viewer`: the object commands run against (writer, config, session)
//! - `workspace`: reading input texts from files or stdin

pub mod config;
pub mod session;
pub mod viewer;
pub mod workspace;
