//! Use-Cases: je eine Mutation pro Modul, vom Controller über Handler erreicht.

pub mod editing;
pub mod flow;
pub mod selection;
