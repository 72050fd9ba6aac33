//! Domain model: entities and pure validation rules.

pub mod entities;
pub mod validation;
