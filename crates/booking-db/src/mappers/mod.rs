//! Entity to model mappers
//!
//! This module provides conversions between domain entities (booking-core)
//! and database models: `From<Model> for Entity` converts database rows to
//! domain objects.

mod booking;
mod coach;
mod course;
mod credit;
mod skill;
mod user;
