// Service module exports

pub mod recurrence;
