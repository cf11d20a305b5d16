// Domain layer - Records, classification, formatting, view-model types
pub mod classify;
pub mod format;
pub mod records;
pub mod view_model;
