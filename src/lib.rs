//! calibra: per-sample linear calibration analysis for workbook-style data.
//!
//! A workbook holds one raw table per sample.  Each table is reduced to an
//! (x, y) observation series, fitted with an ordinary-least-squares line,
//! and scored with the coefficient of determination; the run collects one
//! record per expected sample plus the mean R² across the run.

pub mod analysis;
pub mod data;
pub mod report;
