// File: crates/chart-core/src/sample.rs
// Summary: Built-in demo series used by the page and the demo CLI.

/// Fixed, slightly noisy readings; index is seconds.
pub const READINGS: [f64; 40] = [
    12.0, 14.5, 13.2, 17.8, 16.1, 19.4, 22.7, 21.3, 24.9, 23.5,
    26.2, 29.8, 27.4, 31.6, 30.1, 28.3, 32.9, 35.4, 33.0, 36.7,
    34.2, 31.8, 29.5, 33.1, 30.6, 27.9, 25.4, 28.8, 26.1, 23.7,
    21.2, 24.6, 22.3, 19.9, 17.4, 20.8, 18.5, 15.9, 17.2, 14.6,
];

pub fn readings() -> Vec<f64> {
    READINGS.to_vec()
}
