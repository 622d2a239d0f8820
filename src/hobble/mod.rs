/*!
 * Hobble Module
 * The worker that applies the pause/hold/resume/hold duty cycle
 */

pub mod worker;

pub use worker::{hobble_forever, hobble_processes};
