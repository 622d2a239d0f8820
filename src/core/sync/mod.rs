/*!
 * Synchronization Primitives
 *
 * The single-producer/single-consumer handoff between the membership
 * poller and the hobbling worker:
 * - Single-slot, last-write-wins announcement channel
 * - Publish never blocks; consume blocks only for the first value
 */

mod slot;

pub use slot::{channel, Publisher, Subscriber};
