//! The bounded slab queue that couples the reader thread to the consumer.
//!
//! The queue owns a fixed population of boxed message slabs. A producer
//! borrows a slab from the freelist (`alloc`), fills it in, and publishes it
//! (`write`); the consumer takes it off the queue (`read`) and hands the box
//! back (`free`). No slab is ever created or destroyed in between, so a
//! burst of input costs no allocation and a slow consumer backpressures the
//! producer the moment the freelist runs dry.
//!
//! Both rings are bounded channels of the same capacity, which makes the
//! accounting structural: every slab is in exactly one place — freelist,
//! queue, or one side's hands — and the queue channel can never fill beyond
//! the slab population, so `write` and `free` never block.

use crossbeam_channel::{bounded, Receiver, Sender};


/// A fixed-capacity queue of recycled message slabs.
///
/// The queue is built for one producer and one consumer, but nothing here
/// cares which thread holds which role; share it behind an `Arc` and keep
/// one filler and one drainer.
pub struct SlabQueue<T> {
    queue_tx: Sender<Box<T>>,
    queue_rx: Receiver<Box<T>>,
    free_tx: Sender<Box<T>>,
    free_rx: Receiver<Box<T>>,
    capacity: usize,
}

impl<T: Default> SlabQueue<T> {

    /// Creates a queue of `depth` slabs, each initialized to `T::default()`.
    /// The depth is rounded up to the next power of two.
    pub fn new(depth: usize) -> Self {
        let capacity = depth.max(1).next_power_of_two();

        let (queue_tx, queue_rx) = bounded(capacity);
        let (free_tx, free_rx) = bounded(capacity);

        for _ in 0 .. capacity {
            free_tx.send(Box::new(T::default()))
                   .expect("a fresh freelist has room for its own slabs");
        }

        Self { queue_tx, queue_rx, free_tx, free_rx, capacity }
    }
}

impl<T> SlabQueue<T> {

    /// How many slabs the queue owns in total.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many slabs are sitting on the freelist right now.
    pub fn free_len(&self) -> usize {
        self.free_rx.len()
    }

    /// How many filled slabs are waiting for the consumer right now.
    pub fn queued(&self) -> usize {
        self.queue_rx.len()
    }

    /// Takes a slab off the freelist, or `None` if every slab is in flight.
    pub fn alloc(&self) -> Option<Box<T>> {
        self.free_rx.try_recv().ok()
    }

    /// Takes a slab off the freelist, parking until one is freed.
    pub fn alloc_blocking(&self) -> Box<T> {
        // the queue holds its own sender, so the channel cannot disconnect
        self.free_rx.recv().expect("freelist disconnected while the queue is alive")
    }

    /// Returns a slab to the freelist, waking a parked `alloc_blocking`.
    pub fn free(&self, slab: Box<T>) {
        self.free_tx.send(slab).expect("freelist disconnected while the queue is alive");
    }

    /// Publishes a filled slab to the consumer. The slab must have come
    /// from `alloc`, which is what guarantees this never blocks.
    pub fn write(&self, slab: Box<T>) {
        self.queue_tx.send(slab).expect("queue disconnected while the queue is alive");
    }

    /// Takes the oldest filled slab, or `None` if the queue is empty.
    pub fn try_read(&self) -> Option<Box<T>> {
        self.queue_rx.try_recv().ok()
    }

    /// Takes the oldest filled slab, parking until one is written.
    pub fn read(&self) -> Box<T> {
        self.queue_rx.recv().expect("queue disconnected while the queue is alive")
    }
}
