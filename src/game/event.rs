//! Game events
//!
//! The game state records what happened during a frame instead of calling
//! into audio or logging directly. The frame loop drains the queue after
//! the update and lets each concern react:
//! 1. Player chops → `Chopped` → chop sound
//! 2. Bottom branch lands on the player → `Squished` → death sound
//! 3. Timer hits zero → `OutOfTime` → buzzer

use super::branch::Side;

/// A queue for events of a single type.
/// Events are collected during the frame and drained by the frame loop.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Something the rest of the program may want to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new round began
    Started,
    /// An accepted chop from the given side
    Chopped { side: Side, score: u32 },
    /// The bottom branch landed on the player
    Squished { score: u32 },
    /// The timer ran out
    OutOfTime { score: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.iter().sum::<i32>(), 6);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut queue = EventQueue::new();
        queue.send(GameEvent::Started);
        queue.clear();
        assert!(queue.is_empty());
    }
}
